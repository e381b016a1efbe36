use std::{fmt, str::FromStr};

use crate::collections::{
    SimpleList, Underflow,
    adapter::{ContainerCommon, Named, Queue, Stack},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Stack,
    Queue,
}

impl Kind {
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Kind::Stack => "stack",
            Kind::Queue => "queue",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
#[error("unknown structure type `{0}`, expected `stack` or `queue`")]
pub struct ParseKindError(pub Box<str>);

impl FromStr for Kind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stack" => Ok(Kind::Stack),
            "queue" => Ok(Kind::Queue),
            _ => Err(ParseKindError(s.into())),
        }
    }
}

/// A named list whose push end is picked by its [`Kind`] at creation.
pub enum Sequence<T> {
    Stack(Stack<T>),
    Queue(Queue<T>),
}

impl<T> Sequence<T> {
    #[inline]
    pub fn new(kind: Kind, name: impl Into<Box<str>>) -> Self {
        match kind {
            Kind::Stack => Sequence::Stack(Stack::new(name)),
            Kind::Queue => Sequence::Queue(Queue::new(name)),
        }
    }

    #[inline]
    pub fn kind(&self) -> Kind {
        match self {
            Sequence::Stack(_) => Kind::Stack,
            Sequence::Queue(_) => Kind::Queue,
        }
    }

    #[inline]
    pub fn inner(&self) -> &SimpleList<T> {
        match self {
            Sequence::Stack(stack) => stack.inner(),
            Sequence::Queue(queue) => queue.inner(),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        self.inner().name()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner().is_empty()
    }

    #[inline]
    pub fn push(&mut self, value: T) {
        match self {
            Sequence::Stack(stack) => stack.push(value),
            Sequence::Queue(queue) => queue.push(value),
        }
    }

    #[inline]
    pub fn pop(&mut self) -> Result<T, Underflow> {
        match self {
            Sequence::Stack(stack) => stack.pop(),
            Sequence::Queue(queue) => queue.pop(),
        }
    }

    /// the element the next [`pop`](Self::pop) returns.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.inner().front()
    }

    #[inline]
    pub fn clear(&mut self) {
        match self {
            Sequence::Stack(stack) => stack.clear(),
            Sequence::Queue(queue) => queue.clear(),
        }
    }

    #[inline]
    pub fn into_inner(self) -> SimpleList<T> {
        match self {
            Sequence::Stack(stack) => stack.into_inner(),
            Sequence::Queue(queue) => queue.into_inner(),
        }
    }
}

impl<T> From<Stack<T>> for Sequence<T> {
    #[inline]
    fn from(value: Stack<T>) -> Self {
        Sequence::Stack(value)
    }
}

impl<T> From<Queue<T>> for Sequence<T> {
    #[inline]
    fn from(value: Queue<T>) -> Self {
        Sequence::Queue(value)
    }
}

impl<T: fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sequence::Stack(stack) => fmt::Debug::fmt(stack, f),
            Sequence::Queue(queue) => fmt::Debug::fmt(queue, f),
        }
    }
}

impl<T> Named for Sequence<T> {
    #[inline]
    fn name(&self) -> &str {
        self.name()
    }
}

impl<T> ContainerCommon for Sequence<T> {
    #[inline]
    fn len(&self) -> usize {
        self.len()
    }

    #[inline]
    fn capacity(&self) -> usize {
        ContainerCommon::capacity(self.inner())
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.is_empty()
    }

    #[inline]
    fn is_full(&self) -> bool {
        ContainerCommon::is_full(self.inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_kind() {
        assert_eq!("stack".parse::<Kind>(), Ok(Kind::Stack));
        assert_eq!("queue".parse::<Kind>(), Ok(Kind::Queue));
        assert_eq!(
            "deque".parse::<Kind>(),
            Err(ParseKindError("deque".into()))
        );
        assert_eq!(Kind::Queue.to_string(), "queue");
    }

    #[test]
    fn dispatch_by_kind() {
        let mut stack = Sequence::new(Kind::Stack, "s");
        let mut queue = Sequence::new(Kind::Queue, "q");
        for i in 1..=3 {
            stack.push(i);
            queue.push(i);
        }
        assert_eq!(stack.kind(), Kind::Stack);
        assert_eq!(queue.kind(), Kind::Queue);
        assert_eq!(stack.peek(), Some(&3));
        assert_eq!(queue.peek(), Some(&1));
        let s: Vec<_> = std::iter::from_fn(|| stack.pop().ok()).collect();
        let q: Vec<_> = std::iter::from_fn(|| queue.pop().ok()).collect();
        assert_eq!(s, [3, 2, 1]);
        assert_eq!(q, [1, 2, 3]);
        assert_eq!(stack.pop(), Err(Underflow));
        assert_eq!(queue.pop(), Err(Underflow));
    }

    #[test]
    fn len_tracks_successful_ops() {
        for kind in [Kind::Stack, Kind::Queue] {
            let mut seq = Sequence::new(kind, "s");
            let mut pushes = 0;
            let mut pops = 0;
            for i in 0..24 {
                if i % 4 == 3 || i >= 18 {
                    if seq.pop().is_ok() {
                        pops += 1;
                    }
                } else {
                    seq.push(i);
                    pushes += 1;
                }
                assert_eq!(seq.len(), pushes - pops);
                assert_eq!(seq.is_empty(), seq.len() == 0);
            }
            assert!(seq.is_empty());
            assert!(!ContainerCommon::is_full(&seq));
        }
    }

    #[test]
    fn empty_nonempty_transitions() {
        let mut seq = Sequence::from(Queue::new("q"));
        assert!(seq.is_empty());
        seq.push(1.5);
        assert!(!seq.is_empty());
        assert_eq!(seq.len(), 1);
        assert_eq!(seq.pop(), Ok(1.5));
        assert!(seq.is_empty());
        seq.push(2.5);
        seq.clear();
        assert!(seq.is_empty());
        assert_eq!(seq.name(), "q");
    }
}
