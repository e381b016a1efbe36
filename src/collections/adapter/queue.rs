use crate::collections::{
    SimpleList, Underflow,
    adapter::{ContainerCommon, Named},
};

pub trait QueueLike<T>: ContainerCommon {
    fn push_back(&mut self, value: T);

    fn pop_front(&mut self) -> Result<T, Underflow>;

    fn front(&self) -> Option<&T>;

    fn front_mut(&mut self) -> Option<&mut T>;

    fn back(&self) -> Option<&T>;

    fn back_mut(&mut self) -> Option<&mut T>;

    fn clear(&mut self);
}

/// first-in-first-out view over a [`SimpleList`].
pub struct Queue<T> {
    list: SimpleList<T>,
}

impl<T> Queue<T> {
    #[inline]
    pub fn new(name: impl Into<Box<str>>) -> Self {
        Self {
            list: SimpleList::new(name),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        self.list.name()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    #[inline]
    pub fn push(&mut self, value: T) {
        self.list.insert_back(value);
    }

    #[inline]
    pub fn pop(&mut self) -> Result<T, Underflow> {
        self.list.remove_front()
    }

    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.list.front()
    }

    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.list.back()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.list.clear();
    }

    #[inline]
    pub fn inner(&self) -> &SimpleList<T> {
        &self.list
    }

    #[inline]
    pub fn into_inner(self) -> SimpleList<T> {
        self.list
    }
}

impl<T> From<SimpleList<T>> for Queue<T> {
    #[inline]
    fn from(list: SimpleList<T>) -> Self {
        Self { list }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Queue").field("list", &self.list).finish()
    }
}

impl<T> Named for Queue<T> {
    #[inline]
    fn name(&self) -> &str {
        self.list.name()
    }
}

impl<T> ContainerCommon for Queue<T> {
    #[inline]
    fn len(&self) -> usize {
        self.list.len()
    }

    #[inline]
    fn capacity(&self) -> usize {
        ContainerCommon::capacity(&self.list)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    #[inline]
    fn is_full(&self) -> bool {
        ContainerCommon::is_full(&self.list)
    }
}

impl<T> QueueLike<T> for Queue<T> {
    #[inline]
    fn push_back(&mut self, value: T) {
        self.list.insert_back(value);
    }

    #[inline]
    fn pop_front(&mut self) -> Result<T, Underflow> {
        self.list.remove_front()
    }

    #[inline]
    fn front(&self) -> Option<&T> {
        self.list.front()
    }

    #[inline]
    fn front_mut(&mut self) -> Option<&mut T> {
        self.list.front_mut()
    }

    #[inline]
    fn back(&self) -> Option<&T> {
        self.list.back()
    }

    #[inline]
    fn back_mut(&mut self) -> Option<&mut T> {
        self.list.back_mut()
    }

    #[inline]
    fn clear(&mut self) {
        self.list.clear();
    }
}

impl<T> QueueLike<T> for SimpleList<T> {
    #[inline]
    fn push_back(&mut self, value: T) {
        self.insert_back(value);
    }

    #[inline]
    fn pop_front(&mut self) -> Result<T, Underflow> {
        self.remove_front()
    }

    #[inline]
    fn front(&self) -> Option<&T> {
        self.front()
    }

    #[inline]
    fn front_mut(&mut self) -> Option<&mut T> {
        self.front_mut()
    }

    #[inline]
    fn back(&self) -> Option<&T> {
        self.back()
    }

    #[inline]
    fn back_mut(&mut self) -> Option<&mut T> {
        self.back_mut()
    }

    #[inline]
    fn clear(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fifo_scenario() {
        let mut queue = Queue::new("y");
        queue.push("a");
        queue.push("b");
        assert_eq!(queue.pop(), Ok("a"));
        assert_eq!(queue.pop(), Ok("b"));
        assert_eq!(queue.pop(), Err(Underflow));
    }

    #[test]
    fn pops_in_push_order() {
        let pushed: Vec<String> = (0..50).map(|i| format!("item{i}")).collect();
        let mut queue = Queue::new("q");
        pushed.iter().cloned().for_each(|x| queue.push(x));
        assert_eq!(queue.len(), pushed.len());
        let popped: Vec<_> = std::iter::from_fn(|| queue.pop().ok()).collect();
        assert_eq!(popped, pushed);
        assert!(queue.is_empty());
    }

    #[test]
    fn interleaved_push_pop() {
        let mut queue = Queue::new("q");
        queue.push(1);
        queue.push(2);
        assert_eq!(queue.pop(), Ok(1));
        queue.push(3);
        assert_eq!(queue.front(), Some(&2));
        assert_eq!(queue.back(), Some(&3));
        assert_eq!(queue.pop(), Ok(2));
        assert_eq!(queue.pop(), Ok(3));
        assert_eq!(queue.front(), None);
        assert_eq!(queue.back(), None);
        queue.push(4);
        assert_eq!(queue.front(), Some(&4));
        assert_eq!(queue.back(), Some(&4));
    }

    #[test]
    fn len_tracks_successful_ops() {
        let mut queue = Queue::new("q");
        let mut pushes = 0;
        let mut pops = 0;
        for i in 0..30 {
            if i % 3 == 0 || i > 24 {
                if queue.pop().is_ok() {
                    pops += 1;
                }
            } else {
                queue.push(i);
                pushes += 1;
            }
            assert_eq!(queue.len(), pushes - pops);
            assert_eq!(queue.is_empty(), queue.len() == 0);
        }
        assert_eq!(queue.pop(), Err(Underflow));
    }

    #[test]
    fn queue_over_front_filled_list() {
        let mut list = SimpleList::new("raw");
        list.insert_front(1);
        assert_eq!(list.remove_front(), Ok(1));
        let mut queue = Queue::from(list);
        queue.push(2);
        queue.push(3);
        assert_eq!(queue.front(), Some(&2));
        assert_eq!(queue.back(), Some(&3));
        assert_eq!(queue.pop(), Ok(2));
        assert_eq!(queue.pop(), Ok(3));
        assert_eq!(queue.pop(), Err(Underflow));
    }

    #[test]
    fn clear_then_empty() {
        let mut queue = Queue::new("q");
        for i in 0..10 {
            queue.push(i);
        }
        queue.clear();
        assert!(queue.is_empty());
        assert_eq!(queue.pop(), Err(Underflow));
        queue.clear();
        assert_eq!(queue.len(), 0);
    }

    #[test]
    fn generic_over_queue_like() {
        fn drain<Q: QueueLike<u8>>(q: &mut Q) -> Vec<u8> {
            std::iter::from_fn(|| q.pop_front().ok()).collect()
        }
        let mut queue = Queue::new("q");
        QueueLike::push_back(&mut queue, 1);
        QueueLike::push_back(&mut queue, 2);
        *QueueLike::back_mut(&mut queue).unwrap() = 5;
        assert_eq!(Named::name(&queue), "q");
        let mut list = queue.into_inner();
        QueueLike::push_back(&mut list, 6);
        assert_eq!(drain(&mut list), [1, 5, 6]);
    }
}
