use crate::collections::{
    SimpleList, Underflow,
    adapter::{ContainerCommon, Named},
};

pub trait StackLike<T>: ContainerCommon {
    fn push(&mut self, value: T);

    fn pop(&mut self) -> Result<T, Underflow>;

    fn top(&self) -> Option<&T>;

    fn top_mut(&mut self) -> Option<&mut T>;

    fn clear(&mut self);
}

/// last-in-first-out view over a [`SimpleList`].
pub struct Stack<T> {
    list: SimpleList<T>,
}

impl<T> Stack<T> {
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
        self.list.insert_front(value);
    }

    #[inline]
    pub fn pop(&mut self) -> Result<T, Underflow> {
        self.list.remove_front()
    }

    #[inline]
    pub fn top(&self) -> Option<&T> {
        self.list.front()
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

/// the list's front becomes the top of the stack.
impl<T> From<SimpleList<T>> for Stack<T> {
    #[inline]
    fn from(list: SimpleList<T>) -> Self {
        Self { list }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stack").field("list", &self.list).finish()
    }
}

impl<T> Named for Stack<T> {
    #[inline]
    fn name(&self) -> &str {
        self.list.name()
    }
}

impl<T> ContainerCommon for Stack<T> {
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

impl<T> StackLike<T> for Stack<T> {
    #[inline]
    fn push(&mut self, value: T) {
        self.list.push(value);
    }

    #[inline]
    fn pop(&mut self) -> Result<T, Underflow> {
        StackLike::pop(&mut self.list)
    }

    #[inline]
    fn top(&self) -> Option<&T> {
        self.list.top()
    }

    #[inline]
    fn top_mut(&mut self) -> Option<&mut T> {
        self.list.top_mut()
    }

    #[inline]
    fn clear(&mut self) {
        self.list.clear();
    }
}

impl<T> StackLike<T> for SimpleList<T> {
    #[inline]
    fn push(&mut self, value: T) {
        self.insert_front(value);
    }

    #[inline]
    fn pop(&mut self) -> Result<T, Underflow> {
        self.remove_front()
    }

    #[inline]
    fn top(&self) -> Option<&T> {
        self.front()
    }

    #[inline]
    fn top_mut(&mut self) -> Option<&mut T> {
        self.front_mut()
    }

    #[inline]
    fn clear(&mut self) {
        self.clear();
    }
}
