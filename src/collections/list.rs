use std::{fmt, marker::PhantomData, ptr::NonNull};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("pop from empty list")]
pub struct Underflow;

type Link<T> = Option<NonNull<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
}

impl<T> Node<T> {
    #[inline]
    fn alloc(value: T, next: Link<T>) -> NonNull<Self> {
        NonNull::from(Box::leak(Box::new(Self { value, next })))
    }
}

/// Named singly linked list with O(1) insertion at both ends and O(1) removal
/// from the front.
///
/// Every node is exclusively owned by its predecessor, the first one by
/// `head`. `tail` only aliases the last node so that [`insert_back`] does not
/// have to walk the chain; nodes are never freed through it.
///
/// [`insert_back`]: Self::insert_back
pub struct SimpleList<T> {
    name: Box<str>,
    head: Link<T>,
    tail: Link<T>,
    len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

// SAFETY: the list owns its nodes exactly like `Box<Node<T>>` would.
unsafe impl<T: Send> Send for SimpleList<T> {}
// SAFETY: shared access only hands out `&T`.
unsafe impl<T: Sync> Sync for SimpleList<T> {}

impl<T> SimpleList<T> {
    #[inline]
    pub fn new(name: impl Into<Box<str>>) -> Self {
        Self {
            name: name.into(),
            head: None,
            tail: None,
            len: 0,
            _marker: PhantomData,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn insert_front(&mut self, value: T) {
        let node = Node::alloc(value, self.head);
        if self.tail.is_none() {
            self.tail = Some(node);
        }
        self.head = Some(node);
        self.len += 1;
    }

    pub fn insert_back(&mut self, value: T) {
        let node = Node::alloc(value, None);
        match self.tail {
            // SAFETY: `tail` is the last live node of this list and no other
            // reference to it exists while `self` is borrowed mutably.
            Some(mut tail) => unsafe { tail.as_mut().next = Some(node) },
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;
    }

    pub fn remove_front(&mut self) -> Result<T, Underflow> {
        let head = self.head.ok_or(Underflow)?;
        // SAFETY: `head` came from `Node::alloc` and is unlinked right below, so
        // ownership is reclaimed exactly once.
        let node = unsafe { Box::from_raw(head.as_ptr()) };
        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;
        Ok(node.value)
    }

    /// Drops every element, front to back, without recursing along the chain.
    pub fn clear(&mut self) {
        if self.is_empty() {
            return;
        }
        log::trace!("clearing `{}` ({} elements)", self.name, self.len);
        while self.remove_front().is_ok() {}
    }

    #[inline]
    pub fn front(&self) -> Option<&T> {
        // SAFETY: live node, shared borrow tied to `&self`.
        self.head.map(|node| unsafe { &node.as_ref().value })
    }

    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        // SAFETY: live node, unique borrow tied to `&mut self`.
        self.head.map(|mut node| unsafe { &mut node.as_mut().value })
    }

    #[inline]
    pub fn back(&self) -> Option<&T> {
        // SAFETY: live node, shared borrow tied to `&self`.
        self.tail.map(|node| unsafe { &node.as_ref().value })
    }

    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        // SAFETY: live node, unique borrow tied to `&mut self`.
        self.tail.map(|mut node| unsafe { &mut node.as_mut().value })
    }

    #[inline]
    fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head,
            _marker: PhantomData,
        }
    }
}

impl<T> Drop for SimpleList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: fmt::Debug> fmt::Debug for SimpleList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct Elements<'a, T>(&'a SimpleList<T>);
        impl<T: fmt::Debug> fmt::Debug for Elements<'_, T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_list().entries(self.0.iter()).finish()
            }
        }
        f.debug_struct("SimpleList")
            .field("name", &self.name)
            .field("elements", &Elements(self))
            .finish()
    }
}

struct Iter<'a, T> {
    next: Link<T>,
    _marker: PhantomData<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            // SAFETY: the list is borrowed for `'a`, so every node stays alive.
            let node = unsafe { node.as_ref() };
            self.next = node.next;
            &node.value
        })
    }
}
