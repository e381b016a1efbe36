use crate::collections::SimpleList;

pub trait ContainerCommon {
    fn len(&self) -> usize;

    fn capacity(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    fn is_full(&self) -> bool {
        self.len() == self.capacity()
    }
}

/// containers identified by a name fixed at construction.
pub trait Named {
    fn name(&self) -> &str;
}

impl<T> ContainerCommon for SimpleList<T> {
    #[inline]
    fn len(&self) -> usize {
        self.len()
    }

    #[inline]
    fn capacity(&self) -> usize {
        usize::MAX
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.is_empty()
    }

    #[inline]
    fn is_full(&self) -> bool {
        false
    }
}

impl<T> Named for SimpleList<T> {
    #[inline]
    fn name(&self) -> &str {
        self.name()
    }
}
