use crate::collections::adapter::{Kind, Named, Sequence};

#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
pub enum RegistryError {
    #[error("`{0}` already exists")]
    AlreadyExists(Box<str>),
    #[error("`{0}` does not exist")]
    NotFound(Box<str>),
    #[error("`{0}` is empty")]
    Empty(Box<str>),
}

#[derive(Debug, thiserror::Error)]
pub enum InsertError<T> {
    #[error("`{}` already exists", .0.name())]
    AlreadyExists(Sequence<T>),
}

impl<T> InsertError<T> {
    #[inline]
    pub fn into_inner(self) -> Sequence<T> {
        match self {
            InsertError::AlreadyExists(sequence) => sequence,
        }
    }
}

impl<T> From<InsertError<T>> for RegistryError {
    #[inline]
    fn from(value: InsertError<T>) -> Self {
        match value {
            InsertError::AlreadyExists(sequence) => {
                RegistryError::AlreadyExists(sequence.name().into())
            }
        }
    }
}

/// first container named `target`, scanning lazily in order.
pub fn find_by_name<'a, C, I>(containers: I, target: &str) -> Option<&'a C>
where
    C: Named + ?Sized + 'a,
    I: IntoIterator<Item = &'a C>,
{
    containers.into_iter().find(|c| c.name() == target)
}

pub fn find_by_name_mut<'a, C, I>(containers: I, target: &str) -> Option<&'a mut C>
where
    C: Named + ?Sized + 'a,
    I: IntoIterator<Item = &'a mut C>,
{
    containers.into_iter().find(|c| c.name() == target)
}

/// Owns uniquely named stacks and queues holding elements of one type.
///
/// Registries for different element types are separate namespaces: an
/// `i32` stack and a `String` queue may share a name.
pub struct Registry<T> {
    sequences: Vec<Sequence<T>>,
}

impl<T> Registry<T> {
    #[inline]
    pub const fn new() -> Self {
        Self {
            sequences: Vec::new(),
        }
    }

    pub fn create(
        &mut self,
        kind: Kind,
        name: impl Into<Box<str>>,
    ) -> Result<&mut Sequence<T>, RegistryError> {
        self.push_unique(Sequence::new(kind, name))
            .map_err(|rejected| RegistryError::AlreadyExists(rejected.name().into()))
    }

    /// Takes ownership of an existing sequence.
    ///
    /// On a name clash the sequence is handed back untouched inside the error.
    pub fn insert(&mut self, sequence: Sequence<T>) -> Result<&mut Sequence<T>, InsertError<T>> {
        self.push_unique(sequence).map_err(InsertError::AlreadyExists)
    }

    fn push_unique(&mut self, sequence: Sequence<T>) -> Result<&mut Sequence<T>, Sequence<T>> {
        if self.contains(sequence.name()) {
            log::warn!(
                "refusing to add {} `{}`: name already exists",
                sequence.kind(),
                sequence.name()
            );
            return Err(sequence);
        }
        log::debug!("adding {} `{}`", sequence.kind(), sequence.name());
        let index = self.sequences.len();
        self.sequences.push(sequence);
        Ok(&mut self.sequences[index])
    }

    /// Transfers ownership of `name` out of the registry.
    pub fn remove(&mut self, name: &str) -> Option<Sequence<T>> {
        let index = self.sequences.iter().position(|s| s.name() == name)?;
        let sequence = self.sequences.remove(index);
        log::debug!(
            "removed {} `{}` ({} elements)",
            sequence.kind(),
            name,
            sequence.len()
        );
        Some(sequence)
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        find_by_name(&self.sequences, name).is_some()
    }

    pub fn get(&self, name: &str) -> Result<&Sequence<T>, RegistryError> {
        find_by_name(&self.sequences, name).ok_or_else(|| RegistryError::NotFound(name.into()))
    }

    pub fn get_mut(&mut self, name: &str) -> Result<&mut Sequence<T>, RegistryError> {
        find_by_name_mut(&mut self.sequences, name)
            .ok_or_else(|| RegistryError::NotFound(name.into()))
    }

    pub fn push(&mut self, name: &str, value: T) -> Result<(), RegistryError> {
        self.get_mut(name)?.push(value);
        Ok(())
    }

    pub fn pop(&mut self, name: &str) -> Result<T, RegistryError> {
        self.get_mut(name)?
            .pop()
            .map_err(|_| RegistryError::Empty(name.into()))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    /// in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Sequence<T>> {
        self.sequences.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sequences.iter().map(Sequence::name)
    }
}

impl<T> Default for Registry<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Registry<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(&self.sequences).finish()
    }
}
