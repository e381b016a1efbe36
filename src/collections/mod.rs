pub mod list;

pub use list::{SimpleList, Underflow};

#[cfg(feature = "collections_adapter")]
pub mod adapter;
#[cfg(feature = "collections_adapter")]
pub use adapter::{
    ContainerCommon, Kind, Named, ParseKindError, Queue, QueueLike, Sequence, Stack, StackLike,
};

#[cfg(feature = "registry")]
pub mod registry;
#[cfg(feature = "registry")]
pub use registry::{InsertError, Registry, RegistryError, find_by_name, find_by_name_mut};
