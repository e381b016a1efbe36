pub mod container_common;
pub mod queue;
pub mod sequence;
pub mod stack;

pub use container_common::{ContainerCommon, Named};
pub use queue::{Queue, QueueLike};
pub use sequence::{Kind, ParseKindError, Sequence};
pub use stack::{Stack, StackLike};
