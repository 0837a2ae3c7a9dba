//! Convenient re-exports for common types and traits

pub use crate::core::{ConnectionHandle, QueueError, QueueItem, Result, WorkItem};
pub use crate::queue::{
    BoundedPriorityQueue, QueueConfig, QueueState, QueueStatsSnapshot, Rejected, WorkQueue,
};
