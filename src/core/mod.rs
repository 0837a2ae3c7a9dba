//! Core types and traits for the work queue

pub mod error;
pub mod work_item;

pub use error::{QueueError, Result};
pub use work_item::{ConnectionHandle, QueueItem, WorkItem};
