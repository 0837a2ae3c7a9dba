//! The bounded priority work queue and its supporting types.
//!
//! - [`BoundedPriorityQueue`]: the queue itself, generic over [`QueueItem`]
//! - [`WorkQueue`]: the queue specialised to connection [`WorkItem`]s
//! - [`QueueConfig`]: capacity and name, loadable from JSON
//! - [`QueueStats`] / [`QueueStatsSnapshot`]: enqueue, dequeue and rejection counters
//! - [`Rejected`]: a refused enqueue, carrying the item back to the producer
//!
//! [`QueueItem`]: crate::core::QueueItem
//! [`WorkItem`]: crate::core::WorkItem

mod bounded_priority;
mod config;
mod stats;

pub use bounded_priority::{BoundedPriorityQueue, WorkQueue};
pub use config::QueueConfig;
pub use stats::{QueueStats, QueueStatsSnapshot};

use crate::core::QueueError;
use std::fmt;

/// Lifecycle of a queue.
///
/// There is no uninitialized state: a queue value exists only once
/// initialization has succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueueState {
    /// Accepting and handing out items
    Ready,
    /// Shut down; items were released and waiters woken
    Destroyed,
}

impl fmt::Display for QueueState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueState::Ready => write!(f, "ready"),
            QueueState::Destroyed => write!(f, "destroyed"),
        }
    }
}

/// A refused enqueue.
///
/// The producer keeps ownership of the item and decides whether to retry,
/// back off or drop it.
pub struct Rejected<T> {
    error: QueueError,
    item: T,
}

impl<T> Rejected<T> {
    pub(crate) fn new(error: QueueError, item: T) -> Self {
        Self { error, item }
    }

    /// Why the item was refused
    pub fn error(&self) -> &QueueError {
        &self.error
    }

    /// Borrow the refused item
    pub fn item(&self) -> &T {
        &self.item
    }

    /// Take the refused item back
    pub fn into_item(self) -> T {
        self.item
    }

    /// Split into the error and the item
    pub fn into_parts(self) -> (QueueError, T) {
        (self.error, self.item)
    }

    /// Returns `true` if the queue was full, the one rejection worth retrying
    pub fn is_full(&self) -> bool {
        matches!(self.error, QueueError::QueueFull { .. })
    }
}

impl<T> fmt::Debug for Rejected<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rejected")
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

impl<T> fmt::Display for Rejected<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "enqueue rejected: {}", self.error)
    }
}

impl<T> std::error::Error for Rejected<T> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

impl<T> From<Rejected<T>> for QueueError {
    fn from(rejected: Rejected<T>) -> Self {
        rejected.error
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WorkItem;

    #[test]
    fn test_rejected_returns_item() {
        let rejected = Rejected::new(QueueError::queue_full(1, 1), WorkItem::new(3, 1, "/r"));
        assert!(rejected.is_full());
        assert_eq!(rejected.item().connection, 3);

        let (error, item) = rejected.into_parts();
        assert!(matches!(error, QueueError::QueueFull { .. }));
        assert_eq!(item.resource_path, "/r");
    }

    #[test]
    fn test_rejected_display_and_source() {
        use std::error::Error;

        let rejected = Rejected::new(QueueError::closed("q"), WorkItem::new(1, 1, "/"));
        assert!(!rejected.is_full());
        assert_eq!(
            rejected.to_string(),
            "enqueue rejected: Work queue 'q' has been shut down"
        );
        assert!(rejected.source().is_some());
    }

    #[test]
    fn test_rejected_converts_to_queue_error() {
        fn push() -> crate::core::Result<()> {
            let outcome: std::result::Result<(), Rejected<WorkItem>> = Err(Rejected::new(
                QueueError::invalid_item("bad"),
                WorkItem::new(1, 1, ""),
            ));
            outcome?;
            Ok(())
        }
        assert!(matches!(push(), Err(QueueError::InvalidItem { .. })));
    }

    #[test]
    fn test_state_display() {
        assert_eq!(QueueState::Ready.to_string(), "ready");
        assert_eq!(QueueState::Destroyed.to_string(), "destroyed");
    }
}
