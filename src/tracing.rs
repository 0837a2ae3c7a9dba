//! Tracing integration for observability.
//!
//! With the `tracing` feature enabled, every queue emits structured events on
//! initialize, enqueue, dequeue, rejection and shutdown. The `counter.*` and
//! `gauge.*` field names follow the convention understood by
//! tracing-opentelemetry metric layers.
//!
//! # Example
//!
//! ```rust,ignore
//! use priority_work_queue::prelude::*;
//! use tracing_subscriber::{fmt, prelude::*, EnvFilter};
//!
//! tracing_subscriber::registry()
//!     .with(fmt::layer())
//!     .with(EnvFilter::from_default_env()
//!         .add_directive("priority_work_queue=trace".parse().unwrap()))
//!     .init();
//!
//! let queue = WorkQueue::initialize(128)?;
//! queue.enqueue(WorkItem::new(5, 1, "/index.html"))?;
//! ```

/// Metrics recording functions for observability.
#[cfg(feature = "tracing")]
pub mod metrics {
    /// Records queue creation.
    #[inline]
    pub fn record_initialize(queue: &str, capacity: usize) {
        tracing::info!(queue = queue, capacity = capacity, "work queue initialized");
    }

    /// Records an accepted item.
    #[inline]
    pub fn record_enqueue(queue: &str, queue_depth: usize) {
        tracing::trace!(
            queue = queue,
            counter.items_enqueued = 1,
            gauge.queue_depth = queue_depth as i64,
            "item enqueued"
        );
    }

    /// Records an item handed to a worker.
    #[inline]
    pub fn record_dequeue(queue: &str, queue_depth: usize, priority: i32) {
        tracing::trace!(
            queue = queue,
            counter.items_dequeued = 1,
            gauge.queue_depth = queue_depth as i64,
            priority = priority,
            "item dequeued"
        );
    }

    /// Records a refused enqueue. `reason` is `"full"`, `"invalid"` or `"closed"`.
    #[inline]
    pub fn record_rejection(queue: &str, reason: &'static str) {
        tracing::debug!(
            queue = queue,
            counter.items_rejected = 1,
            reason = reason,
            "item rejected"
        );
    }

    /// Records queue shutdown.
    #[inline]
    pub fn record_shutdown(queue: &str, released: usize) {
        tracing::info!(
            queue = queue,
            items_released = released,
            "work queue shut down"
        );
    }
}

#[cfg(all(test, feature = "tracing"))]
mod tests {
    use crate::prelude::*;

    #[test]
    fn test_events_emit_without_subscriber() {
        let queue = WorkQueue::initialize(1).unwrap();
        queue.enqueue(WorkItem::new(1, 1, "/a")).unwrap();
        assert!(queue.enqueue(WorkItem::new(2, 1, "/b")).is_err());
        assert!(queue.dequeue_nonblocking().is_some());
        assert_eq!(queue.shutdown(), 0);

        let rejected = queue.enqueue(WorkItem::new(3, 1, "/c")).unwrap_err();
        assert!(matches!(rejected.error(), QueueError::Closed { .. }));
    }
}
