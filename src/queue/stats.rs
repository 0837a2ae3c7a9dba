//! Queue statistics

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counters for a queue.
///
/// Updated by queue operations and read without the queue lock. They are
/// informational only and never drive queue decisions.
#[derive(Debug, Default)]
pub struct QueueStats {
    /// Items accepted by enqueue
    pub enqueued: AtomicU64,
    /// Items handed to workers
    pub dequeued: AtomicU64,
    /// Enqueues refused because the queue was full
    pub rejected_full: AtomicU64,
    /// Enqueues refused because the item was malformed
    pub rejected_invalid: AtomicU64,
    /// Enqueues refused because the queue was shut down
    pub rejected_closed: AtomicU64,
    /// Items dropped by shutdown
    pub released_on_shutdown: AtomicU64,
    /// Highest occupancy observed
    pub peak_size: AtomicU64,
}

impl QueueStats {
    /// Create new queue statistics
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_enqueue(&self, size_after: usize) {
        self.enqueued.fetch_add(1, Ordering::Relaxed);
        self.peak_size.fetch_max(size_after as u64, Ordering::Relaxed);
    }

    pub(crate) fn record_dequeue(&self) {
        self.dequeued.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_rejected_full(&self) {
        self.rejected_full.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_rejected_invalid(&self) {
        self.rejected_invalid.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_rejected_closed(&self) {
        self.rejected_closed.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_released(&self, count: usize) {
        self.released_on_shutdown
            .fetch_add(count as u64, Ordering::Relaxed);
    }

    /// Take a point-in-time copy of all counters
    pub fn snapshot(&self) -> QueueStatsSnapshot {
        QueueStatsSnapshot {
            enqueued: self.enqueued.load(Ordering::Relaxed),
            dequeued: self.dequeued.load(Ordering::Relaxed),
            rejected_full: self.rejected_full.load(Ordering::Relaxed),
            rejected_invalid: self.rejected_invalid.load(Ordering::Relaxed),
            rejected_closed: self.rejected_closed.load(Ordering::Relaxed),
            released_on_shutdown: self.released_on_shutdown.load(Ordering::Relaxed),
            peak_size: self.peak_size.load(Ordering::Relaxed),
        }
    }
}

/// Plain copy of [`QueueStats`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct QueueStatsSnapshot {
    /// Items accepted by enqueue
    pub enqueued: u64,
    /// Items handed to workers
    pub dequeued: u64,
    /// Enqueues refused because the queue was full
    pub rejected_full: u64,
    /// Enqueues refused because the item was malformed
    pub rejected_invalid: u64,
    /// Enqueues refused because the queue was shut down
    pub rejected_closed: u64,
    /// Items dropped by shutdown
    pub released_on_shutdown: u64,
    /// Highest occupancy observed
    pub peak_size: u64,
}

impl QueueStatsSnapshot {
    /// Total refused enqueues
    pub fn rejected(&self) -> u64 {
        self.rejected_full + self.rejected_invalid + self.rejected_closed
    }

    /// Items that entered the queue and have not left it through a dequeue or shutdown
    pub fn in_flight(&self) -> u64 {
        self.enqueued
            .saturating_sub(self.dequeued)
            .saturating_sub(self.released_on_shutdown)
    }
}
