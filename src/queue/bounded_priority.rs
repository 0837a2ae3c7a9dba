//! Bounded priority queue shared between a connection listener and a worker pool.

use super::{QueueConfig, QueueState, QueueStats, QueueStatsSnapshot, Rejected};
use crate::core::{QueueError, QueueItem, Result, WorkItem};
use parking_lot::{Condvar, Mutex};
use std::fmt;

struct Inner<T> {
    /// Insertion-ordered; removal closes the gap so equal priorities stay FIFO.
    items: Vec<T>,
    state: QueueState,
}

/// A bounded, thread-safe priority queue.
///
/// Producers [`enqueue`](Self::enqueue) without ever blocking and get the item
/// back when the queue is full. Workers take the highest-priority item with
/// [`dequeue_blocking`](Self::dequeue_blocking) or
/// [`dequeue_nonblocking`](Self::dequeue_nonblocking). Among items of equal
/// priority the one enqueued earliest is served first.
///
/// Every access to the items goes through a single mutex. Selection is a
/// linear scan and removal shifts the tail left, both O(len), which is fine
/// at thread-pool scale.
///
/// # Example
///
/// ```rust
/// use priority_work_queue::prelude::*;
///
/// # fn main() -> Result<()> {
/// let queue = WorkQueue::initialize(2)?;
///
/// queue.enqueue(WorkItem::new(10, 5, "/a"))?;
/// queue.enqueue(WorkItem::new(11, 9, "/b"))?;
///
/// // Full: the item comes back to the producer
/// let rejected = queue.enqueue(WorkItem::new(12, 1, "/c")).unwrap_err();
/// assert!(matches!(rejected.error(), QueueError::QueueFull { .. }));
/// assert_eq!(rejected.into_item().connection, 12);
///
/// assert_eq!(queue.dequeue_blocking()?.connection, 11);
/// assert_eq!(queue.dequeue_blocking()?.connection, 10);
/// assert!(queue.dequeue_nonblocking().is_none());
///
/// queue.shutdown();
/// # Ok(())
/// # }
/// ```
pub struct BoundedPriorityQueue<T = WorkItem> {
    inner: Mutex<Inner<T>>,
    not_empty: Condvar,
    capacity: usize,
    name: String,
    stats: QueueStats,
}

/// The queue used by the server: connection work items
pub type WorkQueue = BoundedPriorityQueue<WorkItem>;

impl<T: QueueItem> BoundedPriorityQueue<T> {
    /// Creates a queue with room for exactly `capacity` items.
    ///
    /// # Errors
    ///
    /// - [`QueueError::InvalidConfig`] if `capacity` is 0
    /// - [`QueueError::AllocationFailure`] if the slots cannot be reserved.
    ///   The caller should treat this as fatal.
    pub fn initialize(capacity: usize) -> Result<Self> {
        Self::with_config(QueueConfig::new(capacity))
    }

    /// Creates a queue from a configuration.
    ///
    /// # Errors
    ///
    /// Same as [`initialize`](Self::initialize), plus
    /// [`QueueError::InvalidConfig`] for a blank name.
    pub fn with_config(config: QueueConfig) -> Result<Self> {
        config.validate()?;

        let QueueConfig { capacity, name } = config;
        let mut items = Vec::new();
        items
            .try_reserve_exact(capacity)
            .map_err(|e| QueueError::allocation_failure(capacity, e.to_string()))?;

        log::debug!("work queue '{}' initialized with {} slots", name, capacity);
        #[cfg(feature = "tracing")]
        crate::tracing::metrics::record_initialize(&name, capacity);

        Ok(Self {
            inner: Mutex::new(Inner {
                items,
                state: QueueState::Ready,
            }),
            not_empty: Condvar::new(),
            capacity,
            name,
            stats: QueueStats::new(),
        })
    }

    /// Adds an item without blocking and wakes one waiting worker.
    ///
    /// On rejection the queue is unchanged and the item is handed back
    /// inside [`Rejected`].
    ///
    /// # Errors
    ///
    /// - [`QueueError::InvalidItem`] if the item fails [`QueueItem::validate`]
    /// - [`QueueError::QueueFull`] if the queue is at capacity
    /// - [`QueueError::Closed`] after [`shutdown`](Self::shutdown)
    pub fn enqueue(&self, item: T) -> std::result::Result<(), Rejected<T>> {
        // The item is still exclusively ours, so it can be checked before locking.
        if let Err(reason) = item.validate() {
            self.stats.record_rejected_invalid();
            log::warn!("work queue '{}' refused item: {}", self.name, reason);
            #[cfg(feature = "tracing")]
            crate::tracing::metrics::record_rejection(&self.name, "invalid");
            return Err(Rejected::new(QueueError::invalid_item(reason), item));
        }

        let mut inner = self.inner.lock();

        if inner.state == QueueState::Destroyed {
            self.stats.record_rejected_closed();
            log::debug!("work queue '{}' refused item after shutdown", self.name);
            #[cfg(feature = "tracing")]
            crate::tracing::metrics::record_rejection(&self.name, "closed");
            return Err(Rejected::new(QueueError::closed(&self.name), item));
        }

        let current = inner.items.len();
        if current >= self.capacity {
            self.stats.record_rejected_full();
            log::warn!(
                "work queue '{}' is full ({}/{})",
                self.name,
                current,
                self.capacity
            );
            #[cfg(feature = "tracing")]
            crate::tracing::metrics::record_rejection(&self.name, "full");
            return Err(Rejected::new(
                QueueError::queue_full(current, self.capacity),
                item,
            ));
        }

        inner.items.push(item);
        let size = inner.items.len();
        self.stats.record_enqueue(size);
        #[cfg(feature = "tracing")]
        crate::tracing::metrics::record_enqueue(&self.name, size);

        // One insertion satisfies at most one waiter.
        self.not_empty.notify_one();
        Ok(())
    }

    /// Removes the highest-priority item, waiting while the queue is empty.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::Closed`] if the queue is shut down before or
    /// while waiting.
    pub fn dequeue_blocking(&self) -> Result<T> {
        let mut inner = self.inner.lock();

        loop {
            if inner.state == QueueState::Destroyed {
                return Err(QueueError::closed(&self.name));
            }

            if let Some(item) = self.take_highest(&mut inner) {
                return Ok(item);
            }

            // Wakeups may be spurious or lose the race to another worker.
            self.not_empty.wait(&mut inner);
        }
    }

    /// Removes the highest-priority item, or returns `None` at once if the
    /// queue is empty or shut down.
    pub fn dequeue_nonblocking(&self) -> Option<T> {
        let mut inner = self.inner.lock();
        if inner.state == QueueState::Destroyed {
            return None;
        }
        self.take_highest(&mut inner)
    }

    /// Drops every remaining item, frees the storage and wakes all waiting
    /// workers, which then return [`QueueError::Closed`].
    ///
    /// Returns how many items were released. Calling it again is a no-op
    /// that returns 0.
    pub fn shutdown(&self) -> usize {
        let mut inner = self.inner.lock();

        if inner.state == QueueState::Destroyed {
            log::debug!("work queue '{}' already shut down", self.name);
            return 0;
        }

        inner.state = QueueState::Destroyed;
        let remaining = std::mem::take(&mut inner.items);
        let released = remaining.len();
        drop(remaining);

        self.stats.record_released(released);
        self.not_empty.notify_all();

        log::debug!(
            "work queue '{}' shut down, released {} pending items",
            self.name,
            released
        );
        #[cfg(feature = "tracing")]
        crate::tracing::metrics::record_shutdown(&self.name, released);

        released
    }

    /// Maximum number of items the queue holds
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Current number of items
    pub fn len(&self) -> usize {
        self.inner.lock().items.len()
    }

    /// Returns `true` if no items are queued
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if an enqueue would be refused for lack of space
    pub fn is_full(&self) -> bool {
        self.len() >= self.capacity
    }

    /// Current lifecycle state
    pub fn state(&self) -> QueueState {
        self.inner.lock().state
    }

    /// Name given at initialization
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Snapshot of the queue counters
    pub fn stats(&self) -> QueueStatsSnapshot {
        self.stats.snapshot()
    }

    fn take_highest(&self, inner: &mut Inner<T>) -> Option<T> {
        let index = select_highest(&inner.items)?;
        let item = inner.items.remove(index);

        self.stats.record_dequeue();
        #[cfg(feature = "tracing")]
        crate::tracing::metrics::record_dequeue(&self.name, inner.items.len(), item.priority());

        Some(item)
    }
}

/// Index of the first item holding the greatest priority.
///
/// Strict `>` keeps the earliest of equal-priority items.
fn select_highest<T: QueueItem>(items: &[T]) -> Option<usize> {
    let mut best: Option<(usize, i32)> = None;
    for (index, item) in items.iter().enumerate() {
        let priority = item.priority();
        match best {
            Some((_, top)) if priority <= top => {}
            _ => best = Some((index, priority)),
        }
    }
    best.map(|(index, _)| index)
}

impl<T> fmt::Debug for BoundedPriorityQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.lock();
        f.debug_struct("BoundedPriorityQueue")
            .field("name", &self.name)
            .field("capacity", &self.capacity)
            .field("len", &inner.items.len())
            .field("state", &inner.state)
            .finish()
    }
}
