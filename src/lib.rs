//! # Priority Work Queue
//!
//! A bounded, thread-safe priority queue that hands accepted connections from
//! a listener thread to a fixed pool of worker threads.
//!
//! ## Features
//!
//! - **Bounded**: fixed capacity reserved up front, never grown
//! - **Backpressure**: a full queue refuses the item and hands it back to the producer
//! - **Priority Scheduling**: highest priority first, FIFO among equal priorities
//! - **Blocking and Non-blocking Dequeue**: workers choose to wait or poll
//! - **Safe Shutdown**: pending items are released and waiting workers woken
//! - **Statistics**: enqueue, dequeue and rejection counters
//!
//! ## Quick Start
//!
//! ```rust
//! use priority_work_queue::prelude::*;
//! use std::sync::Arc;
//! use std::thread;
//!
//! # fn main() -> Result<()> {
//! let queue = Arc::new(WorkQueue::initialize(16)?);
//!
//! let worker = {
//!     let queue = Arc::clone(&queue);
//!     thread::spawn(move || {
//!         let mut served = Vec::new();
//!         while let Ok(item) = queue.dequeue_blocking() {
//!             served.push(item.resource_path);
//!         }
//!         served
//!     })
//! };
//!
//! queue.enqueue(WorkItem::new(4, 1, "/index.html"))?;
//! queue.enqueue(WorkItem::new(5, 9, "/urgent"))?;
//!
//! // Let the worker drain, then stop it
//! while !queue.is_empty() {
//!     thread::yield_now();
//! }
//! queue.shutdown();
//!
//! let served = worker.join().unwrap();
//! assert_eq!(served.len(), 2);
//! # Ok(())
//! # }
//! ```
//!
//! ## Backpressure
//!
//! ```rust
//! use priority_work_queue::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let queue = WorkQueue::with_config(QueueConfig::new(1).with_name("listener"))?;
//! queue.enqueue(WorkItem::new(1, 1, "/a"))?;
//!
//! match queue.enqueue(WorkItem::new(2, 1, "/b")) {
//!     Err(rejected) if rejected.is_full() => {
//!         let item = rejected.into_item();
//!         println!("queue full, answering {} with 503", item.connection);
//!     }
//!     other => panic!("expected a full queue, got {:?}", other),
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod core;
pub mod prelude;
pub mod queue;
pub mod tracing;

pub use crate::core::{ConnectionHandle, QueueError, QueueItem, Result, WorkItem};
pub use crate::queue::{BoundedPriorityQueue, QueueConfig, QueueState, Rejected, WorkQueue};
