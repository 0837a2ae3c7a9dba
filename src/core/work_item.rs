//! Work item trait and the connection work item handed from listener to workers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque handle identifying an accepted connection (typically a socket descriptor)
pub type ConnectionHandle = i32;

/// A trait for anything the queue can hold.
///
/// The queue reads nothing from an item except its priority and, once at
/// enqueue time, its validity.
pub trait QueueItem: Send {
    /// Scheduling rank; higher values are served first
    fn priority(&self) -> i32;

    /// Check that the item is well-formed
    ///
    /// # Errors
    ///
    /// Returns a human-readable reason when the item must be refused
    fn validate(&self) -> std::result::Result<(), String> {
        Ok(())
    }
}

/// A unit of work: one accepted connection waiting to be served
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkItem {
    /// Connection the request arrived on
    pub connection: ConnectionHandle,
    /// Higher values are served first
    pub priority: i32,
    /// Requested resource; only the caller interprets it
    pub resource_path: String,
    /// Scheduling hint in seconds, not interpreted by the queue
    #[serde(default)]
    pub delay: u32,
}

impl WorkItem {
    /// Create a new work item with no delay
    pub fn new<S: Into<String>>(
        connection: ConnectionHandle,
        priority: i32,
        resource_path: S,
    ) -> Self {
        Self {
            connection,
            priority,
            resource_path: resource_path.into(),
            delay: 0,
        }
    }

    /// Set the delay hint
    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_delay(mut self, delay: u32) -> Self {
        self.delay = delay;
        self
    }
}

impl QueueItem for WorkItem {
    fn priority(&self) -> i32 {
        self.priority
    }

    fn validate(&self) -> std::result::Result<(), String> {
        if self.resource_path.is_empty() {
            return Err(format!(
                "connection {} has an empty resource path",
                self.connection
            ));
        }
        if self.resource_path.contains('\0') {
            return Err(format!(
                "connection {} has a NUL byte in its resource path",
                self.connection
            ));
        }
        Ok(())
    }
}

impl fmt::Display for WorkItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "WorkItem(conn={}, priority={}, path={})",
            self.connection, self.priority, self.resource_path
        )
    }
}
