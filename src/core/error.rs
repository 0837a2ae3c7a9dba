//! Error types for the work queue

/// Result type for work queue operations
pub type Result<T> = std::result::Result<T, QueueError>;

/// Errors that can occur in the work queue
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum QueueError {
    /// Queue is at capacity; the producer decides whether to retry, back off or drop
    #[error("Work queue is full: {current}/{max} items queued")]
    QueueFull {
        /// Current queue size
        current: usize,
        /// Maximum queue size
        max: usize,
    },

    /// Item was refused before touching the queue
    #[error("Invalid work item: {reason}")]
    InvalidItem {
        /// Why the item was refused
        reason: String,
    },

    /// Backing storage could not be reserved. Not recoverable.
    #[error("Failed to allocate storage for {capacity} queue slots: {message}")]
    AllocationFailure {
        /// Requested capacity
        capacity: usize,
        /// Allocator message
        message: String,
    },

    /// Queue has been shut down
    #[error("Work queue '{name}' has been shut down")]
    Closed {
        /// Name of the queue
        name: String,
    },

    /// Invalid configuration with parameter
    #[error("Invalid configuration for '{parameter}': {message}")]
    InvalidConfig {
        /// Configuration parameter name
        parameter: String,
        /// Error message
        message: String,
    },

    /// Configuration document could not be parsed
    #[error("Failed to parse queue configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

impl QueueError {
    /// Create a queue full error
    pub fn queue_full(current: usize, max: usize) -> Self {
        QueueError::QueueFull { current, max }
    }

    /// Create an invalid item error
    pub fn invalid_item(reason: impl Into<String>) -> Self {
        QueueError::InvalidItem {
            reason: reason.into(),
        }
    }

    /// Create an allocation failure error
    pub fn allocation_failure(capacity: usize, message: impl Into<String>) -> Self {
        QueueError::AllocationFailure {
            capacity,
            message: message.into(),
        }
    }

    /// Create a closed error
    pub fn closed(name: impl Into<String>) -> Self {
        QueueError::Closed { name: name.into() }
    }

    /// Create an invalid config error
    pub fn invalid_config(parameter: impl Into<String>, message: impl Into<String>) -> Self {
        QueueError::InvalidConfig {
            parameter: parameter.into(),
            message: message.into(),
        }
    }

    /// Returns `true` for errors the process cannot continue from.
    pub fn is_fatal(&self) -> bool {
        matches!(self, QueueError::AllocationFailure { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = QueueError::queue_full(100, 100);
        assert!(matches!(err, QueueError::QueueFull { .. }));

        let err = QueueError::invalid_item("empty resource path");
        assert!(matches!(err, QueueError::InvalidItem { .. }));

        let err = QueueError::closed("listener");
        assert!(matches!(err, QueueError::Closed { .. }));
    }

    #[test]
    fn test_error_display() {
        let err = QueueError::queue_full(2, 2);
        assert_eq!(err.to_string(), "Work queue is full: 2/2 items queued");

        let err = QueueError::closed("listener");
        assert_eq!(err.to_string(), "Work queue 'listener' has been shut down");

        let err = QueueError::invalid_config("capacity", "must be greater than 0");
        assert_eq!(
            err.to_string(),
            "Invalid configuration for 'capacity': must be greater than 0"
        );
    }

    #[test]
    fn test_only_allocation_failure_is_fatal() {
        assert!(QueueError::allocation_failure(usize::MAX, "capacity overflow").is_fatal());
        assert!(!QueueError::queue_full(1, 1).is_fatal());
        assert!(!QueueError::invalid_item("bad").is_fatal());
        assert!(!QueueError::closed("q").is_fatal());
    }

    #[test]
    fn test_config_parse_from_serde() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: QueueError = json_err.into();
        assert!(matches!(err, QueueError::ConfigParse(_)));
        assert!(err.to_string().starts_with("Failed to parse queue configuration"));
    }
}
