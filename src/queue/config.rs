//! Queue configuration

use crate::core::{QueueError, Result};
use serde::Deserialize;

fn default_name() -> String {
    "work-queue".to_string()
}

/// Configuration for a bounded priority queue
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QueueConfig {
    /// Fixed number of slots. Never changes after initialization.
    pub capacity: usize,
    /// Name used in logs and errors
    #[serde(default = "default_name")]
    pub name: String,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            capacity: 64,
            name: default_name(),
        }
    }
}

impl QueueConfig {
    /// Create a new configuration with the given capacity
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            ..Default::default()
        }
    }

    /// Set the queue name
    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    /// Load a configuration from a JSON document.
    ///
    /// ```rust
    /// use priority_work_queue::queue::QueueConfig;
    ///
    /// let config = QueueConfig::from_json(r#"{ "capacity": 128, "name": "proxy" }"#).unwrap();
    /// assert_eq!(config.capacity, 128);
    /// assert_eq!(config.name, "proxy");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::ConfigParse`] for malformed JSON and
    /// [`QueueError::InvalidConfig`] if the parsed values fail validation.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: QueueConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::InvalidConfig`] for a zero capacity or a blank name.
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(QueueError::invalid_config(
                "capacity",
                "must be greater than 0",
            ));
        }
        if self.name.trim().is_empty() {
            return Err(QueueError::invalid_config("name", "must not be blank"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = QueueConfig::default();
        assert_eq!(config.capacity, 64);
        assert_eq!(config.name, "work-queue");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = QueueConfig::new(8).with_name("listener");
        assert_eq!(config.capacity, 8);
        assert_eq!(config.name, "listener");
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let err = QueueConfig::new(0).validate().unwrap_err();
        assert!(matches!(
            err,
            QueueError::InvalidConfig { ref parameter, .. } if parameter == "capacity"
        ));
    }

    #[test]
    fn test_blank_name_rejected() {
        let err = QueueConfig::new(4).with_name("  ").validate().unwrap_err();
        assert!(matches!(
            err,
            QueueError::InvalidConfig { ref parameter, .. } if parameter == "name"
        ));
    }

    #[test]
    fn test_from_json_defaults_name() {
        let config = QueueConfig::from_json(r#"{ "capacity": 16 }"#).unwrap();
        assert_eq!(config, QueueConfig::new(16));
    }

    #[test]
    fn test_from_json_errors() {
        assert!(matches!(
            QueueConfig::from_json("not json"),
            Err(QueueError::ConfigParse(_))
        ));
        assert!(matches!(
            QueueConfig::from_json(r#"{ "capacity": 0 }"#),
            Err(QueueError::InvalidConfig { .. })
        ));
        assert!(matches!(
            QueueConfig::from_json(r#"{ "name": "no-capacity" }"#),
            Err(QueueError::ConfigParse(_))
        ));
    }
}
