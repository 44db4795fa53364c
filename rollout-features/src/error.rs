//! Error types for rollout features
//!
//! Lookups and mutations never fail: an unknown feature is reported through
//! `false` or `None`. These errors only come from opt-in validation and from
//! parsing configuration.

use thiserror::Error;

/// Result type for rollout operations that can fail
pub type RolloutResult<T> = Result<T, RolloutError>;

/// Rollout errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RolloutError {
    /// Feature name is empty
    #[error("Feature name cannot be empty")]
    EmptyName,

    /// Percentage is NaN or outside [0, 100]
    #[error("Rollout percentage must be between 0 and 100, got {0}")]
    PercentageOutOfRange(f64),

    /// Configuration value could not be parsed
    #[error("Invalid configuration value for {key}: {value:?}")]
    InvalidConfig {
        /// Environment variable name
        key: String,
        /// Raw value that failed to parse
        value: String,
    },
}

impl RolloutError {
    /// Create a new configuration error
    pub fn invalid_config(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidConfig {
            key: key.into(),
            value: value.into(),
        }
    }
}
