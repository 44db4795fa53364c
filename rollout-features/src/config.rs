//! Registry configuration
//!
//! Settings only affect logging. Decisions are the same whatever the
//! configuration says.
//!
//! # Environment Variables
//!
//! - `ROLLOUT_LOG_DECISIONS=1|0` - Emit a trace event for every decision
//! - `ROLLOUT_WARN_UNKNOWN=1|0` - Warn when toggling a feature that is not registered

use crate::error::{RolloutError, RolloutResult};
use serde::{Deserialize, Serialize};
use std::env;
use tracing::warn;

/// Prefix shared by every rollout environment variable
pub const ENV_PREFIX: &str = "ROLLOUT";

/// Registry configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RolloutConfig {
    /// Emit a `trace!` event for each `is_active` / `is_feature_active` call
    pub log_decisions: bool,

    /// Emit a `warn!` event when activating or deactivating an unknown feature
    pub warn_on_unknown: bool,
}

impl RolloutConfig {
    /// Create a configuration with everything switched off
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable per-decision trace events
    pub fn log_decisions(mut self, enabled: bool) -> Self {
        self.log_decisions = enabled;
        self
    }

    /// Enable warnings for toggles of unknown features
    pub fn warn_on_unknown(mut self, enabled: bool) -> Self {
        self.warn_on_unknown = enabled;
        self
    }

    /// Load configuration from the environment, falling back to defaults
    ///
    /// An unparsable value is logged and every setting keeps its default.
    pub fn from_env() -> Self {
        Self::from_lookup_or_default(|key| env::var(key).ok())
    }

    /// Load configuration from a key lookup, falling back to defaults
    pub fn from_lookup_or_default<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::from_lookup(lookup).unwrap_or_else(|e| {
            warn!(error = %e, "Ignoring rollout environment configuration");
            Self::default()
        })
    }

    /// Load configuration from the environment
    pub fn try_from_env() -> RolloutResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    ///
    /// Keys are full variable names such as `ROLLOUT_LOG_DECISIONS`.
    pub fn from_lookup<F>(lookup: F) -> RolloutResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let read = |name: &str, default: bool| -> RolloutResult<bool> {
            let key = format!("{}_{}", ENV_PREFIX, name);
            match lookup(&key).filter(|v| !v.trim().is_empty()) {
                Some(value) => {
                    parse_flag(&value).ok_or_else(|| RolloutError::invalid_config(key, value))
                }
                None => Ok(default),
            }
        };

        Ok(Self {
            log_decisions: read("LOG_DECISIONS", defaults.log_decisions)?,
            warn_on_unknown: read("WARN_UNKNOWN", defaults.warn_on_unknown)?,
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
