//! Feature Definition
//!
//! A feature is a plain value: a name, a rollout percentage and a global
//! on/off switch. Registries store copies and replace them wholesale.

use crate::error::{RolloutError, RolloutResult};
use serde::{Deserialize, Serialize};

/// Feature with a rollout percentage and an explicit on/off override
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Feature {
    /// Unique feature name
    pub name: String,

    /// Share of users (0-100) that fall inside the rollout
    pub percentage: f64,

    /// Global on/off switch, independent of `percentage`
    pub active: bool,
}

impl Feature {
    /// Create a new feature
    ///
    /// The percentage is stored as given. Values above 100 include every
    /// user and negative values include nobody.
    ///
    /// # Examples
    ///
    /// ```
    /// use rollout_features::Feature;
    ///
    /// let feature = Feature::new("new-checkout", 25.0, true);
    /// assert_eq!(feature.name, "new-checkout");
    /// ```
    pub fn new(name: impl Into<String>, percentage: f64, active: bool) -> Self {
        Self {
            name: name.into(),
            percentage,
            active,
        }
    }

    /// Set rollout percentage
    pub fn with_percentage(mut self, percentage: f64) -> Self {
        self.percentage = percentage;
        self
    }

    /// Set on/off state
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Copy of this feature switched on
    pub fn activated(&self) -> Self {
        self.clone().with_active(true)
    }

    /// Copy of this feature switched off
    pub fn deactivated(&self) -> Self {
        self.clone().with_active(false)
    }

    /// Check the name is non-empty and the percentage lies in [0, 100]
    ///
    /// Registries accept any feature; call this when loading definitions
    /// from an untrusted source.
    pub fn validate(&self) -> RolloutResult<()> {
        if self.name.is_empty() {
            return Err(RolloutError::EmptyName);
        }

        if !(0.0..=100.0).contains(&self.percentage) {
            return Err(RolloutError::PercentageOutOfRange(self.percentage));
        }

        Ok(())
    }
}
