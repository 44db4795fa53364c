//! Feature Registry
//!
//! In-memory map from feature name to [`Feature`], plus the rollout decision.
//! The registry itself is not synchronized; use
//! [`SharedRegistry`](crate::SharedRegistry) when mutations and reads happen
//! on different threads.

use crate::bucket;
use crate::config::RolloutConfig;
use crate::feature::Feature;
use std::collections::HashMap;
use tracing::{debug, trace, warn};

/// Read-side feature checks
///
/// Implemented by both [`Registry`] and
/// [`SharedRegistry`](crate::SharedRegistry) so host code can be generic over
/// the two.
pub trait FeatureGate {
    /// Check whether `user_id` falls inside the feature's rollout percentage
    ///
    /// Unknown features are never active. The feature's `active` flag is not
    /// consulted.
    fn is_active(&self, feature: &str, user_id: &str) -> bool;

    /// Check the feature's on/off switch
    ///
    /// Unknown features are reported as off.
    fn is_feature_active(&self, feature: &str) -> bool;
}

/// Feature registry
#[derive(Debug, Clone, Default)]
pub struct Registry {
    features: HashMap<String, Feature>,
    config: RolloutConfig,
}

impl Registry {
    /// Create a registry from an initial list of features
    ///
    /// When two features share a name the later one wins.
    ///
    /// # Examples
    ///
    /// ```
    /// use rollout_features::{Feature, FeatureGate, Registry};
    ///
    /// let registry = Registry::new(vec![
    ///     Feature::new("foo", 100.0, false),
    ///     Feature::new("bar", 0.0, true),
    /// ]);
    ///
    /// assert!(registry.is_active("foo", "user-123"));
    /// assert!(registry.is_feature_active("bar"));
    /// ```
    pub fn new(features: impl IntoIterator<Item = Feature>) -> Self {
        Self::with_config(features, RolloutConfig::default())
    }

    /// Create a registry with explicit configuration
    pub fn with_config(
        features: impl IntoIterator<Item = Feature>,
        config: RolloutConfig,
    ) -> Self {
        let mut registry = Self {
            features: HashMap::new(),
            config,
        };
        registry.extend(features);
        debug!(features = registry.len(), "Created feature registry");
        registry
    }

    /// Active configuration
    pub fn config(&self) -> &RolloutConfig {
        &self.config
    }

    /// Replace the configuration
    pub fn set_config(&mut self, config: RolloutConfig) {
        self.config = config;
    }

    /// Insert or fully replace the feature stored under `feature.name`
    pub fn set(&mut self, feature: Feature) {
        debug!(
            feature = %feature.name,
            percentage = feature.percentage,
            active = feature.active,
            "Setting feature"
        );
        self.features.insert(feature.name.clone(), feature);
    }

    /// Switch a feature on
    ///
    /// Returns `false` and changes nothing when the feature is not registered.
    pub fn activate(&mut self, feature: &str) -> bool {
        self.toggle(feature, true)
    }

    /// Switch a feature off
    ///
    /// Returns `false` and changes nothing when the feature is not registered.
    pub fn deactivate(&mut self, feature: &str) -> bool {
        self.toggle(feature, false)
    }

    fn toggle(&mut self, name: &str, active: bool) -> bool {
        let Some(current) = self.features.get(name) else {
            if self.config.warn_on_unknown {
                warn!(feature = %name, active, "Toggling unknown feature, ignoring");
            }
            return false;
        };

        let updated = if active {
            current.activated()
        } else {
            current.deactivated()
        };
        self.set(updated);
        true
    }

    /// Rollout percentage of a registered feature
    pub(crate) fn rollout_of(&self, feature: &str) -> Option<f64> {
        self.features.get(feature).map(|f| f.percentage)
    }

    /// Copy of the feature stored under `feature`
    pub fn get(&self, feature: &str) -> Option<Feature> {
        self.features.get(feature).cloned()
    }

    /// Copy of the stored feature, or the zero value when absent
    pub fn get_or_default(&self, feature: &str) -> Feature {
        self.get(feature).unwrap_or_default()
    }

    /// Copies of every registered feature, in no particular order
    pub fn get_all(&self) -> Vec<Feature> {
        self.features.values().cloned().collect()
    }

    /// Remove a feature, returning it if it was registered
    pub fn remove(&mut self, feature: &str) -> Option<Feature> {
        let removed = self.features.remove(feature);
        if removed.is_some() {
            debug!(feature = %feature, "Removed feature");
        }
        removed
    }

    /// Check whether a feature is registered
    pub fn contains(&self, feature: &str) -> bool {
        self.features.contains_key(feature)
    }

    /// Number of registered features
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Check whether no feature is registered
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

impl FeatureGate for Registry {
    fn is_active(&self, feature: &str, user_id: &str) -> bool {
        decide(self.rollout_of(feature), feature, user_id, &self.config)
    }

    fn is_feature_active(&self, feature: &str) -> bool {
        let result = self.features.get(feature).is_some_and(|f| f.active);

        if self.config.log_decisions {
            trace!(feature = %feature, result, "Feature switch lookup");
        }
        result
    }
}

/// Rollout decision for a feature whose percentage was already looked up
///
/// `None` means the feature is not registered.
pub(crate) fn decide(
    percentage: Option<f64>,
    feature: &str,
    user_id: &str,
    config: &RolloutConfig,
) -> bool {
    let result = percentage.is_some_and(|p| bucket::in_rollout(p, user_id));

    if config.log_decisions {
        trace!(feature = %feature, user_id = %user_id, result, "Rollout decision");
    }
    result
}

impl FromIterator<Feature> for Registry {
    fn from_iter<I: IntoIterator<Item = Feature>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl Extend<Feature> for Registry {
    fn extend<I: IntoIterator<Item = Feature>>(&mut self, iter: I) {
        for feature in iter {
            self.features.insert(feature.name.clone(), feature);
        }
    }
}
