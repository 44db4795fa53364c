//! Thread-safe registry handle
//!
//! Wraps a [`Registry`] in a reader/writer lock so administrative toggles can
//! run alongside hot-path checks. Clones share the same underlying registry.

use crate::config::RolloutConfig;
use crate::feature::Feature;
use crate::registry::{self, FeatureGate, Registry};
use parking_lot::RwLock;
use std::sync::Arc;

/// Shared, lock-protected feature registry
#[derive(Debug, Clone, Default)]
pub struct SharedRegistry {
    inner: Arc<RwLock<Registry>>,
}

impl SharedRegistry {
    /// Create a shared registry from an initial list of features
    pub fn new(features: impl IntoIterator<Item = Feature>) -> Self {
        Self::from(Registry::new(features))
    }

    /// Create a shared registry with explicit configuration
    pub fn with_config(
        features: impl IntoIterator<Item = Feature>,
        config: RolloutConfig,
    ) -> Self {
        Self::from(Registry::with_config(features, config))
    }

    /// Insert or fully replace a feature
    pub fn set(&self, feature: Feature) {
        self.inner.write().set(feature);
    }

    /// Switch a feature on, returning whether it was registered
    pub fn activate(&self, feature: &str) -> bool {
        self.inner.write().activate(feature)
    }

    /// Switch a feature off, returning whether it was registered
    pub fn deactivate(&self, feature: &str) -> bool {
        self.inner.write().deactivate(feature)
    }

    /// Remove a feature
    pub fn remove(&self, feature: &str) -> Option<Feature> {
        self.inner.write().remove(feature)
    }

    /// Copy of a stored feature
    pub fn get(&self, feature: &str) -> Option<Feature> {
        self.inner.read().get(feature)
    }

    /// Copy of the stored feature, or the zero value when absent
    pub fn get_or_default(&self, feature: &str) -> Feature {
        self.inner.read().get_or_default(feature)
    }

    /// Copies of every registered feature, in no particular order
    pub fn get_all(&self) -> Vec<Feature> {
        self.inner.read().get_all()
    }

    /// Check whether a feature is registered
    pub fn contains(&self, feature: &str) -> bool {
        self.inner.read().contains(feature)
    }

    /// Number of registered features
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Check whether no feature is registered
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Current configuration
    pub fn config(&self) -> RolloutConfig {
        *self.inner.read().config()
    }

    /// Replace the configuration
    pub fn set_config(&self, config: RolloutConfig) {
        self.inner.write().set_config(config);
    }

    /// Point-in-time copy of the registry
    pub fn snapshot(&self) -> Registry {
        self.inner.read().clone()
    }
}

impl From<Registry> for SharedRegistry {
    fn from(registry: Registry) -> Self {
        Self {
            inner: Arc::new(RwLock::new(registry)),
        }
    }
}

impl FeatureGate for SharedRegistry {
    fn is_active(&self, feature: &str, user_id: &str) -> bool {
        // Hash outside the lock; only the lookup needs the guard
        let (percentage, config) = {
            let guard = self.inner.read();
            (guard.rollout_of(feature), *guard.config())
        };
        registry::decide(percentage, feature, user_id, &config)
    }

    fn is_feature_active(&self, feature: &str) -> bool {
        self.inner.read().is_feature_active(feature)
    }
}
