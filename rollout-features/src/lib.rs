//! Rollout Features
//!
//! Deterministic per-user feature gating: a stable percentage-based rollout
//! rule plus an explicit on/off switch for every feature.
//!
//! # Features
//!
//! - **Gradual Rollout** - Users are bucketed by the CRC-32 of their id, so a
//!   user stays on the same side of the threshold across calls and restarts
//! - **Kill Switch** - Each feature carries an `active` flag checked
//!   independently of the percentage
//! - **Shared Registry** - Lock-protected variant for multi-threaded hosts
//!
//! # Quick Start
//!
//! ```
//! use rollout_features::*;
//!
//! let mut registry = Registry::new(vec![
//!     Feature::new("new-checkout", 25.0, true),
//!     Feature::new("dark-mode", 100.0, false),
//! ]);
//!
//! if registry.is_active("new-checkout", "8975b460-4446-4af2-965a-ba020092e1ca") {
//!     // Serve the new checkout
//! }
//!
//! registry.activate("dark-mode");
//! assert!(registry.is_feature_active("dark-mode"));
//! ```
//!
//! # Concurrent Hosts
//!
//! ```
//! use rollout_features::*;
//!
//! let registry = SharedRegistry::new(vec![Feature::new("beta", 10.0, false)]);
//! let admin = registry.clone();
//!
//! std::thread::spawn(move || admin.activate("beta")).join().unwrap();
//! assert!(registry.is_feature_active("beta"));
//! ```

pub mod bucket;
pub mod config;
pub mod error;
pub mod feature;
pub mod registry;
pub mod shared;

pub use bucket::{BUCKET_COUNT, bucket, checksum, in_rollout};
pub use config::RolloutConfig;
pub use error::{RolloutError, RolloutResult};
pub use feature::Feature;
pub use registry::{FeatureGate, Registry};
pub use shared::SharedRegistry;
