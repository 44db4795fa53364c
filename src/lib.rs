// Rollout - Deterministic per-user feature gating for Rust
//
// This library decides whether a user sees a feature using a stable
// CRC-32 bucketing rule plus an explicit on/off switch per feature.

// Re-export core functionality
pub use rollout_features::*;

// Re-export the member crate for path-qualified access
pub use rollout_features;
