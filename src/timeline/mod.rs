//! Depth timeline: world depth to per-element opacity, scale and stacking.

/// Fog overlay and background zoom.
pub mod atmosphere;
/// Climax caption windows and the reveal handoff ramp.
pub mod climax;
/// Static tuning and element registry.
pub mod config;
/// The evaluator tying policies together.
pub mod engine;
/// Edge-fade and centered-approach opacity policies.
pub mod policy;
