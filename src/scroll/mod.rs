//! Scroll input: frame-gated sampling and per-frame smoothing.

/// Frame-gated scroll sampling.
pub mod sampler;
/// Exponential approach toward the sampled offset.
pub mod smoother;
