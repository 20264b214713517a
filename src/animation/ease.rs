use crate::foundation::math::{clamp_unit, smoothstep};

/// Curves applied to normalized fade progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    /// Linear interpolation.
    #[default]
    Linear,
    /// Cubic `3t^2 - 2t^3`, flat at both ends.
    Smoothstep,
    /// Quadratic ease-in.
    InQuad,
    /// Cubic ease-out.
    OutCubic,
}

impl Ease {
    /// Apply this curve to progress `t`. Input is clamped to `[0, 1]` first.
    pub fn apply(self, t: f64) -> f64 {
        let t = clamp_unit(t);
        match self {
            Self::Linear => t,
            Self::Smoothstep => smoothstep(t),
            Self::InQuad => t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
