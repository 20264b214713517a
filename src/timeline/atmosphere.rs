use crate::{
    foundation::core::Affine,
    foundation::math::{clamp_unit, unit_ratio},
    timeline::config::{BackdropTuning, ClimaxTuning, FogTuning},
};

/// Fog overlay parameters for one frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct FogFrame {
    /// Overlay opacity.
    pub opacity: f64,
    /// Vertical drift in pixels.
    pub drift_y: f64,
    /// Overlay scale, `>= 1`.
    pub scale: f64,
    /// Drift then scale, as one transform.
    pub transform: Affine,
}

impl FogFrame {
    /// Fog thickens through the climax and clears as the reveal ramp completes.
    pub fn at(c: &ClimaxTuning, f: &FogTuning, post: f64, ramp: f64, depth: f64) -> Self {
        let intensity = f
            .ease
            .apply(unit_ratio(post - (c.start + f.delay), c.fade_in + c.hold));
        let opacity = clamp_unit(intensity * (1.0 - ramp * f.reveal_clear_gain));
        let drift_y = (depth * f.drift_per_depth).clamp(-f.max_drift, f.max_drift);
        let scale = 1.0 + (depth * f.scale_per_depth).clamp(0.0, f.max_extra_scale);
        Self {
            opacity,
            drift_y,
            scale,
            transform: Affine::translate((0.0, drift_y)) * Affine::scale(scale),
        }
    }
}

/// Background image parameters for one frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct BackdropFrame {
    /// Zoom applied to the background.
    pub scale: f64,
    /// Idle intro zoom runs only before travel starts.
    pub ken_burns: bool,
}

impl BackdropFrame {
    /// Evaluate at `depth`.
    pub fn at(b: &BackdropTuning, depth: f64) -> Self {
        Self {
            scale: 1.0 + depth * b.scale_per_depth,
            ken_burns: depth < b.intro_depth,
        }
    }
}
