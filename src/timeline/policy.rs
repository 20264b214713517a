use crate::{
    foundation::core::ViewportProfile,
    foundation::math::{clamp_unit, lerp, smoothstep},
    timeline::config::{ApproachTuning, EdgeFade},
};

/// Distance of an element from the camera. Positive once the camera has passed its anchor.
pub fn distance(anchor: f64, depth: f64) -> f64 {
    anchor + depth
}

/// Edge-fade opacity: ramp in, plateau, ramp out.
pub fn edge_fade_opacity(fade: &EdgeFade, anchor: f64, depth: f64) -> f64 {
    let d = distance(anchor, depth);
    if d < fade.far {
        0.0
    } else if d < fade.plateau_start {
        (d - fade.far) / (fade.plateau_start - fade.far)
    } else if d <= fade.plateau_end {
        1.0
    } else if d < fade.near {
        1.0 - (d - fade.plateau_end) / (fade.near - fade.plateau_end)
    } else {
        0.0
    }
}

/// Result of the centered-approach policy for one element.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ApproachState {
    /// `anchor + depth`.
    pub dist: f64,
    /// Linear progress through the approach segment.
    pub t_approach: f64,
    /// Linear progress through the pass segment.
    pub t_pass: f64,
    /// Rendered scale.
    pub scale: f64,
    /// Rendered opacity in `[0, 1]`.
    pub opacity: f64,
    /// Stacking order, before any per-element bias.
    pub z_index: i32,
}

/// Centered-approach policy for hero panels.
pub fn compute_approach(
    tuning: &ApproachTuning,
    fade: &EdgeFade,
    anchor: f64,
    depth: f64,
    profile: ViewportProfile,
) -> ApproachState {
    let dist = distance(anchor, depth);

    let t_approach = clamp_unit((dist - tuning.start) / (tuning.end - tuning.start));
    let t_pass = clamp_unit((dist - tuning.end) / (tuning.pass_end - tuning.end));
    let a = smoothstep(t_approach);
    let p = smoothstep(t_pass);

    let min_scale = tuning.min_scale.get(profile);
    let near_scale = tuning.near_scale.get(profile);
    let through_scale = tuning.through_scale.get(profile);
    let scale = lerp(min_scale, near_scale, a) + (through_scale - near_scale) * p;

    let fade_in = clamp_unit(a * tuning.fade_in_boost);
    let fade_out = 1.0 - p;
    let base = clamp_unit(edge_fade_opacity(fade, anchor, depth));
    let floor = tuning.base_floor;
    let opacity = clamp_unit((floor + (1.0 - floor) * base) * fade_in * fade_out);

    let lift = (f64::from(tuning.z_span) * t_approach.max(t_pass)).round() as i32;
    let z_index = tuning.z_base + lift;

    ApproachState {
        dist,
        t_approach,
        t_pass,
        scale,
        opacity,
        z_index,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/policy.rs"]
mod tests;
