use crate::{
    foundation::math::unit_ratio,
    timeline::config::{ApproachTuning, ClimaxTuning, HandoffTuning},
};

/// Distance travelled past the climax anchor's `pass_end`.
pub fn post_anchor_distance(approach: &ApproachTuning, anchor_dist: f64) -> f64 {
    anchor_dist - approach.pass_end
}

/// Climax caption opacity for a post-anchor distance.
///
/// Window boundaries are running sums: fade-in, then hold, then fade-out.
pub fn climax_opacity(c: &ClimaxTuning, post: f64) -> f64 {
    if post <= c.start {
        return 0.0;
    }
    let into = post - c.start;
    let fade_in_end = c.fade_in;
    let hold_end = fade_in_end + c.hold;
    let fade_out_end = hold_end + c.fade_out;

    if into < fade_in_end {
        c.fade_in_ease.apply(into / c.fade_in)
    } else if into < hold_end {
        1.0
    } else if into < fade_out_end {
        1.0 - c.fade_out_ease.apply((into - hold_end) / c.fade_out)
    } else {
        0.0
    }
}

/// Post-anchor distance at which the handoff ramp begins.
pub fn handoff_start(c: &ClimaxTuning, h: &HandoffTuning) -> f64 {
    c.start + c.fade_in + c.hold - h.lead
}

/// Reveal layer opacity in `[0, 1]`.
pub fn handoff_ramp(c: &ClimaxTuning, h: &HandoffTuning, post: f64) -> f64 {
    h.ease.apply(unit_ratio(post - handoff_start(c, h), h.ramp))
}

/// Climax caption parameters for one frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct CaptionFrame {
    /// Distance past the anchor panel.
    pub post_distance: f64,
    /// Caption opacity.
    pub opacity: f64,
}

/// Handoff ramp for one frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct HandoffFrame {
    /// Reveal layer opacity.
    pub ramp: f64,
    /// `ramp > saturation`.
    pub saturated: bool,
}

impl HandoffFrame {
    /// Evaluate the ramp at `post`.
    pub fn at(c: &ClimaxTuning, h: &HandoffTuning, post: f64) -> Self {
        let ramp = handoff_ramp(c, h, post);
        Self {
            ramp,
            saturated: ramp > h.saturation,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/climax.rs"]
mod tests;
