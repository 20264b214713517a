use std::collections::BTreeSet;

use crate::{
    animation::ease::Ease,
    foundation::core::ByProfile,
    foundation::error::{JourneyError, JourneyResult},
};

/// Total scrollable height of the journey spacer, in pixels.
pub const JOURNEY_HEIGHT_PX: f64 = 12_000.0;
/// Anchor depth of the welcome text block.
pub const INTRO_ANCHOR: f64 = -500.0;
/// Anchor depth of the first hero panel (sign 1 pulled 600 deeper).
pub const HERITAGE_PANEL_ANCHOR: f64 = -3_100.0;
/// Anchor depth of the second hero panel (sign 2 pulled 1200 deeper).
pub const COMMUNITY_PANEL_ANCHOR: f64 = -5_700.0;

/// Static tuning for the depth timeline.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TimelineConfig {
    /// Total journey scroll distance in pixels.
    pub journey_height: f64,
    /// World depth per scrolled pixel.
    pub depth_scale: f64,
    /// Breakpoints of the edge-fade opacity window.
    pub edge_fade: EdgeFade,
    /// Hero panel approach tuning.
    pub approach: ApproachTuning,
    /// Climax caption windows.
    pub climax: ClimaxTuning,
    /// Reveal handoff ramp.
    pub handoff: HandoffTuning,
    /// Atmospheric fog overlay.
    pub fog: FogTuning,
    /// Background image zoom.
    pub backdrop: BackdropTuning,
    /// Registered visual elements.
    pub elements: Vec<ElementDef>,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            journey_height: JOURNEY_HEIGHT_PX,
            depth_scale: 1.0,
            edge_fade: EdgeFade::default(),
            approach: ApproachTuning::default(),
            climax: ClimaxTuning::default(),
            handoff: HandoffTuning::default(),
            fog: FogTuning::default(),
            backdrop: BackdropTuning::default(),
            elements: vec![
                ElementDef {
                    id: "intro".to_owned(),
                    policy: OpacityPolicy::EdgeFade,
                    anchor: Some(INTRO_ANCHOR),
                    offset_y: ByProfile::uniform(-100.0),
                    z_bias: 0,
                },
                ElementDef {
                    id: "panel-heritage".to_owned(),
                    policy: OpacityPolicy::Approach,
                    anchor: Some(HERITAGE_PANEL_ANCHOR),
                    offset_y: ByProfile {
                        mobile: 40.0,
                        desktop: -10.0,
                    },
                    z_bias: 0,
                },
                ElementDef {
                    id: "panel-community".to_owned(),
                    policy: OpacityPolicy::Approach,
                    anchor: Some(COMMUNITY_PANEL_ANCHOR),
                    offset_y: ByProfile {
                        mobile: 70.0,
                        desktop: 30.0,
                    },
                    z_bias: 1,
                },
            ],
        }
    }
}

/// How an element's opacity is derived from its distance to the camera.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpacityPolicy {
    /// Symmetric fade-in / plateau / fade-out window.
    EdgeFade,
    /// Grow from small and distant to large and close, then pass the camera.
    Approach,
}

/// One registered visual element.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ElementDef {
    /// Stable element id.
    pub id: String,
    /// Opacity policy.
    pub policy: OpacityPolicy,
    /// Depth at which the element is centered. Required.
    #[serde(default)]
    pub anchor: Option<f64>,
    /// Vertical layout offset in pixels.
    #[serde(default = "zero_offset")]
    pub offset_y: ByProfile<f64>,
    /// Added to the computed stacking order.
    #[serde(default)]
    pub z_bias: i32,
}

fn zero_offset() -> ByProfile<f64> {
    ByProfile::uniform(0.0)
}

/// Edge-fade breakpoints, in distance units (`anchor + depth`).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EdgeFade {
    /// Below this the element is invisible.
    pub far: f64,
    /// Fade-in completes here.
    pub plateau_start: f64,
    /// Fade-out starts after this.
    pub plateau_end: f64,
    /// At and beyond this the element is invisible again.
    pub near: f64,
}

impl Default for EdgeFade {
    fn default() -> Self {
        Self {
            far: -2_000.0,
            plateau_start: -500.0,
            plateau_end: 200.0,
            near: 1_000.0,
        }
    }
}

/// Centered-approach tuning for hero panels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ApproachTuning {
    /// Distance where growth begins.
    pub start: f64,
    /// Distance where the panel is nearest and fully grown.
    pub end: f64,
    /// Distance where the panel has fully passed the camera.
    pub pass_end: f64,
    /// Scale when distant.
    pub min_scale: ByProfile<f64>,
    /// Scale at `end`.
    pub near_scale: ByProfile<f64>,
    /// Scale at `pass_end`.
    pub through_scale: ByProfile<f64>,
    /// Multiplier applied to the eased approach before it becomes the fade-in term.
    pub fade_in_boost: f64,
    /// Minimum contribution of the edge-fade base term.
    pub base_floor: f64,
    /// Stacking order at `t = 0`.
    pub z_base: i32,
    /// Stacking order added at `t = 1`.
    pub z_span: i32,
    /// At or below this opacity the panel leaves the render tree.
    pub cull_opacity: f64,
}

impl Default for ApproachTuning {
    fn default() -> Self {
        Self {
            start: -2_200.0,
            end: 150.0,
            pass_end: 950.0,
            min_scale: ByProfile {
                mobile: 0.95,
                desktop: 0.55,
            },
            near_scale: ByProfile {
                mobile: 1.12,
                desktop: 1.55,
            },
            through_scale: ByProfile {
                mobile: 1.35,
                desktop: 2.35,
            },
            fade_in_boost: 1.15,
            base_floor: 0.7,
            z_base: 20,
            z_span: 60,
            cull_opacity: 0.001,
        }
    }
}

/// Climax caption windows, measured past the anchor panel's `pass_end`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClimaxTuning {
    /// Element the caption is anchored to. Defaults to the last approach element.
    pub anchor_element: Option<String>,
    /// Gap before the fade-in starts.
    pub start: f64,
    /// Fade-in span.
    pub fade_in: f64,
    /// Full-opacity span.
    pub hold: f64,
    /// Fade-out span.
    pub fade_out: f64,
    /// Curve for the fade-in.
    pub fade_in_ease: Ease,
    /// Curve for the fade-out.
    pub fade_out_ease: Ease,
}

impl Default for ClimaxTuning {
    fn default() -> Self {
        Self {
            anchor_element: None,
            start: 300.0,
            fade_in: 600.0,
            hold: 1_400.0,
            fade_out: 600.0,
            fade_in_ease: Ease::Linear,
            fade_out_ease: Ease::Linear,
        }
    }
}

/// Reveal handoff ramp.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HandoffTuning {
    /// How far before the end of the climax hold the ramp starts.
    pub lead: f64,
    /// Ramp length.
    pub ramp: f64,
    /// Ramp curve.
    pub ease: Ease,
    /// Ramp value above which the handoff counts as saturated.
    pub saturation: f64,
}

impl Default for HandoffTuning {
    fn default() -> Self {
        Self {
            lead: 200.0,
            ramp: 1_100.0,
            ease: Ease::Smoothstep,
            saturation: 0.95,
        }
    }
}

/// Fog overlay tuning.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FogTuning {
    /// Delay after the climax start before fog thickens.
    pub delay: f64,
    /// Thickening curve.
    pub ease: Ease,
    /// How strongly the reveal ramp clears the fog.
    pub reveal_clear_gain: f64,
    /// Vertical drift per unit of depth.
    pub drift_per_depth: f64,
    /// Drift bound in pixels (applied symmetrically).
    pub max_drift: f64,
    /// Extra scale per unit of depth.
    pub scale_per_depth: f64,
    /// Upper bound of the extra scale.
    pub max_extra_scale: f64,
}

impl Default for FogTuning {
    fn default() -> Self {
        Self {
            delay: 200.0,
            ease: Ease::Smoothstep,
            reveal_clear_gain: 1.1,
            drift_per_depth: 0.006,
            max_drift: 12.0,
            scale_per_depth: 0.000_007,
            max_extra_scale: 0.04,
        }
    }
}

/// Background image tuning.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BackdropTuning {
    /// Zoom per unit of depth.
    pub scale_per_depth: f64,
    /// Below this depth the idle intro zoom runs.
    pub intro_depth: f64,
}

impl Default for BackdropTuning {
    fn default() -> Self {
        Self {
            scale_per_depth: 0.000_05,
            intro_depth: 50.0,
        }
    }
}

fn check_finite(name: &str, v: f64) -> JourneyResult<()> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(JourneyError::config(format!("{name} must be finite")))
    }
}

fn check_positive(name: &str, v: f64) -> JourneyResult<()> {
    check_finite(name, v)?;
    if v > 0.0 {
        Ok(())
    } else {
        Err(JourneyError::config(format!("{name} must be > 0")))
    }
}

fn check_non_negative(name: &str, v: f64) -> JourneyResult<()> {
    check_finite(name, v)?;
    if v >= 0.0 {
        Ok(())
    } else {
        Err(JourneyError::config(format!("{name} must be >= 0")))
    }
}

impl TimelineConfig {
    /// Validate static invariants. Called before any frame is evaluated.
    pub fn validate(&self) -> JourneyResult<()> {
        // Zero or negative height is tolerated; progress clamps instead.
        check_finite("journey_height", self.journey_height)?;
        check_positive("depth_scale", self.depth_scale)?;

        let e = &self.edge_fade;
        for (name, v) in [
            ("edge_fade.far", e.far),
            ("edge_fade.plateau_start", e.plateau_start),
            ("edge_fade.plateau_end", e.plateau_end),
            ("edge_fade.near", e.near),
        ] {
            check_finite(name, v)?;
        }
        if !(e.far < e.plateau_start && e.plateau_start <= e.plateau_end && e.plateau_end < e.near)
        {
            return Err(JourneyError::config(
                "edge_fade breakpoints must satisfy far < plateau_start <= plateau_end < near",
            ));
        }

        let a = &self.approach;
        for (name, v) in [
            ("approach.start", a.start),
            ("approach.end", a.end),
            ("approach.pass_end", a.pass_end),
            ("approach.min_scale.mobile", a.min_scale.mobile),
            ("approach.min_scale.desktop", a.min_scale.desktop),
            ("approach.near_scale.mobile", a.near_scale.mobile),
            ("approach.near_scale.desktop", a.near_scale.desktop),
            ("approach.through_scale.mobile", a.through_scale.mobile),
            ("approach.through_scale.desktop", a.through_scale.desktop),
            ("approach.fade_in_boost", a.fade_in_boost),
            ("approach.base_floor", a.base_floor),
        ] {
            check_finite(name, v)?;
        }
        if !(a.start < a.end && a.end < a.pass_end) {
            return Err(JourneyError::config(
                "approach breakpoints must satisfy start < end < pass_end",
            ));
        }
        if !(0.0..=1.0).contains(&a.base_floor) {
            return Err(JourneyError::config("approach.base_floor must be in [0, 1]"));
        }
        check_non_negative("approach.cull_opacity", a.cull_opacity)?;
        if a.z_span < 0 {
            return Err(JourneyError::config("approach.z_span must be >= 0"));
        }
        if a.z_base.checked_add(a.z_span).is_none() {
            return Err(JourneyError::config(
                "approach.z_base + approach.z_span overflows the stacking range",
            ));
        }

        let c = &self.climax;
        check_non_negative("climax.start", c.start)?;
        check_positive("climax.fade_in", c.fade_in)?;
        check_non_negative("climax.hold", c.hold)?;
        check_positive("climax.fade_out", c.fade_out)?;

        check_non_negative("handoff.lead", self.handoff.lead)?;
        check_positive("handoff.ramp", self.handoff.ramp)?;
        check_finite("handoff.saturation", self.handoff.saturation)?;

        let f = &self.fog;
        check_non_negative("fog.delay", f.delay)?;
        check_non_negative("fog.reveal_clear_gain", f.reveal_clear_gain)?;
        check_finite("fog.drift_per_depth", f.drift_per_depth)?;
        check_non_negative("fog.max_drift", f.max_drift)?;
        check_finite("fog.scale_per_depth", f.scale_per_depth)?;
        check_non_negative("fog.max_extra_scale", f.max_extra_scale)?;

        check_finite("backdrop.scale_per_depth", self.backdrop.scale_per_depth)?;
        check_finite("backdrop.intro_depth", self.backdrop.intro_depth)?;

        if self.elements.is_empty() {
            return Err(JourneyError::config("at least one element is required"));
        }
        let mut seen = BTreeSet::new();
        for el in &self.elements {
            if el.id.trim().is_empty() {
                return Err(JourneyError::config("element id must be non-empty"));
            }
            if !seen.insert(el.id.as_str()) {
                return Err(JourneyError::config(format!(
                    "duplicate element id '{}'",
                    el.id
                )));
            }
            let Some(anchor) = el.anchor else {
                return Err(JourneyError::config(format!(
                    "element '{}' has no anchor depth",
                    el.id
                )));
            };
            check_finite(&format!("element '{}' anchor", el.id), anchor)?;
            check_finite(&format!("element '{}' offset_y", el.id), el.offset_y.mobile)?;
            check_finite(&format!("element '{}' offset_y", el.id), el.offset_y.desktop)?;

            // Approach stacking spans z_base..=z_base + z_span before the bias is added.
            if el.policy == OpacityPolicy::Approach {
                let low = a.z_base.checked_add(el.z_bias);
                let high = a.z_base.saturating_add(a.z_span).checked_add(el.z_bias);
                if low.is_none() || high.is_none() {
                    return Err(JourneyError::config(format!(
                        "element '{}' z_bias overflows the stacking range",
                        el.id
                    )));
                }
            }
        }

        self.climax_anchor_index().map(|_| ())
    }

    /// Index of the element the climax caption is measured from.
    pub fn climax_anchor_index(&self) -> JourneyResult<usize> {
        match &self.climax.anchor_element {
            Some(id) => {
                let (idx, el) = self
                    .elements
                    .iter()
                    .enumerate()
                    .find(|(_, el)| &el.id == id)
                    .ok_or_else(|| {
                        JourneyError::config(format!("climax anchor '{id}' is not an element"))
                    })?;
                if el.policy != OpacityPolicy::Approach {
                    return Err(JourneyError::config(format!(
                        "climax anchor '{id}' must use the approach policy"
                    )));
                }
                Ok(idx)
            }
            None => self
                .elements
                .iter()
                .rposition(|el| el.policy == OpacityPolicy::Approach)
                .ok_or_else(|| {
                    JourneyError::config("climax caption needs at least one approach element")
                }),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/config.rs"]
mod tests;
