use crate::{
    foundation::core::{Affine, Viewport, ViewportProfile},
    foundation::error::{JourneyError, JourneyResult},
    foundation::math::unit_ratio,
    timeline::atmosphere::{BackdropFrame, FogFrame},
    timeline::climax::{CaptionFrame, HandoffFrame, climax_opacity, post_anchor_distance},
    timeline::config::{OpacityPolicy, TimelineConfig},
    timeline::policy::{compute_approach, distance, edge_fade_opacity},
};

/// Derived presentation state of one element. Recomputed from scratch every frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ElementTiming {
    /// Element id from the configuration.
    pub id: String,
    /// Policy that produced this state.
    pub policy: OpacityPolicy,
    /// Configured anchor depth.
    pub anchor: f64,
    /// `anchor + depth`.
    pub distance: f64,
    /// Rendered scale.
    pub scale: f64,
    /// Rendered opacity in `[0, 1]`.
    pub opacity: f64,
    /// Stacking order.
    pub z_index: i32,
    /// `false` when the element must be left out of the render tree.
    pub visible: bool,
    /// Vertical layout offset then scale.
    pub transform: Affine,
}

/// Everything the journey layer needs to draw one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TimelineFrame {
    /// World depth the frame was evaluated at.
    pub depth: f64,
    /// Viewport class used for keyframes and offsets.
    pub profile: ViewportProfile,
    /// Travel through the scrollable range, in `[0, 1]`.
    pub scroll_progress: f64,
    /// Per-element state, in configuration order.
    pub elements: Vec<ElementTiming>,
    /// Climax caption.
    pub caption: CaptionFrame,
    /// Reveal handoff ramp.
    pub handoff: HandoffFrame,
    /// Fog overlay.
    pub fog: FogFrame,
    /// Background image.
    pub backdrop: BackdropFrame,
}

impl TimelineFrame {
    /// Visible elements ordered back to front. Ties keep configuration order.
    pub fn render_list(&self) -> Vec<&ElementTiming> {
        let mut out: Vec<&ElementTiming> = self.elements.iter().filter(|e| e.visible).collect();
        out.sort_by_key(|e| e.z_index);
        out
    }

    /// Look up an element by id.
    pub fn element(&self, id: &str) -> Option<&ElementTiming> {
        self.elements.iter().find(|e| e.id == id)
    }

    /// `handoff.ramp > saturation`.
    pub fn is_handoff_saturated(&self) -> bool {
        self.handoff.saturated
    }
}

/// Pure mapping from world depth to presentation parameters.
///
/// Holds only validated configuration; nothing is carried from one evaluation to the next.
#[derive(Clone, Debug)]
pub struct DepthTimeline {
    config: TimelineConfig,
    anchors: Vec<f64>,
    climax_anchor: usize,
}

impl DepthTimeline {
    /// Validate `config` and build the engine.
    pub fn new(config: TimelineConfig) -> JourneyResult<Self> {
        config.validate()?;
        let climax_anchor = config.climax_anchor_index()?;
        let anchors = config
            .elements
            .iter()
            .map(|el| {
                el.anchor.ok_or_else(|| {
                    JourneyError::config(format!("element '{}' has no anchor", el.id))
                })
            })
            .collect::<JourneyResult<Vec<_>>>()?;

        tracing::debug!(
            elements = anchors.len(),
            climax_anchor = %config.elements[climax_anchor].id,
            "depth timeline ready"
        );
        Ok(Self {
            config,
            anchors,
            climax_anchor,
        })
    }

    /// Validated configuration.
    pub fn config(&self) -> &TimelineConfig {
        &self.config
    }

    /// World depth for a smoothed scroll offset.
    pub fn world_depth(&self, smoothed_offset: f64) -> f64 {
        smoothed_offset * self.config.depth_scale
    }

    /// Largest reachable scroll offset for a viewport height. May be `<= 0`.
    pub fn max_scroll(&self, viewport_height: f64) -> f64 {
        self.config.journey_height - viewport_height
    }

    /// Travel progress in `[0, 1]`; degenerate geometry yields `0`.
    pub fn scroll_progress(&self, depth: f64, viewport_height: f64) -> f64 {
        unit_ratio(depth, self.max_scroll(viewport_height))
    }

    /// Evaluate every element and overlay at `depth`.
    pub fn evaluate(&self, depth: f64, viewport: Viewport) -> TimelineFrame {
        let cfg = &self.config;
        let profile = viewport.profile();

        let mut elements = Vec::with_capacity(cfg.elements.len());
        let mut climax_dist = 0.0;
        for (idx, (el, &anchor)) in cfg.elements.iter().zip(&self.anchors).enumerate() {
            let offset = Affine::translate((0.0, el.offset_y.get(profile)));
            let timing = match el.policy {
                OpacityPolicy::EdgeFade => {
                    let opacity = edge_fade_opacity(&cfg.edge_fade, anchor, depth);
                    ElementTiming {
                        id: el.id.clone(),
                        policy: el.policy,
                        anchor,
                        distance: distance(anchor, depth),
                        scale: 1.0,
                        opacity,
                        z_index: el.z_bias,
                        visible: opacity > 0.0,
                        transform: offset,
                    }
                }
                OpacityPolicy::Approach => {
                    let s = compute_approach(&cfg.approach, &cfg.edge_fade, anchor, depth, profile);
                    ElementTiming {
                        id: el.id.clone(),
                        policy: el.policy,
                        anchor,
                        distance: s.dist,
                        scale: s.scale,
                        opacity: s.opacity,
                        z_index: s.z_index + el.z_bias,
                        visible: s.opacity > cfg.approach.cull_opacity,
                        transform: offset * Affine::scale(s.scale),
                    }
                }
            };
            if idx == self.climax_anchor {
                climax_dist = timing.distance;
            }
            elements.push(timing);
        }

        let post = post_anchor_distance(&cfg.approach, climax_dist);
        let caption = CaptionFrame {
            post_distance: post,
            opacity: climax_opacity(&cfg.climax, post),
        };
        let handoff = HandoffFrame::at(&cfg.climax, &cfg.handoff, post);
        let fog = FogFrame::at(&cfg.climax, &cfg.fog, post, handoff.ramp, depth);
        let backdrop = BackdropFrame::at(&cfg.backdrop, depth);

        TimelineFrame {
            depth,
            profile,
            scroll_progress: self.scroll_progress(depth, viewport.height),
            elements,
            caption,
            handoff,
            fog,
            backdrop,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/engine.rs"]
mod tests;
