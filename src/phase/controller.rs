use crate::{
    foundation::core::PointerEvents,
    foundation::error::{JourneyError, JourneyResult},
    foundation::math::unit_ratio,
    phase::store::{FlagStore, STORY_SEEN_KEY},
};

/// Coarse lifecycle of the landing experience. Only ever moves forward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum JourneyPhase {
    /// Scroll-driven journey is playing.
    Journey,
    /// Journey and reveal layers cross-fade.
    Fading,
    /// Reveal shell is active. Terminal until reload.
    Reveal,
}

/// What started the journey-to-reveal transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionCause {
    /// Scroll offset crossed the end threshold.
    ReachedEnd,
    /// Handoff ramp saturated.
    HandoffSaturated,
    /// User pressed the skip control.
    Skip,
}

/// Side effects requested by the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum PhaseEvent {
    /// Phase changed.
    Entered(JourneyPhase),
    /// Host should scroll the document back to the top.
    ResetScroll,
}

/// Transition timing.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TransitionTuning {
    /// Cross-fade duration in milliseconds.
    pub fade_ms: f64,
    /// Frames to wait after entering `Reveal` before resetting the scroll position.
    pub scroll_reset_frames: u32,
}

impl Default for TransitionTuning {
    fn default() -> Self {
        Self {
            fade_ms: 350.0,
            scroll_reset_frames: 2,
        }
    }
}

impl TransitionTuning {
    /// `fade_ms` must be finite and non-negative.
    pub fn validate(&self) -> JourneyResult<()> {
        if !(self.fade_ms.is_finite() && self.fade_ms >= 0.0) {
            return Err(JourneyError::config("transition.fade_ms must be >= 0"));
        }
        Ok(())
    }
}

/// Opacity and interactivity of one presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct LayerState {
    /// Whether the layer is in the render tree at all.
    pub mounted: bool,
    /// Layer opacity.
    pub opacity: f64,
    /// Pointer interaction.
    pub pointer_events: PointerEvents,
}

impl LayerState {
    const UNMOUNTED: Self = Self {
        mounted: false,
        opacity: 0.0,
        pointer_events: PointerEvents::None,
    };
}

/// Both layers for one frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Layers {
    /// Journey visuals.
    pub journey: LayerState,
    /// Reveal shell.
    pub reveal: LayerState,
}

/// Owns the phase, the transition guard and the fade timer.
pub struct PhaseController {
    tuning: TransitionTuning,
    store: Box<dyn FlagStore>,
    phase: JourneyPhase,
    guard: bool,
    fade_started_ms: Option<f64>,
    fade_timer_starts: u32,
    scroll_reset_in: Option<u32>,
}

impl std::fmt::Debug for PhaseController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PhaseController")
            .field("phase", &self.phase)
            .field("guard", &self.guard)
            .field("fade_started_ms", &self.fade_started_ms)
            .finish_non_exhaustive()
    }
}

impl PhaseController {
    /// Read the "story seen" flag once and pick the initial phase.
    ///
    /// A store that cannot be read counts as "not seen". The first tick requests a scroll reset
    /// so a restored scroll position never skips part of the journey.
    pub fn new(store: Box<dyn FlagStore>, tuning: TransitionTuning) -> Self {
        let seen = match store.read_flag(STORY_SEEN_KEY) {
            Ok(v) => v,
            Err(err) => {
                tracing::debug!(error = %err, "story flag unreadable, playing journey");
                false
            }
        };
        let phase = if seen {
            JourneyPhase::Reveal
        } else {
            JourneyPhase::Journey
        };
        tracing::info!(?phase, seen, "phase controller initialised");

        Self {
            tuning,
            store,
            phase,
            guard: false,
            fade_started_ms: None,
            fade_timer_starts: 0,
            scroll_reset_in: Some(1),
        }
    }

    /// Current phase.
    pub fn phase(&self) -> JourneyPhase {
        self.phase
    }

    /// `true` from trigger until the fade completes.
    pub fn is_transitioning(&self) -> bool {
        self.guard
    }

    /// Timestamp the fade timer started at.
    pub fn fade_started_at(&self) -> Option<f64> {
        self.fade_started_ms
    }

    /// How many times a fade timer was started. At most one per session.
    pub fn fade_timer_starts(&self) -> u32 {
        self.fade_timer_starts
    }

    /// Fade progress in `[0, 1]`: `0` during the journey, `1` once revealed.
    pub fn fade_progress(&self, now_ms: f64) -> f64 {
        match (self.phase, self.fade_started_ms) {
            (JourneyPhase::Journey, _) => 0.0,
            (JourneyPhase::Fading, Some(start)) => {
                if self.tuning.fade_ms <= 0.0 {
                    1.0
                } else {
                    unit_ratio(now_ms - start, self.tuning.fade_ms)
                }
            }
            _ => 1.0,
        }
    }

    /// Start the transition. Returns `false` when absorbed by the guard.
    ///
    /// The guard is set before any side effect, so triggers arriving later in the same frame are
    /// no-ops and the flag is written at most once.
    pub fn trigger(&mut self, cause: TransitionCause, now_ms: f64) -> bool {
        if self.guard || self.phase != JourneyPhase::Journey {
            tracing::trace!(?cause, phase = ?self.phase, "transition trigger absorbed");
            return false;
        }
        self.guard = true;

        if let Err(err) = self.store.write_flag(STORY_SEEN_KEY, true) {
            tracing::debug!(error = %err, "story flag not persisted");
        }

        self.phase = JourneyPhase::Fading;
        self.fade_started_ms = Some(now_ms);
        self.fade_timer_starts += 1;
        tracing::info!(?cause, now_ms, "journey transition started");
        true
    }

    /// Advance timers. Call once per frame after any triggers for that frame.
    pub fn tick(&mut self, now_ms: f64) -> Vec<PhaseEvent> {
        let mut events = Vec::new();

        if let Some(n) = self.scroll_reset_in {
            let left = n.saturating_sub(1);
            if left == 0 {
                self.scroll_reset_in = None;
                events.push(PhaseEvent::ResetScroll);
            } else {
                self.scroll_reset_in = Some(left);
            }
        }

        if self.phase == JourneyPhase::Fading {
            let start = self.fade_started_ms.unwrap_or(now_ms);
            if now_ms - start >= self.tuning.fade_ms {
                self.phase = JourneyPhase::Reveal;
                self.guard = false;
                events.push(PhaseEvent::Entered(JourneyPhase::Reveal));
                tracing::info!(now_ms, "reveal active");

                if self.tuning.scroll_reset_frames == 0 {
                    events.push(PhaseEvent::ResetScroll);
                } else {
                    self.scroll_reset_in = Some(self.tuning.scroll_reset_frames);
                }
            }
        }

        events
    }

    /// Layer opacity and pointer state at `now_ms`.
    pub fn layers(&self, now_ms: f64) -> Layers {
        match self.phase {
            JourneyPhase::Journey => Layers {
                journey: LayerState {
                    mounted: true,
                    opacity: 1.0,
                    pointer_events: PointerEvents::None,
                },
                reveal: LayerState::UNMOUNTED,
            },
            JourneyPhase::Fading => Layers {
                journey: LayerState {
                    mounted: true,
                    opacity: 1.0 - self.fade_progress(now_ms),
                    pointer_events: PointerEvents::None,
                },
                reveal: LayerState {
                    mounted: true,
                    opacity: 1.0,
                    pointer_events: PointerEvents::None,
                },
            },
            JourneyPhase::Reveal => Layers {
                journey: LayerState::UNMOUNTED,
                reveal: LayerState {
                    mounted: true,
                    opacity: 1.0,
                    pointer_events: PointerEvents::Auto,
                },
            },
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/phase/controller.rs"]
mod tests;
