//! Per-frame driver owning every journey component.

use crate::{
    config::JourneyConfig,
    foundation::core::Viewport,
    foundation::error::JourneyResult,
    frame::scheduler::FrameQueue,
    phase::controller::{JourneyPhase, Layers, PhaseController, PhaseEvent, TransitionCause},
    phase::store::FlagStore,
    scroll::sampler::{ScrollGeometry, ScrollSample, ScrollSampler},
    scroll::smoother::ScrollSmoother,
    shell::{NullShell, RevealContract, RevealShell, ShellAdapter},
    timeline::engine::{DepthTimeline, TimelineFrame},
};

/// Where the skip control sits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipPlacement {
    /// Corner placement before the user starts scrolling.
    TopRight,
    /// Centered along the bottom edge once scrolling has started.
    BottomCenter,
}

/// Skip control state. Present while the journey layer is mounted.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct SkipControl {
    /// Placement.
    pub placement: SkipPlacement,
    /// Opacity.
    pub opacity: f64,
}

impl SkipControl {
    fn for_started(started: bool) -> Self {
        if started {
            Self {
                placement: SkipPlacement::BottomCenter,
                opacity: 0.95,
            }
        } else {
            Self {
                placement: SkipPlacement::TopRight,
                opacity: 1.0,
            }
        }
    }
}

/// Everything produced by one [`JourneySession::frame`] call.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FrameOutput {
    /// 0-based frame counter.
    pub frame: u64,
    /// Timestamp passed to `frame`.
    pub now_ms: f64,
    /// Phase after this frame.
    pub phase: JourneyPhase,
    /// Last published scroll sample.
    pub sample: ScrollSample,
    /// Whether the user has started scrolling.
    pub has_started: bool,
    /// Smoothed scroll offset.
    pub smoothed_offset: f64,
    /// Journey visuals; `None` once the journey layer is unmounted.
    pub timeline: Option<TimelineFrame>,
    /// Layer opacity and pointer state.
    pub layers: Layers,
    /// Contract handed to the reveal shell, while it is mounted.
    pub reveal: Option<RevealContract>,
    /// Skip control, while the journey layer is mounted.
    pub skip: Option<SkipControl>,
    /// Transition started on this frame by a scroll or depth signal.
    pub triggered: Option<TransitionCause>,
    /// Phase changes and host side effects.
    pub events: Vec<PhaseEvent>,
}

/// Explicit state object for one landing-page session.
///
/// Within [`JourneySession::frame`] the order is fixed: sampler, smoother, timeline, phase
/// controller, shell. Each stage reads what the previous one wrote on the same frame.
pub struct JourneySession {
    timeline: DepthTimeline,
    scheduler: FrameQueue,
    sampler: ScrollSampler,
    smoother: ScrollSmoother,
    controller: PhaseController,
    shell: ShellAdapter,
    viewport: Viewport,
    frame_index: u64,
}

impl std::fmt::Debug for JourneySession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JourneySession")
            .field("phase", &self.controller.phase())
            .field("viewport", &self.viewport)
            .field("frame_index", &self.frame_index)
            .finish_non_exhaustive()
    }
}

impl JourneySession {
    /// Validate `config`, read the durable flag and arm the per-frame loops.
    #[tracing::instrument(skip(config, store))]
    pub fn new(
        config: JourneyConfig,
        store: Box<dyn FlagStore>,
        viewport: Viewport,
    ) -> JourneyResult<Self> {
        config.validate()?;
        let JourneyConfig {
            timeline,
            sampler,
            smoother,
            transition,
        } = config;

        let timeline = DepthTimeline::new(timeline)?;
        let mut scheduler = FrameQueue::new();
        let mut sampler = ScrollSampler::new(sampler);
        let mut smoother = ScrollSmoother::new(smoother);
        let controller = PhaseController::new(store, transition);

        if controller.phase() == JourneyPhase::Journey {
            smoother.mount(&mut scheduler);
        } else {
            sampler.teardown(&mut scheduler);
        }

        Ok(Self {
            timeline,
            scheduler,
            sampler,
            smoother,
            controller,
            shell: ShellAdapter::new(Box::new(NullShell)),
            viewport,
            frame_index: 0,
        })
    }

    /// Attach the host's reveal shell.
    pub fn with_shell(mut self, shell: Box<dyn RevealShell>) -> Self {
        self.shell = ShellAdapter::new(shell);
        self
    }

    /// Current phase.
    pub fn phase(&self) -> JourneyPhase {
        self.controller.phase()
    }

    /// Current viewport.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// The depth timeline.
    pub fn timeline(&self) -> &DepthTimeline {
        &self.timeline
    }

    /// The phase controller.
    pub fn controller(&self) -> &PhaseController {
        &self.controller
    }

    /// The frame queue; exposes outstanding requests.
    pub fn scheduler(&self) -> &FrameQueue {
        &self.scheduler
    }

    /// Whether scroll events are still being listened to.
    pub fn is_listening(&self) -> bool {
        self.sampler.is_listening()
    }

    /// Smoothed scroll offset.
    pub fn smoothed_offset(&self) -> f64 {
        self.smoother.value()
    }

    /// Feed a raw scroll event. Ignored once the journey is over.
    pub fn on_scroll(&mut self, offset: f64) {
        self.sampler.on_scroll_event(offset, &mut self.scheduler);
    }

    /// Viewport changed; the profile is resolved here, not per frame.
    pub fn on_resize(&mut self, viewport: Viewport) {
        if viewport != self.viewport {
            tracing::debug!(
                width = viewport.width,
                height = viewport.height,
                profile = ?viewport.profile(),
                "viewport resized"
            );
            self.viewport = viewport;
        }
    }

    /// User pressed the skip control. Returns `false` if absorbed by the guard.
    pub fn skip(&mut self, now_ms: f64) -> bool {
        let started = self.controller.trigger(TransitionCause::Skip, now_ms);
        if started {
            self.leave_journey();
        }
        started
    }

    /// Run one display frame at `now_ms`.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn frame(&mut self, now_ms: f64) -> FrameOutput {
        let batch = self.scheduler.drain();

        let geometry = ScrollGeometry {
            journey_height: self.timeline.config().journey_height,
            viewport_height: self.viewport.height,
        };
        let update = self.sampler.tick(&batch, geometry);
        if let Some(u) = update {
            self.smoother.set_target(u.sample.raw_offset);
        }

        self.smoother.tick(&batch, &mut self.scheduler);
        let depth = self.timeline.world_depth(self.smoother.value());

        let timeline = (self.controller.phase() != JourneyPhase::Reveal)
            .then(|| self.timeline.evaluate(depth, self.viewport));

        let mut triggered = None;
        if self.controller.phase() == JourneyPhase::Journey {
            let reached_end = update.is_some_and(|u| u.reached_end);
            let saturated = timeline.as_ref().is_some_and(|t| t.is_handoff_saturated());
            let cause = if reached_end {
                Some(TransitionCause::ReachedEnd)
            } else if saturated {
                Some(TransitionCause::HandoffSaturated)
            } else {
                None
            };
            if let Some(cause) = cause
                && self.controller.trigger(cause, now_ms)
            {
                triggered = Some(cause);
                self.leave_journey();
            }
        }

        let events = self.controller.tick(now_ms);
        if events.contains(&PhaseEvent::Entered(JourneyPhase::Reveal)) {
            self.smoother.unmount(&mut self.scheduler);
        }

        let phase = self.controller.phase();
        let layers = self.controller.layers(now_ms);
        let reveal = self.shell.sync(phase, layers.reveal);
        let skip = layers
            .journey
            .mounted
            .then(|| SkipControl::for_started(self.sampler.has_started()));

        let out = FrameOutput {
            frame: self.frame_index,
            now_ms,
            phase,
            sample: self.sampler.sample(),
            has_started: self.sampler.has_started(),
            smoothed_offset: self.smoother.value(),
            timeline: if layers.journey.mounted { timeline } else { None },
            layers,
            reveal,
            skip,
            triggered,
            events,
        };
        self.frame_index += 1;
        out
    }

    /// Cancel every outstanding frame request and unmount the shell.
    pub fn teardown(&mut self) {
        self.sampler.teardown(&mut self.scheduler);
        self.smoother.unmount(&mut self.scheduler);
        self.shell.teardown();
        tracing::debug!(
            pending = self.scheduler.pending_len(),
            "journey session torn down"
        );
    }

    fn leave_journey(&mut self) {
        self.sampler.teardown(&mut self.scheduler);
    }
}
