use crate::frame::scheduler::{FrameBatch, FrameScheduler, FrameSlot};

/// Thresholds for the scroll sampler, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SamplerTuning {
    /// Offsets strictly above this count as "started scrolling".
    pub start_threshold: f64,
    /// Distance before the last reachable offset that counts as the end.
    pub end_margin: f64,
}

impl Default for SamplerTuning {
    fn default() -> Self {
        Self {
            start_threshold: 50.0,
            end_margin: 50.0,
        }
    }
}

/// Latest published scroll position.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct ScrollSample {
    /// Offset in pixels.
    pub raw_offset: f64,
}

/// Scroll geometry the end threshold depends on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollGeometry {
    /// Height of the scroll spacer.
    pub journey_height: f64,
    /// Height of the viewport.
    pub viewport_height: f64,
}

/// What a sampler frame published.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct SamplerUpdate {
    /// The new sample.
    pub sample: ScrollSample,
    /// New value of `has_started`, only when it flipped.
    pub started_changed: Option<bool>,
    /// The end threshold was crossed on this frame.
    pub reached_end: bool,
}

/// Coalesces scroll events into at most one published sample per frame.
#[derive(Debug)]
pub struct ScrollSampler {
    tuning: SamplerTuning,
    listening: bool,
    pending: Option<f64>,
    frame: FrameSlot,
    sample: ScrollSample,
    started: bool,
    at_end: bool,
}

impl ScrollSampler {
    /// Create a listening sampler.
    pub fn new(tuning: SamplerTuning) -> Self {
        Self {
            tuning,
            listening: true,
            pending: None,
            frame: FrameSlot::default(),
            sample: ScrollSample::default(),
            started: false,
            at_end: false,
        }
    }

    /// `false` once torn down.
    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// Last published sample.
    pub fn sample(&self) -> ScrollSample {
        self.sample
    }

    /// Whether the user has scrolled past the start threshold.
    pub fn has_started(&self) -> bool {
        self.started
    }

    /// Offset at and beyond which the journey counts as finished.
    pub fn end_threshold(&self, geometry: ScrollGeometry) -> f64 {
        geometry.journey_height - geometry.viewport_height - self.tuning.end_margin
    }

    /// Buffer `offset` and make sure one frame update is scheduled.
    pub fn on_scroll_event(&mut self, offset: f64, scheduler: &mut dyn FrameScheduler) {
        if !self.listening || !offset.is_finite() {
            return;
        }
        self.pending = Some(offset.max(0.0));
        self.frame.schedule(scheduler);
    }

    /// Publish the buffered offset if this sampler's frame is in `batch`.
    pub fn tick(&mut self, batch: &FrameBatch, geometry: ScrollGeometry) -> Option<SamplerUpdate> {
        if !self.frame.take_if_due(batch) {
            return None;
        }
        let offset = self.pending.take().unwrap_or(self.sample.raw_offset);
        self.sample = ScrollSample { raw_offset: offset };

        let started = offset > self.tuning.start_threshold;
        let started_changed = (started != self.started).then_some(started);
        self.started = started;

        let at_end = offset >= self.end_threshold(geometry);
        let reached_end = at_end && !self.at_end;
        self.at_end = at_end;

        if let Some(s) = started_changed {
            tracing::trace!(started = s, offset, "scroll start threshold crossed");
        }
        if reached_end {
            tracing::debug!(offset, "scroll reached journey end");
        }

        Some(SamplerUpdate {
            sample: self.sample,
            started_changed,
            reached_end,
        })
    }

    /// Stop listening and cancel any pending frame update.
    pub fn teardown(&mut self, scheduler: &mut dyn FrameScheduler) {
        self.listening = false;
        self.pending = None;
        self.frame.cancel(scheduler);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/sampler.rs"]
mod tests;
