use crate::{
    foundation::error::{JourneyError, JourneyResult},
    frame::scheduler::{FrameBatch, FrameScheduler, FrameSlot},
};

/// Smoothing constants.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SmootherTuning {
    /// Fraction of the remaining gap closed per frame. Smaller is smoother but laggier.
    pub factor: f64,
    /// Gap below which the value snaps onto the target.
    pub snap: f64,
}

impl Default for SmootherTuning {
    fn default() -> Self {
        Self {
            factor: 0.12,
            snap: 0.25,
        }
    }
}

impl SmootherTuning {
    /// `factor` must be in `(0, 1]` and `snap` positive.
    pub fn validate(&self) -> JourneyResult<()> {
        if !(self.factor > 0.0 && self.factor <= 1.0) {
            return Err(JourneyError::config("smoother.factor must be in (0, 1]"));
        }
        if !(self.snap.is_finite() && self.snap > 0.0) {
            return Err(JourneyError::config("smoother.snap must be > 0"));
        }
        Ok(())
    }
}

/// One smoothing step from `prev` toward `target`.
pub fn approach(prev: f64, target: f64, tuning: SmootherTuning) -> f64 {
    let next = prev + (target - prev) * tuning.factor;
    if (next - target).abs() < tuning.snap {
        target
    } else {
        next
    }
}

/// Per-frame loop easing the published scroll offset.
///
/// Runs every frame while mounted, independent of how often scroll events arrive.
#[derive(Debug)]
pub struct ScrollSmoother {
    tuning: SmootherTuning,
    value: f64,
    target: f64,
    mounted: bool,
    frame: FrameSlot,
}

impl ScrollSmoother {
    /// Create an unmounted smoother resting at zero.
    pub fn new(tuning: SmootherTuning) -> Self {
        Self {
            tuning,
            value: 0.0,
            target: 0.0,
            mounted: false,
            frame: FrameSlot::default(),
        }
    }

    /// Smoothed value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Current target.
    pub fn target(&self) -> f64 {
        self.target
    }

    /// `true` once the value sits exactly on the target.
    pub fn is_settled(&self) -> bool {
        self.value == self.target
    }

    /// `true` between `mount` and `unmount`.
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Start the loop.
    pub fn mount(&mut self, scheduler: &mut dyn FrameScheduler) {
        self.mounted = true;
        self.frame.schedule(scheduler);
    }

    /// Retarget. Takes effect on the next tick.
    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    /// Advance one step if this loop's frame is in `batch`, then re-arm.
    pub fn tick(&mut self, batch: &FrameBatch, scheduler: &mut dyn FrameScheduler) -> Option<f64> {
        if !self.frame.take_if_due(batch) {
            return None;
        }
        self.value = approach(self.value, self.target, self.tuning);
        if self.mounted {
            self.frame.schedule(scheduler);
        }
        Some(self.value)
    }

    /// Stop the loop and cancel the outstanding frame.
    pub fn unmount(&mut self, scheduler: &mut dyn FrameScheduler) {
        self.mounted = false;
        self.frame.cancel(scheduler);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/smoother.rs"]
mod tests;
