//! Session configuration, loaded from JSON.

use std::path::Path;

use crate::{
    foundation::error::{JourneyError, JourneyResult},
    phase::controller::TransitionTuning,
    scroll::sampler::SamplerTuning,
    scroll::smoother::SmootherTuning,
    timeline::config::TimelineConfig,
};

/// Everything a [`crate::JourneySession`] is tuned by. Missing sections take their defaults.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct JourneyConfig {
    /// Depth timeline.
    pub timeline: TimelineConfig,
    /// Scroll sampler thresholds.
    pub sampler: SamplerTuning,
    /// Scroll smoothing.
    pub smoother: SmootherTuning,
    /// Cross-fade timing.
    pub transition: TransitionTuning,
}

impl JourneyConfig {
    /// Validate every section.
    pub fn validate(&self) -> JourneyResult<()> {
        self.timeline.validate()?;
        if !(self.sampler.start_threshold.is_finite() && self.sampler.end_margin.is_finite()) {
            return Err(JourneyError::config("sampler thresholds must be finite"));
        }
        self.smoother.validate()?;
        self.transition.validate()?;
        Ok(())
    }

    /// Parse and validate a JSON document.
    pub fn from_json_str(json: &str) -> JourneyResult<Self> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a JSON file.
    pub fn from_path(path: &Path) -> JourneyResult<Self> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| JourneyError::config(format!("read '{}': {e}", path.display())))?;
        Self::from_json_str(&json)
    }
}
