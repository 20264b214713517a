use crate::foundation::error::{JourneyError, JourneyResult};

pub use kurbo::Affine;

/// Viewport widths below this many CSS pixels use the mobile profile.
pub const MOBILE_BREAKPOINT_PX: f64 = 1024.0;

/// Current viewport dimensions in CSS pixels, with the viewport class resolved once.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Viewport {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
    profile: ViewportProfile,
}

impl Viewport {
    /// Create a validated viewport. Both sides must be finite and non-negative.
    pub fn new(width: f64, height: f64) -> JourneyResult<Self> {
        if !width.is_finite() || !height.is_finite() {
            return Err(JourneyError::validation("viewport size must be finite"));
        }
        if width < 0.0 || height < 0.0 {
            return Err(JourneyError::validation("viewport size must be >= 0"));
        }
        Ok(Self {
            width,
            height,
            profile: ViewportProfile::for_width(width),
        })
    }

    /// Viewport class used by the timeline.
    pub fn profile(self) -> ViewportProfile {
        self.profile
    }
}

/// Viewport class threaded into the timeline instead of ad hoc width checks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewportProfile {
    /// Narrow screens, viewed from closer up.
    Mobile,
    /// Everything at or above the breakpoint.
    Desktop,
}

impl ViewportProfile {
    /// Classify a viewport width.
    pub fn for_width(width: f64) -> Self {
        if width < MOBILE_BREAKPOINT_PX {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }
}

/// Pointer interaction mode for a presentation layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerEvents {
    /// Layer receives pointer input.
    Auto,
    /// Pointer input passes through.
    #[default]
    None,
}

/// Per-profile pair of values.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ByProfile<T> {
    /// Value for [`ViewportProfile::Mobile`].
    pub mobile: T,
    /// Value for [`ViewportProfile::Desktop`].
    pub desktop: T,
}

impl<T: Copy> ByProfile<T> {
    /// Same value for both profiles.
    pub const fn uniform(v: T) -> Self {
        Self {
            mobile: v,
            desktop: v,
        }
    }

    /// Pick the value for `profile`.
    pub fn get(&self, profile: ViewportProfile) -> T {
        match profile {
            ViewportProfile::Mobile => self.mobile,
            ViewportProfile::Desktop => self.desktop,
        }
    }
}
