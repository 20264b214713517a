//! Journey is a scroll-driven depth timeline engine.
//!
//! A host page feeds it raw scroll offsets, viewport sizes, skip presses and frame timestamps.
//! Each frame it returns presentation parameters for a simulated camera move through fixed
//! panels, then hands off to a conventional "reveal" application exactly once.
//!
//! # Frame pipeline
//!
//! 1. **Sample**: coalesce scroll events into one [`ScrollSample`] per frame
//! 2. **Smooth**: ease the sample toward a stable world depth ([`ScrollSmoother`])
//! 3. **Evaluate**: depth to per-element opacity, scale and stacking ([`DepthTimeline`])
//! 4. **Transition**: `Journey -> Fading -> Reveal` with a single-use guard ([`PhaseController`])
//! 5. **Hand off**: push a [`RevealContract`] to the host's [`RevealShell`]
//!
//! [`JourneySession`] owns all of these and runs them in that order.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod foundation;

/// Session configuration.
pub mod config;
/// Frame scheduling.
pub mod frame;
/// Phase state machine and durable flag.
pub mod phase;
/// Scroll sampling and smoothing.
pub mod scroll;
/// Per-frame session driver.
pub mod session;
/// Reveal shell boundary.
pub mod shell;
/// Depth timeline engine.
pub mod timeline;

pub use crate::animation::ease::Ease;
pub use crate::config::JourneyConfig;
pub use crate::foundation::core::{
    Affine, ByProfile, MOBILE_BREAKPOINT_PX, PointerEvents, Viewport, ViewportProfile,
};
pub use crate::foundation::error::{JourneyError, JourneyResult};
pub use crate::foundation::math::{clamp_unit, lerp, smoothstep, unit_ratio};

pub use crate::frame::scheduler::{FrameBatch, FrameHandle, FrameQueue, FrameScheduler, FrameSlot};
pub use crate::phase::controller::{
    JourneyPhase, LayerState, Layers, PhaseController, PhaseEvent, TransitionCause,
    TransitionTuning,
};
pub use crate::phase::store::{
    FileFlagStore, FlagStore, MemoryFlagStore, STORY_SEEN_KEY, UnavailableFlagStore,
};
pub use crate::scroll::sampler::{
    SamplerTuning, SamplerUpdate, ScrollGeometry, ScrollSample, ScrollSampler,
};
pub use crate::scroll::smoother::{ScrollSmoother, SmootherTuning, approach};
pub use crate::session::{FrameOutput, JourneySession, SkipControl, SkipPlacement};
pub use crate::shell::{
    NullShell, RecordingShell, RevealContract, RevealShell, ShellAdapter, ShellCall,
};
pub use crate::timeline::config::{ElementDef, OpacityPolicy, TimelineConfig};
pub use crate::timeline::engine::{DepthTimeline, ElementTiming, TimelineFrame};
pub use crate::timeline::policy::{ApproachState, compute_approach, edge_fade_opacity};
