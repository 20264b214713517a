//! Frame scheduling.
//!
//! Per-frame loops never own a display clock. They request one-shot frame callbacks from a
//! [`FrameScheduler`] and are ticked by their owner with the batch of requests that came due.

/// Scheduler trait, handles, and the in-process queue.
pub mod scheduler;
