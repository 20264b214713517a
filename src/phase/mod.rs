//! Journey -> Fading -> Reveal state machine and the durable "story seen" flag.

/// Phase state machine, transition guard and fade timer.
pub mod controller;
/// Durable flag storage.
pub mod store;
