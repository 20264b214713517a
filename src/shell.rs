//! Boundary to the post-journey application.
//!
//! The shell's views and navigation are opaque here. The engine only mounts it, pushes an
//! activation contract when that contract changes, and unmounts it on teardown.

use std::{cell::RefCell, rc::Rc};

use crate::{
    foundation::core::PointerEvents,
    phase::controller::{JourneyPhase, LayerState},
};

/// Everything the shell is told. There is no channel back.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct RevealContract {
    /// `true` only once the phase is `Reveal`.
    pub is_active: bool,
    /// Shell layer opacity.
    pub opacity: f64,
    /// Shell layer pointer interaction.
    pub pointer_events: PointerEvents,
}

impl RevealContract {
    /// Derive the contract from the phase and the reveal layer state.
    pub fn new(phase: JourneyPhase, layer: LayerState) -> Self {
        Self {
            is_active: phase == JourneyPhase::Reveal,
            opacity: layer.opacity,
            pointer_events: layer.pointer_events,
        }
    }
}

/// Host-side reveal application.
pub trait RevealShell {
    /// Put the shell into the render tree.
    fn mount(&mut self);
    /// Apply a new contract.
    fn update(&mut self, contract: RevealContract);
    /// Remove the shell from the render tree.
    fn unmount(&mut self);
}

/// Shell that ignores every call.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullShell;

impl RevealShell for NullShell {
    fn mount(&mut self) {}
    fn update(&mut self, _contract: RevealContract) {}
    fn unmount(&mut self) {}
}

/// One call observed by [`RecordingShell`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShellCall {
    /// `mount`
    Mount,
    /// `update`
    Update(RevealContract),
    /// `unmount`
    Unmount,
}

/// Shell that records calls. Clones share the log.
#[derive(Clone, Debug, Default)]
pub struct RecordingShell {
    calls: Rc<RefCell<Vec<ShellCall>>>,
}

impl RecordingShell {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the calls so far.
    pub fn calls(&self) -> Vec<ShellCall> {
        self.calls.borrow().clone()
    }
}

impl RevealShell for RecordingShell {
    fn mount(&mut self) {
        self.calls.borrow_mut().push(ShellCall::Mount);
    }

    fn update(&mut self, contract: RevealContract) {
        self.calls.borrow_mut().push(ShellCall::Update(contract));
    }

    fn unmount(&mut self) {
        self.calls.borrow_mut().push(ShellCall::Unmount);
    }
}

/// Keeps a [`RevealShell`] in step with the reveal layer, forwarding only changes.
pub struct ShellAdapter {
    shell: Box<dyn RevealShell>,
    mounted: bool,
    last: Option<RevealContract>,
}

impl std::fmt::Debug for ShellAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShellAdapter")
            .field("mounted", &self.mounted)
            .field("last", &self.last)
            .finish_non_exhaustive()
    }
}

impl ShellAdapter {
    /// Wrap `shell`. Nothing is mounted yet.
    pub fn new(shell: Box<dyn RevealShell>) -> Self {
        Self {
            shell,
            mounted: false,
            last: None,
        }
    }

    /// Whether the shell is currently mounted.
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Mount, update or unmount to match `layer`. Returns the live contract while mounted.
    pub fn sync(&mut self, phase: JourneyPhase, layer: LayerState) -> Option<RevealContract> {
        if !layer.mounted {
            self.teardown();
            return None;
        }
        if !self.mounted {
            self.shell.mount();
            self.mounted = true;
            tracing::debug!(?phase, "reveal shell mounted");
        }
        let contract = RevealContract::new(phase, layer);
        if self.last != Some(contract) {
            self.shell.update(contract);
            self.last = Some(contract);
        }
        Some(contract)
    }

    /// Unmount if mounted.
    pub fn teardown(&mut self) {
        if self.mounted {
            self.shell.unmount();
            self.mounted = false;
            self.last = None;
        }
    }
}
