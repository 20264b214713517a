use std::collections::BTreeSet;

/// Opaque id of one outstanding frame request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameHandle(u64);

/// Source of one-shot "run on the next frame" callbacks.
///
/// Mirrors `requestAnimationFrame` / `cancelAnimationFrame`: a request fires at most once and a
/// cancelled request never fires.
pub trait FrameScheduler {
    /// Schedule a callback for the next frame.
    fn request_frame(&mut self) -> FrameHandle;
    /// Cancel a request. Cancelling an unknown or already fired handle is a no-op.
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Requests that came due on one frame.
#[derive(Clone, Debug, Default)]
pub struct FrameBatch {
    due: BTreeSet<FrameHandle>,
}

impl FrameBatch {
    /// Return `true` when `handle` fires on this frame.
    pub fn contains(&self, handle: FrameHandle) -> bool {
        self.due.contains(&handle)
    }

    /// Number of requests firing on this frame.
    pub fn len(&self) -> usize {
        self.due.len()
    }

    /// Return `true` when nothing fires on this frame.
    pub fn is_empty(&self) -> bool {
        self.due.is_empty()
    }
}

/// In-process [`FrameScheduler`].
///
/// The host (or a test) calls [`FrameQueue::drain`] once per display frame. Requests made
/// while handling a batch land in the next one, so a loop that re-arms itself runs exactly
/// once per frame.
#[derive(Debug, Default)]
pub struct FrameQueue {
    next_id: u64,
    pending: BTreeSet<FrameHandle>,
}

impl FrameQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of requests waiting for the next frame.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Return `true` if `handle` is still waiting.
    pub fn is_pending(&self, handle: FrameHandle) -> bool {
        self.pending.contains(&handle)
    }

    /// Take every request due on this frame.
    pub fn drain(&mut self) -> FrameBatch {
        FrameBatch {
            due: std::mem::take(&mut self.pending),
        }
    }
}

impl FrameScheduler for FrameQueue {
    fn request_frame(&mut self) -> FrameHandle {
        let handle = FrameHandle(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.pending.insert(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.pending.remove(&handle);
    }
}

/// At most one outstanding request owned by a loop.
#[derive(Debug, Default)]
pub struct FrameSlot {
    handle: Option<FrameHandle>,
}

impl FrameSlot {
    /// Return `true` while a request is outstanding.
    pub fn is_scheduled(&self) -> bool {
        self.handle.is_some()
    }

    /// Request a frame unless one is already outstanding. Returns `true` if a request was made.
    pub fn schedule(&mut self, scheduler: &mut dyn FrameScheduler) -> bool {
        if self.handle.is_some() {
            return false;
        }
        self.handle = Some(scheduler.request_frame());
        true
    }

    /// Consume the outstanding request if it fires in `batch`.
    pub fn take_if_due(&mut self, batch: &FrameBatch) -> bool {
        match self.handle {
            Some(h) if batch.contains(h) => {
                self.handle = None;
                true
            }
            _ => false,
        }
    }

    /// Cancel the outstanding request, if any.
    pub fn cancel(&mut self, scheduler: &mut dyn FrameScheduler) {
        if let Some(h) = self.handle.take() {
            scheduler.cancel_frame(h);
        }
    }
}
