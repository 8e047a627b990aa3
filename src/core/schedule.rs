use std::cell::Cell;
use std::rc::Rc;

/// One-shot timer facility (`setTimeout`/`clearTimeout` in the browser).
pub trait TimerHost {
    type Handle: Copy + PartialEq;

    fn set_timeout(&mut self, delay_ms: u32) -> Option<Self::Handle>;
    fn clear_timeout(&mut self, handle: Self::Handle);
}

/// Holds at most one pending timer handle.
///
/// `rearm` always clears the previous handle before scheduling the next one,
/// so a component driven through a slot never has two callbacks in flight.
#[derive(Debug)]
pub struct TimerSlot<H> {
    pending: Option<H>,
}

impl<H> Default for TimerSlot<H> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<H: Copy + PartialEq> TimerSlot<H> {
    pub fn rearm<T>(&mut self, host: &mut T, delay_ms: u32)
    where
        T: TimerHost<Handle = H>,
    {
        if let Some(prev) = self.pending.take() {
            host.clear_timeout(prev);
        }
        self.pending = host.set_timeout(delay_ms);
    }

    /// Called from the timer callback: the handle that just fired is spent.
    pub fn fired(&mut self) {
        self.pending = None;
    }

    pub fn cancel<T>(&mut self, host: &mut T)
    where
        T: TimerHost<Handle = H>,
    {
        if let Some(prev) = self.pending.take() {
            host.clear_timeout(prev);
        }
    }

    pub fn pending(&self) -> Option<H> {
        self.pending
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// Shared cancellation flag for a self-rescheduling loop.
///
/// Clones observe the same flag; the loop checks `is_active` before asking
/// for another frame.
#[derive(Clone, Debug)]
pub struct LoopHandle {
    active: Rc<Cell<bool>>,
    frames: Rc<Cell<u64>>,
}

impl Default for LoopHandle {
    fn default() -> Self {
        Self {
            active: Rc::new(Cell::new(true)),
            frames: Rc::new(Cell::new(0)),
        }
    }
}

impl LoopHandle {
    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    /// Returns `true` only for the call that actually stopped the loop.
    pub fn cancel(&self) -> bool {
        self.active.replace(false)
    }

    pub fn record_frame(&self) {
        self.frames.set(self.frames.get() + 1);
    }

    pub fn frames(&self) -> u64 {
        self.frames.get()
    }
}
