//! One-shot timer seam and the driver that keeps a [`Typewriter`] ticking.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::typewriter::{Typewriter, TypewriterSnapshot};

/// Dropping the returned handle cancels the callback if it has not run.
pub trait Scheduler {
    type Handle;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub snapshot: TypewriterSnapshot,
    pub text: String,
}

impl Frame {
    fn of(typewriter: &Typewriter) -> Self {
        Self {
            snapshot: typewriter.snapshot(),
            text: typewriter.display().to_string(),
        }
    }
}

struct RotationState<S: Scheduler> {
    typewriter: Typewriter,
    scheduler: S,
    pending: Option<S::Handle>,
}

/// Re-arms a one-shot timer after every tick with the delay the typewriter
/// asks for.
pub struct Rotation<S: Scheduler + 'static> {
    state: Rc<RefCell<RotationState<S>>>,
    alive: Rc<Cell<bool>>,
}

impl<S: Scheduler + 'static> Rotation<S> {
    pub fn start<F>(typewriter: Typewriter, scheduler: S, on_frame: F) -> Self
    where
        F: Fn(Frame) + 'static,
    {
        let first_delay = typewriter.speed_ms();
        let state = Rc::new(RefCell::new(RotationState {
            typewriter,
            scheduler,
            pending: None,
        }));
        let alive = Rc::new(Cell::new(true));
        let on_frame: Rc<dyn Fn(Frame)> = Rc::new(on_frame);

        arm(&state, &alive, &on_frame, first_delay);

        Self { state, alive }
    }

    pub fn frame(&self) -> Frame {
        Frame::of(&self.state.borrow().typewriter)
    }

    pub fn is_running(&self) -> bool {
        self.alive.get()
    }

    pub fn has_pending_timer(&self) -> bool {
        self.state.borrow().pending.is_some()
    }

    /// Cancels the pending timer. Safe to call more than once.
    pub fn stop(&mut self) {
        if self.alive.replace(false) {
            let pending = self.state.borrow_mut().pending.take();
            drop(pending);
        }
    }
}

impl<S: Scheduler + 'static> Drop for Rotation<S> {
    fn drop(&mut self) {
        self.stop();
    }
}

fn arm<S: Scheduler + 'static>(
    state: &Rc<RefCell<RotationState<S>>>,
    alive: &Rc<Cell<bool>>,
    on_frame: &Rc<dyn Fn(Frame)>,
    delay_ms: u32,
) {
    if !alive.get() {
        return;
    }

    let weak_state = Rc::downgrade(state);
    let token = Rc::clone(alive);
    let on_frame_handle = Rc::clone(on_frame);

    let callback: Box<dyn FnOnce()> = Box::new(move || {
        if !token.get() {
            return;
        }
        let Some(state) = weak_state.upgrade() else {
            return;
        };

        let (frame, next_delay, fired) = {
            let mut current = state.borrow_mut();
            let fired = current.pending.take();
            let next_delay = current.typewriter.tick();
            (Frame::of(&current.typewriter), next_delay, fired)
        };
        drop(fired);

        on_frame_handle(frame);
        arm(&state, &token, &on_frame_handle, next_delay);
    });

    let handle = state.borrow().scheduler.schedule(delay_ms, callback);
    state.borrow_mut().pending = Some(handle);
}
