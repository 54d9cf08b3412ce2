use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// What a frame step wants next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

struct LoopState {
    callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
    pending: Cell<Option<i32>>,
}

impl LoopState {
    fn schedule(&self) {
        if self.pending.get().is_some() {
            return;
        }
        let callback = self.callback.borrow();
        let (Some(w), Some(cb)) = (web::window(), callback.as_ref()) else {
            return;
        };
        match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => self.pending.set(Some(id)),
            Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
        }
    }
}

/// A `requestAnimationFrame` loop with an explicit start/stop contract.
///
/// The step runs once per displayed frame until it returns [`Flow::Stop`] or
/// [`FrameLoop::stop`] is called; [`FrameLoop::start`] resumes it. Dropping
/// the handle cancels any pending frame.
pub struct FrameLoop {
    state: Rc<LoopState>,
}

impl FrameLoop {
    pub fn new(mut step: impl FnMut(f64) -> Flow + 'static) -> Self {
        let state = Rc::new(LoopState {
            callback: RefCell::new(None),
            pending: Cell::new(None),
        });
        let weak = Rc::downgrade(&state);
        let tick = Closure::wrap(Box::new(move |timestamp_ms: f64| {
            let Some(state) = weak.upgrade() else {
                return;
            };
            state.pending.set(None);
            if step(timestamp_ms) == Flow::Continue {
                state.schedule();
            }
        }) as Box<dyn FnMut(f64)>);
        *state.callback.borrow_mut() = Some(tick);
        Self { state }
    }

    pub fn start(&self) {
        self.state.schedule();
    }

    /// A frame is scheduled and has not run yet.
    pub fn is_running(&self) -> bool {
        self.state.pending.get().is_some()
    }

    pub fn stop(&self) {
        if let Some(id) = self.state.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}
