/// Self-rescheduling animation-frame loop
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tracing::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::DedicatedWorkerGlobalScope;

use crate::SceneSlot;

type TickClosure = Closure<dyn FnMut(f64)>;

/// Cooperative frame loop over `requestAnimationFrame`.
///
/// Each callback runs one scene tick and re-arms itself, so pacing
/// follows the display refresh rate and the browser suspends the loop
/// while the page is hidden. `stop` clears the pending request; the
/// in-flight closure notices the flag and stops re-arming.
pub struct FrameLoop {
    scene: SceneSlot,
    running: Rc<Cell<bool>>,
    pending: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    pub fn new(scene: SceneSlot) -> Self {
        Self {
            scene,
            running: Rc::new(Cell::new(false)),
            pending: Rc::new(Cell::new(None)),
        }
    }

    /// Arm the first frame request. No-op while already running.
    pub fn start(&self) -> Result<(), JsValue> {
        if self.running.get() {
            return Ok(());
        }
        self.running.set(true);

        let slot: Rc<RefCell<Option<TickClosure>>> = Rc::new(RefCell::new(None));
        let armed = Rc::clone(&slot);
        let scene = Rc::clone(&self.scene);
        let running = Rc::clone(&self.running);
        let pending = Rc::clone(&self.pending);

        *armed.borrow_mut() = Some(Closure::new(move |now_ms: f64| {
            if !running.get() {
                // Stopped between scheduling and firing; stop re-arming.
                // The closure stays allocated until the worker is torn
                // down, like a forgotten handler.
                pending.set(None);
                return;
            }

            if let Some(scene) = scene.borrow_mut().as_mut() {
                scene.tick(now_ms);
            }

            match slot.borrow().as_ref().map(request_frame) {
                Some(Ok(id)) => pending.set(Some(id)),
                Some(Err(err)) => {
                    warn!(?err, "failed to re-arm frame loop");
                    running.set(false);
                }
                None => running.set(false),
            }
        }));

        match armed.borrow().as_ref().map(request_frame) {
            Some(Ok(id)) => {
                self.pending.set(Some(id));
                Ok(())
            }
            Some(Err(err)) => {
                self.running.set(false);
                Err(err)
            }
            None => unreachable!("tick closure installed above"),
        }
    }

    /// Cancel the pending frame request and stop re-arming.
    pub fn stop(&self) {
        self.running.set(false);
        if let Some(id) = self.pending.take() {
            if let Ok(scope) = worker_scope() {
                let _ = scope.cancel_animation_frame(id);
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }
}

fn request_frame(callback: &TickClosure) -> Result<i32, JsValue> {
    worker_scope()?.request_animation_frame(callback.as_ref().unchecked_ref())
}

/// The dedicated-worker global scope this module runs in.
pub fn worker_scope() -> Result<DedicatedWorkerGlobalScope, JsValue> {
    js_sys::global()
        .dyn_into::<DedicatedWorkerGlobalScope>()
        .map_err(|_| JsValue::from_str("not running in a dedicated worker"))
}
