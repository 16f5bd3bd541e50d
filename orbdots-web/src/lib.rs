#![cfg(target_arch = "wasm32")]

/// orbdots Web - worker-side driver for the particle visualization
///
/// Runs inside a dedicated worker: the host page transfers an
/// `OffscreenCanvas` via an INIT message, then START begins a
/// `requestAnimationFrame` loop that ticks the core scene once per
/// display refresh. RESIZE messages propagate viewport changes without
/// recreating the scene.
pub mod canvas;
pub mod message;

mod worker;

pub use canvas::CanvasSurface;
pub use message::WorkerMessage;
pub use worker::FrameLoop;

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{error, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::MessageEvent;

use orbdots_core::{RenderObjectKind, Scene, SceneError, Viewport};
use worker::worker_scope;

pub(crate) type SceneSlot = Rc<RefCell<Option<Scene<CanvasSurface>>>>;

/// Boundary state: one optional scene handle plus the frame loop.
///
/// Held by the message-handler closure rather than a module-level
/// global, so every operation reaches the scene through this handle.
struct WorkerState {
    scene: SceneSlot,
    frame_loop: FrameLoop,
}

impl WorkerState {
    fn new() -> Self {
        let scene: SceneSlot = Rc::new(RefCell::new(None));
        let frame_loop = FrameLoop::new(Rc::clone(&scene));
        Self { scene, frame_loop }
    }

    fn handle(&self, event: &MessageEvent) {
        match WorkerMessage::from_event_data(&event.data()) {
            Ok(WorkerMessage::Init {
                canvas,
                render_object_count,
            }) => self.init(canvas, render_object_count),
            Ok(WorkerMessage::Start) => self.start(),
            Ok(WorkerMessage::Resize {
                inner_height,
                inner_width,
                device_pixel_ratio,
            }) => self.resize(inner_height, inner_width, device_pixel_ratio),
            Err(err) => warn!(?err, "ignoring undecodable message"),
        }
    }

    fn init(&self, canvas: web_sys::OffscreenCanvas, render_object_count: usize) {
        let surface = match CanvasSurface::new(canvas) {
            Ok(surface) => surface,
            Err(err) => {
                error!(?err, "failed to acquire canvas context");
                return;
            }
        };
        let (width, height) = surface.initial_size();
        let scene = Scene::new(
            surface,
            Viewport::new(width, height),
            render_object_count,
            RenderObjectKind::GlobeDot,
        );
        *self.scene.borrow_mut() = Some(scene);
    }

    fn start(&self) {
        let mut slot = self.scene.borrow_mut();
        let Some(scene) = slot.as_mut() else {
            warn!(error = %SceneError::Uninitialized, "START ignored");
            return;
        };
        scene.initialize(&mut rand::thread_rng());
        drop(slot);

        // A second START restarts the loop rather than double-arming it.
        self.frame_loop.stop();
        if let Err(err) = self.frame_loop.start() {
            error!(?err, "failed to start frame loop");
        }
    }

    fn resize(&self, inner_height: f64, inner_width: f64, device_pixel_ratio: f64) {
        let mut slot = self.scene.borrow_mut();
        let Some(scene) = slot.as_mut() else {
            warn!(error = %SceneError::Uninitialized, "RESIZE ignored");
            return;
        };
        scene.resize(
            inner_height,
            inner_width,
            device_pixel_ratio,
            &mut rand::thread_rng(),
        );
    }
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    let state = WorkerState::new();
    let scope = worker_scope()?;
    let handler =
        Closure::<dyn FnMut(MessageEvent)>::new(move |event: MessageEvent| state.handle(&event));
    scope.set_onmessage(Some(handler.as_ref().unchecked_ref()));
    // The handler lives for the worker's lifetime.
    handler.forget();
    Ok(())
}
