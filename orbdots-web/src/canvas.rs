/// OffscreenCanvas 2D backend for the core `DrawSurface` trait
use std::f64::consts::TAU;

use orbdots_core::DrawSurface;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{OffscreenCanvas, OffscreenCanvasRenderingContext2d};

/// Edge length of the pre-rendered particle sprite, in physical pixels.
const SPRITE_SIZE: u32 = 10;

const PARTICLE_COLOR: &str = "#ffffff";

/// Drawing surface bound to a transferred `OffscreenCanvas`.
///
/// The particle sprite is rasterized once at construction; globe
/// particles are stamped from it with `drawImage` instead of tracing an
/// arc per particle per frame.
pub struct CanvasSurface {
    canvas: OffscreenCanvas,
    context: OffscreenCanvasRenderingContext2d,
    sprite: OffscreenCanvas,
}

impl CanvasSurface {
    pub fn new(canvas: OffscreenCanvas) -> Result<Self, JsValue> {
        let context = context_2d(&canvas)?;
        context.set_fill_style_str(PARTICLE_COLOR);
        let sprite = build_sprite()?;
        Ok(Self {
            canvas,
            context,
            sprite,
        })
    }

    /// Logical dimensions the canvas arrived with.
    pub fn initial_size(&self) -> (f64, f64) {
        (self.canvas.width() as f64, self.canvas.height() as f64)
    }
}

impl DrawSurface for CanvasSurface {
    fn clear(&mut self, width: f64, height: f64) {
        self.context.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.context.fill_rect(x, y, width, height);
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64) {
        self.context.begin_path();
        // Non-finite arguments make arc() a silent no-op, which is the
        // degenerate-viewport behavior we want.
        if self.context.arc(x, y, radius, 0.0, TAU).is_ok() {
            self.context.fill();
        }
    }

    fn draw_sprite(&mut self, x: f64, y: f64, size: f64) {
        let _ = self
            .context
            .draw_image_with_offscreen_canvas_and_dw_and_dh(&self.sprite, x, y, size, size);
    }

    fn set_alpha(&mut self, alpha: f64) {
        // The context rejects out-of-range values silently; clamping
        // keeps the depth fade visible instead of frozen at the last
        // accepted alpha.
        self.context.set_global_alpha(alpha.clamp(0.0, 1.0));
    }

    fn draw_text(&mut self, text: &str, x: f64, y: f64) {
        let _ = self.context.fill_text(text, x, y);
    }

    fn resize(&mut self, width: f64, height: f64, scale: f64) {
        if scale > 1.0 {
            self.canvas.set_width((width * scale) as u32);
            self.canvas.set_height((height * scale) as u32);
            // Keep drawing coordinates logical while the buffer is
            // density-scaled.
            let _ = self.context.set_transform(scale, 0.0, 0.0, scale, 0.0, 0.0);
        } else {
            self.canvas.set_width(width as u32);
            self.canvas.set_height(height as u32);
            let _ = self.context.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
        }
        // Resizing the buffer resets context state.
        self.context.set_fill_style_str(PARTICLE_COLOR);
    }
}

fn context_2d(canvas: &OffscreenCanvas) -> Result<OffscreenCanvasRenderingContext2d, JsValue> {
    canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into::<OffscreenCanvasRenderingContext2d>()
        .map_err(|_| JsValue::from_str("unexpected 2d context type"))
}

fn build_sprite() -> Result<OffscreenCanvas, JsValue> {
    let sprite = OffscreenCanvas::new(SPRITE_SIZE, SPRITE_SIZE)?;
    let context = context_2d(&sprite)?;
    let center = SPRITE_SIZE as f64 / 2.0;
    context.set_fill_style_str(PARTICLE_COLOR);
    context.begin_path();
    context.arc(center, center, center, 0.0, TAU)?;
    context.fill();
    Ok(sprite)
}
