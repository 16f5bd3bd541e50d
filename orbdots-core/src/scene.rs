/// Scene driver: object collection, frame tick, resize propagation
use rand::Rng;
use tracing::{debug, info, warn};

use crate::render_object::{RenderObject, RenderObjectKind};
use crate::surface::DrawSurface;
use crate::timing::FrameClock;
use crate::viewport::Viewport;

/// Logical position of the fps overlay.
const FPS_OVERLAY_X: f64 = 10.0;
const FPS_OVERLAY_Y: f64 = 20.0;

/// Owns the drawing surface, the render-object collection, and frame
/// timing. One scene per worker; created on INIT, driven by the
/// animation-frame loop.
///
/// Insertion order is draw order. Objects that mutate surface alpha
/// affect everything drawn after them in the same frame.
pub struct Scene<S: DrawSurface> {
    surface: S,
    objects: Vec<RenderObject>,
    viewport: Viewport,
    object_count: usize,
    kind: RenderObjectKind,
    clock: FrameClock,
}

impl<S: DrawSurface> Scene<S> {
    pub fn new(surface: S, viewport: Viewport, object_count: usize, kind: RenderObjectKind) -> Self {
        if let Err(err) = viewport.validate() {
            // Tolerated: projections degenerate to NaN but the loop
            // keeps running.
            warn!(%err, "scene created with degenerate viewport");
        }
        info!(
            width = viewport.width,
            height = viewport.height,
            object_count,
            "scene created"
        );
        Self {
            surface,
            objects: Vec::new(),
            viewport,
            object_count,
            kind,
            clock: FrameClock::new(),
        }
    }

    /// Repopulate the collection with freshly spawned objects.
    ///
    /// The only path that replaces objects; resize never does.
    pub fn initialize(&mut self, rng: &mut impl Rng) {
        self.objects.clear();
        self.objects.reserve(self.object_count);
        for _ in 0..self.object_count {
            self.objects
                .push(RenderObject::spawn(self.kind, &self.viewport, rng));
        }
        debug!(count = self.objects.len(), "scene initialized");
    }

    /// One frame: update all, clear, draw all in order, fps overlay.
    ///
    /// `now_ms` is the timestamp handed to the animation-frame callback.
    pub fn tick(&mut self, now_ms: f64) {
        let fps = self.clock.tick(now_ms);

        for object in &mut self.objects {
            object.update();
        }

        self.surface.clear(self.viewport.width, self.viewport.height);
        for object in &mut self.objects {
            object.draw(&mut self.surface);
        }

        self.surface
            .draw_text(&format!("fps: {}", fps), FPS_OVERLAY_X, FPS_OVERLAY_Y);
    }

    /// Propagate a viewport resize.
    ///
    /// Updates the stored viewport, resizes the physical buffer (scaled
    /// by `pixel_density` when above 1), and repositions every existing
    /// object in place.
    pub fn resize(&mut self, new_height: f64, new_width: f64, pixel_density: f64, rng: &mut impl Rng) {
        self.viewport = Viewport {
            width: new_width,
            height: new_height,
            scale: pixel_density,
        };
        if let Err(err) = self.viewport.validate() {
            warn!(%err, "resize to degenerate viewport");
        }

        self.surface.resize(new_width, new_height, pixel_density);

        for object in &mut self.objects {
            object.resize_update(new_height, new_width, rng);
        }
        debug!(
            width = new_width,
            height = new_height,
            pixel_density,
            "scene resized"
        );
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    pub fn fps(&self) -> u32 {
        self.clock.fps()
    }

    #[cfg(test)]
    pub(crate) fn surface(&self) -> &S {
        &self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::recording::{Op, RecordingSurface};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn scene(count: usize, kind: RenderObjectKind) -> (Scene<RecordingSurface>, StdRng) {
        let scene = Scene::new(
            RecordingSurface::new(),
            Viewport::new(400.0, 300.0),
            count,
            kind,
        );
        (scene, StdRng::seed_from_u64(42))
    }

    #[test]
    fn test_initialize_populates_to_target_count() {
        let (mut scene, mut rng) = scene(25, RenderObjectKind::GlobeDot);
        assert_eq!(scene.object_count(), 0);
        scene.initialize(&mut rng);
        assert_eq!(scene.object_count(), 25);
        // Re-initializing replaces wholesale, not additively.
        scene.initialize(&mut rng);
        assert_eq!(scene.object_count(), 25);
    }

    #[test]
    fn test_tick_orders_clear_draw_overlay() {
        let (mut scene, mut rng) = scene(3, RenderObjectKind::Dot);
        scene.initialize(&mut rng);
        scene.tick(0.0);

        let ops = &scene.surface().ops;
        assert!(
            matches!(ops[0], Op::Clear { width, height } if width == 400.0 && height == 300.0)
        );
        let rects = ops
            .iter()
            .filter(|op| matches!(op, Op::FillRect { .. }))
            .count();
        assert_eq!(rects, 3);
        assert!(matches!(ops.last(), Some(Op::DrawText { .. })));
    }

    #[test]
    fn test_fps_computed_from_tick_delta() {
        let (mut scene, mut rng) = scene(0, RenderObjectKind::Dot);
        scene.initialize(&mut rng);
        scene.tick(0.0);
        scene.tick(16.0);
        assert_eq!(scene.fps(), 62);
        assert!(scene
            .surface()
            .ops
            .iter()
            .any(|op| matches!(op, Op::DrawText { text, .. } if text == "fps: 62")));
    }

    #[test]
    fn test_resize_is_idempotent_on_viewport_state() {
        let (mut scene, mut rng) = scene(10, RenderObjectKind::CircleDot);
        scene.initialize(&mut rng);

        scene.resize(600.0, 800.0, 1.0, &mut rng);
        let first = scene.viewport();
        let count = scene.object_count();

        scene.resize(600.0, 800.0, 1.0, &mut rng);
        assert_eq!(scene.viewport(), first);
        assert_eq!(scene.object_count(), count);
    }

    #[test]
    fn test_resize_scales_physical_buffer_by_pixel_density() {
        let (mut scene, mut rng) = scene(0, RenderObjectKind::Dot);
        scene.resize(300.0, 400.0, 2.0, &mut rng);
        assert_eq!(scene.surface().buffer_size(), Some((800.0, 600.0)));
        assert_eq!(scene.viewport().scale, 2.0);
    }

    #[test]
    fn test_degenerate_resize_is_tolerated() {
        let (mut scene, mut rng) = scene(5, RenderObjectKind::GlobeDot);
        scene.initialize(&mut rng);
        scene.resize(0.0, 0.0, 1.0, &mut rng);
        // Still ticks; NaN geometry is a visual artifact, not a fault.
        scene.tick(0.0);
        scene.tick(16.0);
        assert_eq!(scene.object_count(), 5);
    }

    #[test]
    fn test_alpha_from_earlier_draw_reaches_later_draws() {
        let (mut scene, mut rng) = scene(2, RenderObjectKind::GlobeDot);
        scene.initialize(&mut rng);
        scene.tick(0.0);

        // Each globe draw sets alpha then stamps its sprite; the second
        // object's stamp happens under whatever alpha it set itself, but
        // the overlay text at the end inherits the last object's alpha.
        let ops = &scene.surface().ops;
        let last_alpha_idx = ops
            .iter()
            .rposition(|op| matches!(op, Op::SetAlpha { .. }))
            .unwrap();
        let text_idx = ops
            .iter()
            .rposition(|op| matches!(op, Op::DrawText { .. }))
            .unwrap();
        assert!(last_alpha_idx < text_idx);
        assert_ne!(scene.surface().alpha, 1.0);
    }
}
