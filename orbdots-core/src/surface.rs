/// Drawing-surface abstraction between scene logic and a backend
///
/// The scene and its render objects draw through this trait; the web
/// crate implements it over an `OffscreenCanvas` 2D context, and tests
/// use a recording double.
pub trait DrawSurface {
    /// Clear the full logical drawing area.
    fn clear(&mut self, width: f64, height: f64);

    /// Fill an axis-aligned rectangle.
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    /// Fill a circle of the given radius centered at (x, y).
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64);

    /// Stamp the surface's pre-rendered particle sprite at (x, y),
    /// scaled to `size` pixels square.
    fn draw_sprite(&mut self, x: f64, y: f64, size: f64);

    /// Set the global alpha applied to subsequent drawing.
    ///
    /// The value persists until the next call: draws later in a frame
    /// inherit the alpha left by earlier ones. That ordering dependency
    /// is part of the rendering contract, not an accident.
    fn set_alpha(&mut self, alpha: f64);

    /// Draw overlay text at a fixed logical position.
    fn draw_text(&mut self, text: &str, x: f64, y: f64);

    /// Resize the physical buffer for new logical dimensions.
    ///
    /// When `scale > 1` the buffer becomes `logical * scale` with a
    /// matching coordinate transform, so drawing coordinates stay
    /// logical; otherwise the buffer takes the logical size directly.
    fn resize(&mut self, width: f64, height: f64, scale: f64);
}

/// Test double that records every drawing call.
#[cfg(test)]
pub(crate) mod recording {
    use super::DrawSurface;

    #[derive(Debug, Clone, PartialEq)]
    pub enum Op {
        Clear { width: f64, height: f64 },
        FillRect { x: f64, y: f64, width: f64, height: f64 },
        FillCircle { x: f64, y: f64, radius: f64 },
        DrawSprite { x: f64, y: f64, size: f64 },
        SetAlpha { alpha: f64 },
        DrawText { text: String, x: f64, y: f64 },
        Resize { width: f64, height: f64, scale: f64 },
    }

    #[derive(Debug, Default)]
    pub struct RecordingSurface {
        pub ops: Vec<Op>,
        pub alpha: f64,
    }

    impl RecordingSurface {
        pub fn new() -> Self {
            Self {
                ops: Vec::new(),
                alpha: 1.0,
            }
        }

        /// Physical buffer size implied by the last resize, if any.
        pub fn buffer_size(&self) -> Option<(f64, f64)> {
            self.ops.iter().rev().find_map(|op| match op {
                Op::Resize { width, height, scale } => {
                    let factor = if *scale > 1.0 { *scale } else { 1.0 };
                    Some((width * factor, height * factor))
                }
                _ => None,
            })
        }
    }

    impl DrawSurface for RecordingSurface {
        fn clear(&mut self, width: f64, height: f64) {
            self.ops.push(Op::Clear { width, height });
        }

        fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
            self.ops.push(Op::FillRect { x, y, width, height });
        }

        fn fill_circle(&mut self, x: f64, y: f64, radius: f64) {
            self.ops.push(Op::FillCircle { x, y, radius });
        }

        fn draw_sprite(&mut self, x: f64, y: f64, size: f64) {
            self.ops.push(Op::DrawSprite { x, y, size });
        }

        fn set_alpha(&mut self, alpha: f64) {
            self.alpha = alpha;
            self.ops.push(Op::SetAlpha { alpha });
        }

        fn draw_text(&mut self, text: &str, x: f64, y: f64) {
            self.ops.push(Op::DrawText {
                text: text.to_string(),
                x,
                y,
            });
        }

        fn resize(&mut self, width: f64, height: f64, scale: f64) {
            self.ops.push(Op::Resize { width, height, scale });
        }
    }
}
