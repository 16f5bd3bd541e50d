/// Logical drawing-area dimensions and pixel-density scale
use crate::error::SceneError;

/// The logical viewport the scene renders into.
///
/// `width`/`height` are logical (CSS-pixel) dimensions; `scale` is the
/// pixel-density factor between logical coordinates and the physical
/// buffer. The two only differ when the display reports a density above 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub scale: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            scale: 1.0,
        }
    }

    /// Check for degenerate dimensions.
    ///
    /// Non-positive dimensions produce NaN projections downstream. The
    /// scene tolerates them (animation keeps running); callers use this
    /// only to log a warning.
    pub fn validate(&self) -> Result<(), SceneError> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(SceneError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    pub fn center_x(&self) -> f64 {
        self.width / 2.0
    }

    pub fn center_y(&self) -> f64 {
        self.height / 2.0
    }
}
