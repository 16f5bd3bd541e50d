/// orbdots Core Library - Scene logic for the particle visualization
///
/// This library provides the platform-independent core: render-object
/// variants, spherical/perspective projection, viewport state, frame
/// timing, and the scene driver. Drawing goes through the `DrawSurface`
/// trait so the core stays testable off the browser; the companion web
/// crate implements it over an `OffscreenCanvas` 2D context.

pub mod error;
pub mod projection;
pub mod render_object;
pub mod scene;
pub mod surface;
pub mod timing;
pub mod viewport;

// Re-export commonly used types
pub use error::SceneError;
pub use render_object::{RenderObject, RenderObjectKind};
pub use scene::Scene;
pub use surface::DrawSurface;
pub use timing::FrameClock;
pub use viewport::Viewport;
