/// Render-object variants and their per-frame behavior
use rand::Rng;
use std::f64::consts::TAU;

use crate::projection::{self, Projected, SpherePoint};
use crate::surface::DrawSurface;
use crate::viewport::Viewport;

/// Side length of the base square particle, in logical pixels.
const DOT_SIZE: f64 = 5.0;

/// Radius of the orbiting circle particle, in logical pixels.
const CIRCLE_DOT_RADIUS: f64 = 3.0;

/// Base radius of the perspective-scaled particles, in logical pixels.
const PROJECTED_DOT_SIZE: f64 = 5.0;

/// Per-tick angular increment for the 3D variants, in radians.
const THETA_STEP: f64 = 0.01;

/// Which render-object variant a scene is populated with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderObjectKind {
    Dot,
    CircleDot,
    SlantedCircleDot,
    GlobeDot,
}

/// One visual particle.
///
/// A closed set of variants sharing the capability set
/// `update`/`draw`/`resize_update`. The 3D variants run their projection
/// inside `draw`, so projected fields are only meaningful after a draw.
#[derive(Debug, Clone)]
pub enum RenderObject {
    Dot(Dot),
    CircleDot(CircleDot),
    SlantedCircleDot(SlantedCircleDot),
    GlobeDot(GlobeDot),
}

impl RenderObject {
    /// Construct a fresh object of the given kind, seeded against the
    /// current viewport.
    pub fn spawn(kind: RenderObjectKind, viewport: &Viewport, rng: &mut impl Rng) -> Self {
        match kind {
            RenderObjectKind::Dot => Self::Dot(Dot::new(viewport, rng)),
            RenderObjectKind::CircleDot => Self::CircleDot(CircleDot::new(viewport, rng)),
            RenderObjectKind::SlantedCircleDot => {
                Self::SlantedCircleDot(SlantedCircleDot::new(viewport, rng))
            }
            RenderObjectKind::GlobeDot => Self::GlobeDot(GlobeDot::new(viewport, rng)),
        }
    }

    /// Advance internal time-like state by one tick. Never draws.
    pub fn update(&mut self) {
        match self {
            Self::Dot(_) => {}
            Self::CircleDot(dot) => dot.update(),
            Self::SlantedCircleDot(dot) => dot.update(),
            Self::GlobeDot(dot) => dot.update(),
        }
    }

    /// Rasterize the current state onto the surface.
    pub fn draw(&mut self, surface: &mut impl DrawSurface) {
        match self {
            Self::Dot(dot) => dot.draw(surface),
            Self::CircleDot(dot) => dot.draw(surface),
            Self::SlantedCircleDot(dot) => dot.draw(surface),
            Self::GlobeDot(dot) => dot.draw(surface),
        }
    }

    /// Recompute dimension-derived fields against a new viewport and
    /// re-randomize position. The object itself survives.
    pub fn resize_update(&mut self, new_height: f64, new_width: f64, rng: &mut impl Rng) {
        match self {
            Self::Dot(dot) => dot.resize_update(new_height, new_width, rng),
            Self::CircleDot(dot) => dot.resize_update(new_height, new_width, rng),
            Self::SlantedCircleDot(dot) => dot.resize_update(new_height, new_width, rng),
            Self::GlobeDot(dot) => dot.resize_update(new_height, new_width, rng),
        }
    }
}

/// Base variant: a fixed-size square at a random position.
#[derive(Debug, Clone)]
pub struct Dot {
    pub x: f64,
    pub y: f64,
    width: f64,
    height: f64,
}

impl Dot {
    pub fn new(viewport: &Viewport, rng: &mut impl Rng) -> Self {
        // Multiplication instead of a ranged sample: a zero-sized
        // viewport then yields position 0 rather than a panic.
        Self {
            x: rng.gen::<f64>() * viewport.width,
            y: rng.gen::<f64>() * viewport.height,
            width: viewport.width,
            height: viewport.height,
        }
    }

    fn draw(&self, surface: &mut impl DrawSurface) {
        surface.fill_rect(self.x, self.y, DOT_SIZE, DOT_SIZE);
    }

    fn resize_update(&mut self, new_height: f64, new_width: f64, rng: &mut impl Rng) {
        self.width = new_width;
        self.height = new_height;
        self.x = rng.gen::<f64>() * self.width;
        self.y = rng.gen::<f64>() * self.height;
    }
}

/// Orbits the viewport center on a fixed-radius circle.
#[derive(Debug, Clone)]
pub struct CircleDot {
    /// Angle in degrees. Grows without wrapping; the trig conversion is
    /// 360-periodic so the visual orbit repeats every 360 ticks.
    pub angle: f64,
    pub x: f64,
    pub y: f64,
    width: f64,
    height: f64,
}

impl CircleDot {
    pub fn new(viewport: &Viewport, rng: &mut impl Rng) -> Self {
        Self {
            angle: rng.gen_range(0..360) as f64,
            x: 0.0,
            y: 0.0,
            width: viewport.width,
            height: viewport.height,
        }
    }

    fn update(&mut self) {
        self.angle += 1.0;
    }

    pub fn project(&mut self) {
        let radius = projection::orbit_radius(self.width);
        let rad = self.angle.to_radians();
        self.x = radius * rad.cos() + self.width / 2.0;
        self.y = radius * rad.sin() + self.height / 2.0;
    }

    fn draw(&mut self, surface: &mut impl DrawSurface) {
        self.project();
        surface.fill_circle(self.x, self.y, CIRCLE_DOT_RADIUS);
    }

    fn resize_update(&mut self, new_height: f64, new_width: f64, rng: &mut impl Rng) {
        self.width = new_width;
        self.height = new_height;
        self.angle = rng.gen_range(0..360) as f64;
    }
}

/// A tilted orbit with depth-based perspective.
#[derive(Debug, Clone)]
pub struct SlantedCircleDot {
    pub theta: f64,
    /// Inclination. The value 45 is used directly as radians, not
    /// converted from degrees; inherited behavior, kept verbatim.
    pub phi: f64,
    projected: Option<Projected>,
    width: f64,
    height: f64,
}

impl SlantedCircleDot {
    pub fn new(viewport: &Viewport, rng: &mut impl Rng) -> Self {
        Self {
            theta: rng.gen_range(0.0..TAU),
            phi: 45.0,
            projected: None,
            width: viewport.width,
            height: viewport.height,
        }
    }

    fn update(&mut self) {
        self.theta += THETA_STEP;
    }

    pub fn project(&mut self) -> (Projected, f64) {
        let point = SpherePoint::from_angles(self.theta, self.phi, projection::orbit_radius(self.width));
        // y-center is halved relative to x-center; inherited asymmetry,
        // kept verbatim (GlobeDot uses the full center).
        let projected = projection::project(
            point,
            self.width,
            self.width / 2.0,
            self.height / 4.0,
        );
        self.projected = Some(projected);
        (projected, projection::depth_alpha(point.0.z, self.width))
    }

    fn draw(&mut self, surface: &mut impl DrawSurface) {
        let (projected, alpha) = self.project();
        // Alpha persists on the surface: objects drawn after this one
        // inherit it unless they set their own.
        surface.set_alpha(alpha);
        surface.fill_circle(projected.x, projected.y, PROJECTED_DOT_SIZE * projected.scale);
    }

    fn resize_update(&mut self, new_height: f64, new_width: f64, rng: &mut impl Rng) {
        self.width = new_width;
        self.height = new_height;
        self.theta = rng.gen_range(0.0..TAU);
        self.projected = None;
    }

    pub fn projected(&self) -> Option<Projected> {
        self.projected
    }
}

/// A particle on the surface of a rotating globe.
#[derive(Debug, Clone)]
pub struct GlobeDot {
    pub theta: f64,
    /// Fixed for the object's lifetime; `acos(2U - 1)` so points are
    /// uniform over the sphere rather than bunched at the poles.
    pub phi: f64,
    projected: Option<Projected>,
    width: f64,
    height: f64,
}

impl GlobeDot {
    pub fn new(viewport: &Viewport, rng: &mut impl Rng) -> Self {
        Self {
            theta: rng.gen_range(0.0..TAU),
            phi: (2.0 * rng.gen::<f64>() - 1.0).acos(),
            projected: None,
            width: viewport.width,
            height: viewport.height,
        }
    }

    fn update(&mut self) {
        self.theta += THETA_STEP;
    }

    pub fn project(&mut self) -> (Projected, f64) {
        let point = SpherePoint::from_angles(self.theta, self.phi, projection::orbit_radius(self.width));
        let projected = projection::project(
            point,
            self.width,
            self.width / 2.0,
            self.height / 2.0,
        );
        self.projected = Some(projected);
        (projected, projection::depth_alpha(point.0.z, self.width))
    }

    fn draw(&mut self, surface: &mut impl DrawSurface) {
        let (projected, alpha) = self.project();
        surface.set_alpha(alpha);
        // Blit the pre-rendered sprite instead of stroking an arc; far
        // cheaper with thousands of particles.
        surface.draw_sprite(
            projected.x,
            projected.y,
            PROJECTED_DOT_SIZE * projected.scale,
        );
    }

    fn resize_update(&mut self, new_height: f64, new_width: f64, rng: &mut impl Rng) {
        self.width = new_width;
        self.height = new_height;
        self.theta = rng.gen_range(0.0..TAU);
        self.phi = (2.0 * rng.gen::<f64>() - 1.0).acos();
        self.projected = None;
    }

    pub fn projected(&self) -> Option<Projected> {
        self.projected
    }
}
