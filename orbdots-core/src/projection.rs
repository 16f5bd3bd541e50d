/// Spherical coordinates and perspective projection
use nalgebra::Point3;

/// Perspective distance as a fraction of viewport width.
const PERSPECTIVE_FACTOR: f64 = 0.8;

/// Orbit radius as a fraction of viewport width, shared by all orbiting
/// variants.
pub fn orbit_radius(width: f64) -> f64 {
    width / 4.0
}

/// A 3D point on a sphere, prior to projection.
#[derive(Debug, Clone, Copy)]
pub struct SpherePoint(pub Point3<f64>);

impl SpherePoint {
    /// Point on a sphere of the given radius.
    ///
    /// Depth is carried in `z`, so advancing `theta` rotates the point
    /// about the vertical axis and sweeps it through the depth range
    /// `[-radius, radius]`.
    pub fn from_angles(theta: f64, phi: f64, radius: f64) -> Self {
        let x = radius * phi.sin() * theta.cos();
        let y = radius * phi.cos();
        let z = radius * phi.sin() * theta.sin();
        Self(Point3::new(x, y, z))
    }
}

/// A sphere point mapped to screen space.
#[derive(Debug, Clone, Copy)]
pub struct Projected {
    pub x: f64,
    pub y: f64,
    /// Depth-derived size factor: `perspective / (perspective + z)`.
    pub scale: f64,
}

/// Project a sphere point onto the screen.
///
/// `perspective = 0.8 * width`; points nearer the viewer (negative `z`)
/// scale up, points farther away scale down. A zero-width viewport
/// produces NaN coordinates, which propagate silently.
pub fn project(point: SpherePoint, width: f64, center_x: f64, center_y: f64) -> Projected {
    let perspective = PERSPECTIVE_FACTOR * width;
    let scale = perspective / (perspective + point.0.z);
    Projected {
        x: point.0.x * scale + center_x,
        y: point.0.y * scale + center_y,
        scale,
    }
}

/// Depth-fade alpha: `|1 - z/width|`.
///
/// Not clamped here; the drawing surface clamps to the valid alpha range.
pub fn depth_alpha(z: f64, width: f64) -> f64 {
    (1.0 - z / width).abs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_sphere_point_radius_preserved() {
        let p = SpherePoint::from_angles(1.3, 0.7, 100.0);
        let norm = (p.0.x * p.0.x + p.0.y * p.0.y + p.0.z * p.0.z).sqrt();
        assert!((norm - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_projection_is_finite_for_positive_width() {
        let p = SpherePoint::from_angles(PI / 3.0, PI / 5.0, 100.0);
        let projected = project(p, 400.0, 200.0, 150.0);
        assert!(projected.x.is_finite());
        assert!(projected.y.is_finite());
        assert!(projected.scale.is_finite());
    }

    #[test]
    fn test_near_points_scale_up_far_points_down() {
        let radius = orbit_radius(400.0);
        // theta = 3π/2 puts the point at z = -radius (near the viewer).
        let near = project(
            SpherePoint::from_angles(1.5 * PI, PI / 2.0, radius),
            400.0,
            200.0,
            150.0,
        );
        // theta = π/2 puts it at z = +radius (far side).
        let far = project(
            SpherePoint::from_angles(0.5 * PI, PI / 2.0, radius),
            400.0,
            200.0,
            150.0,
        );
        assert!(near.scale > 1.0);
        assert!(far.scale < 1.0);
    }

    #[test]
    fn test_depth_alpha_fades_with_distance() {
        assert!((depth_alpha(0.0, 400.0) - 1.0).abs() < 1e-12);
        assert!((depth_alpha(100.0, 400.0) - 0.75).abs() < 1e-12);
        // Negative depth reflects through the abs.
        assert!((depth_alpha(-100.0, 400.0) - 1.25).abs() < 1e-12);
    }

    #[test]
    fn test_zero_width_degenerates_without_panicking() {
        let p = SpherePoint::from_angles(0.0, PI / 2.0, orbit_radius(0.0));
        let projected = project(p, 0.0, 0.0, 0.0);
        // 0/0 is NaN; tolerated by contract, never a panic.
        assert!(projected.scale.is_nan());
    }
}
