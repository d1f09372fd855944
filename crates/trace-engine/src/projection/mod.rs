// projection/mod.rs
//
// Maps raw pointer positions into path-space.
// The recognizer only sees the `Projector` trait; how a position lands on the
// tracing surface is the renderer's business. Two adapters cover the common
// setups: a flat board under an orthographic view, and a plane in a 3D scene.

pub mod plane;
pub mod viewport;

use glam::{Vec2, Vec3};

pub use plane::PlaneProjector;
pub use viewport::ViewportProjector;

/// Maps a raw input-device position onto the tracing surface.
///
/// `None` means the position does not correspond to any point on the surface.
/// A returned point must be comparable by Euclidean distance with checkpoint
/// positions of the path being traced.
pub trait Projector {
    fn project(&self, raw: Vec2) -> Option<Vec3>;
}

impl<F> Projector for F
where
    F: Fn(Vec2) -> Option<Vec3>,
{
    fn project(&self, raw: Vec2) -> Option<Vec3> {
        self(raw)
    }
}

/// Passes raw positions straight through onto z = 0.
/// For callers that already deliver path-space coordinates.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityProjector;

impl Projector for IdentityProjector {
    fn project(&self, raw: Vec2) -> Option<Vec3> {
        Some(raw.extend(0.0))
    }
}

/// Convert a pixel position inside a viewport to normalized device coordinates
/// (x right, y up, both in [-1, 1]). Returns `None` outside the viewport.
pub(crate) fn pixel_to_ndc(raw: Vec2, viewport: Vec2) -> Option<Vec2> {
    if viewport.x <= 0.0 || viewport.y <= 0.0 {
        return None;
    }
    if raw.x < 0.0 || raw.y < 0.0 || raw.x > viewport.x || raw.y > viewport.y {
        return None;
    }
    Some(Vec2::new(
        (raw.x / viewport.x) * 2.0 - 1.0,
        -(raw.y / viewport.y) * 2.0 + 1.0,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_projectors() {
        let miss = |_: Vec2| -> Option<Vec3> { None };
        assert!(miss.project(Vec2::ZERO).is_none());

        let scaled = |p: Vec2| Some((p * 0.5).extend(1.0));
        assert_eq!(scaled.project(Vec2::new(2.0, 4.0)), Some(Vec3::new(1.0, 2.0, 1.0)));
    }

    #[test]
    fn identity_lands_on_z_zero() {
        assert_eq!(
            IdentityProjector.project(Vec2::new(0.3, -0.2)),
            Some(Vec3::new(0.3, -0.2, 0.0))
        );
    }

    #[test]
    fn ndc_corners() {
        let vp = Vec2::new(200.0, 100.0);
        assert_eq!(pixel_to_ndc(Vec2::new(0.0, 0.0), vp), Some(Vec2::new(-1.0, 1.0)));
        assert_eq!(pixel_to_ndc(Vec2::new(200.0, 100.0), vp), Some(Vec2::new(1.0, -1.0)));
        assert_eq!(pixel_to_ndc(Vec2::new(100.0, 50.0), vp), Some(Vec2::ZERO));
        assert!(pixel_to_ndc(Vec2::new(-1.0, 50.0), vp).is_none());
        assert!(pixel_to_ndc(Vec2::new(10.0, 10.0), Vec2::ZERO).is_none());
    }
}
