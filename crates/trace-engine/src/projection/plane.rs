use glam::{Mat4, Vec2, Vec3};

use super::{pixel_to_ndc, Projector};

const PARALLEL_EPSILON: f32 = 1e-6;

/// Casts a ray from the camera through the pointer and intersects it with a
/// bounded plane in the scene (the writing board).
///
/// `inverse_view_proj` takes clip space back to world space; its depth range
/// is [0, 1] as produced by glam's `*_rh` projections.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneProjector {
    pub inverse_view_proj: Mat4,
    /// Viewport size in pixels.
    pub viewport: Vec2,
    /// Center of the board in world space.
    pub origin: Vec3,
    /// Unit normal of the board.
    pub normal: Vec3,
    /// Unit vector along the board's width.
    pub right: Vec3,
    /// Half width / half height of the board.
    pub half_size: Vec2,
}

impl PlaneProjector {
    pub fn new(view_proj: Mat4, viewport: Vec2) -> Self {
        Self {
            inverse_view_proj: view_proj.inverse(),
            viewport,
            origin: Vec3::ZERO,
            normal: Vec3::Z,
            right: Vec3::X,
            half_size: Vec2::splat(f32::INFINITY),
        }
    }

    /// Place the board. `normal` and `right` are normalized here.
    pub fn with_board(mut self, origin: Vec3, normal: Vec3, right: Vec3, half_size: Vec2) -> Self {
        self.origin = origin;
        self.normal = normal.normalize_or_zero();
        self.right = right.normalize_or_zero();
        self.half_size = half_size;
        self
    }

    pub fn set_view_proj(&mut self, view_proj: Mat4) {
        self.inverse_view_proj = view_proj.inverse();
    }

    /// World-space ray (origin, direction) through a pixel.
    pub fn ray(&self, raw: Vec2) -> Option<(Vec3, Vec3)> {
        let ndc = pixel_to_ndc(raw, self.viewport)?;
        let near = self.inverse_view_proj.project_point3(ndc.extend(0.0));
        let far = self.inverse_view_proj.project_point3(ndc.extend(1.0));
        let dir = far - near;
        if !near.is_finite() || !dir.is_finite() || dir.length_squared() == 0.0 {
            return None;
        }
        Some((near, dir.normalize()))
    }
}

impl Projector for PlaneProjector {
    fn project(&self, raw: Vec2) -> Option<Vec3> {
        let (start, dir) = self.ray(raw)?;
        let denom = self.normal.dot(dir);
        if denom.abs() < PARALLEL_EPSILON {
            return None;
        }
        let t = self.normal.dot(self.origin - start) / denom;
        if t < 0.0 {
            return None;
        }
        let hit = start + dir * t;

        let up = self.normal.cross(self.right);
        let local = hit - self.origin;
        if local.dot(self.right).abs() > self.half_size.x || local.dot(up).abs() > self.half_size.y {
            return None;
        }
        Some(hit)
    }
}
