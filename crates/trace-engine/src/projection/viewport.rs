use glam::{Vec2, Vec3};

use super::{pixel_to_ndc, Projector};

/// Orthographic screen-to-board projection.
///
/// The viewport (in pixels, origin top-left, y down) shows a window of
/// path-space centered on `center`. The window is fitted to the viewport
/// keeping its aspect ratio, so extra room appears on one axis. Only points
/// that fall on the board rectangle count as hits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportProjector {
    /// Viewport size in pixels.
    pub viewport: Vec2,
    /// Center of the visible window in path-space.
    pub center: Vec2,
    /// Size of the game area that must stay fully visible.
    pub world_size: Vec2,
    /// Center of the traceable board in path-space.
    pub board_center: Vec2,
    /// Half extents of the traceable board.
    pub board_half_size: Vec2,
    /// Depth of the board plane.
    pub z: f32,
}

impl ViewportProjector {
    pub fn new(viewport: Vec2, world_size: Vec2) -> Self {
        Self {
            viewport,
            center: Vec2::ZERO,
            world_size,
            board_center: Vec2::ZERO,
            board_half_size: world_size / 2.0,
            z: 0.0,
        }
    }

    pub fn with_center(mut self, center: Vec2) -> Self {
        self.center = center;
        self
    }

    pub fn with_board(mut self, center: Vec2, half_size: Vec2) -> Self {
        self.board_center = center;
        self.board_half_size = half_size;
        self
    }

    pub fn with_z(mut self, z: f32) -> Self {
        self.z = z;
        self
    }

    /// Resize the viewport (e.g. on window resize).
    pub fn resize(&mut self, viewport_width: f32, viewport_height: f32) {
        self.viewport = Vec2::new(viewport_width, viewport_height);
    }

    /// Visible window size in path-space after fitting the game area.
    pub fn visible_size(&self) -> Vec2 {
        let horiz_ratio = self.viewport.x / self.world_size.x;
        let vert_ratio = self.viewport.y / self.world_size.y;
        let scale = horiz_ratio.min(vert_ratio);
        self.viewport / scale
    }

    fn on_board(&self, p: Vec2) -> bool {
        let d = (p - self.board_center).abs();
        d.x <= self.board_half_size.x && d.y <= self.board_half_size.y
    }
}

impl Projector for ViewportProjector {
    fn project(&self, raw: Vec2) -> Option<Vec3> {
        let ndc = pixel_to_ndc(raw, self.viewport)?;
        let world = self.center + ndc * self.visible_size() / 2.0;
        if !self.on_board(world) {
            return None;
        }
        Some(world.extend(self.z))
    }
}
