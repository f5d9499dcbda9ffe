//! Screen geometry and camera offsets.
//!
//! Stores the viewport size (`one_screen`), the authored level size
//! (`world`), and the offsets the render host applies to its layer nodes:
//! `camera_offset` for the world layer and `background_offset` for the
//! parallax back wall. Only the offsets change after level load; the camera
//! system recomputes them every tick.

use bevy_ecs::prelude::Resource;
use glam::Vec2;

/// Camera state for a bounded side-scrolling level.
///
/// Invariant: after [`ScreenGeometry::scroll_to`],
/// `camera_offset.x ∈ [-(world.x - one_screen.x), 0]` and the same form
/// holds for y — the visible window never leaves the authored level.
#[derive(Resource, Debug, Clone, Copy)]
pub struct ScreenGeometry {
    /// Size of one visible screen (the host viewport), in world units.
    pub one_screen: Vec2,
    /// Size of the whole authored level, in world units.
    pub world: Vec2,
    /// Offset the render host applies to the world layer.
    pub camera_offset: Vec2,
    /// Offset for the parallax background layer. Cosmetic: the parallax
    /// scaling is applied after clamping and the result is not re-clamped.
    pub background_offset: Vec2,
}

impl ScreenGeometry {
    pub fn new(one_screen: Vec2, world: Vec2) -> Self {
        Self {
            one_screen,
            world,
            camera_offset: Vec2::ZERO,
            background_offset: Vec2::ZERO,
        }
    }

    /// Recompute both offsets so `player` sits at the screen centre, clamped
    /// per axis to the level bounds. `parallax` scales the background's
    /// horizontal displacement only; the vertical offset is shared with the
    /// world layer.
    pub fn scroll_to(&mut self, player: Vec2, parallax: f32) {
        let x = Self::clamp_axis(
            self.one_screen.x * 0.5 - player.x,
            self.world.x,
            self.one_screen.x,
        );
        let y = Self::clamp_axis(
            self.one_screen.y * 0.5 - player.y,
            self.world.y,
            self.one_screen.y,
        );
        self.camera_offset = Vec2::new(x, y);
        self.background_offset = Vec2::new(x * parallax, y);
    }

    /// Keep one axis of the offset inside `[-(world - screen), 0]`. The zero
    /// bound wins when the level is smaller than the screen.
    fn clamp_axis(value: f32, world: f32, screen: f32) -> f32 {
        let mut value = value;
        if value <= -(world - screen) {
            value = -(world - screen);
        }
        if value > 0.0 {
            value = 0.0;
        }
        value
    }
}
