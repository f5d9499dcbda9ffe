//! Touch-gesture tracking resource.
//!
//! Remembers where the current touch began so move samples can be turned
//! into a swipe direction. The decision boundary sits exactly at ±90°:
//! angles strictly inside (−90°, 90°) read as a rightward swipe, everything
//! else (including straight up and straight down) as leftward.

use bevy_ecs::prelude::Resource;
use glam::Vec2;

use crate::components::player::Facing;

/// State of the active touch gesture, if any.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct TouchTracker {
    /// Where the current touch began; `None` between touches.
    pub tap_point: Option<Vec2>,
}

/// Classify a swipe from `origin` to `current` as a horizontal direction.
pub fn swipe_direction(origin: Vec2, current: Vec2) -> Facing {
    let angle = (current.y - origin.y)
        .atan2(current.x - origin.x)
        .to_degrees();
    if angle > -90.0 && angle < 90.0 {
        Facing::Right
    } else {
        Facing::Left
    }
}
