//! Surface probe.
//!
//! Two independent techniques classify what is directly beneath the player;
//! neither alone is reliable. The point sample answers "is there landable
//! geometry under the feet right now", which gates landings and the
//! forced-ground watchdog. The vertical ray answers "is the falling player
//! above a platform's top surface", which is what re-enables collision with
//! floating platforms — without it the player would bonk into a platform's
//! underside while jumping up through it.

use glam::Vec2;

use crate::components::surface::SurfaceKind;
use crate::physics::PhysicsEngine;

/// Sample the static geometry one radius below the player's feet.
pub fn probe_beneath(
    physics: &dyn PhysicsEngine,
    position: Vec2,
    radius: f32,
) -> Option<SurfaceKind> {
    physics.point_query(position - Vec2::new(0.0, radius))
}

/// True when a vertical ray through the player finds a surface whose top
/// edge is just below the player (within one radius). Only then may the
/// falling player start colliding with floating platforms again.
pub fn platform_ray_check(physics: &dyn PhysicsEngine, position: Vec2, radius: f32) -> bool {
    let start = position + Vec2::new(0.0, radius);
    let end = position - Vec2::new(0.0, radius);
    physics
        .ray_cast(start, end)
        .iter()
        .any(|hit| position.y > hit.top && position.y < hit.top + radius)
}
