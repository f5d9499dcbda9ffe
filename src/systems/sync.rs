//! Mirror physics body positions into [`MapPosition`] components.
//!
//! Runs after the tick's velocity writes are final, so the camera and the
//! render host both see the same position.

use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::physics::PhysicsWorldRes;

pub fn sync_body_positions(
    mut query: Query<(&Player, &mut MapPosition)>,
    physics: Res<PhysicsWorldRes>,
) {
    for (player, mut position) in query.iter_mut() {
        position.pos = physics.0.position(player.body);
    }
}
