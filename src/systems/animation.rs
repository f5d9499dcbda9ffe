//! Animation selection.
//!
//! Derives the active animation key and playback speed from the player's
//! state each tick, after all transitions have resolved. Landing therefore
//! resumes the walk or idle animation on the same tick, whichever landing
//! path fired.

use bevy_ecs::prelude::*;

use crate::components::animation::{Animation, key_for};
use crate::components::player::Player;
use crate::physics::PhysicsWorldRes;
use crate::resources::tuning::MovementTuning;

pub fn select_player_animation(
    mut query: Query<(&Player, &mut Animation)>,
    physics: Res<PhysicsWorldRes>,
    tuning: Res<MovementTuning>,
) {
    for (player, mut animation) in query.iter_mut() {
        let key = key_for(player.phase, player.facing, player.moving);
        if animation.key != key {
            animation.key = key.to_string();
        }
        // Fast-walk motion switch.
        let vx = physics.0.velocity(player.body).x;
        animation.speed = if player.moving && vx.abs() >= tuning.fast_walk_threshold {
            tuning.fast_walk_speed
        } else {
            1.0
        };
    }
}
