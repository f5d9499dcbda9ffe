//! Locomotion force, damping, and velocity clamping.
//!
//! Runs once per tick after contact dispatch and intent application, in a
//! fixed internal order: drive force, idle damping, seam suppression, then
//! the clamps. Damping must precede the cap clamp, and every velocity write
//! must be final before the ground watch runs, or the watchdog could arm
//! against a velocity this tick has not finished producing.

use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::components::player::{Facing, Phase, Player};
use crate::physics::PhysicsWorldRes;
use crate::resources::tuning::MovementTuning;
use crate::systems::probe::probe_beneath;

pub fn locomotion(
    players: Query<&Player>,
    mut physics: ResMut<PhysicsWorldRes>,
    tuning: Res<MovementTuning>,
) {
    for player in players.iter() {
        let body = player.body;

        // Continuous drive force while a locomotion intent is active. The
        // force applies in any phase; only the cap below differs.
        if player.moving {
            let drive = match player.facing {
                Facing::Right => tuning.move_force,
                Facing::Left => -tuning.move_force,
            };
            physics.0.apply_force(body, Vec2::new(drive, 0.0));
        }

        let position = physics.0.position(body);
        let mut velocity = physics.0.velocity(body);

        // Glide to a stop instead of halting instantly.
        if player.phase == Phase::Grounded && !player.moving && velocity.x != 0.0 {
            velocity.x *= tuning.damping_factor;
        }

        // Walking across tile seams must not kick the player airborne.
        if player.phase == Phase::Grounded
            && player.moving
            && probe_beneath(physics.0.as_ref(), position, tuning.player_radius).is_some()
        {
            velocity.y = 0.0;
        }

        // Horizontal cap per phase, downward cap to keep falls bounded.
        let cap = tuning.horizontal_cap(player.phase.is_airborne());
        velocity.x = velocity.x.clamp(-cap, cap);
        if velocity.y < -(tuning.max_velocity * tuning.fall_cap_trigger) {
            velocity.y = -(tuning.max_velocity * tuning.fall_cap_reset);
        }

        physics.0.set_velocity(body, velocity);
    }
}
