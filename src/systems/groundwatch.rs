//! Forced-ground watchdog and the falling transition.
//!
//! Contact callbacks can be missed for one-frame-thin geometry or when the
//! impact is too soft to register a new contact. The watchdog is the
//! correctness fallback: when the airborne player is resting on something
//! (near-zero vertical motion with landable geometry directly beneath) it
//! arms, accumulates tick time, and on reaching its limit forces the landing
//! unconditionally. A genuine contact landing simply discards the running
//! timer; the `Player::land` guard keeps the two paths from both resolving
//! in one tick.
//!
//! The same system owns the falling-threshold evaluation and the ray-probe
//! platform re-enable, which both need the tick's finalized velocity.

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::player::{CollisionProfile, Phase, Player};
use crate::events::phase::PhaseChangeEvent;
use crate::physics::{PhysicsEngine, PhysicsWorldRes};
use crate::resources::tuning::MovementTuning;
use crate::resources::worldtime::WorldTime;
use crate::systems::probe::{platform_ray_check, probe_beneath};

/// Commit a landing: phase to `Grounded`, watchdog disarmed, contact tests
/// silenced. Shared by the contact observer and the watchdog so both paths
/// produce the identical collision profile. Returns false when the player
/// already landed this tick.
pub fn resolve_landing(player: &mut Player, physics: &mut dyn PhysicsEngine) -> bool {
    if !player.land() {
        return false;
    }
    let current = physics.collision_mask(player.body);
    CollisionProfile::landed(current).apply(physics, player.body);
    true
}

pub fn groundwatch(
    mut players: Query<(Entity, &mut Player)>,
    mut physics: ResMut<PhysicsWorldRes>,
    tuning: Res<MovementTuning>,
    time: Res<WorldTime>,
    mut commands: Commands,
) {
    for (entity, mut player) in players.iter_mut() {
        let body = player.body;
        let position = physics.0.position(body);
        let velocity = physics.0.velocity(body);
        let beneath = probe_beneath(physics.0.as_ref(), position, tuning.player_radius);

        // Arm: airborne, resting, with landable geometry under the feet.
        if player.ground_timer.is_none()
            && player.phase.is_airborne()
            && velocity.y.abs() < tuning.rest_threshold
            && beneath.is_some()
        {
            debug!("forced-ground watch armed");
            player.ground_timer = Some(0.0);
        }

        // Advance; expiry forces the landing unconditionally.
        if let Some(elapsed) = player.ground_timer.as_mut() {
            *elapsed += time.delta;
        }
        if player
            .ground_timer
            .is_some_and(|elapsed| elapsed >= tuning.ground_timer_limit)
        {
            let from = player.phase;
            if resolve_landing(&mut player, physics.0.as_mut()) {
                debug!("forced-ground watch expired, landing");
                commands.trigger(PhaseChangeEvent {
                    entity,
                    from,
                    to: Phase::Grounded,
                });
            }
        }

        // Falling transition: downward velocity beyond the threshold, from
        // Grounded (walked off a ledge) or Jumping (past the apex).
        if velocity.y < tuning.fall_threshold && player.phase != Phase::Falling {
            let from = player.phase;
            player.begin_fall();
            let current = physics.0.collision_mask(body);
            CollisionProfile::fall(current).apply(physics.0.as_mut(), body);
            debug!("falling (vy={})", velocity.y);
            commands.trigger(PhaseChangeEvent {
                entity,
                from,
                to: Phase::Falling,
            });
        }

        // While falling above a platform top, platforms become solid again;
        // jumping up through them stays collision-free.
        if player.phase == Phase::Falling
            && platform_ray_check(physics.0.as_ref(), position, tuning.player_radius)
        {
            CollisionProfile::platform_top().apply(physics.0.as_mut(), body);
        }
    }
}
