//! Intent application: the input edges of the player state machine.
//!
//! Locomotion intents set `facing`/`moving` and are orthogonal to the
//! vertical phase — the drive force and its per-phase cap are handled later
//! in the tick by the locomotion system. The jump intent is the only input
//! edge that changes the phase, and only from `Grounded`; an airborne jump
//! request is ignored rather than queued.

use bevy_ecs::prelude::*;
use glam::Vec2;
use log::debug;

use crate::components::player::{CollisionProfile, Facing, Phase, Player};
use crate::events::intent::PlayerIntent;
use crate::events::phase::PhaseChangeEvent;
use crate::physics::PhysicsWorldRes;
use crate::resources::tuning::MovementTuning;

pub fn apply_player_intents(
    mut intents: MessageReader<PlayerIntent>,
    mut players: Query<(Entity, &mut Player)>,
    mut physics: ResMut<PhysicsWorldRes>,
    tuning: Res<MovementTuning>,
    mut commands: Commands,
) {
    for intent in intents.read() {
        for (entity, mut player) in players.iter_mut() {
            match *intent {
                PlayerIntent::MoveRight => player.begin_move(Facing::Right),
                PlayerIntent::MoveLeft => player.begin_move(Facing::Left),
                PlayerIntent::Stop => player.stop_moving(),
                PlayerIntent::Jump => {
                    if !player.begin_jump() {
                        continue;
                    }
                    debug!("jump");
                    CollisionProfile::jump().apply(physics.0.as_mut(), player.body);
                    physics
                        .0
                        .apply_impulse(player.body, Vec2::new(0.0, tuning.jump_impulse));
                    commands.trigger(PhaseChangeEvent {
                        entity,
                        from: Phase::Grounded,
                        to: Phase::Jumping,
                    });
                }
            }
        }
    }
}
