//! Contact events and the contact landing observer.
//!
//! The contact dispatch system drains the physics engine's contact-begin
//! records once per tick (before the coordinator systems run) and triggers a
//! [`ContactEvent`] for each. [`observe_contact_landing`] is the primary
//! subscriber: it resolves the landing transition when the player touches
//! something with solid ground or a floating platform directly beneath.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::player::{Phase, Player};
use crate::events::phase::PhaseChangeEvent;
use crate::physics::{BodyId, PhysicsWorldRes};
use crate::resources::tuning::MovementTuning;
use crate::systems::groundwatch::resolve_landing;
use crate::systems::probe::probe_beneath;

/// Event fired for each contact-begin record the physics engine produced.
#[derive(Event, Debug, Clone, Copy)]
pub struct ContactEvent {
    /// The body that touched something.
    pub body: BodyId,
    /// World-space contact point.
    pub point: glam::Vec2,
}

/// Resolve a landing when a contact arrives while airborne.
///
/// The probe must classify what is directly beneath the player as a landable
/// surface; touching a wall or a platform's underside changes nothing. When
/// the forced-ground watchdog already landed the player this tick, the
/// airborne guard makes this observer a no-op — the two landing paths never
/// both resolve.
pub fn observe_contact_landing(
    trigger: On<ContactEvent>,
    mut players: Query<(Entity, &mut Player)>,
    mut physics: ResMut<PhysicsWorldRes>,
    tuning: Res<MovementTuning>,
    mut commands: Commands,
) {
    let contact = *trigger.event();
    for (entity, mut player) in players.iter_mut() {
        if player.body != contact.body || !player.phase.is_airborne() {
            continue;
        }
        let position = physics.0.position(player.body);
        if probe_beneath(physics.0.as_ref(), position, tuning.player_radius).is_none() {
            continue;
        }
        let from = player.phase;
        if resolve_landing(&mut player, physics.0.as_mut()) {
            debug!("contact landing at {:?}", contact.point);
            commands.trigger(PhaseChangeEvent {
                entity,
                from,
                to: Phase::Grounded,
            });
        }
    }
}
