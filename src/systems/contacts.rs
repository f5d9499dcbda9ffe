//! Contact dispatch.
//!
//! Drains the contact-begin records the physics engine accumulated during
//! its step and triggers a [`ContactEvent`] for each. Runs first in the tick
//! schedule so contact reactions (the landing observer) resolve strictly
//! before the coordinator's post-physics systems, as the physics engines we
//! target deliver their callbacks during their own step.

use bevy_ecs::prelude::*;

use crate::events::contact::ContactEvent;
use crate::physics::PhysicsWorldRes;

pub fn dispatch_contacts(mut physics: ResMut<PhysicsWorldRes>, mut commands: Commands) {
    for contact in physics.0.drain_contacts() {
        commands.trigger(ContactEvent {
            body: contact.body,
            point: contact.point,
        });
    }
}
