//! Phase transition event.
//!
//! Triggered whenever the player's [`Phase`] changes, whatever the edge:
//! jump, fall, contact landing, or watchdog landing. The render host can
//! observe it to cut sprite animations on the exact transition tick instead
//! of polling.

use bevy_ecs::prelude::*;

use crate::components::player::Phase;

/// Event emitted on every player phase transition.
#[derive(Event, Debug, Clone, Copy)]
pub struct PhaseChangeEvent {
    /// The player entity that transitioned.
    pub entity: Entity,
    pub from: Phase,
    pub to: Phase,
}
