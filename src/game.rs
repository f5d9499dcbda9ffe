//! World construction and the per-tick schedule.
//!
//! The tick order is fixed and single-threaded. The host steps the physics
//! engine (through [`run_tick`]), then the schedule runs: contact dispatch
//! first, so the engine's contact callbacks resolve before everything else;
//! input decode and intent application next, so this tick's intents shape
//! this tick's forces; then the coordinator systems in their required order
//! (locomotion force and damping before the clamps, probe and watchdog after
//! velocities are final, camera last); animation selection closes the tick.

use bevy_ecs::prelude::*;

use crate::events::contact::observe_contact_landing;
use crate::events::intent::{PlayerIntent, TouchEvent};
use crate::physics::PhysicsWorldRes;
use crate::resources::touch::TouchTracker;
use crate::resources::tuning::MovementTuning;
use crate::resources::worldtime::WorldTime;
use crate::systems::animation::select_player_animation;
use crate::systems::camera::update_camera;
use crate::systems::contacts::dispatch_contacts;
use crate::systems::groundwatch::groundwatch;
use crate::systems::intent::apply_player_intents;
use crate::systems::locomotion::locomotion;
use crate::systems::sync::sync_body_positions;
use crate::systems::time::update_world_time;
use crate::systems::touch::{decode_touch_input, update_intent_messages, update_touch_messages};

/// Create an ECS world with the core resources and observers installed.
///
/// Level-session resources ([`PhysicsWorldRes`], `ScreenGeometry`, the
/// player entity) come from [`crate::level::spawn_level`]; tuning can be
/// replaced before that by inserting a loaded [`MovementTuning`].
pub fn build_world() -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(MovementTuning::default());
    world.insert_resource(TouchTracker::default());
    world.init_resource::<Messages<TouchEvent>>();
    world.init_resource::<Messages<PlayerIntent>>();
    world.add_observer(observe_contact_landing);
    world.flush();
    world
}

/// Build the per-tick schedule. Chained: the order is the contract.
pub fn build_tick_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(
        (
            dispatch_contacts,
            update_touch_messages,
            decode_touch_input,
            update_intent_messages,
            apply_player_intents,
            locomotion,
            groundwatch,
            sync_body_positions,
            update_camera,
            select_player_animation,
        )
            .chain(),
    );
    schedule
}

/// Advance the simulation by one tick: clock, physics step, schedule.
pub fn run_tick(world: &mut World, schedule: &mut Schedule, dt: f32) {
    update_world_time(world, dt);
    let delta = world.resource::<WorldTime>().delta;
    world.resource_mut::<PhysicsWorldRes>().0.step(delta);
    schedule.run(world);
    world.clear_trackers();
}
