//! Full-tick integration tests for the player state machine, the forced
//! ground watchdog, velocity caps, and the camera scroller.

use std::sync::{Arc, Mutex};

use bevy_ecs::prelude::*;
use glam::Vec2;
use smallvec::SmallVec;

use platcore::components::animation::{
    self, Animation, IDLE_RIGHT, JUMP_RIGHT, WALK_LEFT, WALK_RIGHT,
};
use platcore::components::mapposition::MapPosition;
use platcore::components::player::{CollisionProfile, Facing, Phase, Player};
use platcore::components::surface::SurfaceKind;
use platcore::events::contact::ContactEvent;
use platcore::events::intent::{PlayerIntent, TouchEvent};
use platcore::events::phase::PhaseChangeEvent;
use platcore::game;
use platcore::level::{self, LevelData};
use platcore::physics::categories::{Category, CategoryMask};
use platcore::physics::{BodyId, ContactBegin, PhysicsEngine, PhysicsWorldRes, RayHit};
use platcore::resources::screengeometry::ScreenGeometry;
use platcore::resources::tuning::MovementTuning;

const EPSILON: f32 = 1e-3;
const DT: f32 = 1.0 / 120.0;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

/// A long flat level with one floating platform over the spawn ground.
const LEVEL: &str = r#"{
    "world_width": 3000.0,
    "world_height": 640.0,
    "gravity_y": -1470.0,
    "player_spawn": { "x": 160.0, "y": 100.0 },
    "grounds": [ { "x": 0.0, "y": 0.0, "width": 3000.0, "height": 100.0 } ],
    "floors": [ { "x": 300.0, "y": 200.0, "width": 120.0, "height": 20.0 } ]
}"#;

fn make_session(level_json: &str) -> (World, Schedule, Entity) {
    let mut world = game::build_world();
    let level = LevelData::from_json(level_json).expect("level parses");
    let player = level::spawn_level(&mut world, &level, Vec2::new(640.0, 360.0))
        .expect("level spawns");
    let schedule = game::build_tick_schedule();
    (world, schedule, player)
}

fn tick(world: &mut World, schedule: &mut Schedule) {
    game::run_tick(world, schedule, DT);
}

fn send_intent(world: &mut World, intent: PlayerIntent) {
    world.resource_mut::<Messages<PlayerIntent>>().write(intent);
}

fn player_state(world: &World, player: Entity) -> (Phase, Facing, bool) {
    let state = world.get::<Player>(player).expect("player exists");
    (state.phase, state.facing, state.moving)
}

fn body_of(world: &World, player: Entity) -> BodyId {
    world.get::<Player>(player).expect("player exists").body
}

fn velocity_of(world: &World, player: Entity) -> Vec2 {
    let body = body_of(world, player);
    world.resource::<PhysicsWorldRes>().0.velocity(body)
}

fn contact_mask_of(world: &World, player: Entity) -> CategoryMask {
    let body = body_of(world, player);
    world.resource::<PhysicsWorldRes>().0.contact_test_mask(body)
}

fn collision_mask_of(world: &World, player: Entity) -> CategoryMask {
    let body = body_of(world, player);
    world.resource::<PhysicsWorldRes>().0.collision_mask(body)
}

fn animation_key(world: &World, player: Entity) -> String {
    world
        .get::<Animation>(player)
        .expect("player has animation")
        .key
        .clone()
}

// =============================================================================
// Locomotion scenarios
// =============================================================================

#[test]
fn move_right_sets_flags_key_and_accelerates() {
    let (mut world, mut schedule, player) = make_session(LEVEL);

    send_intent(&mut world, PlayerIntent::MoveRight);
    tick(&mut world, &mut schedule);

    let (phase, facing, moving) = player_state(&world, player);
    assert_eq!(phase, Phase::Grounded);
    assert_eq!(facing, Facing::Right);
    assert!(moving);
    assert_eq!(animation_key(&world, player), WALK_RIGHT);

    // The drive force integrates on the following step.
    tick(&mut world, &mut schedule);
    assert!(velocity_of(&world, player).x > 0.0);
}

#[test]
fn move_stop_move_round_trip_is_idempotent() {
    let (mut world, mut schedule, player) = make_session(LEVEL);

    for _ in 0..3 {
        send_intent(&mut world, PlayerIntent::MoveRight);
        tick(&mut world, &mut schedule);
        let (_, facing, moving) = player_state(&world, player);
        assert_eq!(facing, Facing::Right);
        assert!(moving);
        assert_eq!(animation_key(&world, player), WALK_RIGHT);

        send_intent(&mut world, PlayerIntent::Stop);
        tick(&mut world, &mut schedule);
        let (_, facing, moving) = player_state(&world, player);
        assert_eq!(facing, Facing::Right);
        assert!(!moving);
        assert_eq!(animation_key(&world, player), IDLE_RIGHT);
    }

    // Last intent always wins, also across direction changes.
    send_intent(&mut world, PlayerIntent::MoveLeft);
    tick(&mut world, &mut schedule);
    let (_, facing, moving) = player_state(&world, player);
    assert_eq!(facing, Facing::Left);
    assert!(moving);
    assert_eq!(animation_key(&world, player), WALK_LEFT);
}

#[test]
fn idle_player_glides_to_a_stop() {
    let (mut world, mut schedule, player) = make_session(LEVEL);

    send_intent(&mut world, PlayerIntent::MoveRight);
    for _ in 0..60 {
        tick(&mut world, &mut schedule);
    }
    let rolling = velocity_of(&world, player).x;
    assert!(rolling > 50.0);

    send_intent(&mut world, PlayerIntent::Stop);
    tick(&mut world, &mut schedule);
    let after_one = velocity_of(&world, player).x;
    assert!(after_one < rolling, "damping shrinks vx");
    assert!(after_one > 0.0, "damping does not halt instantly");

    for _ in 0..120 {
        tick(&mut world, &mut schedule);
    }
    assert!(velocity_of(&world, player).x.abs() < 1.0);
}

#[test]
fn fast_walk_switch_follows_speed() {
    let (mut world, mut schedule, player) = make_session(LEVEL);

    send_intent(&mut world, PlayerIntent::MoveRight);
    for _ in 0..240 {
        tick(&mut world, &mut schedule);
    }
    let tuning = world.resource::<MovementTuning>().clone();
    assert!(velocity_of(&world, player).x >= tuning.fast_walk_threshold);
    let speed = world.get::<Animation>(player).unwrap().speed;
    assert!(approx_eq(speed, tuning.fast_walk_speed));

    send_intent(&mut world, PlayerIntent::Stop);
    tick(&mut world, &mut schedule);
    let speed = world.get::<Animation>(player).unwrap().speed;
    assert!(approx_eq(speed, 1.0));
}

// =============================================================================
// Velocity cap properties
// =============================================================================

#[test]
fn horizontal_velocity_never_exceeds_phase_cap() {
    let (mut world, mut schedule, player) = make_session(LEVEL);
    let tuning = world.resource::<MovementTuning>().clone();

    send_intent(&mut world, PlayerIntent::MoveRight);
    for i in 0..400 {
        if i == 200 {
            send_intent(&mut world, PlayerIntent::Jump);
        }
        tick(&mut world, &mut schedule);

        let (phase, _, _) = player_state(&world, player);
        let cap = tuning.horizontal_cap(phase.is_airborne());
        let vx = velocity_of(&world, player).x;
        assert!(
            vx.abs() <= cap + EPSILON,
            "tick {}: |vx|={} exceeds cap {} in {:?}",
            i,
            vx.abs(),
            cap,
            phase
        );
    }
}

#[test]
fn grounded_cap_is_reached_and_airborne_cap_is_half() {
    let (mut world, mut schedule, player) = make_session(LEVEL);
    let tuning = world.resource::<MovementTuning>().clone();

    send_intent(&mut world, PlayerIntent::MoveRight);
    for _ in 0..400 {
        tick(&mut world, &mut schedule);
    }
    assert!(approx_eq(velocity_of(&world, player).x, tuning.max_velocity));

    send_intent(&mut world, PlayerIntent::Jump);
    tick(&mut world, &mut schedule);
    assert!(
        velocity_of(&world, player).x.abs()
            <= tuning.max_velocity * tuning.airborne_cap_factor + EPSILON
    );
}

// =============================================================================
// Jump and landing
// =============================================================================

#[test]
fn jump_applies_impulse_and_masks_then_lands_on_contact() {
    let (mut world, mut schedule, player) = make_session(LEVEL);

    let transitions: Arc<Mutex<Vec<(Phase, Phase)>>> = Arc::new(Mutex::new(Vec::new()));
    let seen = transitions.clone();
    world.add_observer(move |trigger: On<PhaseChangeEvent>| {
        let event = trigger.event();
        seen.lock().unwrap().push((event.from, event.to));
    });
    world.flush();

    send_intent(&mut world, PlayerIntent::Jump);
    tick(&mut world, &mut schedule);

    let (phase, _, moving) = player_state(&world, player);
    assert_eq!(phase, Phase::Jumping);
    assert!(!moving, "jump clears the locomotion flag");
    assert!(velocity_of(&world, player).y > 0.0, "impulse pushes upward");
    assert_eq!(animation_key(&world, player), JUMP_RIGHT);

    let profile = CollisionProfile::jump();
    assert_eq!(contact_mask_of(&world, player), profile.contact_test);
    assert_eq!(collision_mask_of(&world, player), profile.collision);

    // Let the arc complete: rise, fall past the threshold, touch down.
    let mut saw_falling = false;
    for _ in 0..600 {
        tick(&mut world, &mut schedule);
        let (phase, _, _) = player_state(&world, player);
        saw_falling |= phase == Phase::Falling;
        if phase == Phase::Grounded {
            break;
        }
    }

    let (phase, _, _) = player_state(&world, player);
    assert_eq!(phase, Phase::Grounded, "the arc ends back on the ground");
    assert!(saw_falling, "descent passes through Falling");
    assert!(contact_mask_of(&world, player).is_empty());
    assert_eq!(animation_key(&world, player), IDLE_RIGHT);

    let transitions = transitions.lock().unwrap();
    assert_eq!(transitions.first(), Some(&(Phase::Grounded, Phase::Jumping)));
    assert_eq!(transitions.last(), Some(&(Phase::Falling, Phase::Grounded)));
}

#[test]
fn airborne_jump_intent_is_a_noop() {
    let (mut world, mut schedule, player) = make_session(LEVEL);

    send_intent(&mut world, PlayerIntent::Jump);
    tick(&mut world, &mut schedule);
    tick(&mut world, &mut schedule);
    let (phase, _, _) = player_state(&world, player);
    assert_eq!(phase, Phase::Jumping);

    let vy_before = velocity_of(&world, player).y;
    let contact_before = contact_mask_of(&world, player);
    let collision_before = collision_mask_of(&world, player);

    send_intent(&mut world, PlayerIntent::Jump);
    tick(&mut world, &mut schedule);

    let (phase, _, _) = player_state(&world, player);
    assert_eq!(phase, Phase::Jumping);
    assert_eq!(contact_mask_of(&world, player), contact_before);
    assert_eq!(collision_mask_of(&world, player), collision_before);
    // Gravity keeps shaving vy; a second impulse would have raised it.
    assert!(velocity_of(&world, player).y < vy_before);
}

#[test]
fn landing_resumes_walk_when_moved_midair() {
    let (mut world, mut schedule, player) = make_session(LEVEL);

    send_intent(&mut world, PlayerIntent::Jump);
    tick(&mut world, &mut schedule);
    send_intent(&mut world, PlayerIntent::MoveRight);
    tick(&mut world, &mut schedule);

    let (_, _, moving) = player_state(&world, player);
    assert!(moving, "mid-air locomotion intent re-arms the walk");
    assert_eq!(animation_key(&world, player), JUMP_RIGHT);

    for _ in 0..600 {
        tick(&mut world, &mut schedule);
        if player_state(&world, player).0 == Phase::Grounded {
            break;
        }
    }
    assert_eq!(player_state(&world, player).0, Phase::Grounded);
    assert_eq!(animation_key(&world, player), WALK_RIGHT);
}

#[test]
fn stop_while_airborne_keeps_jump_still_until_landing() {
    let (mut world, mut schedule, player) = make_session(LEVEL);

    send_intent(&mut world, PlayerIntent::MoveRight);
    tick(&mut world, &mut schedule);
    send_intent(&mut world, PlayerIntent::Jump);
    tick(&mut world, &mut schedule);
    send_intent(&mut world, PlayerIntent::Stop);
    tick(&mut world, &mut schedule);

    let (phase, _, moving) = player_state(&world, player);
    assert!(phase.is_airborne());
    assert!(!moving);
    // No sudden freeze mid-jump: the jump still stays up.
    assert_eq!(animation_key(&world, player), JUMP_RIGHT);

    for _ in 0..600 {
        tick(&mut world, &mut schedule);
        if player_state(&world, player).0 == Phase::Grounded {
            break;
        }
    }
    assert_eq!(animation_key(&world, player), IDLE_RIGHT);
}

#[test]
fn walking_off_a_ledge_enters_falling_and_arms_contact_tests() {
    let ledge_level = r#"{
        "world_width": 3000.0,
        "world_height": 640.0,
        "gravity_y": -1470.0,
        "player_spawn": { "x": 1380.0, "y": 100.0 },
        "grounds": [ { "x": 0.0, "y": 0.0, "width": 1400.0, "height": 100.0 } ]
    }"#;
    let (mut world, mut schedule, player) = make_session(ledge_level);

    send_intent(&mut world, PlayerIntent::MoveRight);
    let mut fell = false;
    for _ in 0..600 {
        tick(&mut world, &mut schedule);
        if player_state(&world, player).0 == Phase::Falling {
            fell = true;
            break;
        }
    }
    assert!(fell, "running off the ledge must enter Falling");

    let mask = contact_mask_of(&world, player);
    assert!(mask.contains(Category::GroundFrame));
    assert!(mask.contains(Category::FloatingFloorFrame));
}

// =============================================================================
// Floating platform traversal
// =============================================================================

#[test]
fn player_jumps_up_through_platform_and_lands_on_top() {
    let platform_level = r#"{
        "world_width": 3000.0,
        "world_height": 640.0,
        "gravity_y": -1470.0,
        "player_spawn": { "x": 360.0, "y": 100.0 },
        "grounds": [ { "x": 0.0, "y": 0.0, "width": 3000.0, "height": 100.0 } ],
        "floors": [ { "x": 300.0, "y": 200.0, "width": 120.0, "height": 20.0 } ]
    }"#;
    let (mut world, mut schedule, player) = make_session(platform_level);

    send_intent(&mut world, PlayerIntent::Jump);
    tick(&mut world, &mut schedule);

    let platform_top = 220.0;
    let mut rose_above = false;
    for _ in 0..600 {
        tick(&mut world, &mut schedule);
        let position = world.get::<MapPosition>(player).unwrap().pos;
        rose_above |= position.y > platform_top;
        if rose_above && player_state(&world, player).0 == Phase::Grounded {
            break;
        }
    }

    assert!(rose_above, "the jump clears the platform top");
    let (phase, _, _) = player_state(&world, player);
    assert_eq!(phase, Phase::Grounded);

    let position = world.get::<MapPosition>(player).unwrap().pos;
    assert!(
        approx_eq(position.y, platform_top),
        "feet rest on the platform top, got y={}",
        position.y
    );
    // The ray probe re-enabled platform collision on the way down.
    assert!(collision_mask_of(&world, player).contains(Category::FloatingFloorFrame));
    assert!(contact_mask_of(&world, player).is_empty());
}

// =============================================================================
// Invariants over arbitrary tick sequences
// =============================================================================

#[test]
fn grounded_always_implies_empty_contact_mask() {
    let (mut world, mut schedule, player) = make_session(LEVEL);

    for i in 0..500 {
        // A busy, repeating input script: walk, jump, turn, stop.
        match i % 100 {
            5 => send_intent(&mut world, PlayerIntent::MoveRight),
            25 => send_intent(&mut world, PlayerIntent::Jump),
            55 => send_intent(&mut world, PlayerIntent::MoveLeft),
            80 => send_intent(&mut world, PlayerIntent::Stop),
            _ => {}
        }
        tick(&mut world, &mut schedule);

        let (phase, _, _) = player_state(&world, player);
        if phase == Phase::Grounded {
            assert!(
                contact_mask_of(&world, player).is_empty(),
                "tick {}: grounded with live contact tests",
                i
            );
            let timer = world.get::<Player>(player).unwrap().ground_timer;
            assert!(timer.is_none(), "tick {}: grounded with an armed watchdog", i);
        }
    }
}

// =============================================================================
// Camera
// =============================================================================

#[test]
fn camera_centers_player_and_clamps_at_edges() {
    let (mut world, mut schedule, _player) = make_session(LEVEL);

    // Spawn is near the left edge: the offset pins to zero.
    tick(&mut world, &mut schedule);
    let geometry = world.resource::<ScreenGeometry>();
    assert!(approx_eq(geometry.camera_offset.x, 0.0));

    // A spawn at the far right edge clamps to the level bound.
    let right_level = r#"{
        "world_width": 3000.0,
        "world_height": 640.0,
        "gravity_y": -1470.0,
        "player_spawn": { "x": 2990.0, "y": 100.0 },
        "grounds": [ { "x": 0.0, "y": 0.0, "width": 3000.0, "height": 100.0 } ]
    }"#;
    let (mut world, mut schedule, _player) = make_session(right_level);
    tick(&mut world, &mut schedule);
    let geometry = world.resource::<ScreenGeometry>();
    assert!(approx_eq(geometry.camera_offset.x, -(3000.0 - 640.0)));
    assert!(
        approx_eq(geometry.background_offset.x, geometry.camera_offset.x * 0.5),
        "background scrolls at the parallax factor"
    );
}

// =============================================================================
// Forced-ground watchdog (scripted physics, no contacts ever)
// =============================================================================

/// Physics double that never reports contacts: position integrates from
/// velocity, the probe always finds ground, rays find nothing. Exactly the
/// situation the watchdog exists for.
struct ScriptedPhysics {
    position: Vec2,
    velocity: Vec2,
    collision_mask: CategoryMask,
    contact_test_mask: CategoryMask,
}

impl ScriptedPhysics {
    fn new() -> Self {
        Self {
            position: Vec2::new(100.0, 100.0),
            velocity: Vec2::ZERO,
            collision_mask: CategoryMask::EMPTY,
            contact_test_mask: CategoryMask::EMPTY,
        }
    }
}

impl PhysicsEngine for ScriptedPhysics {
    fn step(&mut self, dt: f32) {
        self.position += self.velocity * dt;
    }
    fn apply_impulse(&mut self, _body: BodyId, impulse: Vec2) {
        self.velocity += impulse;
    }
    fn apply_force(&mut self, _body: BodyId, _force: Vec2) {}
    fn velocity(&self, _body: BodyId) -> Vec2 {
        self.velocity
    }
    fn set_velocity(&mut self, _body: BodyId, velocity: Vec2) {
        self.velocity = velocity;
    }
    fn position(&self, _body: BodyId) -> Vec2 {
        self.position
    }
    fn point_query(&self, _point: Vec2) -> Option<SurfaceKind> {
        Some(SurfaceKind::Ground)
    }
    fn ray_cast(&self, _start: Vec2, _end: Vec2) -> SmallVec<[RayHit; 4]> {
        SmallVec::new()
    }
    fn collision_mask(&self, _body: BodyId) -> CategoryMask {
        self.collision_mask
    }
    fn set_collision_mask(&mut self, _body: BodyId, mask: CategoryMask) {
        self.collision_mask = mask;
    }
    fn contact_test_mask(&self, _body: BodyId) -> CategoryMask {
        self.contact_test_mask
    }
    fn set_contact_test_mask(&mut self, _body: BodyId, mask: CategoryMask) {
        self.contact_test_mask = mask;
    }
    fn drain_contacts(&mut self) -> Vec<ContactBegin> {
        Vec::new()
    }
}

const SCRIPTED_DT: f32 = 0.01;

fn make_scripted_session() -> (World, Schedule, Entity) {
    let mut world = game::build_world();
    let mut engine = ScriptedPhysics::new();
    let body = BodyId(0);
    CollisionProfile::initial().apply(&mut engine, body);
    world.insert_resource(PhysicsWorldRes(Box::new(engine)));
    world.insert_resource(ScreenGeometry::new(
        Vec2::new(640.0, 360.0),
        Vec2::new(3000.0, 640.0),
    ));
    let player = world
        .spawn((
            Player::new(body),
            MapPosition::new(100.0, 100.0),
            Animation::new(animation::IDLE_RIGHT),
        ))
        .id();
    let schedule = game::build_tick_schedule();
    (world, schedule, player)
}

fn scripted_tick(world: &mut World, schedule: &mut Schedule) {
    game::run_tick(world, schedule, SCRIPTED_DT);
}

fn set_body_velocity(world: &mut World, velocity: Vec2) {
    world
        .resource_mut::<PhysicsWorldRes>()
        .0
        .set_velocity(BodyId(0), velocity);
}

#[test]
fn watchdog_forces_landing_within_limit_plus_one_tick() {
    let (mut world, mut schedule, player) = make_scripted_session();
    let limit = world.resource::<MovementTuning>().ground_timer_limit;

    send_intent(&mut world, PlayerIntent::Jump);
    scripted_tick(&mut world, &mut schedule);
    assert_eq!(player_state(&world, player).0, Phase::Jumping);

    // Resting on unnoticed geometry: tiny vertical motion, ground beneath,
    // and no contact callback will ever arrive.
    set_body_velocity(&mut world, Vec2::new(0.0, -2.0));

    let mut elapsed = 0.0;
    let mut landed_at = None;
    for _ in 0..200 {
        scripted_tick(&mut world, &mut schedule);
        elapsed += SCRIPTED_DT;
        if player_state(&world, player).0 == Phase::Grounded {
            landed_at = Some(elapsed);
            break;
        }
    }

    let landed_at = landed_at.expect("watchdog must land the player");
    assert!(
        landed_at >= limit - EPSILON,
        "landed too early: {}",
        landed_at
    );
    assert!(
        landed_at <= limit + SCRIPTED_DT + EPSILON,
        "landed too late: {}",
        landed_at
    );
    assert!(contact_mask_of(&world, player).is_empty());
    assert!(world.get::<Player>(player).unwrap().ground_timer.is_none());
}

#[test]
fn watchdog_keeps_running_past_the_rest_threshold_once_armed() {
    let (mut world, mut schedule, player) = make_scripted_session();

    send_intent(&mut world, PlayerIntent::Jump);
    scripted_tick(&mut world, &mut schedule);

    // Arm at near-zero vertical motion.
    set_body_velocity(&mut world, Vec2::new(0.0, -2.0));
    scripted_tick(&mut world, &mut schedule);
    assert!(world.get::<Player>(player).unwrap().ground_timer.is_some());

    // A burst of downward velocity flips the phase to Falling, but the armed
    // timer keeps accumulating; the arm condition is not re-checked.
    set_body_velocity(&mut world, Vec2::new(0.0, -10.2));
    for _ in 0..4 {
        scripted_tick(&mut world, &mut schedule);
    }
    assert_eq!(player_state(&world, player).0, Phase::Falling);
    let elapsed = world
        .get::<Player>(player)
        .unwrap()
        .ground_timer
        .expect("timer survived the velocity burst");
    assert!(elapsed > 0.04);

    // The body settles again; the timer expires on schedule and lands.
    set_body_velocity(&mut world, Vec2::new(0.0, -1.0));
    for _ in 0..30 {
        scripted_tick(&mut world, &mut schedule);
        if player_state(&world, player).0 == Phase::Grounded {
            break;
        }
    }
    assert_eq!(player_state(&world, player).0, Phase::Grounded);
    assert!(world.get::<Player>(player).unwrap().ground_timer.is_none());
}

#[test]
fn contact_landing_and_watchdog_landing_are_equivalent() {
    // Run A: the watchdog lands the player.
    let (mut world_a, mut schedule_a, player_a) = make_scripted_session();
    send_intent(&mut world_a, PlayerIntent::Jump);
    scripted_tick(&mut world_a, &mut schedule_a);
    set_body_velocity(&mut world_a, Vec2::new(0.0, -2.0));
    for _ in 0..30 {
        scripted_tick(&mut world_a, &mut schedule_a);
        if player_state(&world_a, player_a).0 == Phase::Grounded {
            break;
        }
    }

    // Run B: a contact callback arrives first; the armed timer is discarded.
    let (mut world_b, mut schedule_b, player_b) = make_scripted_session();
    send_intent(&mut world_b, PlayerIntent::Jump);
    scripted_tick(&mut world_b, &mut schedule_b);
    set_body_velocity(&mut world_b, Vec2::new(0.0, -2.0));
    scripted_tick(&mut world_b, &mut schedule_b);
    assert!(
        world_b.get::<Player>(player_b).unwrap().ground_timer.is_some(),
        "the watchdog armed before the contact"
    );
    world_b.trigger(ContactEvent {
        body: BodyId(0),
        point: Vec2::new(100.0, 100.0),
    });
    world_b.flush();
    scripted_tick(&mut world_b, &mut schedule_b);

    // Both paths resolved to the same grounded state.
    assert_eq!(player_state(&world_a, player_a).0, Phase::Grounded);
    assert_eq!(player_state(&world_b, player_b).0, Phase::Grounded);
    assert_eq!(
        contact_mask_of(&world_a, player_a),
        contact_mask_of(&world_b, player_b)
    );
    assert_eq!(
        collision_mask_of(&world_a, player_a),
        collision_mask_of(&world_b, player_b)
    );
    assert_eq!(
        animation_key(&world_a, player_a),
        animation_key(&world_b, player_b)
    );
    assert!(world_b.get::<Player>(player_b).unwrap().ground_timer.is_none());
}

// =============================================================================
// Touch decoding end to end
// =============================================================================

fn send_touch(world: &mut World, touch: TouchEvent) {
    world.resource_mut::<Messages<TouchEvent>>().write(touch);
}

#[test]
fn touch_swipe_drives_locomotion() {
    let (mut world, mut schedule, player) = make_session(LEVEL);

    send_touch(
        &mut world,
        TouchEvent::Began {
            point: Vec2::new(100.0, 100.0),
        },
    );
    send_touch(
        &mut world,
        TouchEvent::Moved {
            point: Vec2::new(160.0, 120.0),
        },
    );
    tick(&mut world, &mut schedule);

    let (_, facing, moving) = player_state(&world, player);
    assert!(moving);
    assert_eq!(facing, Facing::Right);

    // Swiping back across the origin turns the player around.
    send_touch(
        &mut world,
        TouchEvent::Moved {
            point: Vec2::new(20.0, 100.0),
        },
    );
    tick(&mut world, &mut schedule);
    let (_, facing, moving) = player_state(&world, player);
    assert!(moving);
    assert_eq!(facing, Facing::Left);

    send_touch(&mut world, TouchEvent::Ended);
    tick(&mut world, &mut schedule);
    let (_, facing, moving) = player_state(&world, player);
    assert!(!moving);
    assert_eq!(facing, Facing::Left);
}
