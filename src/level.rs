//! Level documents and level-session setup.
//!
//! A level is a small JSON document: the authored world size, gravity, the
//! player spawn, and rectangles of static geometry (solid ground and
//! floating platforms). Loading a level builds the physics world, registers
//! the boundary walls, and spawns the typed ECS entities the rest of the
//! core works against.
//!
//! # Level File Format
//!
//! ```json
//! {
//!   "world_width": 3000.0,
//!   "world_height": 640.0,
//!   "gravity_y": -1470.0,
//!   "player_spawn": { "x": 160.0, "y": 200.0 },
//!   "grounds": [ { "x": 0.0, "y": 0.0, "width": 3000.0, "height": 120.0 } ],
//!   "floors": [ { "x": 500.0, "y": 260.0, "width": 120.0, "height": 20.0 } ]
//! }
//! ```
//!
//! A level without a `player_spawn` is a configuration error and fails at
//! load time; the state machine never has to cope with a missing player.

use bevy_ecs::prelude::*;
use glam::Vec2;
use log::info;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::components::animation::{Animation, IDLE_RIGHT};
use crate::components::mapposition::MapPosition;
use crate::components::player::{CollisionProfile, Player};
use crate::components::surface::{Surface, SurfaceKind};
use crate::physics::PhysicsWorldRes;
use crate::physics::kinematics::{Aabb, KinematicsWorld};
use crate::resources::screengeometry::ScreenGeometry;
use crate::resources::tuning::MovementTuning;

const DEFAULT_GRAVITY_Y: f32 = -1470.0;

fn default_gravity_y() -> f32 {
    DEFAULT_GRAVITY_Y
}

/// A point in level coordinates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LevelPoint {
    pub x: f32,
    pub y: f32,
}

/// An axis-aligned rectangle in level coordinates (bottom-left anchored).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LevelRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl LevelRect {
    fn aabb(&self) -> Aabb {
        Aabb::new(self.x, self.y, self.width, self.height)
    }
}

/// A parsed level document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelData {
    pub world_width: f32,
    pub world_height: f32,
    #[serde(default = "default_gravity_y")]
    pub gravity_y: f32,
    #[serde(default)]
    pub player_spawn: Option<LevelPoint>,
    #[serde(default)]
    pub grounds: Vec<LevelRect>,
    #[serde(default)]
    pub floors: Vec<LevelRect>,
}

impl LevelData {
    /// Load and validate a level document from disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read level file {}: {}", path.display(), e))?;
        Self::from_json(&text)
    }

    /// Parse and validate a level document from a JSON string.
    pub fn from_json(text: &str) -> Result<Self, String> {
        let level: LevelData =
            serde_json::from_str(text).map_err(|e| format!("Failed to parse level: {}", e))?;
        level.validate()?;
        Ok(level)
    }

    fn validate(&self) -> Result<(), String> {
        if self.world_width <= 0.0 || self.world_height <= 0.0 {
            return Err(format!(
                "Level has invalid world size {}x{}",
                self.world_width, self.world_height
            ));
        }
        if self.player_spawn.is_none() {
            return Err("Level defines no player spawn".into());
        }
        Ok(())
    }
}

/// Build the physics world for a level session and spawn its entities.
///
/// Inserts [`PhysicsWorldRes`] and [`ScreenGeometry`] (replacing any previous
/// level session's resources) and returns the player entity. `viewport` is
/// the host's visible screen size in world units.
pub fn spawn_level(
    world: &mut World,
    level: &LevelData,
    viewport: Vec2,
) -> Result<Entity, String> {
    level.validate()?;
    let spawn = level
        .player_spawn
        .ok_or_else(|| String::from("Level defines no player spawn"))?;

    world.init_resource::<MovementTuning>();
    let tuning = world.resource::<MovementTuning>().clone();

    let mut engine = KinematicsWorld::new(Vec2::new(0.0, level.gravity_y))
        .with_bounds(level.world_width, level.world_height);

    for rect in &level.grounds {
        engine.add_static(rect.aabb(), SurfaceKind::Ground);
        world.spawn((
            Surface::new(SurfaceKind::Ground),
            MapPosition::new(rect.x, rect.y),
        ));
    }
    for rect in &level.floors {
        engine.add_static(rect.aabb(), SurfaceKind::Floor);
        world.spawn((
            Surface::new(SurfaceKind::Floor),
            MapPosition::new(rect.x, rect.y),
        ));
    }

    // The original prototype's rounded-rect body: 1.7 radii wide, feet
    // anchored at the position.
    let body = engine.add_body(
        Vec2::new(spawn.x, spawn.y),
        tuning.player_radius * 0.85,
        tuning.player_radius * 1.7,
        tuning.player_mass,
    );
    CollisionProfile::initial().apply(&mut engine, body);

    world.insert_resource(PhysicsWorldRes(Box::new(engine)));
    world.insert_resource(ScreenGeometry::new(
        viewport,
        Vec2::new(level.world_width, level.world_height),
    ));

    let player = world
        .spawn((
            Player::new(body),
            MapPosition::new(spawn.x, spawn.y),
            Animation::new(IDLE_RIGHT),
        ))
        .id();

    info!(
        "Level ready: {}x{} world, {} grounds, {} floors, spawn at ({}, {})",
        level.world_width,
        level.world_height,
        level.grounds.len(),
        level.floors.len(),
        spawn.x,
        spawn.y
    );

    Ok(player)
}
