//! Typed tags for the level's static geometry.

use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

use crate::physics::categories::Category;

/// What kind of walkable surface a static shape is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurfaceKind {
    /// Solid ground; the player always collides with it.
    Ground,
    /// Floating platform; passable from below, solid once landed on.
    Floor,
}

impl SurfaceKind {
    /// The collision category this surface kind registers under.
    pub fn category(self) -> Category {
        match self {
            SurfaceKind::Ground => Category::GroundFrame,
            SurfaceKind::Floor => Category::FloatingFloorFrame,
        }
    }
}

/// Tag component on level-geometry entities.
#[derive(Component, Debug, Clone, Copy)]
pub struct Surface {
    pub kind: SurfaceKind,
}

impl Surface {
    pub fn new(kind: SurfaceKind) -> Self {
        Self { kind }
    }
}
