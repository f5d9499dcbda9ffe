//! Active animation selection for the render host.
//!
//! The core never draws; it only keeps this component current. The host's
//! animation player looks the key up in its own sprite tables and honours
//! `speed` as a playback factor.

use bevy_ecs::prelude::Component;

use crate::components::player::{Facing, Phase};

pub const WALK_RIGHT: &str = "walk_right";
pub const WALK_LEFT: &str = "walk_left";
pub const IDLE_RIGHT: &str = "idle_right";
pub const IDLE_LEFT: &str = "idle_left";
pub const JUMP_RIGHT: &str = "jump_right";
pub const JUMP_LEFT: &str = "jump_left";

/// The animation key a (phase, facing, moving) combination displays.
///
/// Airborne states show the facing-appropriate jump still regardless of
/// `moving`, so a stop intent mid-air never freezes the displayed texture.
pub fn key_for(phase: Phase, facing: Facing, moving: bool) -> &'static str {
    match (phase, facing, moving) {
        (Phase::Jumping | Phase::Falling, Facing::Right, _) => JUMP_RIGHT,
        (Phase::Jumping | Phase::Falling, Facing::Left, _) => JUMP_LEFT,
        (Phase::Grounded, Facing::Right, true) => WALK_RIGHT,
        (Phase::Grounded, Facing::Left, true) => WALK_LEFT,
        (Phase::Grounded, Facing::Right, false) => IDLE_RIGHT,
        (Phase::Grounded, Facing::Left, false) => IDLE_LEFT,
    }
}

/// Currently selected animation.
#[derive(Component, Debug, Clone)]
pub struct Animation {
    /// Key of the active animation or still image.
    pub key: String,
    /// Playback speed factor (1.0 = authored speed).
    pub speed: f32,
}

impl Animation {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            speed: 1.0,
        }
    }
}
