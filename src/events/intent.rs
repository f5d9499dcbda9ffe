//! Input messages flowing into the movement core.
//!
//! The host forwards raw touch samples as [`TouchEvent`] messages; the touch
//! decode system turns them into [`PlayerIntent`] messages, which are the
//! only input the state machine consumes. The on-screen jump button skips
//! the gesture layer and writes a jump intent directly via [`trigger_jump`].

use bevy_ecs::message::Message;
use bevy_ecs::prelude::MessageWriter;
use glam::Vec2;

/// Raw touch samples from the host input layer.
#[derive(Message, Debug, Clone, Copy)]
pub enum TouchEvent {
    Began { point: Vec2 },
    Moved { point: Vec2 },
    Ended,
}

/// A decoded input command for the player state machine.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerIntent {
    MoveRight,
    MoveLeft,
    Stop,
    Jump,
}

/// Entry point for the UI jump button.
pub fn trigger_jump(intents: &mut MessageWriter<PlayerIntent>) {
    intents.write(PlayerIntent::Jump);
}
