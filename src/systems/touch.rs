//! Touch gesture decoding.
//!
//! Turns raw [`TouchEvent`] samples into [`PlayerIntent`] messages. A touch
//! begin only records the tap origin; each move sample is classified against
//! that origin with the ±90° boundary, and an intent is emitted only when
//! the player is not already moving in that direction (repeated samples of
//! the same swipe stay silent). Touch end always emits `Stop`.

use bevy_ecs::prelude::*;

use crate::components::player::{Facing, Player};
use crate::events::intent::{PlayerIntent, TouchEvent};
use crate::resources::touch::{TouchTracker, swipe_direction};

pub fn decode_touch_input(
    mut touches: MessageReader<TouchEvent>,
    mut tracker: ResMut<TouchTracker>,
    mut intents: MessageWriter<PlayerIntent>,
    players: Query<&Player>,
) {
    for touch in touches.read() {
        match *touch {
            TouchEvent::Began { point } => {
                tracker.tap_point = Some(point);
            }
            TouchEvent::Moved { point } => {
                let Some(origin) = tracker.tap_point else {
                    continue;
                };
                let direction = swipe_direction(origin, point);
                // Already swiping that way: nothing new to say.
                let redundant = players
                    .iter()
                    .any(|player| player.moving && player.facing == direction);
                if !redundant {
                    intents.write(match direction {
                        Facing::Right => PlayerIntent::MoveRight,
                        Facing::Left => PlayerIntent::MoveLeft,
                    });
                }
            }
            TouchEvent::Ended => {
                tracker.tap_point = None;
                intents.write(PlayerIntent::Stop);
            }
        }
    }
}

/// Advance the touch message queue so this frame's writes become readable.
pub fn update_touch_messages(mut messages: ResMut<Messages<TouchEvent>>) {
    messages.update();
}

/// Advance the intent message queue once per tick. Intents queued by the
/// host (jump button) and intents decoded this tick are both still readable
/// when the state machine consumes them right after.
pub fn update_intent_messages(mut messages: ResMut<Messages<PlayerIntent>>) {
    messages.update();
}
