//! Camera scroller.
//!
//! Recomputes the world-layer and background-layer offsets from the player's
//! synced position, clamped to the level bounds by
//! [`ScreenGeometry::scroll_to`].

use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::resources::screengeometry::ScreenGeometry;
use crate::resources::tuning::MovementTuning;

pub fn update_camera(
    players: Query<&MapPosition, With<Player>>,
    mut geometry: ResMut<ScreenGeometry>,
    tuning: Res<MovementTuning>,
) {
    for position in players.iter() {
        geometry.scroll_to(position.pos, tuning.parallax_factor);
    }
}
