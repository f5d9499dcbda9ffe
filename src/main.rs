//! Platcore headless demo.
//!
//! Runs the movement core without a render host: loads a level, scripts a
//! short input session (swipe right, periodic jumps, stop), and logs the
//! player's state while the simulation ticks. Useful for eyeballing the
//! state machine and as a smoke test of the full wiring.
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- assets/levels/meadow.json --ticks 600
//! ```

mod components;
mod events;
mod game;
mod level;
mod physics;
mod resources;
mod systems;

use bevy_ecs::prelude::Messages;
use clap::Parser;
use glam::Vec2;
use log::{error, info, warn};
use std::path::PathBuf;

use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::events::intent::{PlayerIntent, TouchEvent};
use crate::level::LevelData;
use crate::resources::screengeometry::ScreenGeometry;
use crate::resources::tuning::MovementTuning;

/// Platcore 2D movement core demo
#[derive(Parser)]
#[command(version, about = "Headless demo of the platcore movement core")]
struct Cli {
    /// Level file to load.
    #[arg(default_value = "assets/levels/meadow.json")]
    level: PathBuf,

    /// Number of simulation ticks to run.
    #[arg(long, default_value_t = 600)]
    ticks: u32,

    /// Simulation tick rate in Hz.
    #[arg(long, default_value_t = 120)]
    tick_rate: u32,

    /// Viewport width in world units.
    #[arg(long, default_value_t = 640.0)]
    viewport_width: f32,

    /// Viewport height in world units.
    #[arg(long, default_value_t = 360.0)]
    viewport_height: f32,

    /// Optional tuning INI file.
    #[arg(long, value_name = "PATH")]
    tuning: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut tuning = MovementTuning::new();
    if let Some(path) = &cli.tuning {
        if let Err(e) = tuning.load_from_file(path) {
            warn!("Using default tuning: {}", e);
        }
    }

    let level = match LevelData::from_file(&cli.level) {
        Ok(level) => level,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let mut world = game::build_world();
    world.insert_resource(tuning);

    let viewport = Vec2::new(cli.viewport_width, cli.viewport_height);
    let player = match level::spawn_level(&mut world, &level, viewport) {
        Ok(player) => player,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let mut schedule = game::build_tick_schedule();
    let dt = 1.0 / cli.tick_rate as f32;

    for tick in 0..cli.ticks {
        // Scripted input: swipe right early on, jump periodically, let go
        // near the end so the player glides to a stop.
        if tick == 30 {
            let mut touches = world.resource_mut::<Messages<TouchEvent>>();
            touches.write(TouchEvent::Began {
                point: Vec2::new(100.0, 100.0),
            });
            touches.write(TouchEvent::Moved {
                point: Vec2::new(160.0, 100.0),
            });
        }
        if tick > 30 && tick % 240 == 120 {
            world
                .resource_mut::<Messages<PlayerIntent>>()
                .write(PlayerIntent::Jump);
        }
        if cli.ticks > 150 && tick == cli.ticks - 120 {
            world
                .resource_mut::<Messages<TouchEvent>>()
                .write(TouchEvent::Ended);
        }

        game::run_tick(&mut world, &mut schedule, dt);

        if tick % 60 == 0 {
            let state = world.get::<Player>(player);
            let position = world.get::<MapPosition>(player);
            let camera = world.resource::<ScreenGeometry>().camera_offset;
            if let (Some(state), Some(position)) = (state, position) {
                info!(
                    "tick {:4}: phase={:?} facing={:?} moving={} pos=({:.1}, {:.1}) camera=({:.1}, {:.1})",
                    tick,
                    state.phase,
                    state.facing,
                    state.moving,
                    position.pos.x,
                    position.pos.y,
                    camera.x,
                    camera.y
                );
            }
        }
    }

    info!("Demo finished after {} ticks", cli.ticks);
}
