//! Movement tuning resource.
//!
//! Every empirically tuned constant of the movement core lives here as a
//! named value with a safe default, optionally overridden from an INI file.
//! Missing keys keep their defaults, so a partial file is fine.
//!
//! # Configuration File Format
//!
//! ```ini
//! [locomotion]
//! move_force = 20.0
//! max_velocity = 250.0
//! airborne_cap_factor = 0.5
//! damping_factor = 0.85
//! fast_walk_threshold = 200.0
//! fast_walk_speed = 3.0
//!
//! [jump]
//! impulse = 18.0
//! fall_threshold = -9.8
//! fall_cap_trigger = 2.5
//! fall_cap_reset = 1.0
//!
//! [watchdog]
//! rest_threshold = 9.8
//! timer_limit = 0.1
//!
//! [player]
//! mass = 0.027
//! radius = 14.0
//!
//! [camera]
//! parallax_factor = 0.5
//! ```

use bevy_ecs::prelude::Resource;
use configparser::ini::Ini;
use log::info;
use std::path::{Path, PathBuf};

const DEFAULT_MOVE_FORCE: f32 = 20.0;
const DEFAULT_MAX_VELOCITY: f32 = 250.0;
const DEFAULT_AIRBORNE_CAP_FACTOR: f32 = 0.5;
const DEFAULT_DAMPING_FACTOR: f32 = 0.85;
const DEFAULT_FAST_WALK_THRESHOLD: f32 = 200.0;
const DEFAULT_FAST_WALK_SPEED: f32 = 3.0;
const DEFAULT_JUMP_IMPULSE: f32 = 18.0;
const DEFAULT_FALL_THRESHOLD: f32 = -9.8;
const DEFAULT_FALL_CAP_TRIGGER: f32 = 2.5;
const DEFAULT_FALL_CAP_RESET: f32 = 1.0;
const DEFAULT_REST_THRESHOLD: f32 = 9.8;
const DEFAULT_TIMER_LIMIT: f32 = 0.1;
const DEFAULT_PLAYER_MASS: f32 = 0.027;
const DEFAULT_PLAYER_RADIUS: f32 = 14.0;
const DEFAULT_PARALLAX_FACTOR: f32 = 0.5;

/// Tunable constants of the movement core.
///
/// The velocity-ish thresholds (`fall_threshold`, `rest_threshold`) are
/// plain tuned values; their numeric closeness to g is historical, not a
/// unit relationship.
#[derive(Resource, Debug, Clone)]
pub struct MovementTuning {
    /// Continuous horizontal drive force while a locomotion intent is active.
    pub move_force: f32,
    /// Horizontal speed cap while grounded.
    pub max_velocity: f32,
    /// Airborne horizontal cap as a fraction of `max_velocity`.
    pub airborne_cap_factor: f32,
    /// Per-tick horizontal velocity multiplier while grounded and idle.
    pub damping_factor: f32,
    /// |vx| at which the walk animation switches to the fast cycle.
    pub fast_walk_threshold: f32,
    /// Playback speed factor of the fast walk cycle.
    pub fast_walk_speed: f32,
    /// One-shot upward impulse of the jump edge.
    pub jump_impulse: f32,
    /// vy below which the falling transition fires.
    pub fall_threshold: f32,
    /// Downward cap trigger, as a multiple of `max_velocity`.
    pub fall_cap_trigger: f32,
    /// Downward velocity is reset to this multiple of `max_velocity` when
    /// the trigger is exceeded.
    pub fall_cap_reset: f32,
    /// |vy| below which an airborne player counts as resting for the
    /// forced-ground watchdog.
    pub rest_threshold: f32,
    /// Seconds the watchdog runs before forcing a landing.
    pub ground_timer_limit: f32,
    /// Player body mass, used when creating the physics body.
    pub player_mass: f32,
    /// Player body radius: half-height of the collision box and the probe
    /// reach below the feet.
    pub player_radius: f32,
    /// Horizontal parallax factor of the background layer.
    pub parallax_factor: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self::new()
    }
}

impl MovementTuning {
    /// Create a tuning set with the default values.
    pub fn new() -> Self {
        Self {
            move_force: DEFAULT_MOVE_FORCE,
            max_velocity: DEFAULT_MAX_VELOCITY,
            airborne_cap_factor: DEFAULT_AIRBORNE_CAP_FACTOR,
            damping_factor: DEFAULT_DAMPING_FACTOR,
            fast_walk_threshold: DEFAULT_FAST_WALK_THRESHOLD,
            fast_walk_speed: DEFAULT_FAST_WALK_SPEED,
            jump_impulse: DEFAULT_JUMP_IMPULSE,
            fall_threshold: DEFAULT_FALL_THRESHOLD,
            fall_cap_trigger: DEFAULT_FALL_CAP_TRIGGER,
            fall_cap_reset: DEFAULT_FALL_CAP_RESET,
            rest_threshold: DEFAULT_REST_THRESHOLD,
            ground_timer_limit: DEFAULT_TIMER_LIMIT,
            player_mass: DEFAULT_PLAYER_MASS,
            player_radius: DEFAULT_PLAYER_RADIUS,
            parallax_factor: DEFAULT_PARALLAX_FACTOR,
        }
    }

    /// The horizontal velocity cap for a phase.
    pub fn horizontal_cap(&self, airborne: bool) -> f32 {
        if airborne {
            self.max_velocity * self.airborne_cap_factor
        } else {
            self.max_velocity
        }
    }

    /// Load overrides from an INI file. Missing values retain their current
    /// (default) values. Returns an error if the file cannot be read or
    /// parsed.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> Result<(), String> {
        let path: PathBuf = path.as_ref().to_path_buf();
        let mut config = Ini::new();
        config
            .load(&path)
            .map_err(|e| format!("Failed to load tuning file: {}", e))?;

        let mut float = |section: &str, key: &str, slot: &mut f32| {
            if let Some(value) = config.getfloat(section, key).ok().flatten() {
                *slot = value as f32;
            }
        };

        // [locomotion] section
        float("locomotion", "move_force", &mut self.move_force);
        float("locomotion", "max_velocity", &mut self.max_velocity);
        float(
            "locomotion",
            "airborne_cap_factor",
            &mut self.airborne_cap_factor,
        );
        float("locomotion", "damping_factor", &mut self.damping_factor);
        float(
            "locomotion",
            "fast_walk_threshold",
            &mut self.fast_walk_threshold,
        );
        float("locomotion", "fast_walk_speed", &mut self.fast_walk_speed);

        // [jump] section
        float("jump", "impulse", &mut self.jump_impulse);
        float("jump", "fall_threshold", &mut self.fall_threshold);
        float("jump", "fall_cap_trigger", &mut self.fall_cap_trigger);
        float("jump", "fall_cap_reset", &mut self.fall_cap_reset);

        // [watchdog] section
        float("watchdog", "rest_threshold", &mut self.rest_threshold);
        float("watchdog", "timer_limit", &mut self.ground_timer_limit);

        // [player] section
        float("player", "mass", &mut self.player_mass);
        float("player", "radius", &mut self.player_radius);

        // [camera] section
        float("camera", "parallax_factor", &mut self.parallax_factor);

        info!(
            "Loaded tuning: force={} cap={} jump={} damping={} watchdog={}s",
            self.move_force,
            self.max_velocity,
            self.jump_impulse,
            self.damping_factor,
            self.ground_timer_limit
        );

        Ok(())
    }
}
