//! Systems of the movement core.
//!
//! Submodules overview
//! - [`animation`] – select the player's animation key and speed
//! - [`camera`] – recompute the clamped camera and parallax offsets
//! - [`contacts`] – drain engine contacts into observer events
//! - [`groundwatch`] – forced-ground watchdog, fall edge, platform re-enable
//! - [`intent`] – apply decoded intents to the state machine
//! - [`locomotion`] – drive force, damping, and the velocity clamps
//! - [`probe`] – point-sample and ray classification of what is beneath
//! - [`sync`] – mirror body positions into `MapPosition`
//! - [`time`] – update simulation time and delta
//! - [`touch`] – decode touch gestures into intents

pub mod animation;
pub mod camera;
pub mod contacts;
pub mod groundwatch;
pub mod intent;
pub mod locomotion;
pub mod probe;
pub mod sync;
pub mod time;
pub mod touch;
