//! Platcore library.
//!
//! The movement-and-collision core of a 2D side-scrolling platformer:
//! player state machine, collision-mask policy, surface probing, the
//! forced-ground watchdog, and the bounded camera scroller, behind a narrow
//! physics-engine seam. Rendering, audio, and windowing are host concerns.
//!
//! This module exposes the crate's ECS components, resources, systems, and
//! events for use in integration tests and as a reusable library.

pub mod components;
pub mod events;
pub mod game;
pub mod level;
pub mod physics;
pub mod resources;
pub mod systems;
