//! ECS components for entities.
//!
//! Submodules overview:
//! - [`animation`] – active animation key and playback speed for the render host
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`player`] – the player state machine and its collision profiles
//! - [`surface`] – typed Ground/Floor tags on level geometry

pub mod animation;
pub mod mapposition;
pub mod player;
pub mod surface;
