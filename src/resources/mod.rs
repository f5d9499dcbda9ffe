//! ECS resources made available to systems.
//!
//! Overview
//! - `screengeometry` – viewport/level sizes and the clamped camera offsets
//! - `touch` – active touch gesture state and swipe classification
//! - `tuning` – every tuned movement constant, INI-overridable
//! - `worldtime` – simulation time and delta
pub mod screengeometry;
pub mod touch;
pub mod tuning;
pub mod worldtime;
