//! Physics engine seam.
//!
//! The movement core never talks to a concrete physics engine directly; it
//! goes through the [`PhysicsEngine`] trait held in [`PhysicsWorldRes`]. The
//! trait covers exactly what the core consumes: impulses and continuous
//! forces, velocity read/write, a downward point sample, a ray cast, per-body
//! collision/contact-test masks, and the contact-begin records produced by
//! the engine's own step.
//!
//! Submodules:
//! - [`categories`] – fixed bitmask registry for the world's collision layers
//! - [`kinematics`] – the bundled deterministic engine used by the demo
//!   binary and the integration tests

pub mod categories;
pub mod kinematics;

use bevy_ecs::prelude::Resource;
use glam::Vec2;
use smallvec::SmallVec;

use crate::components::surface::SurfaceKind;
use crate::physics::categories::CategoryMask;

/// Opaque handle to a body owned by the physics engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyId(pub u32);

/// One intersection returned by [`PhysicsEngine::ray_cast`].
#[derive(Debug, Clone, Copy)]
pub struct RayHit {
    /// What kind of surface the hit shape is.
    pub kind: SurfaceKind,
    /// World-space y of the shape's authored top edge.
    pub top: f32,
    /// World-space intersection point.
    pub point: Vec2,
    /// Surface normal at the intersection.
    pub normal: Vec2,
}

/// Contact-begin record produced while stepping the engine.
///
/// Contacts are raised only for categories present in the touching body's
/// contact-test mask, and only when the touch is new.
#[derive(Debug, Clone, Copy)]
pub struct ContactBegin {
    /// The dynamic body that touched something.
    pub body: BodyId,
    /// World-space contact point.
    pub point: Vec2,
}

/// The slice of a physics engine the movement core consumes.
///
/// Positions and velocities are owned by the engine; the core reads and
/// clamps them through this trait but never replaces a body wholesale.
pub trait PhysicsEngine: Send + Sync {
    /// Advance the simulation by `dt` seconds, integrating accumulated
    /// forces and recording contact-begin events.
    fn step(&mut self, dt: f32);

    /// Apply a one-shot impulse (instantaneous velocity change, scaled by
    /// the body's mass).
    fn apply_impulse(&mut self, body: BodyId, impulse: Vec2);

    /// Accumulate a continuous force to be integrated on the next step.
    fn apply_force(&mut self, body: BodyId, force: Vec2);

    fn velocity(&self, body: BodyId) -> Vec2;
    fn set_velocity(&mut self, body: BodyId, velocity: Vec2);
    fn position(&self, body: BodyId) -> Vec2;

    /// Classify the static shape occupying a world-space point, if any.
    fn point_query(&self, point: Vec2) -> Option<SurfaceKind>;

    /// All static shapes intersected by the segment `start..end`.
    fn ray_cast(&self, start: Vec2, end: Vec2) -> SmallVec<[RayHit; 4]>;

    /// Categories that physically block this body.
    fn collision_mask(&self, body: BodyId) -> CategoryMask;
    fn set_collision_mask(&mut self, body: BodyId, mask: CategoryMask);

    /// Categories whose touches raise a contact notification.
    fn contact_test_mask(&self, body: BodyId) -> CategoryMask;
    fn set_contact_test_mask(&mut self, body: BodyId, mask: CategoryMask);

    /// Take the contact-begin records accumulated since the last drain.
    fn drain_contacts(&mut self) -> Vec<ContactBegin>;
}

/// ECS resource owning the active physics engine behind the seam.
#[derive(Resource)]
pub struct PhysicsWorldRes(pub Box<dyn PhysicsEngine>);
