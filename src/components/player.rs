//! Player state machine component.
//!
//! The [`Player`] component owns the discrete movement state of the single
//! player entity: the vertical-motion [`Phase`] (Grounded, Jumping, Falling),
//! the [`Facing`] direction, the orthogonal `moving` flag, and the
//! forced-ground watchdog timer. Systems drive the transitions; nothing else
//! mutates `phase` directly.
//!
//! # Transitions
//!
//! - `Grounded` --jump intent--> `Jumping` (one-shot upward impulse, walk
//!   animation stops, contact tests armed)
//! - `Grounded`/`Jumping` --vy below the fall threshold--> `Falling`
//! - `Jumping`/`Falling` --contact + surface beneath, or watchdog expiry-->
//!   `Grounded`
//!
//! Landing via contact and landing via the watchdog apply the identical
//! [`CollisionProfile`]; whichever resolves first in a tick wins and the
//! other path becomes a no-op (the `land` guard is the explicit
//! mutual-exclusion check).
//!
//! # Related
//!
//! - [`crate::systems::intent`] – applies locomotion and jump intents
//! - [`crate::systems::groundwatch`] – watchdog bookkeeping and the fall edge
//! - [`crate::events::contact`] – the contact landing path

use bevy_ecs::prelude::Component;

use crate::physics::categories::{Category, CategoryMask};
use crate::physics::{BodyId, PhysicsEngine};

/// Horizontal direction the player faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Right,
    Left,
}

/// The player's discrete vertical-motion state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Grounded,
    Jumping,
    Falling,
}

impl Phase {
    pub fn is_airborne(self) -> bool {
        matches!(self, Phase::Jumping | Phase::Falling)
    }
}

/// Per-edge collision/contact-test mask pair for the player body.
///
/// Profiles are recomputed on every transition, never cached. The fall and
/// landed edges deliberately leave the blocking mask as they found it: a
/// player standing on a floating platform must keep colliding with it even
/// if a fall edge fires while the platform is still beneath them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionProfile {
    /// Categories that physically block the player.
    pub collision: CategoryMask,
    /// Categories whose touches raise a contact notification.
    pub contact_test: CategoryMask,
}

impl CollisionProfile {
    /// Spawn profile: blocked by ground, no contact notifications while
    /// resting.
    pub fn initial() -> Self {
        Self {
            collision: Category::GroundFrame.mask(),
            contact_test: CategoryMask::EMPTY,
        }
    }

    /// Jump edge: pass up through floating platforms, get notified when
    /// touching anything landable.
    pub fn jump() -> Self {
        Self {
            collision: Category::GroundFrame.mask(),
            contact_test: Category::GroundFrame.mask() | Category::FloatingFloorFrame,
        }
    }

    /// Fall edge: arm contact notifications, keep the current blocking set.
    pub fn fall(current_collision: CategoryMask) -> Self {
        Self {
            collision: current_collision,
            contact_test: Category::GroundFrame.mask() | Category::FloatingFloorFrame,
        }
    }

    /// Landed edge: silence contact notifications, keep the current blocking
    /// set. Both landing paths (contact and watchdog) use this.
    pub fn landed(current_collision: CategoryMask) -> Self {
        Self {
            collision: current_collision,
            contact_test: CategoryMask::EMPTY,
        }
    }

    /// Ray-probe re-enable: the falling player is confirmed above a platform
    /// top, so platforms become solid again.
    pub fn platform_top() -> Self {
        let both = Category::GroundFrame.mask() | Category::FloatingFloorFrame;
        Self {
            collision: both,
            contact_test: both,
        }
    }

    /// Push both masks to the physics engine.
    pub fn apply(self, physics: &mut dyn PhysicsEngine, body: BodyId) {
        physics.set_collision_mask(body, self.collision);
        physics.set_contact_test_mask(body, self.contact_test);
    }
}

/// The player's movement state.
///
/// # Fields
/// - `body` - handle of the player's body in the physics engine
/// - `phase` - primary state-machine variable, starts `Grounded`
/// - `facing` - mutated only by locomotion intents
/// - `moving` - whether a locomotion intent is currently active
/// - `ground_timer` - seconds since the forced-ground watch armed, `None`
///   while disarmed. `phase == Grounded` implies `None`.
#[derive(Component, Debug)]
pub struct Player {
    pub body: BodyId,
    pub phase: Phase,
    pub facing: Facing,
    pub moving: bool,
    pub ground_timer: Option<f32>,
}

impl Player {
    pub fn new(body: BodyId) -> Self {
        Self {
            body,
            phase: Phase::Grounded,
            facing: Facing::Right,
            moving: false,
            ground_timer: None,
        }
    }

    /// Start or redirect locomotion. Orthogonal to `phase`.
    pub fn begin_move(&mut self, facing: Facing) {
        self.moving = true;
        self.facing = facing;
    }

    /// Stop locomotion. Facing is kept so landing resolves to the right idle
    /// texture.
    pub fn stop_moving(&mut self) {
        self.moving = false;
    }

    /// Jump edge. Returns false (and changes nothing) unless grounded;
    /// re-triggering a jump while airborne is a no-op by design of the
    /// transition table.
    pub fn begin_jump(&mut self) -> bool {
        if self.phase != Phase::Grounded {
            return false;
        }
        self.moving = false;
        self.phase = Phase::Jumping;
        true
    }

    /// Fall edge, from Grounded or Jumping. No-op when already falling.
    pub fn begin_fall(&mut self) -> bool {
        if self.phase == Phase::Falling {
            return false;
        }
        self.phase = Phase::Falling;
        true
    }

    /// Landed edge. Returns false when not airborne, which is the explicit
    /// check that keeps the contact path and the watchdog path from both
    /// resolving in one tick.
    pub fn land(&mut self) -> bool {
        if !self.phase.is_airborne() {
            return false;
        }
        self.phase = Phase::Grounded;
        self.ground_timer = None;
        true
    }
}
