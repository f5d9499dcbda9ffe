//! Bundled deterministic physics engine.
//!
//! [`KinematicsWorld`] is a minimal rigid-body world: axis-aligned static
//! rectangles, dynamic bodies integrated with semi-implicit Euler, mask
//! filtered blocking and contact notification, a point classifier and a
//! segment ray cast. It exists so the movement core can run headless (demo
//! binary, integration tests) without a host engine; a real game is expected
//! to put its own engine behind [`PhysicsEngine`] instead.
//!
//! Contact-begin records are produced during [`KinematicsWorld::step`] and
//! drained by the simulation tick, which keeps delivery strictly before the
//! post-physics systems run.

use glam::Vec2;
use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;

use crate::components::surface::SurfaceKind;
use crate::physics::categories::{Category, CategoryMask};
use crate::physics::{BodyId, ContactBegin, PhysicsEngine, RayHit};

/// Axis-aligned rectangle in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Build from a bottom-left corner and extents.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            max: Vec2::new(x + width, y + height),
        }
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Positive overlap extents on both axes, or `None` when separated.
    fn overlap(&self, other: &Aabb) -> Option<Vec2> {
        let x = self.max.x.min(other.max.x) - self.min.x.max(other.min.x);
        let y = self.max.y.min(other.max.y) - self.min.y.max(other.min.y);
        if x > 0.0 && y > 0.0 {
            Some(Vec2::new(x, y))
        } else {
            None
        }
    }

    /// Segment intersection via the slab method. Returns the entry distance
    /// `t` in `[0, 1]`, the entry point, and the entry-face normal.
    fn segment_hit(&self, start: Vec2, end: Vec2) -> Option<(f32, Vec2, Vec2)> {
        let delta = end - start;
        let mut t_min = 0.0f32;
        let mut t_max = 1.0f32;
        let mut normal = Vec2::new(0.0, 1.0);

        for axis in 0..2 {
            let (s, d, lo, hi) = if axis == 0 {
                (start.x, delta.x, self.min.x, self.max.x)
            } else {
                (start.y, delta.y, self.min.y, self.max.y)
            };
            if d.abs() < f32::EPSILON {
                if s < lo || s > hi {
                    return None;
                }
                continue;
            }
            let mut t1 = (lo - s) / d;
            let mut t2 = (hi - s) / d;
            // The entry face always opposes the ray direction on its axis.
            let axis_normal = if axis == 0 {
                Vec2::new(-d.signum(), 0.0)
            } else {
                Vec2::new(0.0, -d.signum())
            };
            if t1 > t2 {
                std::mem::swap(&mut t1, &mut t2);
            }
            if t1 > t_min {
                t_min = t1;
                normal = axis_normal;
            }
            t_max = t_max.min(t2);
            if t_min > t_max {
                return None;
            }
        }
        Some((t_min, start + delta * t_min, normal))
    }
}

/// One registered static shape.
#[derive(Debug, Clone, Copy)]
struct StaticShape {
    rect: Aabb,
    kind: SurfaceKind,
    category: Category,
}

/// One dynamic body. Position is the feet anchor: the collision box spans
/// `[pos.x - half_width, pos.x + half_width] x [pos.y, pos.y + height]`.
#[derive(Debug, Clone)]
struct Body {
    position: Vec2,
    velocity: Vec2,
    mass: f32,
    half_width: f32,
    height: f32,
    force: Vec2,
    collision_mask: CategoryMask,
    contact_test_mask: CategoryMask,
    touching: FxHashSet<usize>,
}

impl Body {
    fn collision_box(&self) -> Aabb {
        Aabb {
            min: Vec2::new(self.position.x - self.half_width, self.position.y),
            max: Vec2::new(self.position.x + self.half_width, self.position.y + self.height),
        }
    }
}

/// Minimal deterministic physics world; see the module docs.
pub struct KinematicsWorld {
    gravity: Vec2,
    bounds: Option<Aabb>,
    statics: Vec<StaticShape>,
    bodies: FxHashMap<BodyId, Body>,
    contacts: Vec<ContactBegin>,
    next_body: u32,
}

impl KinematicsWorld {
    pub fn new(gravity: Vec2) -> Self {
        Self {
            gravity,
            bounds: None,
            statics: Vec::new(),
            bodies: FxHashMap::default(),
            contacts: Vec::new(),
            next_body: 0,
        }
    }

    /// Install the level boundary walls: bodies are kept inside
    /// `[0, width] x [0, height]`.
    pub fn with_bounds(mut self, width: f32, height: f32) -> Self {
        self.bounds = Some(Aabb::new(0.0, 0.0, width, height));
        self
    }

    /// Register a static shape; its collision category follows its kind.
    pub fn add_static(&mut self, rect: Aabb, kind: SurfaceKind) {
        self.statics.push(StaticShape {
            rect,
            kind,
            category: kind.category(),
        });
    }

    /// Create a dynamic body with empty masks; callers apply a collision
    /// profile afterwards.
    pub fn add_body(&mut self, position: Vec2, half_width: f32, height: f32, mass: f32) -> BodyId {
        let id = BodyId(self.next_body);
        self.next_body += 1;
        self.bodies.insert(
            id,
            Body {
                position,
                velocity: Vec2::ZERO,
                mass,
                half_width,
                height,
                force: Vec2::ZERO,
                collision_mask: CategoryMask::EMPTY,
                contact_test_mask: CategoryMask::EMPTY,
                touching: FxHashSet::default(),
            },
        );
        id
    }

    fn step_body(&mut self, id: BodyId, dt: f32) {
        let Some(body) = self.bodies.get(&id) else {
            return;
        };
        let mut position = body.position;
        let mut velocity = body.velocity;
        let mass = body.mass;
        let half_width = body.half_width;
        let height = body.height;
        let collision_mask = body.collision_mask;
        let contact_test_mask = body.contact_test_mask;
        let previously_touching = body.touching.clone();

        velocity += self.gravity * dt;
        if mass > 0.0 {
            velocity += body.force / mass * dt;
        }
        position += velocity * dt;

        let mut touching: FxHashSet<usize> = FxHashSet::default();
        let mut new_contacts: Vec<ContactBegin> = Vec::new();

        for (index, shape) in self.statics.iter().enumerate() {
            let blocking = collision_mask.contains(shape.category);
            let notifying = contact_test_mask.contains(shape.category);
            if !blocking && !notifying {
                continue;
            }
            let body_box = Aabb {
                min: Vec2::new(position.x - half_width, position.y),
                max: Vec2::new(position.x + half_width, position.y + height),
            };
            let Some(overlap) = body_box.overlap(&shape.rect) else {
                continue;
            };
            // Contact point: centre of the overlap region, captured before
            // the push-out moves the body.
            let contact_point = Vec2::new(
                body_box.min.x.max(shape.rect.min.x) + overlap.x * 0.5,
                body_box.min.y.max(shape.rect.min.y) + overlap.y * 0.5,
            );
            if blocking {
                // Push out along the axis of least penetration and kill the
                // velocity component that drove the body in.
                if overlap.x < overlap.y {
                    if body_box.center().x < shape.rect.center().x {
                        position.x -= overlap.x;
                    } else {
                        position.x += overlap.x;
                    }
                    velocity.x = 0.0;
                } else if body_box.center().y < shape.rect.center().y {
                    position.y -= overlap.y;
                    if velocity.y > 0.0 {
                        velocity.y = 0.0;
                    }
                } else {
                    position.y += overlap.y;
                    if velocity.y < 0.0 {
                        velocity.y = 0.0;
                    }
                }
            }
            touching.insert(index);
            if notifying && !previously_touching.contains(&index) {
                new_contacts.push(ContactBegin {
                    body: id,
                    point: contact_point,
                });
            }
        }

        if let Some(bounds) = self.bounds {
            if position.x - half_width < bounds.min.x {
                position.x = bounds.min.x + half_width;
                velocity.x = velocity.x.max(0.0);
            } else if position.x + half_width > bounds.max.x {
                position.x = bounds.max.x - half_width;
                velocity.x = velocity.x.min(0.0);
            }
            if position.y < bounds.min.y {
                position.y = bounds.min.y;
                velocity.y = velocity.y.max(0.0);
            } else if position.y + height > bounds.max.y {
                position.y = bounds.max.y - height;
                velocity.y = velocity.y.min(0.0);
            }
        }

        self.contacts.append(&mut new_contacts);
        if let Some(body) = self.bodies.get_mut(&id) {
            body.position = position;
            body.velocity = velocity;
            body.force = Vec2::ZERO;
            body.touching = touching;
        }
    }
}

impl PhysicsEngine for KinematicsWorld {
    fn step(&mut self, dt: f32) {
        if dt <= 0.0 {
            return;
        }
        let ids: Vec<BodyId> = self.bodies.keys().copied().collect();
        for id in ids {
            self.step_body(id, dt);
        }
    }

    fn apply_impulse(&mut self, body: BodyId, impulse: Vec2) {
        if let Some(body) = self.bodies.get_mut(&body)
            && body.mass > 0.0
        {
            body.velocity += impulse / body.mass;
        }
    }

    fn apply_force(&mut self, body: BodyId, force: Vec2) {
        if let Some(body) = self.bodies.get_mut(&body) {
            body.force += force;
        }
    }

    fn velocity(&self, body: BodyId) -> Vec2 {
        self.bodies.get(&body).map(|b| b.velocity).unwrap_or(Vec2::ZERO)
    }

    fn set_velocity(&mut self, body: BodyId, velocity: Vec2) {
        if let Some(body) = self.bodies.get_mut(&body) {
            body.velocity = velocity;
        }
    }

    fn position(&self, body: BodyId) -> Vec2 {
        self.bodies.get(&body).map(|b| b.position).unwrap_or(Vec2::ZERO)
    }

    fn point_query(&self, point: Vec2) -> Option<SurfaceKind> {
        self.statics
            .iter()
            .find(|shape| shape.rect.contains(point))
            .map(|shape| shape.kind)
    }

    fn ray_cast(&self, start: Vec2, end: Vec2) -> SmallVec<[RayHit; 4]> {
        let mut hits: SmallVec<[(f32, RayHit); 4]> = SmallVec::new();
        for shape in &self.statics {
            if let Some((t, point, normal)) = shape.rect.segment_hit(start, end) {
                hits.push((
                    t,
                    RayHit {
                        kind: shape.kind,
                        top: shape.rect.max.y,
                        point,
                        normal,
                    },
                ));
            }
        }
        hits.sort_by(|a, b| a.0.total_cmp(&b.0));
        hits.into_iter().map(|(_, hit)| hit).collect()
    }

    fn collision_mask(&self, body: BodyId) -> CategoryMask {
        self.bodies
            .get(&body)
            .map(|b| b.collision_mask)
            .unwrap_or(CategoryMask::EMPTY)
    }

    fn set_collision_mask(&mut self, body: BodyId, mask: CategoryMask) {
        if let Some(body) = self.bodies.get_mut(&body) {
            body.collision_mask = mask;
        }
    }

    fn contact_test_mask(&self, body: BodyId) -> CategoryMask {
        self.bodies
            .get(&body)
            .map(|b| b.contact_test_mask)
            .unwrap_or(CategoryMask::EMPTY)
    }

    fn set_contact_test_mask(&mut self, body: BodyId, mask: CategoryMask) {
        if let Some(body) = self.bodies.get_mut(&body) {
            body.contact_test_mask = mask;
        }
    }

    fn drain_contacts(&mut self) -> Vec<ContactBegin> {
        std::mem::take(&mut self.contacts)
    }
}
