//! Physics host boundary
//!
//! The maze never integrates bodies itself. It registers bodies with a
//! [`PhysicsHost`], sets world gravity and consumes contact-begin events.

use std::collections::BTreeMap;

use glam::Vec2;

use super::entity::{BodyProfile, EntityId};

/// Everything a host needs to create a body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyDesc {
    pub pos: Vec2,
    pub profile: BodyProfile,
    pub allows_rotation: bool,
    pub linear_damping: f32,
}

impl BodyDesc {
    /// Static, non-rotating body with no damping
    pub fn fixed(pos: Vec2, profile: BodyProfile) -> Self {
        Self {
            pos,
            profile,
            allows_rotation: false,
            linear_damping: 0.0,
        }
    }
}

/// Contact-begin between two bodies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contact {
    pub a: EntityId,
    pub b: EntityId,
}

/// Capabilities the maze needs from a physics engine
pub trait PhysicsHost {
    fn add_body(&mut self, id: EntityId, desc: BodyDesc);
    fn remove_body(&mut self, id: EntityId);
    fn set_dynamic(&mut self, id: EntityId, dynamic: bool);
    fn set_gravity(&mut self, gravity: Vec2);
    fn body_position(&self, id: EntityId) -> Option<Vec2>;
    /// Advance the world and report contacts that began during the step
    fn step(&mut self, dt: f32) -> Vec<Contact>;
}

/// A body as tracked by [`HeadlessHost`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadlessBody {
    pub desc: BodyDesc,
    pub pos: Vec2,
    pub dynamic: bool,
}

/// Host without integration: bodies stay where they are put and contacts
/// are queued by the caller. Queued contacts only fire if both bodies
/// still exist and their masks ask for it.
#[derive(Debug, Default)]
pub struct HeadlessHost {
    bodies: BTreeMap<EntityId, HeadlessBody>,
    gravity: Vec2,
    pending: Vec<Contact>,
}

impl HeadlessHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gravity(&self) -> Vec2 {
        self.gravity
    }

    pub fn body(&self, id: EntityId) -> Option<&HeadlessBody> {
        self.bodies.get(&id)
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Teleport a body (stands in for integration)
    pub fn set_position(&mut self, id: EntityId, pos: Vec2) {
        if let Some(body) = self.bodies.get_mut(&id) {
            body.pos = pos;
        }
    }

    /// Fire a contact between `a` and `b` on the next step
    pub fn queue_contact(&mut self, a: EntityId, b: EntityId) {
        self.pending.push(Contact { a, b });
    }
}

impl PhysicsHost for HeadlessHost {
    fn add_body(&mut self, id: EntityId, desc: BodyDesc) {
        self.bodies.insert(
            id,
            HeadlessBody {
                desc,
                pos: desc.pos,
                dynamic: desc.profile.dynamic,
            },
        );
    }

    fn remove_body(&mut self, id: EntityId) {
        self.bodies.remove(&id);
    }

    fn set_dynamic(&mut self, id: EntityId, dynamic: bool) {
        if let Some(body) = self.bodies.get_mut(&id) {
            body.dynamic = dynamic;
        }
    }

    fn set_gravity(&mut self, gravity: Vec2) {
        self.gravity = gravity;
    }

    fn body_position(&self, id: EntityId) -> Option<Vec2> {
        self.bodies.get(&id).map(|b| b.pos)
    }

    fn step(&mut self, _dt: f32) -> Vec<Contact> {
        let pending = std::mem::take(&mut self.pending);
        pending
            .into_iter()
            .filter(|c| match (self.bodies.get(&c.a), self.bodies.get(&c.b)) {
                (Some(a), Some(b)) => a.desc.profile.wants_contact(&b.desc.profile),
                _ => false,
            })
            .collect()
    }
}
