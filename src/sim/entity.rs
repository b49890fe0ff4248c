//! Entity kinds and their physics profiles
//!
//! Every kind maps to a fixed body configuration: what it is (category),
//! what it wants to hear about (contact mask) and what it bounces off
//! (collision mask).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Stable handle for an entity (sorted by allocation order)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u32);

/// What a placed thing is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Wall,
    Vortex,
    Star,
    Finish,
    Player,
}

impl EntityKind {
    /// Level text token for this kind (the player has none)
    pub fn tile(&self) -> Option<char> {
        match self {
            EntityKind::Wall => Some('x'),
            EntityKind::Vortex => Some('v'),
            EntityKind::Star => Some('s'),
            EntityKind::Finish => Some('f'),
            EntityKind::Player => None,
        }
    }

    /// Single bit identifying this kind
    pub fn category(&self) -> CollisionCategory {
        match self {
            EntityKind::Player => CollisionCategory::PLAYER,
            EntityKind::Wall => CollisionCategory::WALL,
            EntityKind::Star => CollisionCategory::STAR,
            EntityKind::Vortex => CollisionCategory::VORTEX,
            EntityKind::Finish => CollisionCategory::FINISH,
        }
    }

    /// Fixed physics configuration for this kind
    pub fn profile(&self) -> BodyProfile {
        use CollisionCategory as C;
        let tile_circle = Shape::Circle {
            radius: TILE_SIZE / 2.0,
        };
        match self {
            EntityKind::Player => BodyProfile {
                category: C::PLAYER,
                contact_mask: C::STAR,
                collision_mask: C::WALL,
                dynamic: true,
                shape: Shape::Circle {
                    radius: PLAYER_RADIUS,
                },
            },
            EntityKind::Wall => BodyProfile {
                category: C::WALL,
                contact_mask: C::NONE,
                collision_mask: C::NONE,
                dynamic: false,
                shape: Shape::Rect {
                    size: Vec2::splat(TILE_SIZE),
                },
            },
            EntityKind::Vortex | EntityKind::Star | EntityKind::Finish => BodyProfile {
                category: self.category(),
                contact_mask: C::PLAYER,
                collision_mask: C::NONE,
                dynamic: false,
                shape: tile_circle,
            },
        }
    }
}

/// Collision category bits, one per kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CollisionCategory(pub u32);

impl CollisionCategory {
    pub const NONE: Self = Self(0);
    pub const PLAYER: Self = Self(1);
    pub const WALL: Self = Self(2);
    pub const STAR: Self = Self(4);
    pub const VORTEX: Self = Self(8);
    pub const FINISH: Self = Self(16);

    pub fn bits(&self) -> u32 {
        self.0
    }

    pub fn intersects(&self, other: CollisionCategory) -> bool {
        self.0 & other.0 != 0
    }
}

/// Body geometry handed to the physics host
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Circle { radius: f32 },
    Rect { size: Vec2 },
}

/// Physics configuration tuple for one kind
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyProfile {
    pub category: CollisionCategory,
    pub contact_mask: CollisionCategory,
    pub collision_mask: CollisionCategory,
    pub dynamic: bool,
    pub shape: Shape,
}

impl BodyProfile {
    /// Whether touching `other` raises a contact-begin event.
    ///
    /// Either side asking is enough.
    pub fn wants_contact(&self, other: &BodyProfile) -> bool {
        self.contact_mask.intersects(other.category) || other.contact_mask.intersects(self.category)
    }
}

/// A level entity placed on the grid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacedEntity {
    pub id: EntityId,
    pub kind: EntityKind,
    /// Row counted from the bottom of the level
    pub grid_row: usize,
    pub grid_col: usize,
    pub pos: Vec2,
}
