//! Events emitted to the renderer/UI side
//!
//! The maze only describes what should happen on screen; it never draws.

use glam::Vec2;

use super::entity::{EntityId, EntityKind};

#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// Create a sprite for a new entity
    Spawned {
        id: EntityId,
        kind: EntityKind,
        pos: Vec2,
    },
    /// Drop an entity's sprite
    Removed { id: EntityId },
    /// Loop a rotation forever (vortices)
    Spin { id: EntityId, radians_per_sec: f32 },
    /// Sequential despawn: slide to `target`, shrink to `scale`, remove
    DespawnSequence {
        id: EntityId,
        target: Vec2,
        move_secs: f32,
        shrink_secs: f32,
        scale: f32,
    },
    /// Score changed; display text is `"Score: {score}"`
    ScoreChanged { score: i64 },
    /// Player touched the finish (level-complete hook)
    FinishReached { id: EntityId },
}

impl GameEvent {
    /// Label text for score changes
    pub fn score_text(&self) -> Option<String> {
        match self {
            GameEvent::ScoreChanged { score } => Some(format!("Score: {score}")),
            _ => None,
        }
    }
}
