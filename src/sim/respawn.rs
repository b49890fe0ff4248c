//! Respawn sequence timer
//!
//! Submitted when the player hits a vortex, fires once after the full
//! move + shrink duration. There is no way to cancel it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::EntityId;

/// Rounding slack, relative to the stage boundary
const ROUNDING_SLACK: f64 = f32::EPSILON as f64 * 4.0;

/// Where the dying player is in its animation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RespawnStage {
    /// Sliding into the vortex
    Moving,
    /// Shrinking away
    Shrinking,
    /// Sequence has run to completion
    Done,
}

/// A pending respawn (the dying player plus its timer)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RespawnSequence {
    /// The player entity being removed
    pub player: EntityId,
    /// Vortex centre the player slides into
    pub target: Vec2,
    pub move_secs: f32,
    pub shrink_secs: f32,
    /// Summed in f64 so frame rounding doesn't drift
    elapsed: f64,
}

impl RespawnSequence {
    pub fn new(player: EntityId, target: Vec2, move_secs: f32, shrink_secs: f32) -> Self {
        Self {
            player,
            target,
            move_secs,
            shrink_secs,
            elapsed: 0.0,
        }
    }

    pub fn duration(&self) -> f32 {
        self.move_secs + self.shrink_secs
    }

    fn reached(&self, secs: f32) -> bool {
        let secs = f64::from(secs);
        self.elapsed >= secs - secs * ROUNDING_SLACK
    }

    pub fn stage(&self) -> RespawnStage {
        if !self.reached(self.move_secs) {
            RespawnStage::Moving
        } else if !self.reached(self.duration()) {
            RespawnStage::Shrinking
        } else {
            RespawnStage::Done
        }
    }

    /// Advance the timer. Returns true once the whole sequence has elapsed.
    pub fn advance(&mut self, dt: f32) -> bool {
        self.elapsed += f64::from(dt);
        self.stage() == RespawnStage::Done
    }
}
