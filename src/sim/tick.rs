//! Per-frame update
//!
//! Order within a tick:
//! 1. Pending respawn timer fires if its time is up
//! 2. Input sample maps to gravity (skipped while respawning)
//! 3. Host steps physics and reports contacts
//! 4. Each contact is resolved against the maze

use super::event::GameEvent;
use super::input::{InputSource, TiltSample};
use super::maze::Maze;
use super::physics::PhysicsHost;

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Latest sample, `None` if the source has nothing yet
    pub sample: Option<TiltSample>,
}

impl TickInput {
    /// Poll a source once
    pub fn from_source(source: &impl InputSource) -> Self {
        Self {
            sample: source.sample(),
        }
    }
}

/// Advance the maze by one frame, returning everything it emitted
pub fn tick(
    maze: &mut Maze,
    host: &mut impl PhysicsHost,
    input: &TickInput,
    dt: f32,
) -> Vec<GameEvent> {
    maze.advance_respawn(host, dt);
    maze.apply_input(host, input.sample);

    for contact in host.step(dt) {
        maze.handle_contact(host, contact.a, contact.b);
    }

    maze.drain_events()
}
