//! Maze simulation
//!
//! All gameplay logic lives here. Nothing in this module draws, plays
//! sound or integrates rigid bodies:
//! - Physics goes through the `PhysicsHost` trait
//! - Visuals go out as `GameEvent`s
//! - Time only advances through `tick`

pub mod entity;
pub mod event;
pub mod input;
pub mod maze;
pub mod physics;
pub mod respawn;
pub mod state;
pub mod tick;

pub use entity::{BodyProfile, CollisionCategory, EntityId, EntityKind, PlacedEntity, Shape};
pub use event::GameEvent;
pub use input::{InputMode, InputSource, PointerInput, SensorInput, TiltSample, gravity_for};
pub use maze::{Maze, Player, PlayerState};
pub use physics::{BodyDesc, Contact, HeadlessBody, HeadlessHost, PhysicsHost};
pub use respawn::{RespawnSequence, RespawnStage};
pub use state::GameState;
pub use tick::{TickInput, tick};
