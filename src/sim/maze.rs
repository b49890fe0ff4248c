//! The maze scene
//!
//! Owns the placed entities, the single player, the respawn timer and the
//! score gate. All physics goes through a [`PhysicsHost`]; all visuals go
//! out as [`GameEvent`]s.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{BodyProfile, EntityId, EntityKind, PlacedEntity, Shape};
use super::event::GameEvent;
use super::input::{TiltSample, gravity_for};
use super::physics::{BodyDesc, PhysicsHost};
use super::respawn::RespawnSequence;
use super::state::GameState;
use crate::consts::*;
use crate::level::Level;
use crate::settings::Settings;

/// Player lifecycle. A respawned player is a brand new entity that starts
/// out `Alive`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerState {
    Alive,
    /// Frozen and animating into a vortex
    Dying,
}

/// The marble
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: EntityId,
    pub state: PlayerState,
}

#[derive(Debug)]
pub struct Maze {
    pub settings: Settings,
    state: GameState,
    /// Sorted by id
    entities: Vec<PlacedEntity>,
    player: Player,
    respawn: Option<RespawnSequence>,
    gravity: Vec2,
    events: Vec<GameEvent>,
    next_id: u32,
}

impl Maze {
    /// Register every level body and the player with the host.
    ///
    /// World gravity starts at zero: the board is the floor.
    pub fn new(level: Level, settings: Settings, host: &mut impl PhysicsHost) -> Self {
        let next_id = level.max_id() + 1;
        let mut entities = level.entities;
        entities.sort_by_key(|e| e.id);

        let mut maze = Self {
            settings,
            state: GameState::new(),
            entities: Vec::new(),
            player: Player {
                id: EntityId(0),
                state: PlayerState::Alive,
            },
            respawn: None,
            gravity: Vec2::ZERO,
            events: Vec::new(),
            next_id,
        };

        host.set_gravity(Vec2::ZERO);
        for entity in &entities {
            host.add_body(entity.id, BodyDesc::fixed(entity.pos, entity.kind.profile()));
            maze.events.push(GameEvent::Spawned {
                id: entity.id,
                kind: entity.kind,
                pos: entity.pos,
            });
            if entity.kind == EntityKind::Vortex {
                maze.events.push(GameEvent::Spin {
                    id: entity.id,
                    radians_per_sec: VORTEX_SPIN_RATE,
                });
            }
        }
        maze.entities = entities;
        maze.spawn_player(host);

        log::info!(
            "Maze ready: {} entities, {} input",
            maze.entities.len(),
            maze.settings.input_mode.as_str()
        );
        maze
    }

    fn next_entity_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Create a fresh player at the spawn point
    fn spawn_player(&mut self, host: &mut impl PhysicsHost) {
        let id = self.next_entity_id();
        let pos = self.settings.spawn_point;
        let profile = BodyProfile {
            shape: Shape::Circle {
                radius: self.settings.player_radius,
            },
            ..EntityKind::Player.profile()
        };
        host.add_body(
            id,
            BodyDesc {
                pos,
                profile,
                allows_rotation: false,
                linear_damping: self.settings.linear_damping,
            },
        );
        self.player = Player {
            id,
            state: PlayerState::Alive,
        };
        self.events.push(GameEvent::Spawned {
            id,
            kind: EntityKind::Player,
            pos,
        });
    }

    /// Map this tick's sample to gravity. Frozen while the gate is set;
    /// no sample leaves gravity as it was.
    pub fn apply_input(&mut self, host: &mut impl PhysicsHost, sample: Option<TiltSample>) {
        if self.state.is_game_over() {
            return;
        }
        let Some(sample) = sample else {
            return;
        };
        let player_pos = host.body_position(self.player.id);
        if let Some(gravity) = gravity_for(self.settings.input_mode, sample, player_pos) {
            self.gravity = gravity;
            host.set_gravity(gravity);
        }
    }

    /// Contact-begin entry point. Contacts not involving the current player
    /// are ignored.
    pub fn handle_contact(&mut self, host: &mut impl PhysicsHost, a: EntityId, b: EntityId) {
        let other = if a == self.player.id {
            b
        } else if b == self.player.id {
            a
        } else {
            log::trace!("Ignoring contact {a:?}/{b:?} without player");
            return;
        };

        if self.state.is_game_over() {
            log::trace!("Ignoring contact with {other:?} while respawning");
            return;
        }

        let Some(entity) = self.entity(other).copied() else {
            log::trace!("Ignoring contact with removed entity {other:?}");
            return;
        };

        match entity.kind {
            EntityKind::Vortex => self.fall_into_vortex(host, &entity),
            EntityKind::Star => self.collect_star(host, entity.id),
            EntityKind::Finish => self.events.push(GameEvent::FinishReached { id: entity.id }),
            EntityKind::Wall | EntityKind::Player => {}
        }
    }

    fn fall_into_vortex(&mut self, host: &mut impl PhysicsHost, vortex: &PlacedEntity) {
        host.set_dynamic(self.player.id, false);
        self.state.begin_respawn_gate();
        self.state.apply_vortex(&mut self.events);
        self.player.state = PlayerState::Dying;

        let seq = RespawnSequence::new(
            self.player.id,
            vortex.pos,
            self.settings.respawn_move_secs,
            self.settings.respawn_shrink_secs,
        );
        self.events.push(GameEvent::DespawnSequence {
            id: self.player.id,
            target: vortex.pos,
            move_secs: seq.move_secs,
            shrink_secs: seq.shrink_secs,
            scale: RESPAWN_SHRINK_SCALE,
        });
        log::debug!("Player {:?} fell into vortex {:?}", self.player.id, vortex.id);
        self.respawn = Some(seq);
    }

    fn collect_star(&mut self, host: &mut impl PhysicsHost, id: EntityId) {
        self.entities.retain(|e| e.id != id);
        host.remove_body(id);
        self.events.push(GameEvent::Removed { id });
        self.state.apply_star(&mut self.events);
    }

    /// Run the pending respawn timer; on completion replace the player and
    /// lift the gate.
    pub fn advance_respawn(&mut self, host: &mut impl PhysicsHost, dt: f32) {
        let done = match self.respawn.as_mut() {
            Some(seq) => seq.advance(dt),
            None => false,
        };
        if !done {
            return;
        }
        let Some(seq) = self.respawn.take() else {
            return;
        };

        host.remove_body(seq.player);
        self.events.push(GameEvent::Removed { id: seq.player });
        self.spawn_player(host);
        self.state.end_respawn_gate();
        log::debug!("Player respawned as {:?}", self.player.id);
    }

    /// Take everything emitted since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn score(&self) -> i64 {
        self.state.score()
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn gravity(&self) -> Vec2 {
        self.gravity
    }

    pub fn respawn(&self) -> Option<&RespawnSequence> {
        self.respawn.as_ref()
    }

    pub fn entities(&self) -> &[PlacedEntity] {
        &self.entities
    }

    pub fn entity(&self, id: EntityId) -> Option<&PlacedEntity> {
        self.entities
            .binary_search_by_key(&id, |e| e.id)
            .ok()
            .map(|i| &self.entities[i])
    }

    pub fn entities_of(&self, kind: EntityKind) -> impl Iterator<Item = &PlacedEntity> {
        self.entities.iter().filter(move |e| e.kind == kind)
    }
}
