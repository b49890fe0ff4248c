//! End-to-end maze scenarios driven through the headless host

use glam::Vec2;

use tilt_maze::consts::SIM_DT;
use tilt_maze::sim::{
    EntityId, EntityKind, GameEvent, HeadlessHost, InputMode, Maze, PlayerState, RespawnStage,
    TickInput, TiltSample, tick,
};
use tilt_maze::{Level, LevelError, Settings};

fn build(text: &str, settings: Settings) -> (Maze, HeadlessHost) {
    let mut host = HeadlessHost::new();
    let level = Level::parse(text).expect("valid level");
    let mut maze = Maze::new(level, settings, &mut host);
    maze.drain_events();
    (maze, host)
}

fn first(maze: &Maze, kind: EntityKind) -> EntityId {
    maze.entities_of(kind).next().expect("entity present").id
}

#[test]
fn test_small_level_parses() {
    let level = Level::parse("x x\nx x\nxsfx").unwrap();
    assert_eq!(level.count(EntityKind::Wall), 6);
    assert_eq!(level.count(EntityKind::Star), 1);
    assert_eq!(level.count(EntityKind::Finish), 1);

    // Last text line is the bottom row
    let star = level
        .entities
        .iter()
        .find(|e| e.kind == EntityKind::Star)
        .unwrap();
    assert_eq!((star.grid_row, star.grid_col), (0, 1));
    let top_walls = level
        .entities
        .iter()
        .filter(|e| e.kind == EntityKind::Wall && e.grid_row == 2)
        .count();
    assert_eq!(top_walls, 2);
}

#[test]
fn test_bundled_level_loads() {
    let level = Level::load(concat!(env!("CARGO_MANIFEST_DIR"), "/levels/level1.txt")).unwrap();
    assert_eq!(level.rows, 12);
    assert_eq!(level.cols, 16);
    assert_eq!(level.count(EntityKind::Wall), 103);
    assert_eq!(level.count(EntityKind::Vortex), 6);
    assert_eq!(level.count(EntityKind::Star), 4);
    assert_eq!(level.count(EntityKind::Finish), 1);
}

#[test]
fn test_bad_level_is_an_error() {
    let err = Level::parse("xxx\nx#x").unwrap_err();
    assert!(matches!(err, LevelError::UnknownTile { tile: '#', .. }));
    assert!(err.to_string().contains("unknown level letter"));
}

#[test]
fn test_star_counts_once() {
    let (mut maze, mut host) = build("x x\nx x\nxsfx", Settings::default());
    let star = first(&maze, EntityKind::Star);
    let player = maze.player().id;

    host.queue_contact(player, star);
    let events = tick(&mut maze, &mut host, &TickInput::default(), SIM_DT);
    assert_eq!(maze.score(), 1);
    assert!(events.contains(&GameEvent::Removed { id: star }));
    assert!(events.contains(&GameEvent::ScoreChanged { score: 1 }));
    assert!(maze.entity(star).is_none());
    assert_eq!(maze.entities_of(EntityKind::Star).count(), 0);
    assert!(host.body(star).is_none());

    // Resolver refuses a second touch even if a host delivers one
    maze.handle_contact(&mut host, player, star);
    assert_eq!(maze.score(), 1);
}

#[test]
fn test_each_star_scores() {
    let (mut maze, mut host) = build("sss", Settings::default());
    let player = maze.player().id;
    let stars: Vec<EntityId> = maze.entities_of(EntityKind::Star).map(|e| e.id).collect();
    for star in &stars {
        host.queue_contact(*star, player);
    }
    tick(&mut maze, &mut host, &TickInput::default(), SIM_DT);
    assert_eq!(maze.score(), 3);
}

#[test]
fn test_vortex_respawn_cycle() {
    let (mut maze, mut host) = build("v  \n   \n s ", Settings::default());
    let vortex = first(&maze, EntityKind::Vortex);
    let vortex_pos = maze.entity(vortex).unwrap().pos;
    let old_player = maze.player().id;
    host.set_position(old_player, Vec2::new(10.0, 170.0));

    host.queue_contact(old_player, vortex);
    let events = tick(&mut maze, &mut host, &TickInput::default(), SIM_DT);
    assert_eq!(maze.score(), -1);
    assert!(maze.is_game_over());
    assert_eq!(maze.player().state, PlayerState::Dying);
    assert!(events.contains(&GameEvent::ScoreChanged { score: -1 }));
    assert!(events.iter().any(|e| matches!(
        e,
        GameEvent::DespawnSequence { id, target, .. } if *id == old_player && *target == vortex_pos
    )));

    // Contacts while dying are dropped
    let star = first(&maze, EntityKind::Star);
    host.queue_contact(old_player, star);
    host.queue_contact(old_player, vortex);

    // 30 frames at 60 Hz is the full 0.5s sequence
    let mut saw_shrink = false;
    for _ in 0..29 {
        tick(&mut maze, &mut host, &TickInput::default(), SIM_DT);
        assert!(maze.is_game_over());
        saw_shrink |= maze.respawn().map(|s| s.stage()) == Some(RespawnStage::Shrinking);
    }
    assert!(saw_shrink);
    assert_eq!(maze.score(), -1);
    assert!(maze.entity(star).is_some());

    let events = tick(&mut maze, &mut host, &TickInput::default(), SIM_DT);
    assert!(!maze.is_game_over());
    assert!(maze.respawn().is_none());
    assert!(events.contains(&GameEvent::Removed { id: old_player }));

    let new_player = maze.player().id;
    assert_ne!(new_player, old_player);
    assert_eq!(maze.player().state, PlayerState::Alive);
    assert!(host.body(old_player).is_none());
    let body = host.body(new_player).unwrap();
    assert_eq!(body.pos, maze.settings.spawn_point);
    assert!(body.dynamic);
    assert!(events.contains(&GameEvent::Spawned {
        id: new_player,
        kind: EntityKind::Player,
        pos: Vec2::new(96.0, 672.0),
    }));
}

#[test]
fn test_repeated_deaths_keep_subtracting() {
    let (mut maze, mut host) = build("v", Settings::default());
    let vortex = first(&maze, EntityKind::Vortex);
    for round in 1..=3 {
        host.queue_contact(maze.player().id, vortex);
        tick(&mut maze, &mut host, &TickInput::default(), SIM_DT);
        while maze.is_game_over() {
            tick(&mut maze, &mut host, &TickInput::default(), SIM_DT);
        }
        assert_eq!(maze.score(), -round);
    }
    // Level bodies plus exactly one player
    assert_eq!(host.body_count(), 2);
}

#[test]
fn test_gravity_frozen_during_respawn() {
    let (mut maze, mut host) = build("v", Settings::default());
    let vortex = first(&maze, EntityKind::Vortex);
    let input = TickInput {
        sample: Some(TiltSample::new(0.2, 0.4)),
    };
    tick(&mut maze, &mut host, &input, SIM_DT);
    let before = host.gravity();
    assert!((before - Vec2::new(-20.0, 10.0)).length() < 1e-4);

    host.queue_contact(maze.player().id, vortex);
    tick(&mut maze, &mut host, &TickInput::default(), SIM_DT);

    let tilted = TickInput {
        sample: Some(TiltSample::new(-1.0, 1.0)),
    };
    while maze.is_game_over() {
        assert_eq!(host.gravity(), before);
        tick(&mut maze, &mut host, &tilted, SIM_DT);
    }
    // The gate lifts before input mapping on the tick the respawn fires
    tick(&mut maze, &mut host, &tilted, SIM_DT);
    assert!((host.gravity() - Vec2::new(-50.0, -50.0)).length() < 1e-4);
}

#[test]
fn test_pointer_mode_pulls_toward_pointer() {
    let settings = Settings::with_input_mode(InputMode::Pointer);
    let (mut maze, mut host) = build("x", settings);
    let input = TickInput {
        sample: Some(TiltSample::new(196.0, 772.0)),
    };
    tick(&mut maze, &mut host, &input, SIM_DT);
    assert!((maze.gravity() - Vec2::new(1.0, 1.0)).length() < 1e-4);
}

#[test]
fn test_finish_changes_nothing() {
    let (mut maze, mut host) = build("f", Settings::default());
    let finish = first(&maze, EntityKind::Finish);
    host.queue_contact(maze.player().id, finish);
    let events = tick(&mut maze, &mut host, &TickInput::default(), SIM_DT);
    assert_eq!(events, vec![GameEvent::FinishReached { id: finish }]);
    assert_eq!(maze.score(), 0);
    assert!(!maze.is_game_over());
}
