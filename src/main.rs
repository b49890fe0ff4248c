//! Tilt Maze entry point
//!
//! Native builds run headless: load settings and a level, build the maze on
//! a [`HeadlessHost`] and play a short scripted session.
//!
//! Usage: `tilt-maze [LEVEL] [SETTINGS_JSON]`

use std::process::ExitCode;

use glam::Vec2;

use tilt_maze::consts::SIM_DT;
use tilt_maze::sim::{
    EntityKind, GameEvent, HeadlessHost, InputMode, InputSource, Maze, PointerInput, SensorInput,
    TickInput, tick,
};
use tilt_maze::{Level, Settings};

const DEFAULT_LEVEL: &str = "levels/level1.txt";

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Tilt Maze (headless) starting...");

    let mut args = std::env::args().skip(1);
    let level_path = args.next().unwrap_or_else(|| DEFAULT_LEVEL.to_string());
    let settings = match args.next() {
        Some(path) => Settings::load_or_default(path),
        None => Settings::default(),
    };

    let level = match Level::load(&level_path) {
        Ok(level) => level,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let mut host = HeadlessHost::new();
    let mut maze = Maze::new(level, settings, &mut host);

    let source: Box<dyn InputSource> = match maze.settings.input_mode {
        InputMode::Pointer => {
            let mut pointer = PointerInput::default();
            pointer.press(maze.settings.spawn_point + Vec2::new(100.0, -100.0));
            Box::new(pointer)
        }
        InputMode::Sensor => {
            let mut sensor = SensorInput::default();
            sensor.report(0.1, -0.3);
            Box::new(sensor)
        }
    };

    run_demo(&mut maze, &mut host, source.as_ref());
    println!("{}", maze.state().score_text());
    ExitCode::SUCCESS
}

/// Touch the first star, then the first vortex, and let the respawn play out
fn run_demo(maze: &mut Maze, host: &mut HeadlessHost, source: &dyn InputSource) {
    let input = TickInput {
        sample: source.sample(),
    };
    let star = maze.entities_of(EntityKind::Star).next().map(|e| e.id);
    let vortex = maze.entities_of(EntityKind::Vortex).next().map(|e| e.id);

    let mut frame = 0;
    for target in [star, vortex].into_iter().flatten() {
        host.queue_contact(maze.player().id, target);
        report(tick(maze, host, &input, SIM_DT), frame);
        frame += 1;
        while maze.is_game_over() {
            report(tick(maze, host, &input, SIM_DT), frame);
            frame += 1;
        }
    }
    log::info!("Gravity after {frame} frames: {:?}", maze.gravity());
}

fn report(events: Vec<GameEvent>, frame: u32) {
    for event in events {
        match &event {
            GameEvent::ScoreChanged { .. } => {
                if let Some(text) = event.score_text() {
                    log::info!("[{frame}] {text}");
                }
            }
            other => log::debug!("[{frame}] {other:?}"),
        }
    }
}
