//! Tilt Maze - a tilt-controlled marble maze
//!
//! Core modules:
//! - `level`: Level text parsing into placed entities
//! - `sim`: Collision model, input mapping, contact resolution and game state
//! - `settings`: Runtime configuration

pub mod level;
pub mod settings;
pub mod sim;

pub use level::{Level, LevelError};
pub use settings::{Settings, SettingsError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, one frame of the host)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Side length of one grid tile in world units
    pub const TILE_SIZE: f32 = 64.0;

    /// Where the player is (re)created, near the top-left opening
    pub const PLAYER_SPAWN: (f32, f32) = (96.0, 672.0);
    pub const PLAYER_RADIUS: f32 = 32.0;
    /// Drag so the marble slows down once tilt stops
    pub const PLAYER_LINEAR_DAMPING: f32 = 0.5;

    /// Respawn sequence: slide into the vortex, then shrink away
    pub const RESPAWN_MOVE_SECS: f32 = 0.25;
    pub const RESPAWN_SHRINK_SECS: f32 = 0.25;
    /// Final scale of the shrink stage (never exactly zero)
    pub const RESPAWN_SHRINK_SCALE: f32 = 0.0001;

    /// Vortex spin rate (radians per second)
    pub const VORTEX_SPIN_RATE: f32 = std::f32::consts::PI;

    /// Pointer mode: world distance divided by this gives gravity
    pub const POINTER_GRAVITY_DIVISOR: f32 = 100.0;
    /// Sensor mode: accelerometer g to gravity units
    pub const SENSOR_GRAVITY_SCALE: f32 = 50.0;
}

/// Convert a grid cell (row counted from the bottom) to its world position
#[inline]
pub fn grid_to_world(row: usize, col: usize) -> Vec2 {
    use consts::TILE_SIZE;
    Vec2::new(TILE_SIZE * col as f32, TILE_SIZE * row as f32 + TILE_SIZE / 2.0)
}

/// Convert a world position back to (row, col).
///
/// Exact for every position produced by [`grid_to_world`].
#[inline]
pub fn world_to_grid(pos: Vec2) -> (usize, usize) {
    use consts::TILE_SIZE;
    let row = (pos.y - TILE_SIZE / 2.0) / TILE_SIZE;
    let col = pos.x / TILE_SIZE;
    (row.round().max(0.0) as usize, col.round().max(0.0) as usize)
}
