//! Tilt input mapping
//!
//! Two sources feed gravity: a drag-to-target pointer (desktop/simulator)
//! and the accelerometer (device). The mode is picked at startup from
//! settings and never changes mid-run.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Which input source drives gravity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    /// Gravity pulls toward the last pointer position
    Pointer,
    /// Gravity follows the accelerometer
    #[default]
    Sensor,
}

impl InputMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputMode::Pointer => "pointer",
            InputMode::Sensor => "sensor",
        }
    }
}

/// Raw directional sample in source units.
///
/// Pointer mode: world position of the pointer. Sensor mode: accelerometer
/// x/y in g.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TiltSample {
    pub dx: f32,
    pub dy: f32,
}

impl TiltSample {
    pub fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }
}

/// Anything that can be polled once per tick for a sample
pub trait InputSource {
    /// `None` while the source has nothing to report
    fn sample(&self) -> Option<TiltSample>;
}

/// Pointer drag tracking
#[derive(Debug, Clone, Default)]
pub struct PointerInput {
    last: Option<Vec2>,
}

impl PointerInput {
    pub fn press(&mut self, pos: Vec2) {
        self.last = Some(pos);
    }

    pub fn drag(&mut self, pos: Vec2) {
        self.last = Some(pos);
    }

    /// Lifting the pointer leaves gravity as it was
    pub fn release(&mut self) {
        self.last = None;
    }
}

impl InputSource for PointerInput {
    fn sample(&self) -> Option<TiltSample> {
        self.last.map(|p| TiltSample::new(p.x, p.y))
    }
}

/// Latest accelerometer reading
#[derive(Debug, Clone, Default)]
pub struct SensorInput {
    latest: Option<TiltSample>,
}

impl SensorInput {
    pub fn report(&mut self, x: f32, y: f32) {
        self.latest = Some(TiltSample::new(x, y));
    }
}

impl InputSource for SensorInput {
    fn sample(&self) -> Option<TiltSample> {
        self.latest
    }
}

/// Gravity for one sample, or `None` if it can't be computed.
///
/// Sensor axes are swapped and x negated to match landscape screen
/// orientation.
pub fn gravity_for(mode: InputMode, sample: TiltSample, player_pos: Option<Vec2>) -> Option<Vec2> {
    match mode {
        InputMode::Pointer => {
            let player = player_pos?;
            let diff = Vec2::new(sample.dx, sample.dy) - player;
            Some(diff / POINTER_GRAVITY_DIVISOR)
        }
        InputMode::Sensor => Some(Vec2::new(
            sample.dy * -SENSOR_GRAVITY_SCALE,
            sample.dx * SENSOR_GRAVITY_SCALE,
        )),
    }
}
