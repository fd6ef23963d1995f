//! Pocket Pool - a two-player billiards match engine
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball physics, collisions, match rules)
//! - `input`: Drag-gesture adapter turning pointer input into shots
//!
//! The crate owns physics and rules only. A host drives one [`sim::tick`]
//! per rendered frame, feeds shots in through [`sim::MatchState`], and draws
//! from [`sim::Snapshot`].

pub mod input;
pub mod sim;

pub use input::DragTracker;
pub use sim::{MatchConfig, MatchEvent, MatchState, Snapshot};

use glam::Vec2;

/// Match tuning constants (defaults for [`sim::MatchConfig`])
pub mod consts {
    /// Nominal host frame rate; one simulation tick per frame
    pub const TICK_RATE: u32 = 60;

    /// Outer frame dimensions, border included
    pub const FRAME_WIDTH: f32 = 900.0;
    pub const FRAME_HEIGHT: f32 = 500.0;
    /// Rail border between the frame edge and the playable cloth
    pub const BORDER_SIZE: f32 = 50.0;

    /// Ball radius
    pub const BALL_RADIUS: f32 = 10.0;

    /// Pocket capture radius
    pub const POCKET_RADIUS: f32 = 15.0;

    /// Per-tick fractional velocity loss
    pub const FRICTION: f32 = 0.02;
    /// Per-axis speed below which a ball is snapped to rest
    pub const STOP_THRESHOLD: f32 = 0.1;

    /// Ticks a transient caption stays up (2 seconds at the tick rate)
    pub const CAPTION_TICKS: u32 = 2 * TICK_RATE;
    /// Drag gesture length to launch speed divisor
    pub const DRAG_DIVISOR: f32 = 10.0;
}

/// Rotate a vector by `angle` radians counter-clockwise
#[inline]
pub fn rotate_vec(v: Vec2, angle: f32) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    Vec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}
