//! Deterministic simulation module
//!
//! All match logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one tick per host frame)
//! - Stable iteration order (by ball index)
//! - No rendering or platform dependencies

pub mod collision;
pub mod config;
pub mod state;
pub mod table;
pub mod tick;

pub use collision::{rail_rebound, resolve_ball_pair};
pub use config::MatchConfig;
pub use state::{
    Ball, BallGroup, BallId, BallSnapshot, CUE_BALL, MatchEvent, MatchPhase, MatchState, Score,
    ShotError, Snapshot,
};
pub use table::{Table, rack_positions};
pub use tick::tick;
