//! Match tuning configuration

use serde::{Deserialize, Serialize};

use crate::consts;

/// Data-driven tuning for a billiards match.
///
/// Fixed at [`MatchState::new`](super::MatchState::new); geometry and physics
/// never change mid-match.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Outer frame width, rails included.
    pub frame_width: f32,
    /// Outer frame height, rails included.
    pub frame_height: f32,
    /// Rail border between the frame edge and the playable cloth.
    pub border_size: f32,
    /// Ball radius.
    pub ball_radius: f32,
    /// Pocket capture radius (ball center within this distance is potted).
    pub pocket_radius: f32,
    /// Fractional velocity lost per tick (e.g. 0.02 = 2%).
    pub friction: f32,
    /// Per-axis speed below which a component snaps to zero.
    pub stop_threshold: f32,
    /// Ticks a transient caption message stays up.
    pub caption_ticks: u32,
    /// Drag gesture length to launch speed divisor.
    pub drag_divisor: f32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            frame_width: consts::FRAME_WIDTH,
            frame_height: consts::FRAME_HEIGHT,
            border_size: consts::BORDER_SIZE,
            ball_radius: consts::BALL_RADIUS,
            pocket_radius: consts::POCKET_RADIUS,
            friction: consts::FRICTION,
            stop_threshold: consts::STOP_THRESHOLD,
            caption_ticks: consts::CAPTION_TICKS,
            drag_divisor: consts::DRAG_DIVISOR,
        }
    }
}

impl MatchConfig {
    /// Load config from environment or JSON file, falling back to defaults.
    pub fn load() -> Self {
        if let Ok(path) = std::env::var("POCKET_POOL_CONFIG") {
            match std::fs::read_to_string(&path)
                .map_err(|e| e.to_string())
                .and_then(|s| serde_json::from_str::<Self>(&s).map_err(|e| e.to_string()))
            {
                Ok(config) => {
                    log::info!("Loaded match config from {path}");
                    return config;
                }
                Err(e) => log::warn!("Ignoring match config at {path}: {e}"),
            }
        }
        if let Ok(contents) = std::fs::read_to_string("config/match.json")
            && let Ok(config) = serde_json::from_str::<Self>(&contents)
        {
            log::info!("Loaded match config from config/match.json");
            return config;
        }
        log::info!("Using default match config");
        Self::default()
    }
}
