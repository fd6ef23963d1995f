//! Table geometry: playable bounds, pockets, and the standard rack

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::config::MatchConfig;

/// Playable table surface (the cloth inside the rails) with its six pockets.
///
/// Coordinates are frame space: the origin is the outer frame's top-left
/// corner, `y` grows downward. Geometry is fixed for the whole match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table {
    /// Left cloth edge.
    pub left: f32,
    /// Right cloth edge.
    pub right: f32,
    /// Top cloth edge.
    pub top: f32,
    /// Bottom cloth edge.
    pub bottom: f32,
    /// Pocket centers: the four cloth corners plus the midpoints of the two
    /// long rails.
    pub pockets: [Vec2; 6],
    /// Shared capture radius for every pocket.
    pub pocket_radius: f32,
}

impl Table {
    pub fn new(config: &MatchConfig) -> Self {
        let left = config.border_size;
        let right = config.frame_width - config.border_size;
        let top = config.border_size;
        let bottom = config.frame_height - config.border_size;
        let mid_x = config.frame_width / 2.0;
        Self {
            left,
            right,
            top,
            bottom,
            pockets: [
                Vec2::new(left, top),
                Vec2::new(mid_x, top),
                Vec2::new(right, top),
                Vec2::new(left, bottom),
                Vec2::new(mid_x, bottom),
                Vec2::new(right, bottom),
            ],
            pocket_radius: config.pocket_radius,
        }
    }

    /// Whether a point lies on the cloth (rail edges inclusive).
    ///
    /// This is the cue-ball placement test: a point test, so a re-spotted
    /// ball may sit flush against a rail.
    #[inline]
    pub fn contains(&self, pos: Vec2) -> bool {
        self.left <= pos.x && pos.x <= self.right && self.top <= pos.y && pos.y <= self.bottom
    }

    /// Index of the pocket capturing a ball centered at `pos`, if any.
    #[inline]
    pub fn capturing_pocket(&self, pos: Vec2) -> Option<usize> {
        self.pockets
            .iter()
            .position(|&center| pos.distance(center) < self.pocket_radius)
    }
}

/// Start-of-match ball positions: index 0 is the cue ball on the head spot,
/// indices 1..=15 are the object balls racked in a five-row triangle with
/// its apex on the foot spot, numbered down the columns.
pub fn rack_positions(config: &MatchConfig) -> Vec<Vec2> {
    let spacing = 2.0 * config.ball_radius;
    let center_y = config.frame_height / 2.0;
    let mut positions = Vec::with_capacity(16);
    positions.push(Vec2::new(config.frame_width / 4.0, center_y));
    let apex_x = config.frame_width * 3.0 / 4.0;
    for row in 0..5u32 {
        for col in 0..=row {
            positions.push(Vec2::new(
                apex_x + spacing * row as f32,
                center_y + spacing * (col as f32 - row as f32 / 2.0),
            ));
        }
    }
    positions
}
