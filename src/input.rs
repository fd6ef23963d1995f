//! Pointer input adapter
//!
//! Turns a press-drag-release gesture into a one-shot launch velocity. The
//! gesture may span any number of ticks; the simulation only ever sees the
//! final velocity, handed to [`MatchState::apply_shot`](crate::sim::MatchState::apply_shot)
//! by the host on release.

use glam::Vec2;

/// Tracks an in-progress aiming drag on the cue ball.
///
/// Pull-back aiming: dragging away from the target and releasing launches
/// the ball opposite the drag, scaled down by the configured divisor.
#[derive(Debug, Clone, Default)]
pub struct DragTracker {
    start: Option<Vec2>,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a drag if the press landed on the cue ball. Returns whether a
    /// drag is now being tracked.
    pub fn press(&mut self, pos: Vec2, cue_pos: Vec2, ball_radius: f32) -> bool {
        if pos.distance(cue_pos) < ball_radius {
            self.start = Some(pos);
        }
        self.start.is_some()
    }

    /// Finish the gesture. Returns the launch velocity if a drag was
    /// active, measured from press point to release point.
    pub fn release(&mut self, pos: Vec2, divisor: f32) -> Option<Vec2> {
        self.start.take().map(|start| (start - pos) / divisor)
    }

    /// Drop the gesture without shooting.
    pub fn cancel(&mut self) {
        self.start = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.start.is_some()
    }
}
