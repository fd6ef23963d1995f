//! Match state and core simulation types
//!
//! All state that must be persisted for snapshots/determinism lives here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::config::MatchConfig;
use super::table::{self, Table};

/// Index of a ball in the match collection; stable for the whole match
/// because potted balls stay in place.
pub type BallId = usize;

/// The cue ball is always first in the collection.
pub const CUE_BALL: BallId = 0;

/// Ball grouping for the turn and foul rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BallGroup {
    /// The white ball; never scores
    Cue,
    /// Numbers 1 through 8 (the eight ball plays as a solid)
    Solid,
    /// Numbers 9 through 15
    Stripe,
}

impl BallGroup {
    /// Group implied by a ball number; `None` is the cue ball.
    pub fn from_number(number: Option<u8>) -> Self {
        match number {
            None => Self::Cue,
            Some(n) if n <= 8 => Self::Solid,
            Some(_) => Self::Stripe,
        }
    }

    /// The other shooting side. The cue group has no opponent.
    #[must_use]
    pub fn opponent(self) -> Self {
        match self {
            Self::Solid => Self::Stripe,
            Self::Stripe => Self::Solid,
            Self::Cue => Self::Cue,
        }
    }

    /// Scoreboard label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Cue => "CUE",
            Self::Solid => "SOLID",
            Self::Stripe => "STRIPE",
        }
    }
}

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Every live ball at rest, waiting for the next shot
    Aiming,
    /// Balls rolling after a shot
    InFlight,
}

/// Shot outcome, handed to the presentation layer to pick a caption.
///
/// Fouls here are advisory text: the turn consequences are already applied
/// when the pot is classified, so settlement only chooses what to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchEvent {
    /// The shot's final pot was legal
    GoodShot,
    /// Nothing potted; play passed to the other side
    Miss,
    /// The shot's final pot was the opponent's ball
    FoulOpponentBall,
    /// The shot's final pot was the cue ball
    FoulCueBall,
}

impl MatchEvent {
    /// Caption text for this outcome.
    pub fn message(self) -> &'static str {
        match self {
            Self::GoodShot => "Great shot!",
            Self::Miss => "What a miss!",
            Self::FoulOpponentBall => "Foul: potted the opponent's ball!",
            Self::FoulCueBall => "Foul: potted the cue ball!",
        }
    }
}

/// Rejected shot input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotError {
    /// Balls are still rolling from the previous shot
    ShotInFlight,
    /// The target ball is off the table
    BallPotted,
    /// No ball with that id
    UnknownBall,
}

impl std::fmt::Display for ShotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ShotInFlight => write!(f, "shot already in flight"),
            Self::BallPotted => write!(f, "ball is potted"),
            Self::UnknownBall => write!(f, "unknown ball id"),
        }
    }
}

impl std::error::Error for ShotError {}

/// A ball on the table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Velocity in table units per tick
    pub vel: Vec2,
    /// Accumulated rolling angle in radians; rendering only, physics never
    /// reads it
    pub spin_angle: f32,
    /// `None` for the cue ball, `Some(1..=15)` for object balls
    pub number: Option<u8>,
    pub group: BallGroup,
    pub potted: bool,
}

impl Ball {
    pub fn new(pos: Vec2, number: Option<u8>) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            spin_angle: 0.0,
            number,
            group: BallGroup::from_number(number),
            potted: false,
        }
    }

    #[inline]
    pub fn is_cue(&self) -> bool {
        self.number.is_none()
    }

    /// One tick of free motion: integrate position, bleed speed to friction,
    /// snap near-rest axes to exactly zero, advance the rolling angle.
    ///
    /// The per-axis snap is what makes "fully stopped" a reachable state
    /// instead of an asymptote.
    pub fn advance(&mut self, config: &MatchConfig) {
        if self.potted {
            return;
        }
        self.pos += self.vel;
        self.vel *= 1.0 - config.friction;
        if self.vel.x.abs() < config.stop_threshold {
            self.vel.x = 0.0;
        }
        if self.vel.y.abs() < config.stop_threshold {
            self.vel.y = 0.0;
        }
        self.spin_angle += self.vel.length() / config.ball_radius;
    }
}

/// Legally potted balls per side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub solid: u32,
    pub stripe: u32,
}

impl Score {
    /// Credit one legal pot to a side. The cue group never scores.
    pub fn tally(&mut self, group: BallGroup) {
        match group {
            BallGroup::Solid => self.solid += 1,
            BallGroup::Stripe => self.stripe += 1,
            BallGroup::Cue => {}
        }
    }
}

/// Per-ball render state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BallSnapshot {
    pub pos: Vec2,
    pub spin_angle: f32,
    pub number: Option<u8>,
    pub group: BallGroup,
    pub potted: bool,
}

/// Read-only view of the match for rendering and scoreboards
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub balls: Vec<BallSnapshot>,
    pub turn: BallGroup,
    pub score: Score,
    pub assigned_group: Option<BallGroup>,
    pub phase: MatchPhase,
}

/// Complete match state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchState {
    /// Fixed tuning for the whole match
    pub config: MatchConfig,
    /// Table geometry derived from the config
    pub table: Table,
    /// All sixteen balls; index 0 is the cue ball. Potted balls stay in the
    /// collection so ids remain stable.
    pub balls: Vec<Ball>,
    /// Side shooting next; never `Cue`
    pub turn: BallGroup,
    /// Group fixed by the first potted object ball, shared for the match
    pub assigned_group: Option<BallGroup>,
    pub score: Score,
    pub phase: MatchPhase,
    /// Most recent pot classification this shot, or the settled outcome of
    /// the previous shot once back in `Aiming`
    pub last_outcome: Option<MatchEvent>,
    /// Whether any ball went down during the current shot
    pub potted_this_shot: bool,
    /// Ticks remaining on the transient caption message
    pub caption_ticks: u32,
    /// Simulation tick counter
    pub ticks: u64,
}

impl MatchState {
    /// Set up a fresh match: full rack, stripes shoot first.
    pub fn new(config: MatchConfig) -> Self {
        let table = Table::new(&config);
        let balls = table::rack_positions(&config)
            .into_iter()
            .enumerate()
            .map(|(i, pos)| Ball::new(pos, if i == CUE_BALL { None } else { Some(i as u8) }))
            .collect();
        Self {
            config,
            table,
            balls,
            turn: BallGroup::Stripe,
            assigned_group: None,
            score: Score::default(),
            phase: MatchPhase::Aiming,
            last_outcome: None,
            potted_this_shot: false,
            caption_ticks: 0,
            ticks: 0,
        }
    }

    /// Run one full simulation tick. Returns the settled outcome on the
    /// tick the shot comes to rest, `None` otherwise.
    pub fn advance_frame(&mut self) -> Option<MatchEvent> {
        super::tick::tick(self)
    }

    /// Strike a ball. The cue ball is the normal target; any live ball is
    /// accepted so trick setups stay possible.
    pub fn apply_shot(&mut self, ball: BallId, vel: Vec2) -> Result<(), ShotError> {
        if self.phase == MatchPhase::InFlight {
            return Err(ShotError::ShotInFlight);
        }
        let target = self.balls.get_mut(ball).ok_or(ShotError::UnknownBall)?;
        if target.potted {
            return Err(ShotError::BallPotted);
        }
        target.vel = vel;
        self.phase = MatchPhase::InFlight;
        self.last_outcome = None;
        self.potted_this_shot = false;
        log::debug!("shot: ball {ball} struck at velocity {vel}");
        Ok(())
    }

    /// Return a potted cue ball to the cloth. Rejected (no state change)
    /// when the cue ball is live or `pos` is off the cloth.
    pub fn place_cue_ball(&mut self, pos: Vec2) -> bool {
        if !self.table.contains(pos) {
            return false;
        }
        let Some(cue) = self.balls.get_mut(CUE_BALL) else {
            return false;
        };
        if !cue.potted {
            return false;
        }
        cue.pos = pos;
        cue.vel = Vec2::ZERO;
        cue.potted = false;
        log::info!("cue ball re-spotted at {pos}");
        true
    }

    /// Read-only state for rendering and scoreboards.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            balls: self
                .balls
                .iter()
                .map(|ball| BallSnapshot {
                    pos: ball.pos,
                    spin_angle: ball.spin_angle,
                    number: ball.number,
                    group: ball.group,
                    potted: ball.potted,
                })
                .collect(),
            turn: self.turn,
            score: self.score,
            assigned_group: self.assigned_group,
            phase: self.phase,
        }
    }

    /// Caption line for a title bar: the transient outcome message while its
    /// timer runs, otherwise the standing turn and score line.
    pub fn caption(&self) -> String {
        if self.caption_ticks > 0
            && let Some(event) = self.last_outcome
        {
            return event.message().to_string();
        }
        format!(
            "Turn: {} | Score - SOLID: {} STRIPE: {}",
            self.turn.label(),
            self.score.solid,
            self.score.stripe
        )
    }

    /// Whether every live ball is fully at rest.
    pub fn all_stopped(&self) -> bool {
        self.balls
            .iter()
            .filter(|ball| !ball.potted)
            .all(|ball| ball.vel == Vec2::ZERO)
    }

    pub fn cue_ball(&self) -> &Ball {
        &self.balls[CUE_BALL]
    }
}
