//! Fixed timestep simulation tick
//!
//! Core loop that advances a match deterministically: motion, collisions,
//! pocket scan, then shot settlement once everything is at rest.

use glam::Vec2;

use super::collision;
use super::state::{BallGroup, MatchEvent, MatchPhase, MatchState};

/// Advance the match by one tick.
///
/// Tick order: every live ball integrates motion and rail contact, ball
/// pairs resolve in ascending index order, pockets capture and classify,
/// the first pot of the match fixes the group assignment, and an in-flight
/// shot settles once every live ball is at rest. Returns the settled
/// outcome on exactly that tick, `None` on every other tick.
pub fn tick(state: &mut MatchState) -> Option<MatchEvent> {
    state.ticks += 1;
    if state.caption_ticks > 0 {
        state.caption_ticks -= 1;
    }

    move_balls(state);
    resolve_pairs(state);
    scan_pockets(state);
    assign_group(state);
    settle_shot(state)
}

fn move_balls(state: &mut MatchState) {
    let radius = state.config.ball_radius;
    for ball in &mut state.balls {
        if ball.potted {
            continue;
        }
        ball.advance(&state.config);
        collision::rail_rebound(ball, &state.table, radius);
    }
}

/// Each unordered pair exactly once, ascending `(i, j)`, so a multi-ball
/// cluster resolves the same way every run.
fn resolve_pairs(state: &mut MatchState) {
    let radius = state.config.ball_radius;
    for i in 0..state.balls.len() {
        let (head, tail) = state.balls.split_at_mut(i + 1);
        let a = &mut head[i];
        for b in tail.iter_mut() {
            collision::resolve_ball_pair(a, b, radius);
        }
    }
}

/// Capture balls that reached a pocket and apply the turn and score
/// consequences ball by ball. Several pots in one tick each classify
/// independently, so their turn toggles all land.
fn scan_pockets(state: &mut MatchState) {
    for id in 0..state.balls.len() {
        let ball = &state.balls[id];
        if ball.potted {
            continue;
        }
        let Some(pocket) = state.table.capturing_pocket(ball.pos) else {
            continue;
        };
        let group = ball.group;
        let number = ball.number;

        let ball = &mut state.balls[id];
        ball.potted = true;
        ball.vel = Vec2::ZERO;
        state.potted_this_shot = true;

        let outcome = classify_pot(state, group);
        state.last_outcome = Some(outcome);
        match number {
            Some(n) => log::info!("ball {n} potted in pocket {pocket}: {outcome:?}"),
            None => log::info!("cue ball potted in pocket {pocket}"),
        }
    }
}

/// Turn and score consequences of a single pot.
///
/// A cue-ball pot and an opponent-group pot each hand the turn over on the
/// spot; any other pot credits the side currently shooting.
fn classify_pot(state: &mut MatchState, group: BallGroup) -> MatchEvent {
    if group == BallGroup::Cue {
        state.turn = state.turn.opponent();
        return MatchEvent::FoulCueBall;
    }
    if let Some(assigned) = state.assigned_group
        && group != assigned
    {
        state.turn = state.turn.opponent();
        return MatchEvent::FoulOpponentBall;
    }
    state.score.tally(state.turn);
    MatchEvent::GoodShot
}

/// The first potted object ball fixes the match's group assignment for
/// good; until then every pot is legal.
fn assign_group(state: &mut MatchState) {
    if state.assigned_group.is_some() {
        return;
    }
    if let Some(ball) = state.balls.iter().find(|b| b.potted && !b.is_cue()) {
        state.assigned_group = Some(ball.group);
        log::info!("first pot fixes group assignment: {:?}", ball.group);
    }
}

/// Finish an in-flight shot once every live ball has stopped: a shot with
/// no pot at all is a miss and hands the turn over; otherwise the turn is
/// wherever pot classification left it and the last classification picks
/// the caption.
fn settle_shot(state: &mut MatchState) -> Option<MatchEvent> {
    if state.phase != MatchPhase::InFlight || !state.all_stopped() {
        return None;
    }
    state.phase = MatchPhase::Aiming;
    let event = if state.potted_this_shot {
        state.last_outcome.unwrap_or(MatchEvent::GoodShot)
    } else {
        state.turn = state.turn.opponent();
        MatchEvent::Miss
    };
    state.last_outcome = Some(event);
    state.potted_this_shot = false;
    state.caption_ticks = state.config.caption_ticks;
    log::info!("shot settled: {event:?}, next to shoot: {:?}", state.turn);
    Some(event)
}
