//! Pocket Pool entry point
//!
//! Plays a seeded exhibition match in the terminal: scripted shots are fed
//! through the same drag adapter a pointer host would use, one simulation
//! tick per frame, and each settled shot is reported with its caption.
//!
//! Usage: `pocket-pool [seed] [shots]`

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use pocket_pool::input::DragTracker;
use pocket_pool::sim::{CUE_BALL, MatchConfig, MatchState};

/// A stuck shot would mean a simulation bug; bail out well past any
/// realistic settle time.
const MAX_TICKS_PER_SHOT: u32 = 5_000;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = args
        .next()
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0x5157);
    let shots: u32 = args.next().and_then(|arg| arg.parse().ok()).unwrap_or(12);

    let config = MatchConfig::load();
    log::info!("exhibition match: seed {seed}, {shots} shots");

    let mut rng = Pcg32::seed_from_u64(seed);
    let mut state = MatchState::new(config);
    let mut drag = DragTracker::new();

    println!("{}", state.caption());
    for shot in 1..=shots {
        if state.cue_ball().potted {
            respot_cue(&mut state, &mut rng);
        }
        let vel = pick_shot(&state, &mut rng);

        // Route the scripted shot through the pull-back gesture, exactly as
        // a pointer host would deliver it.
        let cue_pos = state.cue_ball().pos;
        drag.press(cue_pos, cue_pos, state.config.ball_radius);
        let release = cue_pos - vel * state.config.drag_divisor;
        let Some(vel) = drag.release(release, state.config.drag_divisor) else {
            continue;
        };
        if let Err(err) = state.apply_shot(CUE_BALL, vel) {
            log::warn!("shot {shot} rejected: {err}");
            continue;
        }

        let mut settled = false;
        for _ in 0..MAX_TICKS_PER_SHOT {
            if let Some(event) = state.advance_frame() {
                println!("shot {shot:>2}: {}", event.message());
                settled = true;
                break;
            }
        }
        if !settled {
            log::error!("shot {shot} never settled, aborting");
            break;
        }
    }

    let score = state.snapshot().score;
    println!("final score: SOLID {} STRIPE {}", score.solid, score.stripe);
}

/// Put a scratched cue ball back, on the head spot when possible.
fn respot_cue(state: &mut MatchState, rng: &mut Pcg32) {
    let head_spot = Vec2::new(
        state.config.frame_width / 4.0,
        state.config.frame_height / 2.0,
    );
    if state.place_cue_ball(head_spot) {
        return;
    }
    // Custom configs can put the head spot off the cloth.
    let pos = Vec2::new(
        rng.random_range(state.table.left..state.table.right),
        rng.random_range(state.table.top..state.table.bottom),
    );
    state.place_cue_ball(pos);
}

/// Aim at a random live object ball with a little scatter, or fire blind
/// once the table is empty.
fn pick_shot(state: &MatchState, rng: &mut Pcg32) -> Vec2 {
    let cue_pos = state.cue_ball().pos;
    let targets: Vec<Vec2> = state
        .balls
        .iter()
        .filter(|ball| !ball.potted && !ball.is_cue())
        .map(|ball| ball.pos)
        .collect();

    let speed = rng.random_range(6.0..12.0);
    let dir = if targets.is_empty() {
        let theta = rng.random_range(0.0..std::f32::consts::TAU);
        Vec2::new(theta.cos(), theta.sin())
    } else {
        let target = targets[rng.random_range(0..targets.len())];
        let jitter = rng.random_range(-0.05..0.05f32);
        let aim = (target - cue_pos).normalize_or(Vec2::X);
        pocket_pool::rotate_vec(aim, jitter)
    };
    dir * speed
}
