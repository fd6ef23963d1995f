//! Collision response for rails and ball pairs
//!
//! The tricky part of the table: equal-mass elastic exchange between two
//! moving balls, done in the rotated frame of their line of centers.

use glam::Vec2;

use super::state::Ball;
use super::table::Table;
use crate::rotate_vec;

/// Force a ball's velocity back toward the cloth when it crosses a rail.
///
/// Sign forcing only: the crossing axis keeps its speed, and no positional
/// correction is applied, so a fast ball may overlap a rail for a tick
/// before the reversed component carries it back out. Opposite rails check
/// independently, which also handles corner contact.
pub fn rail_rebound(ball: &mut Ball, table: &Table, radius: f32) {
    if ball.pos.x - radius < table.left {
        ball.vel.x = ball.vel.x.abs();
    }
    if ball.pos.x + radius > table.right {
        ball.vel.x = -ball.vel.x.abs();
    }
    if ball.pos.y - radius < table.top {
        ball.vel.y = ball.vel.y.abs();
    }
    if ball.pos.y + radius > table.bottom {
        ball.vel.y = -ball.vel.y.abs();
    }
}

/// Resolve one ball pair in contact: equal-mass frictionless elastic
/// exchange plus positional separation.
///
/// Both velocities are rotated into the frame where +x is the line of
/// centers, the normal (+x) components are swapped while each ball keeps
/// its tangential component, then both are rotated back. The pair is pushed
/// apart along the line of centers by half the penetration each, which
/// leaves them exactly in contact.
///
/// Coincident centers have no line of centers to exchange along, so the
/// pair is left untouched rather than letting a non-finite angle into the
/// velocities.
pub fn resolve_ball_pair(a: &mut Ball, b: &mut Ball, radius: f32) {
    if a.potted || b.potted {
        return;
    }
    let delta = b.pos - a.pos;
    let dist = delta.length();
    if dist >= 2.0 * radius || dist <= f32::EPSILON {
        return;
    }

    let angle = delta.y.atan2(delta.x);
    let va = rotate_vec(a.vel, -angle);
    let vb = rotate_vec(b.vel, -angle);
    a.vel = rotate_vec(Vec2::new(vb.x, va.y), angle);
    b.vel = rotate_vec(Vec2::new(va.x, vb.y), angle);

    let normal = delta / dist;
    let half_overlap = (2.0 * radius - dist) / 2.0;
    a.pos -= normal * half_overlap;
    b.pos += normal * half_overlap;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::MatchConfig;

    const RADIUS: f32 = 10.0;

    fn table() -> Table {
        Table::new(&MatchConfig::default())
    }

    fn ball_at(pos: Vec2, vel: Vec2) -> Ball {
        let mut ball = Ball::new(pos, Some(1));
        ball.vel = vel;
        ball
    }

    #[test]
    fn test_rail_rebound_forces_velocity_inward() {
        let table = table();

        let mut ball = ball_at(Vec2::new(55.0, 250.0), Vec2::new(-3.0, 1.0));
        rail_rebound(&mut ball, &table, RADIUS);
        assert_eq!(ball.vel, Vec2::new(3.0, 1.0));

        let mut ball = ball_at(Vec2::new(845.0, 250.0), Vec2::new(4.0, 1.0));
        rail_rebound(&mut ball, &table, RADIUS);
        assert_eq!(ball.vel, Vec2::new(-4.0, 1.0));

        let mut ball = ball_at(Vec2::new(450.0, 55.0), Vec2::new(1.0, -2.0));
        rail_rebound(&mut ball, &table, RADIUS);
        assert_eq!(ball.vel, Vec2::new(1.0, 2.0));

        let mut ball = ball_at(Vec2::new(450.0, 445.0), Vec2::new(1.0, 2.0));
        rail_rebound(&mut ball, &table, RADIUS);
        assert_eq!(ball.vel, Vec2::new(1.0, -2.0));
    }

    #[test]
    fn test_rail_rebound_handles_corner_contact() {
        let table = table();
        let mut ball = ball_at(Vec2::new(55.0, 55.0), Vec2::new(-3.0, -2.0));
        rail_rebound(&mut ball, &table, RADIUS);
        assert_eq!(ball.vel, Vec2::new(3.0, 2.0));
    }

    #[test]
    fn test_rail_rebound_ignores_interior_ball() {
        let table = table();
        let mut ball = ball_at(Vec2::new(450.0, 250.0), Vec2::new(-3.0, 2.0));
        rail_rebound(&mut ball, &table, RADIUS);
        assert_eq!(ball.vel, Vec2::new(-3.0, 2.0));
    }

    #[test]
    fn test_rail_rebound_keeps_position_uncorrected() {
        let table = table();
        let mut ball = ball_at(Vec2::new(45.0, 250.0), Vec2::new(-3.0, 0.0));
        rail_rebound(&mut ball, &table, RADIUS);
        assert_eq!(ball.pos, Vec2::new(45.0, 250.0));
        assert_eq!(ball.vel, Vec2::new(3.0, 0.0));
    }

    #[test]
    fn test_head_on_exchange_transfers_velocity() {
        let mut a = ball_at(Vec2::new(100.0, 100.0), Vec2::new(5.0, 0.0));
        let mut b = ball_at(Vec2::new(119.0, 100.0), Vec2::ZERO);
        resolve_ball_pair(&mut a, &mut b, RADIUS);

        assert_eq!(a.vel, Vec2::ZERO);
        assert_eq!(b.vel, Vec2::new(5.0, 0.0));
        // Half the one-unit overlap goes to each ball.
        assert_eq!(a.pos, Vec2::new(99.5, 100.0));
        assert_eq!(b.pos, Vec2::new(119.5, 100.0));
    }

    #[test]
    fn test_oblique_exchange_keeps_tangential_components() {
        let offset = Vec2::new(19.0, 0.0);
        let mut a = ball_at(Vec2::new(200.0, 200.0), Vec2::new(3.0, 4.0));
        let mut b = ball_at(a.pos + offset, Vec2::new(-1.0, 2.0));
        resolve_ball_pair(&mut a, &mut b, RADIUS);

        // Line of centers is +x: normal speeds swap, tangential stay.
        assert!((a.vel.x - (-1.0)).abs() < 1e-4);
        assert!((a.vel.y - 4.0).abs() < 1e-4);
        assert!((b.vel.x - 3.0).abs() < 1e-4);
        assert!((b.vel.y - 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_separated_pair_untouched() {
        let mut a = ball_at(Vec2::new(100.0, 100.0), Vec2::new(5.0, 0.0));
        let mut b = ball_at(Vec2::new(125.0, 100.0), Vec2::ZERO);
        resolve_ball_pair(&mut a, &mut b, RADIUS);
        assert_eq!(a.vel, Vec2::new(5.0, 0.0));
        assert_eq!(b.vel, Vec2::ZERO);
        assert_eq!(b.pos, Vec2::new(125.0, 100.0));
    }

    #[test]
    fn test_coincident_centers_skipped() {
        let pos = Vec2::new(100.0, 100.0);
        let mut a = ball_at(pos, Vec2::new(5.0, 0.0));
        let mut b = ball_at(pos, Vec2::new(-5.0, 0.0));
        resolve_ball_pair(&mut a, &mut b, RADIUS);
        assert_eq!(a.pos, pos);
        assert_eq!(b.pos, pos);
        assert!(a.vel.is_finite() && b.vel.is_finite());
        assert_eq!(a.vel, Vec2::new(5.0, 0.0));
    }

    #[test]
    fn test_potted_ball_out_of_collision_set() {
        let mut a = ball_at(Vec2::new(100.0, 100.0), Vec2::new(5.0, 0.0));
        let mut b = ball_at(Vec2::new(115.0, 100.0), Vec2::ZERO);
        b.potted = true;
        resolve_ball_pair(&mut a, &mut b, RADIUS);
        assert_eq!(a.vel, Vec2::new(5.0, 0.0));
        assert_eq!(b.vel, Vec2::ZERO);
        assert_eq!(b.pos, Vec2::new(115.0, 100.0));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn exchange_conserves_momentum_and_energy(
                theta in 0.0f32..std::f32::consts::TAU,
                dist in 1.0f32..19.9,
                avx in -8.0f32..8.0,
                avy in -8.0f32..8.0,
                bvx in -8.0f32..8.0,
                bvy in -8.0f32..8.0,
            ) {
                let center = Vec2::new(400.0, 250.0);
                let offset = Vec2::new(theta.cos(), theta.sin()) * dist;
                let mut a = ball_at(center, Vec2::new(avx, avy));
                let mut b = ball_at(center + offset, Vec2::new(bvx, bvy));

                let momentum_before = a.vel + b.vel;
                let energy_before = a.vel.length_squared() + b.vel.length_squared();
                resolve_ball_pair(&mut a, &mut b, RADIUS);
                let momentum_after = a.vel + b.vel;
                let energy_after = a.vel.length_squared() + b.vel.length_squared();

                prop_assert!((momentum_before - momentum_after).length() < 1e-3);
                prop_assert!((energy_before - energy_after).abs() < 1e-2);
            }

            #[test]
            fn exchange_separates_the_pair(
                theta in 0.0f32..std::f32::consts::TAU,
                dist in 1.0f32..19.9,
            ) {
                let center = Vec2::new(400.0, 250.0);
                let offset = Vec2::new(theta.cos(), theta.sin()) * dist;
                let mut a = ball_at(center, Vec2::new(2.0, 0.0));
                let mut b = ball_at(center + offset, Vec2::ZERO);

                resolve_ball_pair(&mut a, &mut b, RADIUS);
                prop_assert!(a.pos.distance(b.pos) >= 2.0 * RADIUS - 1e-2);
            }

            #[test]
            fn rail_rebound_preserves_speed(
                x in 0.0f32..900.0,
                y in 0.0f32..500.0,
                vx in -20.0f32..20.0,
                vy in -20.0f32..20.0,
            ) {
                let table = table();
                let mut ball = ball_at(Vec2::new(x, y), Vec2::new(vx, vy));
                rail_rebound(&mut ball, &table, RADIUS);

                if ball.pos.x - RADIUS < table.left {
                    prop_assert!(ball.vel.x >= 0.0);
                }
                if ball.pos.y + RADIUS > table.bottom {
                    prop_assert!(ball.vel.y <= 0.0);
                }
                prop_assert!((ball.vel.length() - Vec2::new(vx, vy).length()).abs() < 1e-4);
            }
        }
    }
}
