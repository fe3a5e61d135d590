//! Collision detection and response for the ball
//!
//! Everything is axis-aligned: the ball is a square, paddles are rectangles,
//! and the board edges are lines. Paddle "spin" is a deflection angle picked
//! from where the ball struck, not real physics.

use super::state::{Ball, Paddle, Side};
use crate::consts::*;

/// Result of a paddle check
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddleContact {
    /// Strike offset from paddle centre, -1 (top) to 1 (bottom)
    pub offset: f32,
    /// Outgoing angle from the horizontal (radians)
    pub angle: f32,
}

/// Whether the ball is vertically within the paddle's span (edges inclusive)
#[inline]
pub fn overlaps_vertically(ball: &Ball, paddle: &Paddle) -> bool {
    ball.pos.y + ball.size >= paddle.y && ball.pos.y <= paddle.y + paddle.height
}

/// Whether the ball's leading edge has reached the paddle's leading edge
/// while overlapping it vertically
pub fn touches_paddle(ball: &Ball, paddle: &Paddle, side: Side) -> bool {
    let crossed = match side {
        Side::Left => ball.pos.x <= paddle.x + paddle.width,
        Side::Right => ball.pos.x + ball.size >= paddle.x,
    };
    crossed && overlaps_vertically(ball, paddle)
}

/// Normalized strike offset in [-1, 1]
///
/// 0 is the paddle centre. The raw ratio can exceed 1 when the ball clips a
/// corner, so it is clamped to keep the angle inside ±45°.
pub fn strike_offset(ball_center_y: f32, paddle: &Paddle) -> f32 {
    let half = paddle.height / 2.0;
    ((ball_center_y - paddle.center_y()) / half).clamp(-1.0, 1.0)
}

/// Map a strike offset linearly onto [-45°, +45°]
#[inline]
pub fn deflection_angle(offset: f32) -> f32 {
    offset.clamp(-1.0, 1.0) * MAX_BOUNCE_ANGLE
}

/// Top/bottom wall bounce. Returns true if the ball bounced.
pub fn bounce_off_walls(ball: &mut Ball) -> bool {
    if ball.pos.y <= 0.0 {
        ball.pos.y = 0.0;
        ball.vel.y = -ball.vel.y;
        true
    } else if ball.pos.y + ball.size >= BOARD_HEIGHT {
        ball.pos.y = BOARD_HEIGHT - ball.size;
        ball.vel.y = -ball.vel.y;
        true
    } else {
        false
    }
}

/// Paddle bounce for `side`
///
/// On contact the ball is snapped to the paddle's leading edge and relaunched
/// at `BALL_SPEED` away from the paddle.
pub fn bounce_off_paddle(ball: &mut Ball, paddle: &Paddle, side: Side) -> Option<PaddleContact> {
    if !touches_paddle(ball, paddle, side) {
        return None;
    }

    ball.pos.x = match side {
        Side::Left => paddle.x + paddle.width,
        Side::Right => paddle.x - ball.size,
    };

    let offset = strike_offset(ball.center_y(), paddle);
    let angle = deflection_angle(offset);
    ball.set_velocity(BALL_SPEED, angle, side.outgoing_direction());

    Some(PaddleContact { offset, angle })
}

/// Side that scores when the ball leaves the board horizontally
pub fn scoring_side(ball: &Ball) -> Option<Side> {
    if ball.pos.x < 0.0 {
        Some(Side::Right)
    } else if ball.pos.x > BOARD_WIDTH {
        Some(Side::Left)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use proptest::prelude::*;

    fn ball_at(x: f32, y: f32, vel: Vec2) -> Ball {
        Ball {
            pos: Vec2::new(x, y),
            vel,
            size: BALL_SIZE,
        }
    }

    #[test]
    fn test_center_strike_is_flat() {
        let paddle = Paddle::new(Side::Left);
        assert_eq!(paddle.y, 250.0);
        // Ball centre at y = 300, the paddle's centre
        let mut ball = ball_at(30.0, 292.0, Vec2::new(-6.0, 2.0));
        let contact = bounce_off_paddle(&mut ball, &paddle, Side::Left).expect("contact");
        assert_eq!(contact.offset, 0.0);
        assert_eq!(contact.angle, 0.0);
        assert_eq!(ball.vel.y, 0.0);
        assert_eq!(ball.vel.x, BALL_SPEED);
        assert_eq!(ball.pos.x, paddle.x + paddle.width);
    }

    #[test]
    fn test_right_paddle_sends_ball_left() {
        let paddle = Paddle::new(Side::Right);
        let mut ball = ball_at(paddle.x - 10.0, 260.0, Vec2::new(6.0, 0.0));
        let contact = bounce_off_paddle(&mut ball, &paddle, Side::Right).expect("contact");
        assert!(ball.vel.x < 0.0);
        assert!(contact.angle < 0.0, "upper half strike deflects upward");
        assert_eq!(ball.pos.x, paddle.x - BALL_SIZE);
        assert!((ball.vel.length() - BALL_SPEED).abs() < 1e-4);
    }

    #[test]
    fn test_miss_above_paddle() {
        let paddle = Paddle::new(Side::Left);
        let mut ball = ball_at(25.0, 200.0, Vec2::new(-6.0, 0.0));
        assert!(bounce_off_paddle(&mut ball, &paddle, Side::Left).is_none());
        assert_eq!(ball.pos.x, 25.0);
    }

    #[test]
    fn test_edge_contact_counts() {
        let paddle = Paddle::new(Side::Left);
        // Bottom of ball exactly on the paddle's top edge
        let ball = ball_at(30.0, paddle.y - BALL_SIZE, Vec2::ZERO);
        assert!(touches_paddle(&ball, &paddle, Side::Left));
    }

    #[test]
    fn test_corner_clip_is_clamped() {
        let paddle = Paddle::new(Side::Left);
        let mut ball = ball_at(30.0, paddle.y + paddle.height, Vec2::new(-6.0, 0.0));
        let contact = bounce_off_paddle(&mut ball, &paddle, Side::Left).expect("contact");
        assert_eq!(contact.offset, 1.0);
        assert_eq!(contact.angle, MAX_BOUNCE_ANGLE);
    }

    #[test]
    fn test_wall_bounce_top_and_bottom() {
        let mut ball = ball_at(100.0, -3.0, Vec2::new(4.0, -4.0));
        assert!(bounce_off_walls(&mut ball));
        assert_eq!(ball.pos.y, 0.0);
        assert_eq!(ball.vel.y, 4.0);

        let mut ball = ball_at(100.0, BOARD_HEIGHT - 10.0, Vec2::new(4.0, 4.0));
        assert!(bounce_off_walls(&mut ball));
        assert_eq!(ball.pos.y, BOARD_HEIGHT - BALL_SIZE);
        assert_eq!(ball.vel.y, -4.0);

        let mut ball = ball_at(100.0, 300.0, Vec2::new(4.0, 4.0));
        assert!(!bounce_off_walls(&mut ball));
    }

    #[test]
    fn test_scoring_side() {
        assert_eq!(scoring_side(&ball_at(-0.5, 100.0, Vec2::ZERO)), Some(Side::Right));
        assert_eq!(scoring_side(&ball_at(800.5, 100.0, Vec2::ZERO)), Some(Side::Left));
        assert_eq!(scoring_side(&ball_at(0.0, 100.0, Vec2::ZERO)), None);
        assert_eq!(scoring_side(&ball_at(BOARD_WIDTH, 100.0, Vec2::ZERO)), None);
    }

    proptest! {
        #[test]
        fn deflection_is_bounded_and_monotonic(a in -3.0f32..3.0, b in -3.0f32..3.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let angle_lo = deflection_angle(lo);
            let angle_hi = deflection_angle(hi);
            prop_assert!(angle_lo <= angle_hi);
            prop_assert!(angle_lo.abs() <= MAX_BOUNCE_ANGLE);
            prop_assert!(angle_hi.abs() <= MAX_BOUNCE_ANGLE);
        }

        #[test]
        fn wall_bounce_keeps_ball_on_board(y in -50.0f32..650.0, vy in -10.0f32..10.0) {
            let mut ball = ball_at(400.0, y, Vec2::new(6.0, vy));
            if bounce_off_walls(&mut ball) {
                prop_assert!(ball.pos.y >= 0.0);
                prop_assert!(ball.pos.y <= BOARD_HEIGHT - BALL_SIZE);
                prop_assert_eq!(ball.vel.y, -vy);
            }
        }
    }
}
