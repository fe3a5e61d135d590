//! Opponent paddle controller
//!
//! A plain proportional follower: step toward the ball's vertical centre at a
//! fixed speed. There is no dead zone, so the paddle can jitter by up to one
//! step when the ball sits near its centre.

use super::state::{Ball, Paddle};
use crate::clamp_paddle_y;

/// Next top edge for a paddle tracking `ball` at `speed` pixels per frame
pub fn track_ball(paddle: &Paddle, ball: &Ball, speed: f32) -> f32 {
    let target = ball.center_y();
    let center = paddle.center_y();

    let y = if target > center {
        paddle.y + speed
    } else if target < center {
        paddle.y - speed
    } else {
        paddle.y
    };

    clamp_paddle_y(y)
}

/// Apply one frame of tracking to `paddle`
pub fn follow(paddle: &mut Paddle, ball: &Ball, speed: f32) {
    let y = track_ball(paddle, ball, speed);
    paddle.dy = y - paddle.y;
    paddle.y = y;
}
