//! Game state and core simulation types
//!
//! Everything the step function reads or writes lives here. The renderer
//! only ever borrows it immutably.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::{clamp_paddle_y, velocity_from_angle};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Not simulating: start screen or end screen
    Idle,
    /// Simulating every scheduled frame
    Running,
}

/// Board side. The player defends the left, the opponent the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }

    /// Horizontal direction a ball travels after leaving this side's paddle
    pub fn outgoing_direction(&self) -> f32 {
        match self {
            Side::Left => 1.0,
            Side::Right => -1.0,
        }
    }
}

/// Discrete notifications emitted by a step, consumed after it completes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball bounced off a paddle
    PaddleHit { side: Side },
    /// `side` scored a point and the match continues
    PointScored { side: Side },
    /// The player (left) won the match
    GameWon,
    /// The opponent (right) won the match
    GameLost,
}

/// A vertical paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge (fixed per side)
    pub x: f32,
    /// Top edge
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Vertical movement applied during the last frame
    pub dy: f32,
}

impl Paddle {
    /// Create the paddle guarding `side`, vertically centred
    pub fn new(side: Side) -> Self {
        let x = match side {
            Side::Left => PADDLE_MARGIN,
            Side::Right => BOARD_WIDTH - PADDLE_MARGIN - PADDLE_WIDTH,
        };
        Self {
            x,
            y: Self::centered_y(),
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            dy: 0.0,
        }
    }

    #[inline]
    pub fn centered_y() -> f32 {
        BOARD_HEIGHT / 2.0 - PADDLE_HEIGHT / 2.0
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    pub fn recenter(&mut self) {
        self.y = Self::centered_y();
        self.dy = 0.0;
    }

    /// Move the top edge to `y`, clamped into the board
    pub fn set_y(&mut self, y: f32) {
        let clamped = clamp_paddle_y(y);
        self.dy = clamped - self.y;
        self.y = clamped;
    }
}

/// The ball. Position is its top-left corner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            pos: Self::center(),
            vel: Vec2::ZERO,
            size: BALL_SIZE,
        }
    }
}

impl Ball {
    /// Top-left position that centres the ball on the board
    #[inline]
    pub fn center() -> Vec2 {
        Vec2::new(BOARD_WIDTH / 2.0 - BALL_SIZE / 2.0, BOARD_HEIGHT / 2.0 - BALL_SIZE / 2.0)
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size / 2.0
    }

    /// Set velocity from a speed, an angle and a horizontal direction (±1)
    pub fn set_velocity(&mut self, speed: f32, angle: f32, direction: f32) {
        self.vel = velocity_from_angle(speed, angle, direction);
    }

    /// Re-centre with a launch angle uniform in ±45° and a coin-flip direction
    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        self.pos = Self::center();
        let angle = rng.random_range(-MAX_BOUNCE_ANGLE..=MAX_BOUNCE_ANGLE);
        let direction = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        self.set_velocity(BALL_SPEED, angle, direction);
    }
}

/// Running score for both sides
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Add a point for `side` and return its new total
    pub fn award(&mut self, side: Side) -> u32 {
        let slot = match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        };
        *slot += 1;
        *slot
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub phase: GamePhase,
    /// Player paddle (left)
    pub player: Paddle,
    /// Opponent paddle (right)
    pub opponent: Paddle,
    pub ball: Ball,
    pub score: Score,
    /// Winner of the last finished match (shown on the end screen)
    pub winner: Option<Side>,
    /// Frames simulated in the current match
    pub frame: u64,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Fresh state on the start screen: centred paddles, ball at rest
    pub fn new() -> Self {
        Self {
            phase: GamePhase::Idle,
            player: Paddle::new(Side::Left),
            opponent: Paddle::new(Side::Right),
            ball: Ball::default(),
            score: Score::default(),
            winner: None,
            frame: 0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.player,
            Side::Right => &self.opponent,
        }
    }

    /// Zero scores, centre paddles and relaunch the ball, leaving the phase alone
    pub fn reset_match<R: Rng>(&mut self, rng: &mut R) {
        self.score = Score::default();
        self.player.recenter();
        self.opponent.recenter();
        self.ball.reset(rng);
        self.winner = None;
        self.frame = 0;
    }

    /// Point the player paddle's centre at `center_y` (pointer position)
    pub fn set_player_target(&mut self, center_y: f32) {
        self.player.set_y(center_y - self.player.height / 2.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_paddles_start_on_their_sides() {
        let state = GameState::new();
        assert_eq!(state.player.x, 20.0);
        assert_eq!(state.opponent.x, 765.0);
        assert_eq!(state.player.y, 250.0);
        assert_eq!(state.opponent.y, 250.0);
        assert_eq!(state.phase, GamePhase::Idle);
    }

    #[test]
    fn test_ball_center_position() {
        assert_eq!(Ball::center(), Vec2::new(392.0, 292.0));
    }

    #[test]
    fn test_ball_reset_speed_and_angle() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut ball = Ball::default();
        for _ in 0..200 {
            ball.reset(&mut rng);
            assert_eq!(ball.pos, Ball::center());
            assert!((ball.vel.length() - BALL_SPEED).abs() < 1e-4);
            let angle = (ball.vel.y / BALL_SPEED).asin();
            assert!(angle.abs() <= MAX_BOUNCE_ANGLE + 1e-5);
            assert!(ball.vel.x.abs() >= BALL_SPEED * MAX_BOUNCE_ANGLE.cos() - 1e-4);
        }
    }

    #[test]
    fn test_ball_reset_picks_both_directions() {
        let mut rng = Pcg32::seed_from_u64(42);
        let mut ball = Ball::default();
        let mut left = 0;
        let mut right = 0;
        for _ in 0..100 {
            ball.reset(&mut rng);
            if ball.vel.x > 0.0 {
                right += 1;
            } else {
                left += 1;
            }
        }
        assert!(left > 0 && right > 0);
    }

    #[test]
    fn test_player_target_is_clamped() {
        let mut state = GameState::new();
        state.set_player_target(-500.0);
        assert_eq!(state.player.y, 0.0);
        state.set_player_target(5000.0);
        assert_eq!(state.player.y, BOARD_HEIGHT - PADDLE_HEIGHT);
        state.set_player_target(300.0);
        assert_eq!(state.player.y, 250.0);
    }

    #[test]
    fn test_score_award() {
        let mut score = Score::default();
        assert_eq!(score.award(Side::Right), 1);
        assert_eq!(score.award(Side::Right), 2);
        assert_eq!(score.award(Side::Left), 1);
        assert_eq!(score.get(Side::Right), 2);
    }
}
