//! Per-frame simulation step
//!
//! One call advances the match by exactly one display frame. The player
//! paddle is not touched here; input writes it before the step runs.

use rand::Rng;

use super::collision::{bounce_off_paddle, bounce_off_walls, scoring_side};
use super::opponent;
use super::state::{GameEvent, GamePhase, GameState, Side};
use crate::consts::*;
use crate::difficulty::Difficulty;

/// Per-frame parameters supplied by the session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickInput {
    /// Opponent paddle speed in pixels per frame
    pub opponent_speed: f32,
}

impl Default for TickInput {
    fn default() -> Self {
        Self::for_difficulty(Difficulty::default())
    }
}

impl TickInput {
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        Self {
            opponent_speed: OPPONENT_BASE_SPEED * difficulty.speed_multiplier(),
        }
    }
}

/// What a single step produced
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepOutcome {
    /// Notifications in the order they happened
    pub events: Vec<GameEvent>,
    /// Set when a side reached the winning score this frame
    pub winner: Option<Side>,
}

impl StepOutcome {
    pub fn is_terminal(&self) -> bool {
        self.winner.is_some()
    }
}

/// Advance the game state by one frame
///
/// A no-op while Idle. When a side reaches `WINNING_SCORE` the phase flips to
/// Idle and the rest of the frame is skipped, so the terminal event is
/// reported exactly once.
pub fn step<R: Rng>(state: &mut GameState, input: &TickInput, rng: &mut R) -> StepOutcome {
    let mut outcome = StepOutcome::default();
    if state.phase != GamePhase::Running {
        return outcome;
    }

    state.frame += 1;

    // Move ball
    let ball = &mut state.ball;
    ball.pos += ball.vel;

    bounce_off_walls(ball);

    for side in [Side::Left, Side::Right] {
        let paddle = match side {
            Side::Left => &state.player,
            Side::Right => &state.opponent,
        };
        if bounce_off_paddle(&mut state.ball, paddle, side).is_some() {
            outcome.events.push(GameEvent::PaddleHit { side });
        }
    }

    if let Some(side) = scoring_side(&state.ball) {
        let points = state.score.award(side);
        if points >= WINNING_SCORE {
            state.phase = GamePhase::Idle;
            state.winner = Some(side);
            outcome.winner = Some(side);
            log::info!(
                "Match over: {} wins {}-{}",
                side.as_str(),
                state.score.left,
                state.score.right
            );
            return outcome;
        }
        log::debug!("Point to {} ({}-{})", side.as_str(), state.score.left, state.score.right);
        outcome.events.push(GameEvent::PointScored { side });
        state.ball.reset(rng);
    }

    opponent::follow(&mut state.opponent, &state.ball, input.opponent_speed);

    outcome
}
