//! Scene assembly: game state in, vertices out
//!
//! Never mutates the game. The star-dust net has its own RNG so drawing
//! cannot disturb the simulation's random stream.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::consts::*;
use crate::settings::Settings;
use crate::sim::{GameState, Paddle};

/// Score digit size, roughly a 30px font
const DIGIT_SIZE: Vec2 = Vec2::new(18.0, 30.0);
/// Baseline of the score digits
const SCORE_BASELINE: f32 = 40.0;
const BALL_SEGMENTS: u32 = 24;
const STAR_SEGMENTS: u32 = 6;

/// A single speck of the centre-line net
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub pos: Vec2,
    pub radius: f32,
}

/// Star-dust scattered around the centre line
#[derive(Debug, Clone)]
pub struct StarField {
    rng: Pcg32,
    stars: Vec<Star>,
}

impl StarField {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            stars: Vec::new(),
        }
    }

    /// Scatter `count` stars within a few pixels of the centre line
    pub fn scatter(&mut self, count: usize) {
        self.stars.clear();
        for _ in 0..count {
            let x = BOARD_WIDTH / 2.0 - 2.0 + self.rng.random_range(-2.0f32..2.0);
            let y = self.rng.random_range(0.0..BOARD_HEIGHT);
            let radius = self.rng.random_range(0.5f32..2.5);
            self.stars.push(Star {
                pos: Vec2::new(x, y),
                radius,
            });
        }
    }

    /// Rescatter when twinkling, or when the density changed
    pub fn update(&mut self, settings: &Settings) {
        let count = settings.star_count();
        if settings.twinkle() || self.stars.len() != count {
            self.scatter(count);
        }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }
}

fn paddle_vertices(paddle: &Paddle) -> Vec<Vertex> {
    shapes::rect(
        Vec2::new(paddle.x, paddle.y),
        Vec2::new(paddle.width, paddle.height),
        colors::PADDLE,
    )
}

fn score_vertices(value: u32, center_x: f32) -> Vec<Vertex> {
    let top = SCORE_BASELINE - DIGIT_SIZE.y;
    // Glow first so the digit draws over it
    let mut vertices = shapes::number(value, center_x + 1.5, top + 1.5, DIGIT_SIZE, colors::SCORE_GLOW);
    vertices.extend(shapes::number(value, center_x, top, DIGIT_SIZE, colors::SCORE));
    vertices
}

/// Build the full frame: board, net, paddles, ball, scores
pub fn build_scene(state: &GameState, stars: &StarField) -> Vec<Vertex> {
    let mut vertices = shapes::rect(Vec2::ZERO, Vec2::new(BOARD_WIDTH, BOARD_HEIGHT), colors::BOARD);

    for star in stars.stars() {
        vertices.extend(shapes::circle(star.pos, star.radius, colors::STAR_DUST, STAR_SEGMENTS));
    }

    vertices.extend(paddle_vertices(&state.player));
    vertices.extend(paddle_vertices(&state.opponent));

    let ball = &state.ball;
    let center = ball.pos + Vec2::splat(ball.size / 2.0);
    vertices.extend(shapes::circle(center, ball.size * 0.75, colors::BALL_GLOW, BALL_SEGMENTS));
    vertices.extend(shapes::circle(center, ball.size / 2.0, colors::BALL, BALL_SEGMENTS));

    vertices.extend(score_vertices(state.score.left, BOARD_WIDTH / 4.0));
    vertices.extend(score_vertices(state.score.right, BOARD_WIDTH * 3.0 / 4.0));

    vertices
}
