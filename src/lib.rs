//! Star Pong - A two-paddle arcade game among the stars
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball motion, collisions, scoring, opponent)
//! - `session`: Idle/Running lifecycle around the simulation step
//! - `difficulty`: Opponent speed tiers and completion progress
//! - `persistence`: Progress stores (memory, file, LocalStorage)
//! - `renderer`: WebGPU rendering pipeline
//! - `platform`: Browser/native platform abstraction
//! - `audio`: Sound cues for simulation events

pub mod audio;
pub mod difficulty;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;

pub use difficulty::{Difficulty, Progress};
pub use session::{FrameReport, Session};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Board dimensions (pixels, origin top-left, y grows downward)
    pub const BOARD_WIDTH: f32 = 800.0;
    pub const BOARD_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 15.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Gap between a paddle and its side of the board
    pub const PADDLE_MARGIN: f32 = 20.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 16.0;
    /// Ball speed in pixels per frame, constant after every launch and hit
    pub const BALL_SPEED: f32 = 6.0;

    /// Points needed to win a match
    pub const WINNING_SCORE: u32 = 3;

    /// Largest deflection and launch angle (45 degrees)
    pub const MAX_BOUNCE_ANGLE: f32 = std::f32::consts::FRAC_PI_4;

    /// Opponent paddle speed (pixels per frame) before the difficulty multiplier
    pub const OPPONENT_BASE_SPEED: f32 = 1.0;
}

/// Clamp a paddle's top edge into the board
#[inline]
pub fn clamp_paddle_y(y: f32) -> f32 {
    y.clamp(0.0, consts::BOARD_HEIGHT - consts::PADDLE_HEIGHT)
}

/// Velocity for a ball travelling at `speed` with `angle` from the horizontal
///
/// `direction` is +1 for rightward and -1 for leftward travel. Positive angles
/// point down the board.
#[inline]
pub fn velocity_from_angle(speed: f32, angle: f32, direction: f32) -> glam::Vec2 {
    glam::Vec2::new(direction * speed * angle.cos(), speed * angle.sin())
}
