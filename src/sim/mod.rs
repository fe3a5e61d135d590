//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one step per frame)
//! - Injected, seeded RNG only
//! - Side effects reported as events, never performed
//! - No rendering or platform dependencies

pub mod collision;
pub mod opponent;
pub mod state;
pub mod tick;

pub use collision::{PaddleContact, bounce_off_paddle, bounce_off_walls, deflection_angle};
pub use state::{Ball, GameEvent, GamePhase, GameState, Paddle, Score, Side};
pub use tick::{StepOutcome, TickInput, step};
