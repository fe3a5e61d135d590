//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Input events (pointer to board coordinates)
//! - Seeding the RNG from the clock

pub mod input;

pub use input::{PointerMapper, pointer_to_board_y};

/// Milliseconds since the Unix epoch, used as a run seed
#[cfg(target_arch = "wasm32")]
pub fn now_seed() -> u64 {
    js_sys::Date::now() as u64
}

/// Milliseconds since the Unix epoch, used as a run seed
#[cfg(not(target_arch = "wasm32"))]
pub fn now_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
