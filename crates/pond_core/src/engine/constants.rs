//! Shared gameplay constants.
//!
//! Tunables that more than one agent reads live here; per-agent tuning
//! belongs in `engine::config`.

use super::vec2::Vec2;

/// Distance within which an agent counts as having reached its destination.
pub const TARGET_REACHED_TOLERANCE: f32 = 0.1;

/// True when `current` is within reach tolerance of `target`.
#[inline]
pub fn reached_target(current: Vec2, target: Vec2) -> bool {
    current.distance_to(target) <= TARGET_REACHED_TOLERANCE
}

/// Frog survival rules.
pub mod frog_rules {
    /// Hit points at spawn.
    pub const STARTING_HEALTH: u32 = 3;

    /// Flies eaten for the overlay to declare a win.
    pub const FLIES_TO_WIN: u32 = 10;

    /// Bubble spawn distance ahead of the frog, in body lengths.
    pub const BUBBLE_SPAWN_OFFSET: f32 = 1.3;
}
