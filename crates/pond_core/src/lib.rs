//! # pond_core - Deterministic Pond Predator/Prey Simulation Core
//!
//! Movement and behavior engine for a 2D pond: a player-driven frog, a
//! patrolling snake with an aggro state machine, and the steering library
//! both are built on. Physics stays on the host side behind a small trait
//! seam, so the same controllers run under a real game engine or under the
//! bundled deterministic playfield.
//!
//! ## Features
//! - Steering behaviors that output desired velocities, converted to forces
//!   through a single mass/acceleration clamp
//! - Angular-sweep obstacle avoidance over a host-provided shape probe
//! - Snake FSM with one event entry point shared by the polling and
//!   collision paths
//! - 100% deterministic under the reference playfield (same seed = same
//!   episode)

pub mod engine;
pub mod error;

// Re-export the agent-facing surface
pub use engine::config::{AvoidanceParams, FrogConfig, MotionConfig, PatrolRoute, SnakeConfig};
pub use engine::frog::{BubbleLaunch, Frog, MatchVerdict};
pub use engine::physics::{
    AgentId, ContactEvent, ContactKind, ContactMask, PhysicsBody, ProbeCaster, ProbeHit,
};
pub use engine::snake::{BiteOutcome, Snake, SnakeEvent, SnakeState};
pub use engine::vec2::Vec2;
pub use error::{ConfigError, Result};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
