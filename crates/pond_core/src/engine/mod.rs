//! Movement and behavior engine.
//!
//! `steering` computes desired velocities and converts them to forces,
//! `avoidance` bends targets around obstacles, `snake` and `frog` are the
//! agent controllers, and `physics` is the seam a host engine implements.
//! `playfield` is the bundled reference host used by tests and demos.

pub mod avoidance;
pub mod config;
pub mod constants;
pub mod frog;
pub mod physics;
pub mod playfield; // reference physics collaborator, not a real engine
pub mod snake;
pub mod steering;
pub mod timestep;
pub mod vec2;

pub use avoidance::avoidance_target;
pub use config::{AvoidanceParams, FrogConfig, MotionConfig, PatrolRoute, SnakeConfig};
pub use constants::TARGET_REACHED_TOLERANCE;
pub use frog::{BubbleLaunch, Frog, MatchVerdict};
pub use physics::{
    AgentId, ContactEvent, ContactKind, ContactMask, PhysicsBody, ProbeCaster, ProbeHit,
};
pub use snake::{BiteOutcome, Snake, SnakeEvent, SnakeState};
pub use timestep::{TICKS_PER_SECOND, TICK_DT};
pub use vec2::Vec2;
