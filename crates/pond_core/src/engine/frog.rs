//! Frog agent: click-to-move player controller.
//!
//! The frog steers with a plain arrive toward the last commanded point; the
//! arrive radius is recomputed per command from the command distance, so a
//! long hop glides in wide while a short hop stays tight. No avoidance: the
//! player routes around obstacles themselves.

use serde::{Deserialize, Serialize};

use crate::error::Result;

use super::config::FrogConfig;
use super::constants::{frog_rules, reached_target};
use super::physics::{ContactKind, PhysicsBody};
use super::steering;
use super::vec2::Vec2;

/// Win/lose status derived from the frog's counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchVerdict {
    Ongoing,
    FrogWon,
    FrogLost,
}

impl MatchVerdict {
    pub fn name(&self) -> &'static str {
        match self {
            MatchVerdict::Ongoing => "Ongoing",
            MatchVerdict::FrogWon => "FrogWon",
            MatchVerdict::FrogLost => "FrogLost",
        }
    }
}

/// Spawn data for a defensive bubble, relative to the frog.
///
/// Timers and despawn are host concerns; the core only fixes where a bubble
/// starts and how fast it leaves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BubbleLaunch {
    /// Offset from the frog's position.
    pub offset: Vec2,
    /// Initial velocity.
    pub velocity: Vec2,
}

/// Frog controller. Owns the move target and the survival counters.
#[derive(Debug, Clone)]
pub struct Frog {
    config: FrogConfig,
    move_target: Option<Vec2>,
    arrive_radius: f32,
    health: u32,
    flies_eaten: u32,
}

impl Frog {
    pub fn new(config: FrogConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            arrive_radius: config.min_arrive_radius,
            config,
            move_target: None,
            health: frog_rules::STARTING_HEALTH,
            flies_eaten: 0,
        })
    }

    pub fn config(&self) -> &FrogConfig {
        &self.config
    }

    /// Set a new move target. The arrive radius scales with the command
    /// distance, clamped to the configured bounds.
    pub fn command_move_to(&mut self, body_pos: Vec2, click_pos: Vec2) {
        self.arrive_radius = self.config.arrive_radius_for(body_pos.distance_to(click_pos));
        self.move_target = Some(click_pos);
    }

    /// One logic tick: arrive at the target while one is set, otherwise
    /// brake. Reaching the target clears it, which also flips the
    /// flag-visibility query off.
    pub fn tick<B: PhysicsBody>(&mut self, body: &mut B) {
        let pos = body.position();
        let desired = match self.move_target {
            Some(target) if !reached_target(pos, target) => {
                steering::basic_arrive(pos, target, self.arrive_radius, self.config.motion.max_speed)
            }
            Some(_) => {
                log::debug!("frog: reached move target");
                self.move_target = None;
                Vec2::ZERO
            }
            None => Vec2::ZERO,
        };

        let force = steering::desired_velocity_to_force(
            desired,
            body.velocity(),
            body.mass(),
            self.config.motion.accel_time,
            self.config.motion.max_accel,
        );
        body.apply_force(force);
    }

    /// Trigger notification. Returns true when a fly was eaten, so the host
    /// despawns it.
    pub fn on_trigger(&mut self, kind: ContactKind) -> bool {
        if kind == ContactKind::Fly {
            self.flies_eaten += 1;
            log::debug!("frog: ate a fly ({} total)", self.flies_eaten);
            true
        } else {
            false
        }
    }

    /// Snake bite landed; one hit point gone, floor at zero.
    pub fn take_hit(&mut self) {
        self.health = self.health.saturating_sub(1);
        log::debug!("frog: bitten, {} health left", self.health);
    }

    /// Bubble spawn data for the given facing direction (any length).
    pub fn spawn_bubble(&self, facing: Vec2) -> BubbleLaunch {
        let dir = facing.normalized();
        BubbleLaunch {
            offset: dir * frog_rules::BUBBLE_SPAWN_OFFSET,
            velocity: dir * self.config.motion.max_speed,
        }
    }

    // === Query surface for the UI/game-over collaborator ===

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn flies_eaten(&self) -> u32 {
        self.flies_eaten
    }

    /// Flag-icon visibility: is a move destination currently set?
    pub fn has_move_target(&self) -> bool {
        self.move_target.is_some()
    }

    pub fn move_target(&self) -> Option<Vec2> {
        self.move_target
    }

    /// Loss beats win when both thresholds are crossed in one frame.
    pub fn verdict(&self) -> MatchVerdict {
        if self.health == 0 {
            MatchVerdict::FrogLost
        } else if self.flies_eaten >= frog_rules::FLIES_TO_WIN {
            MatchVerdict::FrogWon
        } else {
            MatchVerdict::Ongoing
        }
    }
}
