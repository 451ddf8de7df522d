//! Snake agent: finite state machine plus per-tick steering.
//!
//! ## State transitions
//! ```text
//! PatrolAway <-> PatrolHome      (ReachedTarget ping-pong)
//! PatrolAway/PatrolHome -> Aggro (FrogInRange)
//! Aggro -> PatrolHome            (FrogOutOfRange)
//! any -> Harmless                (HitFrog, global override)
//! Harmless -> PatrolAway         (ReachedTarget at home)
//! ```
//!
//! The FSM is a single pure function over (state, event); both the per-tick
//! distance checks and the collision notifications feed it through the one
//! `handle_event` entry point, which is what keeps the HitFrog override
//! ahead of every state-specific rule.

use serde::{Deserialize, Serialize};

use crate::error::Result;

use super::config::{PatrolRoute, SnakeConfig};
use super::constants::reached_target;
use super::physics::{ContactKind, PhysicsBody, ProbeCaster};
use super::steering;
use super::vec2::Vec2;

/// Snake behavior mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
pub enum SnakeState {
    /// Heading for the patrol point.
    #[default]
    PatrolAway,

    /// Heading back home.
    PatrolHome,

    /// Chasing the frog.
    Aggro,

    /// Stunned after a hit; slinks home and cannot bite.
    Harmless,
}

impl SnakeState {
    /// Only a hostile snake bites or reacts to bubbles.
    pub fn is_hostile(&self) -> bool {
        matches!(self, SnakeState::Aggro)
    }

    pub fn name(&self) -> &'static str {
        match self {
            SnakeState::PatrolAway => "PatrolAway",
            SnakeState::PatrolHome => "PatrolHome",
            SnakeState::Aggro => "Aggro",
            SnakeState::Harmless => "Harmless",
        }
    }
}

/// Snake FSM input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
pub enum SnakeEvent {
    /// Frog closer than aggro range.
    FrogInRange,
    /// Frog farther than de-aggro range.
    FrogOutOfRange,
    /// Bit the frog, or swallowed a bubble, while hostile.
    HitFrog,
    /// Within tolerance of the current patrol destination.
    ReachedTarget,
}

/// The transition table. Unlisted (state, event) pairs leave the state
/// unchanged; the HitFrog arm comes first so it overrides every
/// state-specific rule.
pub fn transition(state: SnakeState, event: SnakeEvent) -> SnakeState {
    use SnakeEvent::*;
    use SnakeState::*;
    match (state, event) {
        (_, HitFrog) => Harmless,
        (PatrolAway, FrogInRange) => Aggro,
        (PatrolAway, ReachedTarget) => PatrolHome,
        (PatrolHome, FrogInRange) => Aggro,
        (PatrolHome, ReachedTarget) => PatrolAway,
        (Harmless, ReachedTarget) => PatrolAway,
        (Aggro, FrogOutOfRange) => PatrolHome,
        (state, _) => state,
    }
}

/// Which steering call the snake runs this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SteerKind {
    Seek,
    Arrive,
}

/// Target plus behavior selected by the policy, consumed by the steering
/// library.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SteeringPlan {
    pub target: Vec2,
    pub kind: SteerKind,
}

/// Map the current state to a movement plan. Pure; the steering library
/// stays state-agnostic.
pub fn steering_policy(state: SnakeState, route: PatrolRoute, frog_pos: Vec2) -> SteeringPlan {
    match state {
        SnakeState::PatrolAway => {
            SteeringPlan { target: route.patrol_point, kind: SteerKind::Arrive }
        }
        SnakeState::PatrolHome | SnakeState::Harmless => {
            SteeringPlan { target: route.home, kind: SteerKind::Arrive }
        }
        SnakeState::Aggro => SteeringPlan { target: frog_pos, kind: SteerKind::Seek },
    }
}

/// What a collision did, from the host's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BiteOutcome {
    /// Nothing the host needs to act on.
    Ignored,
    /// The frog was bitten; the host decrements its health once.
    BitFrog,
}

/// Snake controller. Owns the FSM state; everything else is read from the
/// physics collaborator each tick.
#[derive(Debug, Clone)]
pub struct Snake {
    config: SnakeConfig,
    route: PatrolRoute,
    state: SnakeState,
}

impl Snake {
    pub fn new(config: SnakeConfig, route: PatrolRoute) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, route, state: SnakeState::default() })
    }

    pub fn state(&self) -> SnakeState {
        self.state
    }

    pub fn config(&self) -> &SnakeConfig {
        &self.config
    }

    pub fn route(&self) -> PatrolRoute {
        self.route
    }

    /// The single FSM entry point. Collision handlers and the per-tick
    /// distance checks both come through here.
    pub fn handle_event(&mut self, event: SnakeEvent) {
        let next = transition(self.state, event);
        if next != self.state {
            log::debug!("snake: {} -> {} on {:?}", self.state.name(), next.name(), event);
        }
        self.state = next;
    }

    /// One logic tick: derive spatial events in a fixed order, advance the
    /// FSM, then steer per the resulting state and hand the force to the
    /// physics collaborator.
    ///
    /// Event order matters and is deliberate: range checks first (both may
    /// fire in one tick; last one wins), then the reached checks, each
    /// guarded by the state the earlier events produced.
    pub fn tick<B: PhysicsBody, C: ProbeCaster>(
        &mut self,
        body: &mut B,
        frog_pos: Vec2,
        caster: &C,
    ) {
        let pos = body.position();

        let frog_distance = pos.distance_to(frog_pos);
        if frog_distance < self.config.aggro_range {
            self.handle_event(SnakeEvent::FrogInRange);
        }
        if frog_distance > self.config.deaggro_range {
            self.handle_event(SnakeEvent::FrogOutOfRange);
        }

        if self.state == SnakeState::PatrolAway && reached_target(pos, self.route.patrol_point) {
            self.handle_event(SnakeEvent::ReachedTarget);
        }
        if matches!(self.state, SnakeState::PatrolHome | SnakeState::Harmless)
            && reached_target(pos, self.route.home)
        {
            self.handle_event(SnakeEvent::ReachedTarget);
        }

        let plan = steering_policy(self.state, self.route, frog_pos);
        let desired = match plan.kind {
            SteerKind::Arrive => steering::arrive(
                caster,
                pos,
                plan.target,
                self.config.arrive_radius,
                self.config.motion.max_speed,
                &self.config.avoidance,
            ),
            SteerKind::Seek => steering::seek(
                caster,
                pos,
                plan.target,
                self.config.motion.max_speed,
                &self.config.avoidance,
            ),
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

    /// Collision notification. Bites land only while hostile, and the state
    /// flip to Harmless means each aggro period bites at most once.
    pub fn on_collision(&mut self, kind: ContactKind) -> BiteOutcome {
        match kind {
            ContactKind::Frog if self.state.is_hostile() => {
                self.handle_event(SnakeEvent::HitFrog);
                BiteOutcome::BitFrog
            }
            ContactKind::Bubble if self.state.is_hostile() => {
                self.handle_event(SnakeEvent::HitFrog);
                BiteOutcome::Ignored
            }
            _ => BiteOutcome::Ignored,
        }
    }
}
