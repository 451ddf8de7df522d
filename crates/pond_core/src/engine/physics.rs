//! Physics collaborator seam.
//!
//! The core never integrates motion or detects contacts itself. It reads
//! kinematic state and submits forces through [`PhysicsBody`], asks for
//! obstacle probes through [`ProbeCaster`], and receives contacts as
//! [`ContactEvent`]s tagged with a [`ContactKind`]. Any host engine that can
//! provide these three things can drive the agents; `engine::playfield` is
//! the deterministic reference implementation used by tests and demos.

use serde::{Deserialize, Serialize};

use super::vec2::Vec2;

/// Contact category tag. Closed set: hosts map their collider layers onto
/// these before notifying the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
pub enum ContactKind {
    Obstacle,
    Snake,
    Frog,
    Bubble,
    Fly,
}

impl ContactKind {
    /// String tag used at the notification boundary.
    pub fn tag(&self) -> &'static str {
        match self {
            ContactKind::Obstacle => "Obstacle",
            ContactKind::Snake => "Snake",
            ContactKind::Frog => "Frog",
            ContactKind::Bubble => "Bubble",
            ContactKind::Fly => "Fly",
        }
    }

    /// Parse a host-side category tag. Unknown tags are not an error; the
    /// host may carry categories the core does not react to.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "Obstacle" => Some(ContactKind::Obstacle),
            "Snake" => Some(ContactKind::Snake),
            "Frog" => Some(ContactKind::Frog),
            "Bubble" => Some(ContactKind::Bubble),
            "Fly" => Some(ContactKind::Fly),
            _ => None,
        }
    }

    #[inline]
    const fn bit(self) -> u8 {
        match self {
            ContactKind::Obstacle => 1 << 0,
            ContactKind::Snake => 1 << 1,
            ContactKind::Frog => 1 << 2,
            ContactKind::Bubble => 1 << 3,
            ContactKind::Fly => 1 << 4,
        }
    }
}

/// Set of contact categories a probe collides with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactMask(u8);

impl ContactMask {
    pub const NONE: Self = Self(0);

    /// Static obstacles only - the usual avoidance mask.
    pub const OBSTACLES: Self = Self(ContactKind::Obstacle.bit());

    pub const fn only(kind: ContactKind) -> Self {
        Self(kind.bit())
    }

    pub const fn with(self, kind: ContactKind) -> Self {
        Self(self.0 | kind.bit())
    }

    pub const fn contains(self, kind: ContactKind) -> bool {
        self.0 & kind.bit() != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// Stable identity handed out by the host for each simulated agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgentId(pub u32);

/// Contact notification delivered by the host, one per contact begin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContactEvent {
    pub kind: ContactKind,
    pub other: AgentId,
}

/// First blocking hit along a probe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProbeHit {
    /// Probe-center position at first contact.
    pub point: Vec2,
    /// Travel distance from the origin to first contact.
    pub distance: f32,
}

/// Casting capability consumed by the avoidance search.
///
/// Kept separate from [`PhysicsBody`] so the search can be driven by a
/// deterministic fake in tests.
pub trait ProbeCaster {
    /// Sweep a circle of `radius` from `origin` along `direction` (length
    /// ignored) over `max_distance`, against obstacles matching `mask`.
    /// Returns the nearest blocking hit, or `None` when the path is clear.
    fn cast_circle(
        &self,
        origin: Vec2,
        radius: f32,
        direction: Vec2,
        max_distance: f32,
        mask: ContactMask,
    ) -> Option<ProbeHit>;
}

/// Kinematic state owned by the physics collaborator.
///
/// Controllers never write velocity or position; they submit a force and the
/// host integrates it.
pub trait PhysicsBody {
    fn position(&self) -> Vec2;
    fn velocity(&self) -> Vec2;
    fn mass(&self) -> f32;
    fn apply_force(&mut self, force: Vec2);
}
