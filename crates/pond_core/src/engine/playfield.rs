//! Reference playfield: the deterministic physics collaborator used by tests
//! and the demo binaries.
//!
//! Real hosts bring their own physics engine; this one is just circles. It
//! integrates bodies with semi-implicit Euler, answers swept-circle probes
//! against static obstacles, and reports body overlaps as contact events.
//! Enough to run whole episodes without an engine in the loop, and fully
//! deterministic for a fixed seed.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::physics::{
    AgentId, ContactEvent, ContactKind, ContactMask, PhysicsBody, ProbeCaster, ProbeHit,
};
use super::vec2::Vec2;

/// Static circular blocker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub center: Vec2,
    pub radius: f32,
    pub kind: ContactKind,
}

impl Obstacle {
    pub fn circle(center: Vec2, radius: f32) -> Self {
        Self { center, radius, kind: ContactKind::Obstacle }
    }
}

/// Circle body integrated by the playfield.
///
/// Forces accumulate between steps; [`step`](PlayBody::step) spends and
/// clears them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayBody {
    pub id: AgentId,
    pub kind: ContactKind,
    pub radius: f32,
    pub position: Vec2,
    pub velocity: Vec2,
    pub mass: f32,
    force: Vec2,
}

impl PlayBody {
    pub fn new(id: AgentId, kind: ContactKind, radius: f32, position: Vec2, mass: f32) -> Self {
        Self { id, kind, radius, position, velocity: Vec2::ZERO, mass, force: Vec2::ZERO }
    }

    /// Semi-implicit Euler: velocity first, then position with the new
    /// velocity.
    pub fn step(&mut self, dt: f32) {
        self.velocity += self.force / self.mass * dt;
        self.position += self.velocity * dt;
        self.force = Vec2::ZERO;
    }
}

impl PhysicsBody for PlayBody {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn velocity(&self) -> Vec2 {
        self.velocity
    }

    fn mass(&self) -> f32 {
        self.mass
    }

    fn apply_force(&mut self, force: Vec2) {
        self.force += force;
    }
}

/// The static obstacle set, and the probe implementation over it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Playfield {
    pub obstacles: Vec<Obstacle>,
}

impl Playfield {
    pub fn new(obstacles: Vec<Obstacle>) -> Self {
        Self { obstacles }
    }
}

impl ProbeCaster for Playfield {
    fn cast_circle(
        &self,
        origin: Vec2,
        radius: f32,
        direction: Vec2,
        max_distance: f32,
        mask: ContactMask,
    ) -> Option<ProbeHit> {
        let dir = direction.normalized();
        if dir == Vec2::ZERO || max_distance <= 0.0 {
            return None;
        }

        let mut nearest: Option<ProbeHit> = None;
        for obstacle in &self.obstacles {
            if !mask.contains(obstacle.kind) {
                continue;
            }
            let to_center = obstacle.center - origin;
            let combined = obstacle.radius + radius;

            // closest approach along the ray, and the squared miss distance
            // there
            let proj = to_center.dot(dir);
            let perp_sq = to_center.magnitude_squared() - proj * proj;
            if perp_sq > combined * combined {
                continue;
            }

            let entry = if to_center.magnitude_squared() <= combined * combined {
                // already overlapping at the origin
                0.0
            } else {
                proj - (combined * combined - perp_sq).sqrt()
            };
            if entry < 0.0 || entry > max_distance {
                continue;
            }
            if nearest.map_or(true, |hit| entry < hit.distance) {
                nearest = Some(ProbeHit { point: origin + dir * entry, distance: entry });
            }
        }
        nearest
    }
}

/// All body pairs currently overlapping, one event per side, addressed by
/// the receiving body's id.
pub fn contact_events(bodies: &[PlayBody]) -> Vec<(AgentId, ContactEvent)> {
    let mut events = Vec::new();
    for (i, a) in bodies.iter().enumerate() {
        for b in &bodies[i + 1..] {
            if a.position.distance_to(b.position) <= a.radius + b.radius {
                events.push((a.id, ContactEvent { kind: b.kind, other: b.id }));
                events.push((b.id, ContactEvent { kind: a.kind, other: a.id }));
            }
        }
    }
    events
}

/// Uniform fly spawn points over the pond rectangle. Same seed, same spawns.
/// `half_extents` must be positive on both axes.
pub fn scatter_flies(rng: &mut ChaCha8Rng, count: usize, half_extents: Vec2) -> Vec<Vec2> {
    (0..count)
        .map(|_| {
            Vec2::new(
                rng.gen_range(-half_extents.x..=half_extents.x),
                rng.gen_range(-half_extents.y..=half_extents.y),
            )
        })
        .collect()
}
