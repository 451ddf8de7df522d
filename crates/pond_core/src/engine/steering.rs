//! Steering behavior library.
//!
//! Every behavior returns a **desired velocity**, never a force. Force
//! conversion is centralized in [`desired_velocity_to_force`] so the
//! acceleration clamp and mass scaling are applied uniformly no matter which
//! behavior produced the velocity.
//!
//! The `seek`/`arrive` pair dispatch through the avoidance search; the
//! `basic_*` variants steer straight at the target. Flocking components
//! (separation, cohesion, alignment, anchor) take neighbor data as read-only
//! snapshots; neighbor discovery belongs to the host.

use super::avoidance;
use super::config::AvoidanceParams;
use super::physics::ProbeCaster;
use super::vec2::Vec2;

/// Convert a desired velocity into a bounded force.
///
/// `accel = (desired - current) / accel_time`, clamped to `max_accel` with
/// direction preserved, then scaled by mass. The result never exceeds
/// `mass * max_accel` in magnitude. `accel_time` must be positive; that is
/// enforced by config validation at agent setup, not here.
pub fn desired_velocity_to_force(
    desired_vel: Vec2,
    current_vel: Vec2,
    mass: f32,
    accel_time: f32,
    max_accel: f32,
) -> Vec2 {
    let mut accel = (desired_vel - current_vel) / accel_time;
    if accel.magnitude() > max_accel {
        accel = accel.normalized() * max_accel;
    }
    accel * mass
}

/// Full speed straight at the target.
pub fn basic_seek(current_pos: Vec2, target_pos: Vec2, max_speed: f32) -> Vec2 {
    if max_speed <= 0.0 {
        return Vec2::ZERO;
    }
    (target_pos - current_pos).normalized() * max_speed
}

/// Seek that slows linearly inside `radius`, reaching zero exactly at the
/// target. At `distance >= radius` this is identical to [`basic_seek`].
/// `radius` must be positive (config-validated).
pub fn basic_arrive(current_pos: Vec2, target_pos: Vec2, radius: f32, max_speed: f32) -> Vec2 {
    if max_speed <= 0.0 {
        return Vec2::ZERO;
    }
    let offset = target_pos - current_pos;
    if offset.magnitude() >= radius {
        basic_seek(current_pos, target_pos, max_speed)
    } else {
        offset / radius * max_speed
    }
}

/// Full speed straight away from the predator.
pub fn basic_flee(current_pos: Vec2, predator_pos: Vec2, max_speed: f32) -> Vec2 {
    if max_speed <= 0.0 {
        return Vec2::ZERO;
    }
    (current_pos - predator_pos).normalized() * max_speed
}

/// Seek with obstacle avoidance. The single policy switch point: when
/// `avoid.enabled` is false the target passes through untouched and this is
/// exactly [`basic_seek`].
pub fn seek<C: ProbeCaster>(
    caster: &C,
    current_pos: Vec2,
    target_pos: Vec2,
    max_speed: f32,
    avoid: &AvoidanceParams,
) -> Vec2 {
    let target = avoidance::avoidance_target(caster, current_pos, target_pos, avoid);
    basic_seek(current_pos, target, max_speed)
}

/// Arrive with obstacle avoidance; see [`seek`].
pub fn arrive<C: ProbeCaster>(
    caster: &C,
    current_pos: Vec2,
    target_pos: Vec2,
    radius: f32,
    max_speed: f32,
    avoid: &AvoidanceParams,
) -> Vec2 {
    let target = avoidance::avoidance_target(caster, current_pos, target_pos, avoid);
    basic_arrive(current_pos, target, radius, max_speed)
}

/// Pull a desired velocity back toward the origin once the agent leaves the
/// arena box. Each axis is corrected independently, proportionally to how
/// far out the agent sits on that axis.
pub fn anchor(desired_vel: Vec2, current_pos: Vec2, bounds: Vec2) -> Vec2 {
    let mut vel = desired_vel;
    if current_pos.x.abs() > bounds.x {
        vel.x -= current_pos.x;
    }
    if current_pos.y.abs() > bounds.y {
        vel.y -= current_pos.y;
    }
    vel
}

/// Inverse-square repulsion from each neighbor, summed, normalized, scaled.
/// Empty neighbor set yields zero; a neighbor exactly on top of the agent
/// contributes nothing rather than a division by zero.
pub fn separation(current_pos: Vec2, neighbors: &[Vec2], max_speed: f32) -> Vec2 {
    if max_speed <= 0.0 || neighbors.is_empty() {
        return Vec2::ZERO;
    }
    let mut push = Vec2::ZERO;
    for neighbor in neighbors {
        let offset = current_pos - *neighbor;
        let dist_sq = offset.magnitude_squared();
        if dist_sq > 0.0 {
            push += offset / dist_sq;
        }
    }
    push.normalized() * max_speed
}

/// Toward the neighbors' average position. Empty set yields zero.
pub fn cohesion(current_pos: Vec2, neighbors: &[Vec2], max_speed: f32) -> Vec2 {
    if max_speed <= 0.0 || neighbors.is_empty() {
        return Vec2::ZERO;
    }
    let mut sum = Vec2::ZERO;
    for neighbor in neighbors {
        sum += *neighbor;
    }
    let center = sum / neighbors.len() as f32;
    (center - current_pos).normalized() * max_speed
}

/// Match the neighbors' average heading. Empty set yields zero.
pub fn alignment(neighbor_velocities: &[Vec2], max_speed: f32) -> Vec2 {
    if max_speed <= 0.0 || neighbor_velocities.is_empty() {
        return Vec2::ZERO;
    }
    let mut sum = Vec2::ZERO;
    for velocity in neighbor_velocities {
        sum += *velocity;
    }
    (sum / neighbor_velocities.len() as f32).normalized() * max_speed
}
