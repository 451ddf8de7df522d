//! Obstacle avoidance: angular sweep for a clear heading.
//!
//! When the straight probe toward the target is blocked, candidate headings
//! are tried at fixed 5-degree steps, always rotating counter-clockwise and
//! always smallest angle first, up to a half turn. The first unobstructed
//! heading wins; path choice is deterministic but not necessarily the
//! shortest detour, because the sweep never tries the other rotational
//! sense.

use super::config::AvoidanceParams;
use super::physics::ProbeCaster;
use super::vec2::Vec2;

/// Sweep step between candidate headings.
pub const SWEEP_STEP_DEG: f32 = 5.0;

/// Total sweep before giving up (36 candidates).
pub const SWEEP_LIMIT_DEG: f32 = 180.0;

/// Interim movement target that routes around the first blocking obstacle.
///
/// Returns `target_pos` unchanged when avoidance is disabled or the direct
/// path is clear. Otherwise returns `current_pos + rotated_direction` for
/// the first clear candidate heading; the candidate keeps the original
/// straight-line distance, so the interim target sits on a circle around
/// the agent.
///
/// When every candidate in the sweep is blocked, the last tried (still
/// blocked) heading is returned as the target. Known degenerate outcome:
/// the agent pushes toward a blocked heading until the next frame's sweep
/// finds daylight.
pub fn avoidance_target<C: ProbeCaster>(
    caster: &C,
    current_pos: Vec2,
    target_pos: Vec2,
    params: &AvoidanceParams,
) -> Vec2 {
    if !params.enabled {
        return target_pos;
    }

    let mut direction = target_pos - current_pos;
    let direct = caster.cast_circle(
        current_pos,
        params.cast_radius,
        direction,
        direction.magnitude(),
        params.obstacle_mask,
    );
    if direct.is_none() {
        return target_pos;
    }

    let mut swept_deg = 0.0_f32;
    while swept_deg < SWEEP_LIMIT_DEG {
        let candidate = direction.rotated(SWEEP_STEP_DEG);
        let blocked = caster.cast_circle(
            current_pos,
            params.cast_radius,
            candidate,
            candidate.magnitude(),
            params.obstacle_mask,
        );
        if blocked.is_none() {
            log::trace!(
                "avoidance: deflected {:.0} degrees around obstacle",
                swept_deg + SWEEP_STEP_DEG
            );
            return current_pos + candidate;
        }
        swept_deg += SWEEP_STEP_DEG;
        direction = candidate;
    }

    // Sweep exhausted: every heading up to a half turn is blocked. Hand back
    // the last tried heading anyway.
    log::trace!("avoidance: sweep exhausted, keeping last heading");
    current_pos + direction
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::physics::{ContactMask, ProbeHit};
    use std::cell::RefCell;

    /// Caster that blocks any probe whose heading satisfies the predicate,
    /// recording every probe it sees.
    struct SectorCaster<F: Fn(Vec2) -> bool> {
        blocked: F,
        probes: RefCell<Vec<Vec2>>,
    }

    impl<F: Fn(Vec2) -> bool> SectorCaster<F> {
        fn new(blocked: F) -> Self {
            Self { blocked, probes: RefCell::new(Vec::new()) }
        }

        fn probe_count(&self) -> usize {
            self.probes.borrow().len()
        }
    }

    impl<F: Fn(Vec2) -> bool> ProbeCaster for SectorCaster<F> {
        fn cast_circle(
            &self,
            origin: Vec2,
            _radius: f32,
            direction: Vec2,
            _max_distance: f32,
            _mask: ContactMask,
        ) -> Option<ProbeHit> {
            self.probes.borrow_mut().push(direction);
            if (self.blocked)(direction) {
                Some(ProbeHit { point: origin, distance: 0.0 })
            } else {
                None
            }
        }
    }

    fn params() -> AvoidanceParams {
        AvoidanceParams { enabled: true, cast_radius: 0.5, obstacle_mask: ContactMask::OBSTACLES }
    }

    #[test]
    fn test_disabled_passes_target_through_without_probing() {
        let caster = SectorCaster::new(|_| true);
        let target = Vec2::new(10.0, 0.0);
        let out =
            avoidance_target(&caster, Vec2::ZERO, target, &AvoidanceParams::DISABLED);
        assert_eq!(out, target);
        assert_eq!(caster.probe_count(), 0);
    }

    #[test]
    fn test_clear_path_passes_target_through() {
        let caster = SectorCaster::new(|_| false);
        let target = Vec2::new(10.0, 0.0);
        let out = avoidance_target(&caster, Vec2::ZERO, target, &params());
        assert_eq!(out, target);
        assert_eq!(caster.probe_count(), 1);
    }

    #[test]
    fn test_first_candidate_is_five_degrees_ccw() {
        // Direct path blocked, everything else clear.
        let caster = SectorCaster::new(|dir: Vec2| dir.y.abs() < 0.001 && dir.x > 0.0);
        let target = Vec2::new(10.0, 0.0);
        let out = avoidance_target(&caster, Vec2::ZERO, target, &params());

        let expected = Vec2::new(10.0, 0.0).rotated(SWEEP_STEP_DEG);
        assert!((out - expected).magnitude() < 0.001);
        // one direct probe plus one accepted candidate
        assert_eq!(caster.probe_count(), 2);
    }

    #[test]
    fn test_sweep_accepts_first_clear_heading() {
        // Blocked until the heading has rotated at least 90 degrees from +x.
        let caster = SectorCaster::new(|dir: Vec2| {
            let angle = dir.y.atan2(dir.x).to_degrees();
            angle < 89.9
        });
        let start = Vec2::new(2.0, 2.0);
        let target = start + Vec2::new(8.0, 0.0);
        let out = avoidance_target(&caster, start, target, &params());

        let expected = start + Vec2::new(8.0, 0.0).rotated(90.0);
        assert!((out - expected).magnitude() < 0.01);
        // direct + 18 candidates, the 18th being 90 degrees
        assert_eq!(caster.probe_count(), 19);
    }

    #[test]
    fn test_interim_target_keeps_command_distance() {
        let caster = SectorCaster::new(|dir: Vec2| {
            let angle = dir.y.atan2(dir.x).to_degrees();
            angle < 44.9
        });
        let start = Vec2::new(-3.0, 1.0);
        let target = start + Vec2::new(6.0, 0.0);
        let out = avoidance_target(&caster, start, target, &params());
        assert!((out.distance_to(start) - 6.0).abs() < 0.001);
    }

    #[test]
    fn test_exhausted_sweep_returns_last_blocked_heading() {
        let caster = SectorCaster::new(|_| true);
        let target = Vec2::new(10.0, 0.0);
        let out = avoidance_target(&caster, Vec2::ZERO, target, &params());

        // 1 direct probe + 36 sweep candidates, none clear
        assert_eq!(caster.probe_count(), 37);
        // last tried heading is the half-turn reversal of the command
        let expected = Vec2::new(10.0, 0.0).rotated(SWEEP_LIMIT_DEG);
        assert!((out - expected).magnitude() < 0.01);
        assert!((out.magnitude() - 10.0).abs() < 0.01);
    }
}
