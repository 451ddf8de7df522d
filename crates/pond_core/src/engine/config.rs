//! Agent tuning parameter bundles.
//!
//! Hosts load these (usually via serde) and hand them to agent constructors,
//! which run `validate()` once. Nothing here is re-checked per frame: a
//! non-positive `accel_time` or radius is a setup mistake, not a runtime
//! condition.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

use super::physics::ContactMask;
use super::vec2::Vec2;

/// Speed/force envelope shared by every steered agent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MotionConfig {
    /// Desired-velocity ceiling for every steering behavior.
    pub max_speed: f32,
    /// Acceleration ceiling applied by force conversion.
    pub max_accel: f32,
    /// Seconds over which a velocity change is spread; must be positive.
    pub accel_time: f32,
}

impl MotionConfig {
    pub fn validate(&self) -> Result<()> {
        if self.accel_time <= 0.0 {
            return Err(ConfigError::NonPositive {
                field: "accel_time",
                value: self.accel_time,
            });
        }
        Ok(())
    }
}

/// Obstacle avoidance switch and probe shape.
///
/// Configured once at agent setup, read-only afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AvoidanceParams {
    pub enabled: bool,
    /// Radius of the swept probe circle; must be positive when enabled.
    pub cast_radius: f32,
    /// Contact categories that block a probe.
    pub obstacle_mask: ContactMask,
}

impl AvoidanceParams {
    /// Avoidance switched off entirely.
    pub const DISABLED: Self = Self {
        enabled: false,
        cast_radius: 0.0,
        obstacle_mask: ContactMask::NONE,
    };

    pub fn validate(&self) -> Result<()> {
        if self.enabled && self.cast_radius <= 0.0 {
            return Err(ConfigError::DegenerateCastRadius { value: self.cast_radius });
        }
        Ok(())
    }
}

impl Default for AvoidanceParams {
    fn default() -> Self {
        Self {
            enabled: true,
            cast_radius: 0.5,
            obstacle_mask: ContactMask::OBSTACLES,
        }
    }
}

/// Snake agent tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SnakeConfig {
    pub motion: MotionConfig,
    pub avoidance: AvoidanceParams,

    /// Slowdown radius used by every arrive the snake performs.
    pub arrive_radius: f32,
    /// Frog closer than this raises FrogInRange.
    pub aggro_range: f32,
    /// Frog farther than this raises FrogOutOfRange. May be configured
    /// below `aggro_range`; the core preserves that misconfiguration
    /// (same-frame thrash, last event wins) instead of rejecting it.
    pub deaggro_range: f32,
}

impl SnakeConfig {
    pub fn validate(&self) -> Result<()> {
        self.motion.validate()?;
        self.avoidance.validate()?;
        if self.arrive_radius <= 0.0 {
            return Err(ConfigError::NonPositive {
                field: "arrive_radius",
                value: self.arrive_radius,
            });
        }
        Ok(())
    }
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self {
            // === Movement envelope ===
            motion: MotionConfig { max_speed: 3.0, max_accel: 6.0, accel_time: 0.25 },

            // === Obstacle avoidance ===
            avoidance: AvoidanceParams::default(),

            // === Behavior ranges ===
            arrive_radius: 1.5,
            aggro_range: 4.0,
            deaggro_range: 6.0,
        }
    }
}

/// Frog agent tuning.
///
/// The frog carries no avoidance parameters: player steering is a plain
/// arrive toward the commanded point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrogConfig {
    pub motion: MotionConfig,

    /// Fraction of the command distance used as the arrive radius.
    pub arrive_pct: f32,
    /// Arrive radius floor; must be positive.
    pub min_arrive_radius: f32,
    /// Arrive radius ceiling; must be positive and >= the floor.
    pub max_arrive_radius: f32,
}

impl FrogConfig {
    pub fn validate(&self) -> Result<()> {
        self.motion.validate()?;
        if self.min_arrive_radius <= 0.0 {
            return Err(ConfigError::NonPositive {
                field: "min_arrive_radius",
                value: self.min_arrive_radius,
            });
        }
        if self.max_arrive_radius <= 0.0 {
            return Err(ConfigError::NonPositive {
                field: "max_arrive_radius",
                value: self.max_arrive_radius,
            });
        }
        if self.min_arrive_radius > self.max_arrive_radius {
            return Err(ConfigError::InvertedArriveBounds {
                min: self.min_arrive_radius,
                max: self.max_arrive_radius,
            });
        }
        Ok(())
    }

    /// Arrive radius for a command issued at `command_distance`.
    pub fn arrive_radius_for(&self, command_distance: f32) -> f32 {
        (self.arrive_pct * command_distance)
            .clamp(self.min_arrive_radius, self.max_arrive_radius)
    }
}

impl Default for FrogConfig {
    fn default() -> Self {
        Self {
            // === Movement envelope ===
            motion: MotionConfig { max_speed: 4.0, max_accel: 8.0, accel_time: 0.25 },

            // === Arrive radius scaling ===
            arrive_pct: 0.25,
            min_arrive_radius: 0.5,
            max_arrive_radius: 3.0,
        }
    }
}

/// Snake spawn anchors: where it rests and where it patrols to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PatrolRoute {
    pub home: Vec2,
    pub patrol_point: Vec2,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(SnakeConfig::default().validate().is_ok());
        assert!(FrogConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_accel_time() {
        let mut config = SnakeConfig::default();
        config.motion.accel_time = 0.0;
        let err = config.validate().unwrap_err();
        assert_eq!(err, ConfigError::NonPositive { field: "accel_time", value: 0.0 });
        assert_eq!(err.field(), "accel_time");
    }

    #[test]
    fn test_rejects_non_positive_arrive_radius() {
        let mut config = SnakeConfig::default();
        config.arrive_radius = -1.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive { field: "arrive_radius", .. })
        ));
    }

    #[test]
    fn test_rejects_degenerate_cast_radius_only_when_enabled() {
        let mut config = SnakeConfig::default();
        config.avoidance.cast_radius = 0.0;
        assert!(matches!(config.validate(), Err(ConfigError::DegenerateCastRadius { .. })));

        config.avoidance.enabled = false;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_inverted_arrive_bounds() {
        let mut config = FrogConfig::default();
        config.min_arrive_radius = 5.0;
        config.max_arrive_radius = 1.0;
        assert!(matches!(config.validate(), Err(ConfigError::InvertedArriveBounds { .. })));
    }

    #[test]
    fn test_misconfigured_hysteresis_is_accepted() {
        let mut config = SnakeConfig::default();
        config.deaggro_range = config.aggro_range - 1.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_arrive_radius_for_clamps() {
        let config = FrogConfig::default();
        // 0.25 * 0.4 = 0.1 -> clamped up to the floor
        assert_eq!(config.arrive_radius_for(0.4), 0.5);
        // 0.25 * 40.0 = 10.0 -> clamped down to the ceiling
        assert_eq!(config.arrive_radius_for(40.0), 3.0);
        // 0.25 * 8.0 = 2.0 -> inside the bounds
        assert_eq!(config.arrive_radius_for(8.0), 2.0);
    }

    #[test]
    fn test_config_serde_round_trip() {
        let config = SnakeConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: SnakeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
