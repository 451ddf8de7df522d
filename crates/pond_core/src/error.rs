//! Configuration validation errors.
//!
//! The steering and state-machine paths are infallible by design; the only
//! fallible surface is agent construction, where tuning values are checked
//! once instead of per frame.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    #[error("avoidance cast radius must be positive when avoidance is enabled, got {value}")]
    DegenerateCastRadius { value: f32 },

    #[error("arrive radius bounds inverted: min {min} > max {max}")]
    InvertedArriveBounds { min: f32, max: f32 },
}

impl ConfigError {
    /// Name of the offending field, for host-side config editors.
    pub fn field(&self) -> &'static str {
        match self {
            ConfigError::NonPositive { field, .. } => field,
            ConfigError::DegenerateCastRadius { .. } => "cast_radius",
            ConfigError::InvertedArriveBounds { .. } => "min_arrive_radius",
        }
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;
