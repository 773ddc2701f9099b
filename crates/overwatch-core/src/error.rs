//! Configuration errors.

use thiserror::Error;

use crate::enums::EntityKind;

/// Rejected scenario or engine configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed scenario: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("detection radius must be positive, got {0}")]
    DetectionRadius(f64),

    #[error("{kind} {index}: speed must be finite and non-negative, got {speed}")]
    Speed {
        kind: EntityKind,
        index: usize,
        speed: f64,
    },

    #[error("interceptor {index}: standoff radius must be finite and non-negative, got {radius}")]
    StandoffRadius { index: usize, radius: f64 },

    #[error("{what} has a non-finite coordinate")]
    NonFinite { what: String },

    #[error("time step must be finite and positive, got {0}")]
    TimeStep(f64),

    #[error("kill radius must be finite and non-negative, got {0}")]
    KillRadius(f64),
}
