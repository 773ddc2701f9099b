//! Enumeration types used throughout the simulation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Interceptor engagement state machine.
///
/// `Idle -> Engaging -> Destroyed`. There is no way back to `Idle` and
/// nothing leaves `Destroyed`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InterceptorMode {
    /// Circling the idle anchor, available for assignment.
    #[default]
    Idle,
    /// Pursuing its claimed target.
    Engaging,
    /// Expended in an intercept.
    Destroyed,
}

/// Engagement lifecycle phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngagementPhase {
    /// Interceptor closing on its target.
    #[default]
    Pursuit,
    /// Joint kill resolved; both entities destroyed.
    Splash,
}

/// The two kinds of moving entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Target,
    Interceptor,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Target => f.write_str("target"),
            EntityKind::Interceptor => f.write_str("interceptor"),
        }
    }
}
