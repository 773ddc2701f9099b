//! Events emitted by the simulation during a tick.

use serde::{Deserialize, Serialize};

/// Something that happened this tick, for renderers and logs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A target entered detection range unclaimed for the first time.
    ContactDetected { target: u32, range: f64 },
    /// An idle interceptor was sent after a target.
    Assigned {
        engagement_id: u32,
        interceptor: u32,
        target: u32,
        /// Interceptor-to-target distance at assignment.
        range: f64,
    },
    /// Interceptor reached kill range; both destroyed.
    Splash {
        engagement_id: u32,
        interceptor: u32,
        target: u32,
    },
}
