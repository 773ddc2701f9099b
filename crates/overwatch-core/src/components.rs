//! ECS components for hecs entities.
//!
//! Components are plain data. The only methods they carry are their own
//! terminal transitions; anything that touches two entities lives in systems.

use serde::{Deserialize, Serialize};

use crate::enums::InterceptorMode;
use crate::geometry;
use crate::types::Point;

/// Position and constant-speed heading shared by targets and interceptors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Kinematics {
    pub position: Point,
    /// Radians, counter-clockwise from +x.
    pub heading: f64,
    /// Distance units per unit time.
    pub speed: f64,
}

/// Hostile target state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetState {
    /// Index in the scenario target list; tie-break key for ordering.
    pub designation: u32,
    /// Point the fixed heading was computed toward.
    pub destination: Point,
    /// Claimed by an interceptor. Never reverts once set.
    pub intercepting: bool,
    /// Terminal.
    pub destroyed: bool,
}

/// Interceptor (UAV) state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InterceptorState {
    /// Index in the scenario interceptor list; tie-break key for ordering.
    pub designation: u32,
    /// Centre of the idle holding pattern.
    pub idle_anchor: Point,
    /// Initial offset from the anchor.
    pub standoff_radius: f64,
    pub mode: InterceptorMode,
}

/// The defended tower. Owns no entities, only queries them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GuardedAsset {
    pub position: Point,
    /// Sensor range; always positive.
    pub detection_radius: f64,
}

impl Kinematics {
    pub fn new(position: Point, heading: f64, speed: f64) -> Self {
        Self {
            position,
            heading,
            speed,
        }
    }
}

impl TargetState {
    pub fn new(designation: u32, destination: Point) -> Self {
        Self {
            designation,
            destination,
            intercepting: false,
            destroyed: false,
        }
    }

    pub fn is_alive(&self) -> bool {
        !self.destroyed
    }

    /// Mark destroyed. Calling it again changes nothing.
    pub fn destroy(&mut self) {
        self.destroyed = true;
    }
}

impl InterceptorState {
    pub fn new(designation: u32, idle_anchor: Point, standoff_radius: f64) -> Self {
        Self {
            designation,
            idle_anchor,
            standoff_radius,
            mode: InterceptorMode::Idle,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.mode != InterceptorMode::Destroyed
    }

    pub fn is_idle(&self) -> bool {
        self.mode == InterceptorMode::Idle
    }

    /// Mark destroyed. Calling it again changes nothing.
    pub fn destroy(&mut self) {
        self.mode = InterceptorMode::Destroyed;
    }
}

impl GuardedAsset {
    pub fn new(position: Point, detection_radius: f64) -> Self {
        Self {
            position,
            detection_radius,
        }
    }

    /// Range from the asset to `point`.
    pub fn range_to(&self, point: Point) -> f64 {
        geometry::distance(self.position, point)
    }

    /// Whether `point` lies inside the detection radius (boundary inclusive).
    pub fn covers(&self, point: Point) -> bool {
        self.range_to(point) <= self.detection_radius
    }
}
