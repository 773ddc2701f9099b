//! Simulation snapshot: the complete visible state handed to renderers each tick.

use serde::{Deserialize, Serialize};

use crate::enums::InterceptorMode;
use crate::events::SimEvent;
use crate::types::{Point, SimTime};

/// Read-only view of the world after a tick. Destroyed entities are omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimSnapshot {
    pub time: SimTime,
    pub asset: AssetView,
    pub targets: Vec<TargetView>,
    pub interceptors: Vec<InterceptorView>,
    pub events: Vec<SimEvent>,
    pub score: ScoreView,
    /// Half-width of the display area.
    pub map_extent: f64,
}

/// The guarded asset, for drawing the tower and its detection boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetView {
    pub position: Point,
    pub detection_radius: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TargetView {
    pub designation: u32,
    pub position: Point,
    /// Radians.
    pub heading: f64,
    pub speed: f64,
    /// Point the fixed heading was aimed at.
    pub destination: Point,
    pub intercepting: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InterceptorView {
    pub designation: u32,
    pub position: Point,
    /// Radians.
    pub heading: f64,
    pub speed: f64,
    pub mode: InterceptorMode,
    pub idle_anchor: Point,
    pub standoff_radius: f64,
    /// Designation of the claimed target, if engaging.
    pub target: Option<u32>,
}

/// Running tallies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreView {
    pub targets_total: u32,
    pub targets_destroyed: u32,
    pub interceptors_total: u32,
    pub interceptors_expended: u32,
    pub engagements_opened: u32,
}

impl SimSnapshot {
    /// Every target has been destroyed.
    pub fn all_targets_destroyed(&self) -> bool {
        self.score.targets_destroyed == self.score.targets_total
    }
}
