//! Scenario configuration: the asset, targets and interceptors a simulation
//! starts with. Fixed at construction; nothing here changes at runtime.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::EntityKind;
use crate::error::ConfigError;
use crate::types::Point;

/// A complete starting layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    pub asset: AssetConfig,
    #[serde(default)]
    pub targets: Vec<TargetConfig>,
    #[serde(default)]
    pub interceptors: Vec<InterceptorConfig>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AssetConfig {
    pub position: Point,
    pub detection_radius: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetConfig {
    pub start: Point,
    /// Used only to fix the heading at spawn. Defaults to the asset position.
    #[serde(default)]
    pub destination: Option<Point>,
    pub speed: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InterceptorConfig {
    pub idle_anchor: Point,
    #[serde(default = "default_standoff_radius")]
    pub standoff_radius: f64,
    pub speed: f64,
}

fn default_standoff_radius() -> f64 {
    DEFAULT_STANDOFF_RADIUS
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            position: Point::ORIGIN,
            detection_radius: DEFAULT_DETECTION_RADIUS,
        }
    }
}

impl TargetConfig {
    /// A target flying from `start` toward the asset.
    pub fn inbound(start: Point, speed: f64) -> Self {
        Self {
            start,
            destination: None,
            speed,
        }
    }
}

impl InterceptorConfig {
    pub fn new(idle_anchor: Point, standoff_radius: f64, speed: f64) -> Self {
        Self {
            idle_anchor,
            standoff_radius,
            speed,
        }
    }
}

/// The reference layout: a tower at the origin, four inbound targets from the
/// west and north, and four interceptors anchored on the tower's diagonals.
impl Default for ScenarioConfig {
    fn default() -> Self {
        let asset = AssetConfig::default();
        let targets = [(-600.0, -600.0), (-800.0, 0.0), (-700.0, 600.0), (-200.0, 900.0)]
            .into_iter()
            .map(|start| TargetConfig::inbound(start.into(), DEFAULT_TARGET_SPEED))
            .collect();
        Self {
            asset,
            targets,
            interceptors: default_interceptors(asset.position),
        }
    }
}

/// Four interceptors anchored at `(+-200, +-200)` around `center`.
pub fn default_interceptors(center: Point) -> Vec<InterceptorConfig> {
    let d = DEFAULT_ANCHOR_OFFSET;
    [(-d, -d), (d, -d), (-d, d), (d, d)]
        .into_iter()
        .map(|(dx, dy)| {
            InterceptorConfig::new(
                center.offset(dx, dy),
                DEFAULT_STANDOFF_RADIUS,
                DEFAULT_INTERCEPTOR_SPEED,
            )
        })
        .collect()
}

impl ScenarioConfig {
    /// An empty field around an asset, for building scenarios by hand.
    pub fn new(asset: AssetConfig) -> Self {
        Self {
            asset,
            targets: Vec::new(),
            interceptors: Vec::new(),
        }
    }

    pub fn with_target(mut self, target: TargetConfig) -> Self {
        self.targets.push(target);
        self
    }

    pub fn with_interceptor(mut self, interceptor: InterceptorConfig) -> Self {
        self.interceptors.push(interceptor);
        self
    }

    /// Parse and validate a JSON scenario.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let scenario: ScenarioConfig = serde_json::from_str(json)?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Check every value the simulation relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.asset.position.is_finite() {
            return Err(ConfigError::NonFinite {
                what: "asset".to_string(),
            });
        }
        if !(self.asset.detection_radius.is_finite() && self.asset.detection_radius > 0.0) {
            return Err(ConfigError::DetectionRadius(self.asset.detection_radius));
        }

        for (index, target) in self.targets.iter().enumerate() {
            let finite = target.start.is_finite()
                && target.destination.map_or(true, Point::is_finite);
            if !finite {
                return Err(ConfigError::NonFinite {
                    what: format!("target {index}"),
                });
            }
            check_speed(EntityKind::Target, index, target.speed)?;
        }

        for (index, interceptor) in self.interceptors.iter().enumerate() {
            if !interceptor.idle_anchor.is_finite() {
                return Err(ConfigError::NonFinite {
                    what: format!("interceptor {index}"),
                });
            }
            let radius = interceptor.standoff_radius;
            if !(radius.is_finite() && radius >= 0.0) {
                return Err(ConfigError::StandoffRadius { index, radius });
            }
            check_speed(EntityKind::Interceptor, index, interceptor.speed)?;
        }

        Ok(())
    }
}

fn check_speed(kind: EntityKind, index: usize, speed: f64) -> Result<(), ConfigError> {
    if speed.is_finite() && speed >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Speed { kind, index, speed })
    }
}
