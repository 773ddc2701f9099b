//! Tests for the simulation engine: construction, tick bookkeeping and snapshots.

use overwatch_core::config::{AssetConfig, InterceptorConfig, ScenarioConfig, TargetConfig};
use overwatch_core::enums::InterceptorMode;
use overwatch_core::error::ConfigError;
use overwatch_core::events::SimEvent;
use overwatch_core::types::Point;

use crate::engine::{SimConfig, SimulationEngine};

fn engine(scenario: &ScenarioConfig) -> SimulationEngine {
    SimulationEngine::new(SimConfig::default(), scenario).unwrap()
}

// ---- Construction ----

#[test]
fn test_sim_config_defaults() {
    let config = SimConfig::default();
    assert!((config.dt - 1.0).abs() < 1e-12);
    assert!((config.kill_radius - 40.0).abs() < 1e-12);
    config.validate().unwrap();
}

#[test]
fn test_engine_rejects_bad_sim_config() {
    let scenario = ScenarioConfig::default();
    let err = SimulationEngine::new(
        SimConfig {
            dt: 0.0,
            ..Default::default()
        },
        &scenario,
    )
    .err()
    .unwrap();
    assert!(matches!(err, ConfigError::TimeStep(_)));

    let err = SimulationEngine::new(
        SimConfig {
            kill_radius: -1.0,
            ..Default::default()
        },
        &scenario,
    )
    .err()
    .unwrap();
    assert!(matches!(err, ConfigError::KillRadius(_)));
}

#[test]
fn test_engine_rejects_bad_scenario() {
    let scenario = ScenarioConfig::new(AssetConfig {
        position: Point::ORIGIN,
        detection_radius: 0.0,
    });
    assert!(matches!(
        SimulationEngine::new(SimConfig::default(), &scenario),
        Err(ConfigError::DetectionRadius(_))
    ));
}

#[test]
fn test_engine_lookups_by_designation() {
    let engine = engine(&ScenarioConfig::default());
    let (kinematics, state) = engine.target(1).unwrap();
    assert_eq!(kinematics.position, Point::new(-800.0, 0.0));
    assert_eq!(state.designation, 1);
    assert!(engine.target(4).is_none());

    let (kinematics, state) = engine.interceptor(3).unwrap();
    assert_eq!(kinematics.position, Point::new(300.0, 200.0));
    assert_eq!(state.mode, InterceptorMode::Idle);
    assert_eq!(engine.assigned_target(3), None);
    assert!(engine.interceptor(4).is_none());
}

// ---- Tick bookkeeping ----

#[test]
fn test_tick_advances_time_by_dt() {
    let mut engine = SimulationEngine::new(
        SimConfig {
            dt: 0.5,
            ..Default::default()
        },
        &ScenarioConfig::default(),
    )
    .unwrap();

    for _ in 0..4 {
        engine.tick();
    }
    assert_eq!(engine.time().tick, 4);
    assert!((engine.time().elapsed - 2.0).abs() < 1e-12);

    // Half-size steps move targets half as far.
    let (kinematics, _) = engine.target(1).unwrap();
    assert!((kinematics.position.x - (-780.0)).abs() < 1e-9);
}

#[test]
fn test_snapshot_contents() {
    let mut engine = engine(&ScenarioConfig::default());
    let snap = engine.tick();

    assert_eq!(snap.time.tick, 1);
    assert_eq!(snap.asset.position, Point::ORIGIN);
    assert!((snap.asset.detection_radius - 600.0).abs() < 1e-12);
    assert!((snap.map_extent - 1000.0).abs() < 1e-12);
    assert_eq!(snap.targets.len(), 4);
    assert_eq!(snap.interceptors.len(), 4);
    assert_eq!(snap.score.targets_total, 4);
    assert_eq!(snap.score.interceptors_total, 4);
    assert!(snap.events.is_empty(), "nothing is in range on tick 1");

    let designations: Vec<u32> = snap.targets.iter().map(|t| t.designation).collect();
    assert_eq!(designations, vec![0, 1, 2, 3]);
    assert!(snap
        .interceptors
        .iter()
        .all(|i| i.mode == InterceptorMode::Idle && i.target.is_none()));
}

#[test]
fn test_snapshot_carries_spawn_geometry() {
    let scenario = ScenarioConfig::new(AssetConfig::default())
        .with_target(TargetConfig {
            start: Point::new(-900.0, 0.0),
            destination: Some(Point::new(0.0, 100.0)),
            speed: 10.0,
        })
        .with_target(TargetConfig::inbound(Point::new(0.0, 900.0), 10.0))
        .with_interceptor(InterceptorConfig::new(Point::new(200.0, -200.0), 75.0, 20.0));
    let mut engine = engine(&scenario);
    let snap = engine.tick();

    assert_eq!(snap.targets[0].destination, Point::new(0.0, 100.0));
    assert_eq!(snap.targets[1].destination, Point::ORIGIN);
    assert_eq!(snap.interceptors[0].idle_anchor, Point::new(200.0, -200.0));
    assert!((snap.interceptors[0].standoff_radius - 75.0).abs() < 1e-12);
}

#[test]
fn test_events_are_per_tick() {
    // A target already inside the radius is reported and assigned on tick 1.
    let scenario = ScenarioConfig::new(AssetConfig::default())
        .with_target(TargetConfig::inbound(Point::new(500.0, 0.0), 0.0))
        .with_interceptor(InterceptorConfig::new(Point::new(0.0, 0.0), 0.0, 1.0));
    let mut engine = engine(&scenario);

    let snap = engine.tick();
    assert_eq!(snap.events.len(), 2);
    assert!(matches!(snap.events[0], SimEvent::ContactDetected { target: 0, .. }));
    assert!(matches!(
        snap.events[1],
        SimEvent::Assigned {
            interceptor: 0,
            target: 0,
            ..
        }
    ));
    assert_eq!(snap.interceptors[0].target, Some(0));
    assert!(snap.targets[0].intercepting);

    let snap = engine.tick();
    assert!(snap.events.is_empty());
}

#[test]
fn test_run_until_complete_without_targets() {
    let mut engine = engine(&ScenarioConfig::new(AssetConfig::default()));
    assert!(engine.is_complete());
    assert!(engine.run_until_complete(10).is_none());
    assert_eq!(engine.time().tick, 0);
}

#[test]
fn test_run_until_complete_stops_at_budget() {
    let mut engine = engine(&ScenarioConfig::default());
    let snap = engine.run_until_complete(5).unwrap();
    assert_eq!(snap.time.tick, 5);
    assert!(!engine.is_complete());
}

#[test]
fn test_independent_engines_share_nothing() {
    let scenario = ScenarioConfig::default();
    let mut a = engine(&scenario);
    let b = engine(&scenario);
    for _ in 0..30 {
        a.tick();
    }
    assert_eq!(b.time().tick, 0);
    assert_eq!(b.target(1).unwrap().0.position, Point::new(-800.0, 0.0));
    assert!(b.claims().is_empty());
    assert!(!a.claims().is_empty());
}
