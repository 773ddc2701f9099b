//! Entity spawn factories for setting up the simulation world.
//!
//! Creates target and interceptor entities from scenario configuration,
//! and generates seeded random raids.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use overwatch_core::components::{InterceptorState, Kinematics, TargetState};
use overwatch_core::config::{
    default_interceptors, AssetConfig, InterceptorConfig, ScenarioConfig, TargetConfig,
};
use overwatch_core::constants::*;
use overwatch_core::geometry::bearing;

/// Entity handles in scenario order; index == designation.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    pub targets: Vec<Entity>,
    pub interceptors: Vec<Entity>,
}

/// Spawn every target and interceptor of a scenario.
pub fn populate(world: &mut World, scenario: &ScenarioConfig) -> Roster {
    let targets = scenario
        .targets
        .iter()
        .enumerate()
        .map(|(i, config)| spawn_target(world, i as u32, config, &scenario.asset))
        .collect();
    let interceptors = scenario
        .interceptors
        .iter()
        .enumerate()
        .map(|(i, config)| spawn_interceptor(world, i as u32, config))
        .collect();
    Roster {
        targets,
        interceptors,
    }
}

/// Spawn a target at its start point. Its heading is fixed here, toward the
/// configured destination or the asset, and never recomputed.
pub fn spawn_target(
    world: &mut World,
    designation: u32,
    config: &TargetConfig,
    asset: &AssetConfig,
) -> Entity {
    let destination = config.destination.unwrap_or(asset.position);
    let heading = bearing(config.start, destination);
    world.spawn((
        Kinematics::new(config.start, heading, config.speed),
        TargetState::new(designation, destination),
    ))
}

/// Spawn an idle interceptor east of its anchor by the standoff radius.
pub fn spawn_interceptor(world: &mut World, designation: u32, config: &InterceptorConfig) -> Entity {
    let position = config.idle_anchor.offset(config.standoff_radius, 0.0);
    world.spawn((
        Kinematics::new(position, INITIAL_INTERCEPTOR_HEADING, config.speed),
        InterceptorState::new(designation, config.idle_anchor, config.standoff_radius),
    ))
}

/// A raid of `count` targets spawned on a ring around the asset at random
/// bearings, all inbound, defended by the default four interceptors.
pub fn random_raid(rng: &mut ChaCha8Rng, asset: AssetConfig, count: usize) -> ScenarioConfig {
    let targets = (0..count)
        .map(|_| {
            let angle: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
            let range: f64 = rng.gen_range(RAID_MIN_RANGE..RAID_MAX_RANGE);
            let jitter: f64 = rng.gen_range(-RAID_SPEED_JITTER..RAID_SPEED_JITTER);
            let start = asset
                .position
                .offset(range * angle.cos(), range * angle.sin());
            TargetConfig::inbound(start, DEFAULT_TARGET_SPEED * (1.0 + jitter))
        })
        .collect();

    ScenarioConfig {
        asset,
        targets,
        interceptors: default_interceptors(asset.position),
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use overwatch_core::enums::InterceptorMode;
    use overwatch_core::geometry::distance;
    use overwatch_core::types::Point;

    use super::*;

    #[test]
    fn test_target_heading_points_at_asset() {
        let mut world = World::new();
        let asset = AssetConfig::default();
        let e = spawn_target(
            &mut world,
            0,
            &TargetConfig::inbound(Point::new(-600.0, -600.0), 10.0),
            &asset,
        );
        let k = world.get::<&Kinematics>(e).unwrap();
        let expected = std::f64::consts::FRAC_PI_4;
        assert!(
            (k.heading - expected).abs() < 1e-12,
            "heading should be PI/4, got {}",
            k.heading
        );
        assert_eq!(world.get::<&TargetState>(e).unwrap().destination, Point::ORIGIN);
    }

    #[test]
    fn test_target_explicit_destination() {
        let mut world = World::new();
        let config = TargetConfig {
            start: Point::new(0.0, 0.0),
            destination: Some(Point::new(0.0, 50.0)),
            speed: 1.0,
        };
        let e = spawn_target(&mut world, 7, &config, &AssetConfig::default());
        let k = world.get::<&Kinematics>(e).unwrap();
        assert!((k.heading - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert_eq!(world.get::<&TargetState>(e).unwrap().designation, 7);
    }

    #[test]
    fn test_interceptor_spawns_at_standoff() {
        let mut world = World::new();
        let e = spawn_interceptor(
            &mut world,
            0,
            &InterceptorConfig::new(Point::new(-200.0, -200.0), 100.0, 20.0),
        );
        let k = world.get::<&Kinematics>(e).unwrap();
        assert_eq!(k.position, Point::new(-100.0, -200.0));
        assert!((k.heading - INITIAL_INTERCEPTOR_HEADING).abs() < 1e-12);
        assert_eq!(
            world.get::<&InterceptorState>(e).unwrap().mode,
            InterceptorMode::Idle
        );
    }

    #[test]
    fn test_populate_keeps_scenario_order() {
        let mut world = World::new();
        let roster = populate(&mut world, &ScenarioConfig::default());
        assert_eq!(roster.targets.len(), 4);
        assert_eq!(roster.interceptors.len(), 4);
        for (i, &e) in roster.targets.iter().enumerate() {
            assert_eq!(world.get::<&TargetState>(e).unwrap().designation, i as u32);
        }
        for (i, &e) in roster.interceptors.iter().enumerate() {
            assert_eq!(
                world.get::<&InterceptorState>(e).unwrap().designation,
                i as u32
            );
        }
    }

    #[test]
    fn test_random_raid_is_seeded_and_on_ring() {
        let asset = AssetConfig::default();
        let a = random_raid(&mut ChaCha8Rng::seed_from_u64(7), asset, 12);
        let b = random_raid(&mut ChaCha8Rng::seed_from_u64(7), asset, 12);
        assert_eq!(a, b, "same seed should give the same raid");
        assert_eq!(a.targets.len(), 12);
        for target in &a.targets {
            let range = distance(asset.position, target.start);
            assert!(
                (RAID_MIN_RANGE - 1e-9..=RAID_MAX_RANGE + 1e-9).contains(&range),
                "target spawned at range {range}"
            );
            assert!(target.speed > 0.0);
        }
        a.validate().unwrap();
    }
}
