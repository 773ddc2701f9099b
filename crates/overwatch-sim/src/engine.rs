//! Simulation engine: the core of the interception model.
//!
//! `SimulationEngine` owns the hecs ECS world, the guarded asset and the
//! claim table, runs every system in a fixed order once per tick, and
//! produces `SimSnapshot`s. Completely headless and free of global state,
//! so any number of engines can run side by side.

use std::collections::HashSet;

use hecs::{Entity, World};

use overwatch_core::components::{GuardedAsset, InterceptorState, Kinematics, TargetState};
use overwatch_core::config::ScenarioConfig;
use overwatch_core::constants::{DEFAULT_DT, KILL_RADIUS};
use overwatch_core::error::ConfigError;
use overwatch_core::events::SimEvent;
use overwatch_core::state::SimSnapshot;
use overwatch_core::types::SimTime;

use crate::engagement::{ClaimTable, ScoreState};
use crate::systems;
use crate::systems::detection::Contact;
use crate::world_setup::{self, Roster};

/// Engine parameters that are not part of the scenario layout.
#[derive(Debug, Clone, Copy)]
pub struct SimConfig {
    /// Time step per tick.
    pub dt: f64,
    /// Interceptor-to-target range that triggers the joint kill.
    pub kill_radius: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            dt: DEFAULT_DT,
            kill_radius: KILL_RADIUS,
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(ConfigError::TimeStep(self.dt));
        }
        if !(self.kill_radius.is_finite() && self.kill_radius >= 0.0) {
            return Err(ConfigError::KillRadius(self.kill_radius));
        }
        Ok(())
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    config: SimConfig,
    world: World,
    asset: GuardedAsset,
    roster: Roster,
    claims: ClaimTable,
    time: SimTime,
    events: Vec<SimEvent>,
    reported_contacts: HashSet<Entity>,
    score: ScoreState,
}

impl SimulationEngine {
    /// Build an engine from a validated scenario.
    pub fn new(config: SimConfig, scenario: &ScenarioConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        scenario.validate()?;

        let mut world = World::new();
        let roster = world_setup::populate(&mut world, scenario);
        let score = ScoreState {
            targets_total: roster.targets.len() as u32,
            interceptors_total: roster.interceptors.len() as u32,
            ..Default::default()
        };

        log::debug!(
            "engine ready: {} targets, {} interceptors, detection radius {}",
            roster.targets.len(),
            roster.interceptors.len(),
            scenario.asset.detection_radius
        );

        Ok(Self {
            config,
            world,
            asset: GuardedAsset::new(scenario.asset.position, scenario.asset.detection_radius),
            roster,
            claims: ClaimTable::new(),
            time: SimTime::default(),
            events: Vec::new(),
            reported_contacts: HashSet::new(),
            score,
        })
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> SimSnapshot {
        self.run_systems();
        self.time.advance(self.config.dt);

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.asset,
            &self.claims,
            &self.time,
            events,
            &self.score,
        )
    }

    /// Tick until every target is destroyed or `max_ticks` have run.
    /// Returns the last snapshot, or `None` if no tick was run.
    pub fn run_until_complete(&mut self, max_ticks: u64) -> Option<SimSnapshot> {
        let mut last = None;
        for _ in 0..max_ticks {
            if self.is_complete() {
                break;
            }
            last = Some(self.tick());
        }
        last
    }

    /// Current detection result, without side effects.
    pub fn detect(&self) -> Vec<Contact> {
        systems::detection::detect(&self.world, &self.asset)
    }

    /// Every target has been destroyed.
    pub fn is_complete(&self) -> bool {
        self.score.targets_destroyed as usize == self.roster.targets.len()
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn config(&self) -> SimConfig {
        self.config
    }

    pub fn asset(&self) -> &GuardedAsset {
        &self.asset
    }

    pub fn claims(&self) -> &ClaimTable {
        &self.claims
    }

    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Entity handles in scenario order.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Kinematics and state of a target by designation, destroyed or not.
    pub fn target(&self, designation: u32) -> Option<(Kinematics, TargetState)> {
        let entity = *self.roster.targets.get(designation as usize)?;
        let kinematics = *self.world.get::<&Kinematics>(entity).ok()?;
        let state = *self.world.get::<&TargetState>(entity).ok()?;
        Some((kinematics, state))
    }

    /// Kinematics and state of an interceptor by designation, destroyed or not.
    pub fn interceptor(&self, designation: u32) -> Option<(Kinematics, InterceptorState)> {
        let entity = *self.roster.interceptors.get(designation as usize)?;
        let kinematics = *self.world.get::<&Kinematics>(entity).ok()?;
        let state = *self.world.get::<&InterceptorState>(entity).ok()?;
        Some((kinematics, state))
    }

    /// Designation of the target claimed by an interceptor.
    pub fn assigned_target(&self, interceptor: u32) -> Option<u32> {
        let entity = *self.roster.interceptors.get(interceptor as usize)?;
        self.claims
            .for_interceptor(entity)
            .map(|engagement| engagement.target_designation)
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        let tick = self.time.tick + 1;

        // 1. Target motion
        systems::target_motion::run(&mut self.world, self.config.dt);
        // 2. Detection over the full target set
        let contacts = systems::detection::detect(&self.world, &self.asset);
        systems::detection::report_new_contacts(
            &contacts,
            &mut self.reported_contacts,
            &mut self.events,
        );
        log::trace!("tick {tick}: {} contacts", contacts.len());
        // 3. Assignment (at most one)
        systems::assignment::run(
            &mut self.world,
            &mut self.claims,
            &contacts,
            &mut self.events,
            &mut self.score,
            tick,
        );
        // 4. Interceptor motion and joint kills
        systems::interceptor_motion::run(
            &mut self.world,
            &mut self.claims,
            self.config.kill_radius,
            self.config.dt,
            tick,
            &mut self.events,
            &mut self.score,
        );
    }
}
