//! Engagement data model: the claim table linking interceptors to targets.
//!
//! Stored in `SimulationEngine` next to the world, NOT as ECS entities.
//! The table is the only holder of interceptor-to-target references; the
//! target's `intercepting` flag and the interceptor's `Engaging` mode are set
//! by the same call that records the claim.

use std::collections::HashMap;

use hecs::{Entity, World};
use thiserror::Error;

use overwatch_core::components::{InterceptorState, TargetState};
use overwatch_core::enums::{EngagementPhase, InterceptorMode};

/// One interceptor's claim on one target.
#[derive(Debug, Clone)]
pub struct Engagement {
    pub id: u32,
    pub interceptor: Entity,
    pub target: Entity,
    pub interceptor_designation: u32,
    pub target_designation: u32,
    pub phase: EngagementPhase,
    /// Tick in which the claim was made.
    pub assigned_tick: u64,
    /// Tick in which the joint kill resolved.
    pub closed_tick: Option<u64>,
}

/// A claim request that would break the one-interceptor-per-target rules.
#[derive(Debug, Error)]
pub enum EngageError {
    #[error("entity {0:?} is not an interceptor")]
    MissingInterceptor(Entity),

    #[error("entity {0:?} is not a target")]
    MissingTarget(Entity),

    #[error("interceptor {designation} is {mode:?}, only idle interceptors can engage")]
    InterceptorUnavailable {
        designation: u32,
        mode: InterceptorMode,
    },

    #[error("target {0} is already destroyed")]
    TargetDestroyed(u32),

    #[error("target {0} is already claimed")]
    TargetClaimed(u32),
}

/// All engagements, with lookups by either side.
#[derive(Debug, Default)]
pub struct ClaimTable {
    engagements: Vec<Engagement>,
    by_interceptor: HashMap<Entity, usize>,
    by_target: HashMap<Entity, usize>,
}

/// Running score state tracked by the engine.
#[derive(Debug, Clone, Default)]
pub struct ScoreState {
    pub targets_total: u32,
    pub targets_destroyed: u32,
    pub interceptors_total: u32,
    pub interceptors_expended: u32,
    pub engagements_opened: u32,
}

impl ClaimTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `target` for `interceptor`.
    ///
    /// Requires an idle, unclaimed interceptor and a live, unclaimed target.
    /// On success the interceptor becomes `Engaging`, the target becomes
    /// `intercepting` and the engagement id is returned. On failure nothing
    /// is modified.
    pub fn engage(
        &mut self,
        world: &World,
        interceptor: Entity,
        target: Entity,
        tick: u64,
    ) -> Result<u32, EngageError> {
        let interceptor_designation = {
            let state = world
                .get::<&InterceptorState>(interceptor)
                .map_err(|_| EngageError::MissingInterceptor(interceptor))?;
            if !state.is_idle() || self.by_interceptor.contains_key(&interceptor) {
                return Err(EngageError::InterceptorUnavailable {
                    designation: state.designation,
                    mode: state.mode,
                });
            }
            state.designation
        };

        let target_designation = {
            let state = world
                .get::<&TargetState>(target)
                .map_err(|_| EngageError::MissingTarget(target))?;
            if state.destroyed {
                return Err(EngageError::TargetDestroyed(state.designation));
            }
            if state.intercepting || self.by_target.contains_key(&target) {
                return Err(EngageError::TargetClaimed(state.designation));
            }
            state.designation
        };

        // Both borrows are checked above; take them together for the joint update.
        let mut interceptor_state = world
            .get::<&mut InterceptorState>(interceptor)
            .map_err(|_| EngageError::MissingInterceptor(interceptor))?;
        let mut target_state = world
            .get::<&mut TargetState>(target)
            .map_err(|_| EngageError::MissingTarget(target))?;
        interceptor_state.mode = InterceptorMode::Engaging;
        target_state.intercepting = true;

        let id = self.engagements.len() as u32;
        let index = self.engagements.len();
        self.engagements.push(Engagement {
            id,
            interceptor,
            target,
            interceptor_designation,
            target_designation,
            phase: EngagementPhase::Pursuit,
            assigned_tick: tick,
            closed_tick: None,
        });
        self.by_interceptor.insert(interceptor, index);
        self.by_target.insert(target, index);

        Ok(id)
    }

    /// Mark the interceptor's engagement as resolved. Returns it if one was open.
    pub fn close(&mut self, interceptor: Entity, tick: u64) -> Option<&Engagement> {
        let index = *self.by_interceptor.get(&interceptor)?;
        let engagement = &mut self.engagements[index];
        if engagement.phase == EngagementPhase::Splash {
            return None;
        }
        engagement.phase = EngagementPhase::Splash;
        engagement.closed_tick = Some(tick);
        Some(&*engagement)
    }

    /// Target claimed by `interceptor`, if any. Claims are never released.
    pub fn target_of(&self, interceptor: Entity) -> Option<Entity> {
        self.for_interceptor(interceptor).map(|e| e.target)
    }

    /// Interceptor that claimed `target`, if any.
    pub fn claimant_of(&self, target: Entity) -> Option<Entity> {
        self.for_target(target).map(|e| e.interceptor)
    }

    pub fn for_interceptor(&self, interceptor: Entity) -> Option<&Engagement> {
        self.by_interceptor
            .get(&interceptor)
            .map(|&i| &self.engagements[i])
    }

    pub fn for_target(&self, target: Entity) -> Option<&Engagement> {
        self.by_target.get(&target).map(|&i| &self.engagements[i])
    }

    /// Engagements still in pursuit, in the order they were opened.
    pub fn pursuits(&self) -> impl Iterator<Item = &Engagement> {
        self.engagements
            .iter()
            .filter(|e| e.phase == EngagementPhase::Pursuit)
    }

    /// All engagements, in the order they were opened.
    pub fn iter(&self) -> impl Iterator<Item = &Engagement> {
        self.engagements.iter()
    }

    pub fn len(&self) -> usize {
        self.engagements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.engagements.is_empty()
    }
}
