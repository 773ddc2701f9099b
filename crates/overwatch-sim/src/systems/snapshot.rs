//! Snapshot system: queries the ECS world and builds a `SimSnapshot`.
//!
//! Read-only, it never modifies the world.

use hecs::World;

use overwatch_core::components::{GuardedAsset, InterceptorState, Kinematics, TargetState};
use overwatch_core::constants::MAP_EXTENT;
use overwatch_core::events::SimEvent;
use overwatch_core::state::*;
use overwatch_core::types::SimTime;

use crate::engagement::{ClaimTable, ScoreState};

/// Build a complete snapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    asset: &GuardedAsset,
    claims: &ClaimTable,
    time: &SimTime,
    events: Vec<SimEvent>,
    score: &ScoreState,
) -> SimSnapshot {
    SimSnapshot {
        time: *time,
        asset: AssetView {
            position: asset.position,
            detection_radius: asset.detection_radius,
        },
        targets: build_targets(world),
        interceptors: build_interceptors(world, claims),
        events,
        score: ScoreView {
            targets_total: score.targets_total,
            targets_destroyed: score.targets_destroyed,
            interceptors_total: score.interceptors_total,
            interceptors_expended: score.interceptors_expended,
            engagements_opened: score.engagements_opened,
        },
        map_extent: MAP_EXTENT,
    }
}

/// Live targets, in designation order.
fn build_targets(world: &World) -> Vec<TargetView> {
    let mut targets: Vec<TargetView> = world
        .query::<(&Kinematics, &TargetState)>()
        .iter()
        .filter(|(_, (_, state))| state.is_alive())
        .map(|(_, (kinematics, state))| TargetView {
            designation: state.designation,
            position: kinematics.position,
            heading: kinematics.heading,
            speed: kinematics.speed,
            destination: state.destination,
            intercepting: state.intercepting,
        })
        .collect();

    targets.sort_by_key(|t| t.designation);
    targets
}

/// Live interceptors, in designation order.
fn build_interceptors(world: &World, claims: &ClaimTable) -> Vec<InterceptorView> {
    let mut interceptors: Vec<InterceptorView> = world
        .query::<(&Kinematics, &InterceptorState)>()
        .iter()
        .filter(|(_, (_, state))| state.is_alive())
        .map(|(entity, (kinematics, state))| InterceptorView {
            designation: state.designation,
            position: kinematics.position,
            heading: kinematics.heading,
            speed: kinematics.speed,
            mode: state.mode,
            idle_anchor: state.idle_anchor,
            standoff_radius: state.standoff_radius,
            target: claims
                .for_interceptor(entity)
                .map(|engagement| engagement.target_designation),
        })
        .collect();

    interceptors.sort_by_key(|i| i.designation);
    interceptors
}
