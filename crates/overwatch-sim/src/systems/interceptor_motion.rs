//! Interceptor motion: idle loiter, pure pursuit and the joint kill.
//!
//! Engaging interceptors re-aim at their target every tick and close at
//! constant speed. Reaching the kill radius destroys interceptor and target
//! together, inside this system, before anything else runs.

use std::collections::HashMap;

use hecs::{Entity, World};

use overwatch_core::components::{InterceptorState, Kinematics, TargetState};
use overwatch_core::enums::InterceptorMode;
use overwatch_core::events::SimEvent;
use overwatch_core::geometry::{self, bearing, distance};
use overwatch_core::types::Point;

use crate::engagement::{ClaimTable, ScoreState};

/// Circle the idle anchor counter-clockwise for one step.
///
/// The heading is tangential to the current radius, so the orbit widens
/// slowly each tick; that drift is part of the model.
pub fn loiter(kinematics: &mut Kinematics, anchor: Point, dt: f64) {
    kinematics.heading = geometry::loiter_heading(kinematics.position, anchor);
    kinematics.position =
        geometry::step(kinematics.position, kinematics.heading, kinematics.speed * dt);
}

/// Turn toward `aim` and close on it for one step.
pub fn pursue(kinematics: &mut Kinematics, aim: Point, dt: f64) {
    kinematics.heading = bearing(kinematics.position, aim);
    kinematics.position =
        geometry::step(kinematics.position, kinematics.heading, kinematics.speed * dt);
}

struct Kill {
    interceptor: Entity,
    interceptor_designation: u32,
    target: Entity,
}

/// Advance every live interceptor and resolve joint kills.
pub fn run(
    world: &mut World,
    claims: &mut ClaimTable,
    kill_radius: f64,
    dt: f64,
    tick: u64,
    events: &mut Vec<SimEvent>,
    score: &mut ScoreState,
) {
    // Targets have finished moving for this tick, so their positions can be
    // read once up front.
    let aim_points: HashMap<Entity, (Entity, Point)> = claims
        .pursuits()
        .filter_map(|engagement| {
            let target = world.get::<&Kinematics>(engagement.target).ok()?;
            Some((engagement.interceptor, (engagement.target, target.position)))
        })
        .collect();

    let mut kills = Vec::new();
    for (entity, (kinematics, state)) in
        world.query_mut::<(&mut Kinematics, &mut InterceptorState)>()
    {
        match state.mode {
            InterceptorMode::Destroyed => {}
            InterceptorMode::Idle => loiter(kinematics, state.idle_anchor, dt),
            InterceptorMode::Engaging => {
                let Some(&(target, aim)) = aim_points.get(&entity) else {
                    log::error!(
                        "interceptor {} is engaging without an open claim",
                        state.designation
                    );
                    continue;
                };
                pursue(kinematics, aim, dt);
                if distance(kinematics.position, aim) <= kill_radius {
                    state.destroy();
                    kills.push(Kill {
                        interceptor: entity,
                        interceptor_designation: state.designation,
                        target,
                    });
                }
            }
        }
    }

    kills.sort_by_key(|kill| kill.interceptor_designation);
    for kill in kills {
        let target_designation = {
            let Ok(mut target) = world.get::<&mut TargetState>(kill.target) else {
                continue;
            };
            if target.is_alive() {
                score.targets_destroyed += 1;
            }
            target.destroy();
            target.designation
        };
        score.interceptors_expended += 1;

        if let Some(engagement) = claims.close(kill.interceptor, tick) {
            log::info!(
                "tick {tick}: splash, interceptor {} and target {} destroyed",
                kill.interceptor_designation,
                target_designation
            );
            events.push(SimEvent::Splash {
                engagement_id: engagement.id,
                interceptor: kill.interceptor_designation,
                target: target_designation,
            });
        }
    }
}
