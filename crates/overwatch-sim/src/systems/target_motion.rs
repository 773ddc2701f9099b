//! Straight-line target motion.
//!
//! Targets keep the heading fixed at spawn: position += speed * dt along it.

use hecs::World;

use overwatch_core::components::{Kinematics, TargetState};
use overwatch_core::geometry;

/// Advance one target by `dt`. Destroyed targets do not move.
pub fn advance_target(kinematics: &mut Kinematics, state: &TargetState, dt: f64) {
    if state.destroyed {
        return;
    }
    kinematics.position =
        geometry::step(kinematics.position, kinematics.heading, kinematics.speed * dt);
}

/// Advance every live target.
pub fn run(world: &mut World, dt: f64) {
    for (_entity, (kinematics, state)) in world.query_mut::<(&mut Kinematics, &TargetState)>() {
        advance_target(kinematics, state, dt);
    }
}
