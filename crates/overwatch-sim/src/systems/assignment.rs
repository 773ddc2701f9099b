//! Greedy assignment: the nearest contact gets the nearest idle interceptor.
//!
//! At most one assignment per tick. Remaining contacts wait for later ticks.

use hecs::{Entity, World};

use overwatch_core::components::{InterceptorState, Kinematics};
use overwatch_core::events::SimEvent;
use overwatch_core::geometry::distance;
use overwatch_core::types::Point;

use crate::engagement::{ClaimTable, ScoreState};
use crate::systems::detection::Contact;

/// An idle interceptor and its range to some point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub entity: Entity,
    pub designation: u32,
    pub range: f64,
}

/// Closest live idle interceptor to `point`, ties in designation order.
pub fn nearest_idle_interceptor(world: &World, point: Point) -> Option<Candidate> {
    world
        .query::<(&Kinematics, &InterceptorState)>()
        .iter()
        .filter(|(_, (_, state))| state.is_idle())
        .map(|(entity, (kinematics, state))| Candidate {
            entity,
            designation: state.designation,
            range: distance(kinematics.position, point),
        })
        .min_by(|a, b| {
            a.range
                .total_cmp(&b.range)
                .then(a.designation.cmp(&b.designation))
        })
}

/// Assign an interceptor to the first (nearest) contact, if one is idle.
/// Returns the new engagement id.
pub fn run(
    world: &mut World,
    claims: &mut ClaimTable,
    contacts: &[Contact],
    events: &mut Vec<SimEvent>,
    score: &mut ScoreState,
    tick: u64,
) -> Option<u32> {
    let contact = contacts.first()?;
    let Some(candidate) = nearest_idle_interceptor(world, contact.position) else {
        log::trace!(
            "tick {tick}: target {} waiting, no idle interceptor",
            contact.designation
        );
        return None;
    };

    match claims.engage(world, candidate.entity, contact.entity, tick) {
        Ok(engagement_id) => {
            log::debug!(
                "tick {tick}: interceptor {} assigned to target {} at range {:.1}",
                candidate.designation,
                contact.designation,
                candidate.range
            );
            score.engagements_opened += 1;
            events.push(SimEvent::Assigned {
                engagement_id,
                interceptor: candidate.designation,
                target: contact.designation,
                range: candidate.range,
            });
            Some(engagement_id)
        }
        Err(err) => {
            // Detection and candidate selection only yield claimable pairs.
            log::error!("tick {tick}: assignment policy broke a claim rule: {err}");
            if cfg!(debug_assertions) {
                panic!("assignment policy broke a claim rule: {err}");
            }
            None
        }
    }
}
