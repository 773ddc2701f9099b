//! Guarded-asset detection.
//!
//! Filters targets to those in range, unclaimed and alive, ranked nearest
//! first. Pure query over the world.

use std::collections::HashSet;

use hecs::{Entity, World};

use overwatch_core::components::{GuardedAsset, Kinematics, TargetState};
use overwatch_core::events::SimEvent;
use overwatch_core::types::Point;

/// A target the asset currently sees and nobody has claimed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub entity: Entity,
    pub designation: u32,
    pub position: Point,
    /// Range from the asset.
    pub range: f64,
}

/// All detectable targets, ascending by range, ties in designation order.
pub fn detect(world: &World, asset: &GuardedAsset) -> Vec<Contact> {
    let mut contacts: Vec<Contact> = world
        .query::<(&Kinematics, &TargetState)>()
        .iter()
        .filter(|(_, (kinematics, state))| {
            !state.intercepting && !state.destroyed && asset.covers(kinematics.position)
        })
        .map(|(entity, (kinematics, state))| Contact {
            entity,
            designation: state.designation,
            position: kinematics.position,
            range: asset.range_to(kinematics.position),
        })
        .collect();

    contacts.sort_by(|a, b| {
        a.range
            .total_cmp(&b.range)
            .then(a.designation.cmp(&b.designation))
    });
    contacts
}

/// Emit `ContactDetected` for contacts not reported before.
pub fn report_new_contacts(
    contacts: &[Contact],
    reported: &mut HashSet<Entity>,
    events: &mut Vec<SimEvent>,
) {
    for contact in contacts {
        if reported.insert(contact.entity) {
            events.push(SimEvent::ContactDetected {
                target: contact.designation,
                range: contact.range,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spawn(world: &mut World, designation: u32, x: f64, y: f64) -> Entity {
        world.spawn((
            Kinematics::new(Point::new(x, y), 0.0, 0.0),
            TargetState::new(designation, Point::ORIGIN),
        ))
    }

    #[test]
    fn test_detect_filters_and_orders() {
        let mut world = World::new();
        let asset = GuardedAsset::new(Point::ORIGIN, 600.0);
        spawn(&mut world, 0, 500.0, 0.0);
        spawn(&mut world, 1, 0.0, 700.0); // out of range
        spawn(&mut world, 2, -100.0, 0.0);
        let claimed = spawn(&mut world, 3, 50.0, 0.0);
        let dead = spawn(&mut world, 4, 10.0, 0.0);
        spawn(&mut world, 5, 0.0, -300.0);
        world.get::<&mut TargetState>(claimed).unwrap().intercepting = true;
        world.get::<&mut TargetState>(dead).unwrap().destroy();

        let contacts = detect(&world, &asset);
        let order: Vec<u32> = contacts.iter().map(|c| c.designation).collect();
        assert_eq!(order, vec![2, 5, 0]);
        assert!(contacts.windows(2).all(|w| w[0].range <= w[1].range));
    }

    #[test]
    fn test_detect_boundary_is_inclusive() {
        let mut world = World::new();
        spawn(&mut world, 0, 600.0, 0.0);
        let contacts = detect(&world, &GuardedAsset::new(Point::ORIGIN, 600.0));
        assert_eq!(contacts.len(), 1);
    }

    #[test]
    fn test_detect_agrees_with_asset_coverage() {
        let mut world = World::new();
        let asset = GuardedAsset::new(Point::new(100.0, 100.0), 250.0);
        let points = [(350.0, 100.0), (350.001, 100.0), (100.0, -150.0), (290.0, 290.0)];
        for (i, &(x, y)) in points.iter().enumerate() {
            spawn(&mut world, i as u32, x, y);
        }

        let detected: Vec<u32> = detect(&world, &asset).iter().map(|c| c.designation).collect();
        let mut covered: Vec<u32> = points
            .iter()
            .enumerate()
            .filter(|(_, p)| asset.covers(Point::new(p.0, p.1)))
            .map(|(i, _)| i as u32)
            .collect();
        covered.sort_unstable();
        let mut sorted = detected.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, covered);
        assert_eq!(sorted, vec![0, 2]);
    }

    #[test]
    fn test_detect_ties_keep_designation_order() {
        let mut world = World::new();
        // Spawn out of designation order at equal range.
        spawn(&mut world, 2, 0.0, 100.0);
        spawn(&mut world, 0, 100.0, 0.0);
        spawn(&mut world, 1, -100.0, 0.0);
        let contacts = detect(&world, &GuardedAsset::new(Point::ORIGIN, 600.0));
        let order: Vec<u32> = contacts.iter().map(|c| c.designation).collect();
        assert_eq!(order, vec![0, 1, 2]);
    }

    #[test]
    fn test_detect_empty_is_normal() {
        let mut world = World::new();
        assert!(detect(&world, &GuardedAsset::new(Point::ORIGIN, 600.0)).is_empty());
        spawn(&mut world, 0, 900.0, 900.0);
        assert!(detect(&world, &GuardedAsset::new(Point::ORIGIN, 600.0)).is_empty());
    }

    #[test]
    fn test_contacts_reported_once() {
        let mut world = World::new();
        spawn(&mut world, 0, 10.0, 0.0);
        let asset = GuardedAsset::new(Point::ORIGIN, 600.0);
        let mut reported = HashSet::new();
        let mut events = Vec::new();

        let contacts = detect(&world, &asset);
        report_new_contacts(&contacts, &mut reported, &mut events);
        report_new_contacts(&contacts, &mut reported, &mut events);
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], SimEvent::ContactDetected { target: 0, .. }));
    }
}
