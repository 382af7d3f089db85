use bevy::prelude::*;

use crate::components::{
    ContactEvent, ContactPhase, GroundComponent, SensorComponent, SpatialComponent, WeldJoint,
};
use crate::resources::ContactFlags;
use crate::utils::box_corners;

/// Carries welded entities rigidly with their parent body.
pub fn weld_joint_system(
    mut welded: Query<(&WeldJoint, &mut SpatialComponent), With<SensorComponent>>,
    bodies: Query<&SpatialComponent, Without<SensorComponent>>,
) {
    for (joint, mut spatial) in welded.iter_mut() {
        let Ok(parent) = bodies.get(joint.body) else {
            warn!("Weld joint references missing body {:?}", joint.body);
            continue;
        };

        let arm = parent.rotation() * joint.local_anchor;
        spatial.position = parent.position + arm;
        spatial.velocity = parent.point_velocity(&arm);
        spatial.angle = parent.angle;
        spatial.angular_velocity = parent.angular_velocity;
    }
}

/// Tests every sensor against the ground and reports overlap changes.
pub fn sensor_contact_system(
    mut sensors: Query<(&mut SensorComponent, &SpatialComponent)>,
    grounds: Query<&GroundComponent>,
    mut contact_events: EventWriter<ContactEvent>,
) {
    for (mut sensor, spatial) in sensors.iter_mut() {
        let corners = box_corners(&spatial.position, spatial.angle, &sensor.half_extents);
        let touching = grounds.iter().any(|ground| ground.overlaps(&corners));

        if let Some(event) = update_overlap(&mut sensor, touching) {
            debug!("Sensor {:?} contact {:?}", event.leg, event.phase);
            contact_events.send(event);
        }
    }
}

/// Applies this step's contact events to the leg flags.
pub fn contact_flag_system(
    mut contact_events: EventReader<ContactEvent>,
    mut flags: ResMut<ContactFlags>,
) {
    flags.apply_all(contact_events.read());
}

/// Records the new overlap state, returning an event only on a change.
fn update_overlap(sensor: &mut SensorComponent, touching: bool) -> Option<ContactEvent> {
    if sensor.touching == touching {
        return None;
    }

    sensor.touching = touching;
    Some(ContactEvent {
        leg: sensor.leg,
        phase: if touching {
            ContactPhase::Begin
        } else {
            ContactPhase::End
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Leg;
    use approx::assert_relative_eq;
    use nalgebra::Vector2;

    #[test]
    fn test_overlap_changes_emit_single_event() {
        let mut sensor = SensorComponent::new(Leg::Left, Vector2::new(0.08, 0.5));

        assert_eq!(update_overlap(&mut sensor, false), None);
        assert_eq!(
            update_overlap(&mut sensor, true),
            Some(ContactEvent {
                leg: Leg::Left,
                phase: ContactPhase::Begin
            })
        );
        assert_eq!(update_overlap(&mut sensor, true), None);
        assert_eq!(
            update_overlap(&mut sensor, false),
            Some(ContactEvent {
                leg: Leg::Left,
                phase: ContactPhase::End
            })
        );
    }

    struct SensorWorld {
        world: World,
        schedule: Schedule,
        body: Entity,
        left: Entity,
    }

    fn sensor_world(body_height: f64) -> SensorWorld {
        let mut world = World::new();
        world.init_resource::<Events<ContactEvent>>();
        world.init_resource::<ContactFlags>();
        world.spawn(GroundComponent::new(0.0, 40.0, 0.8));

        let body = world
            .spawn(SpatialComponent::at_position(Vector2::new(0.0, body_height)))
            .id();
        let left = world
            .spawn((
                SensorComponent::new(Leg::Left, Vector2::new(0.08, 0.5)),
                WeldJoint::new(body, Vector2::new(-0.55, -1.1)),
                SpatialComponent::default(),
            ))
            .id();
        world.spawn((
            SensorComponent::new(Leg::Right, Vector2::new(0.08, 0.5)),
            WeldJoint::new(body, Vector2::new(0.55, -1.1)),
            SpatialComponent::default(),
        ));

        let mut schedule = Schedule::default();
        schedule.add_systems(
            (weld_joint_system, sensor_contact_system, contact_flag_system).chain(),
        );

        SensorWorld {
            world,
            schedule,
            body,
            left,
        }
    }

    #[test]
    fn test_weld_follows_parent() {
        let mut sim = sensor_world(5.0);
        sim.schedule.run(&mut sim.world);

        let left = sim.world.get::<SpatialComponent>(sim.left).unwrap();
        assert_relative_eq!(left.position, Vector2::new(-0.55, 3.9), epsilon = 1e-12);
        assert_eq!(*sim.world.resource::<ContactFlags>(), ContactFlags::default());
    }

    #[test]
    fn test_flags_track_touchdown_and_liftoff() {
        let mut sim = sensor_world(1.0);
        sim.schedule.run(&mut sim.world);

        let flags = *sim.world.resource::<ContactFlags>();
        assert!(flags.left && flags.right);

        // Tip clockwise onto the right leg: the left sensor lifts clear
        if let Some(mut spatial) = sim.world.get_mut::<SpatialComponent>(sim.body) {
            spatial.position.y = 1.6;
            spatial.angle = -0.5;
        }
        sim.schedule.run(&mut sim.world);

        let flags = *sim.world.resource::<ContactFlags>();
        assert!(!flags.left);
        assert!(flags.right);
    }
}
