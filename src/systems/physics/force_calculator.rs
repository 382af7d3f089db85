use bevy::prelude::*;
use nalgebra::Vector2;

use crate::components::{PhysicsComponent, ReferenceFrame, SpatialComponent};
use crate::resources::PhysicsConfig;

pub fn force_calculator_system(
    mut query: Query<(&mut PhysicsComponent, &SpatialComponent)>,
    config: Res<PhysicsConfig>,
) {
    for (mut physics, spatial) in query.iter_mut() {
        let (net_force, net_torque) = calculate_net_force_torque(&physics, spatial, &config.gravity);
        physics.net_force = net_force;
        physics.net_torque = net_torque;
    }
}

/// Sums gravity and every pending force into a world-frame net force and a
/// torque about the body origin.
pub fn calculate_net_force_torque(
    physics: &PhysicsComponent,
    spatial: &SpatialComponent,
    gravity: &Vector2<f64>,
) -> (Vector2<f64>, f64) {
    let rotation = spatial.rotation();
    let mut net_force = gravity * physics.mass;
    let mut net_torque = 0.0;

    for force in &physics.forces {
        let force_world = match force.frame {
            ReferenceFrame::Body => rotation * force.vector,
            ReferenceFrame::Inertial => force.vector,
        };

        net_force += force_world;

        if let Some(point) = force.point {
            let arm = rotation * point;
            net_torque += arm.perp(&force_world);
        }
    }

    (net_force, net_torque)
}
