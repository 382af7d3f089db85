use bevy::prelude::*;

use crate::components::{ForceCategory, PhysicsComponent, ThrusterComponent};

/// Replaces last step's thruster forces with the force of the current command.
pub fn thruster_system(mut query: Query<(&ThrusterComponent, &mut PhysicsComponent)>) {
    for (thrusters, mut physics) in query.iter_mut() {
        physics.clear_category(ForceCategory::Propulsive);

        if let Some(force) = thrusters.force_for(thrusters.command) {
            debug!("Thruster command {:?}: {:?}", thrusters.command, force.vector);
            physics.add_force(force);
        }
    }
}
