use crate::components::ContactEvent;
use crate::resources::{ContactFlags, PhysicsConfig};
use crate::systems::{
    contact_flag_system, force_calculator_system, ground_contact_system,
    physics_integrator_system, sensor_contact_system, thruster_system, weld_joint_system,
};
use bevy::prelude::*;

/// Physics simulation stages, run in declaration order once per update
#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub enum PhysicsSet {
    Propulsion,
    ForceCalculation,
    Integration,
    Collision,
    Joints,
    Sensors,
    ContactFlags,
}

/// Advances the lander world by one fixed step per `App::update`.
#[derive(Default)]
pub struct LanderPhysicsPlugin {
    pub config: PhysicsConfig,
}

impl LanderPhysicsPlugin {
    pub fn with_config(config: PhysicsConfig) -> Self {
        Self { config }
    }
}

impl Plugin for LanderPhysicsPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.config.clone())
            .init_resource::<ContactFlags>()
            .add_event::<ContactEvent>();

        app.configure_sets(
            Update,
            (
                PhysicsSet::Propulsion,
                PhysicsSet::ForceCalculation,
                PhysicsSet::Integration,
                PhysicsSet::Collision,
                PhysicsSet::Joints,
                PhysicsSet::Sensors,
                PhysicsSet::ContactFlags,
            )
                .chain(),
        );

        app.add_systems(
            Update,
            (
                thruster_system.in_set(PhysicsSet::Propulsion),
                force_calculator_system.in_set(PhysicsSet::ForceCalculation),
                physics_integrator_system.in_set(PhysicsSet::Integration),
                ground_contact_system.in_set(PhysicsSet::Collision),
                weld_joint_system.in_set(PhysicsSet::Joints),
                sensor_contact_system.in_set(PhysicsSet::Sensors),
                contact_flag_system.in_set(PhysicsSet::ContactFlags),
            ),
        );
    }
}
