pub mod collisions;
pub mod physics;
mod propulsion;

pub use collisions::{
    contact_flag_system, ground_contact_system, resolve_ground_contact, sensor_contact_system,
    weld_joint_system,
};
pub use physics::{
    calculate_net_force_torque, force_calculator_system, integrate_state,
    physics_integrator_system,
};
pub use propulsion::thruster_system;
