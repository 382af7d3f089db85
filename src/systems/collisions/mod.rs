mod ground;
mod sensors;

pub use ground::{ground_contact_system, resolve_ground_contact};
pub use sensors::{contact_flag_system, sensor_contact_system, weld_joint_system};
