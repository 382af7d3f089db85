pub mod constants;
pub mod math;

pub use constants::*;
pub use math::{box_corners, clamp_unit, wrap_angle};
