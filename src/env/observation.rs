use serde::{Deserialize, Serialize};

use crate::components::SpatialComponent;
use crate::resources::ContactFlags;
use crate::utils::constants::*;
use crate::utils::{clamp_unit, wrap_angle};

/// Normalized view of the craft returned from every reset and step.
///
/// Continuous components lie in [-1, 1], the angle in (-pi, pi] and the
/// contact components are exactly 0 or 1.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Observation {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub angle: f64,
    pub angular_velocity: f64,
    pub left_contact: f64,
    pub right_contact: f64,
}

impl Observation {
    /// # Panics
    /// On non-finite craft state, which only a broken integrator produces.
    pub fn from_state(spatial: &SpatialComponent, contacts: &ContactFlags) -> Self {
        assert!(
            spatial.is_finite(),
            "Non-finite craft state: {:?}",
            spatial
        );

        Self {
            x: clamp_unit(spatial.position.x / POSITION_X_SCALE),
            y: clamp_unit(spatial.position.y / POSITION_Y_SCALE),
            vx: clamp_unit(spatial.velocity.x / VELOCITY_SCALE),
            vy: clamp_unit(spatial.velocity.y / VELOCITY_SCALE),
            angle: wrap_angle(spatial.angle),
            angular_velocity: clamp_unit(spatial.angular_velocity / ANGULAR_VELOCITY_SCALE),
            left_contact: if contacts.left { 1.0 } else { 0.0 },
            right_contact: if contacts.right { 1.0 } else { 0.0 },
        }
    }

    pub fn distance(&self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn speed(&self) -> f64 {
        self.vx.hypot(self.vy)
    }

    pub fn contact_count(&self) -> u8 {
        u8::from(self.left_contact > 0.5) + u8::from(self.right_contact > 0.5)
    }

    pub fn to_array(&self) -> [f64; OBSERVATION_SIZE] {
        [
            self.x,
            self.y,
            self.vx,
            self.vy,
            self.angle,
            self.angular_velocity,
            self.left_contact,
            self.right_contact,
        ]
    }
}
