use bevy::prelude::*;
use nalgebra::{Rotation2, Vector2};
use serde::{Deserialize, Serialize};

/// Component for storing the planar spatial state of a body
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpatialComponent {
    /// Position of the body origin in world space [m]
    pub position: Vector2<f64>,

    /// Linear velocity in world space [m/s]
    pub velocity: Vector2<f64>,

    /// Counter-clockwise rotation from world to body axes [rad], unwrapped
    pub angle: f64,

    /// Angular velocity, counter-clockwise positive [rad/s]
    pub angular_velocity: f64,
}

impl Default for SpatialComponent {
    fn default() -> Self {
        Self {
            position: Vector2::zeros(),
            velocity: Vector2::zeros(),
            angle: 0.0,
            angular_velocity: 0.0,
        }
    }
}

impl SpatialComponent {
    /// Create a new spatial component with initial values
    pub fn new(
        position: Vector2<f64>,
        velocity: Vector2<f64>,
        angle: f64,
        angular_velocity: f64,
    ) -> Self {
        Self {
            position,
            velocity,
            angle,
            angular_velocity,
        }
    }

    /// Create a new spatial component at rest at a specific position
    pub fn at_position(position: Vector2<f64>) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    pub fn rotation(&self) -> Rotation2<f64> {
        Rotation2::new(self.angle)
    }

    /// Transforms a body-frame point into world space.
    pub fn to_world(&self, local: &Vector2<f64>) -> Vector2<f64> {
        self.position + self.rotation() * local
    }

    /// Velocity of a point at world-space offset `r` from the body origin.
    pub fn point_velocity(&self, r: &Vector2<f64>) -> Vector2<f64> {
        self.velocity + Vector2::new(-self.angular_velocity * r.y, self.angular_velocity * r.x)
    }

    pub fn is_finite(&self) -> bool {
        self.position.iter().all(|v| v.is_finite())
            && self.velocity.iter().all(|v| v.is_finite())
            && self.angle.is_finite()
            && self.angular_velocity.is_finite()
    }
}
