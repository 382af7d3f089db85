use bevy::prelude::*;
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Tag identifying which landing leg a sensor belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Leg {
    Left,
    Right,
}

/// Contact-only probe. Sensors never take part in collision response.
#[derive(Component, Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SensorComponent {
    pub leg: Leg,
    pub half_extents: Vector2<f64>,
    /// Overlap state seen at the end of the last step
    pub touching: bool,
}

impl SensorComponent {
    pub fn new(leg: Leg, half_extents: Vector2<f64>) -> Self {
        Self {
            leg,
            half_extents,
            touching: false,
        }
    }
}

/// Rigidly attaches an entity to a parent body at a fixed local offset.
#[derive(Component, Debug, Clone, Copy)]
pub struct WeldJoint {
    pub body: Entity,
    pub local_anchor: Vector2<f64>,
}

impl WeldJoint {
    pub fn new(body: Entity, local_anchor: Vector2<f64>) -> Self {
        Self { body, local_anchor }
    }
}
