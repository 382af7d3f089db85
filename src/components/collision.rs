use bevy::prelude::*;
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::components::{Leg, SpatialComponent};
use crate::utils::box_corners;

/// Raised when a leg sensor starts or stops overlapping the ground edge.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactEvent {
    pub leg: Leg,
    pub phase: ContactPhase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContactPhase {
    Begin,
    End,
}

/// Solid box collision shape of a dynamic body.
#[derive(Component, Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HullComponent {
    pub half_extents: Vector2<f64>,
    pub friction: f64,
    pub restitution: f64,
}

impl HullComponent {
    pub fn new(half_extents: Vector2<f64>, friction: f64, restitution: f64) -> Self {
        Self {
            half_extents,
            friction,
            restitution,
        }
    }

    pub fn corners(&self, spatial: &SpatialComponent) -> [Vector2<f64>; 4] {
        box_corners(&spatial.position, spatial.angle, &self.half_extents)
    }

    /// Height of the lowest hull corner above `ground_height`.
    pub fn clearance(&self, spatial: &SpatialComponent, ground_height: f64) -> f64 {
        self.corners(spatial)
            .iter()
            .map(|corner| corner.y)
            .fold(f64::INFINITY, f64::min)
            - ground_height
    }
}

/// Static horizontal ground edge.
#[derive(Component, Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GroundComponent {
    pub height: f64,
    /// The edge runs from `-half_length` to `half_length` along x
    pub half_length: f64,
    pub friction: f64,
}

impl GroundComponent {
    pub fn new(height: f64, half_length: f64, friction: f64) -> Self {
        Self {
            height,
            half_length,
            friction,
        }
    }

    pub fn spans(&self, x: f64) -> bool {
        x.abs() <= self.half_length
    }

    /// Whether a convex polygon crosses the edge.
    pub fn overlaps(&self, corners: &[Vector2<f64>]) -> bool {
        let (min_x, max_x, min_y, max_y) = corners.iter().fold(
            (
                f64::INFINITY,
                f64::NEG_INFINITY,
                f64::INFINITY,
                f64::NEG_INFINITY,
            ),
            |(min_x, max_x, min_y, max_y), c| {
                (min_x.min(c.x), max_x.max(c.x), min_y.min(c.y), max_y.max(c.y))
            },
        );

        min_y <= self.height
            && max_y >= self.height
            && max_x >= -self.half_length
            && min_x <= self.half_length
    }
}
