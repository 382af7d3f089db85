use bevy::prelude::*;
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::utils::constants::{
    GRAVITY, MAX_ANGULAR_VELOCITY, MAX_VELOCITY, SOLVER_ITERATIONS, TIME_STEP,
};

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicsConfig {
    /// Fixed integration step (s)
    pub timestep: f64,
    /// Gravitational acceleration in world space (m/s^2)
    pub gravity: Vector2<f64>,
    pub max_velocity: f64,
    pub max_angular_velocity: f64,
    /// Sequential-impulse passes per contact solve
    pub solver_iterations: usize,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            timestep: TIME_STEP,
            gravity: Vector2::new(0.0, GRAVITY),
            max_velocity: MAX_VELOCITY,
            max_angular_velocity: MAX_ANGULAR_VELOCITY,
            solver_iterations: SOLVER_ITERATIONS,
        }
    }
}
