use bevy::prelude::*;
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::components::{Force, ForceCategory, ReferenceFrame};
use crate::env::EnvError;
use crate::utils::{MAIN_ENGINE_FORCE, SIDE_ENGINE_FORCE, SIDE_ENGINE_PORT};

/// Marker for the controllable craft body
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct CraftComponent;

/// Discrete control input, one per step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Action {
    #[default]
    Noop = 0,
    /// Fires the right-hand port, pushing the craft left and tipping the nose left
    Left = 1,
    Main = 2,
    /// Fires the left-hand port, pushing the craft right and tipping the nose right
    Right = 3,
}

impl Action {
    pub const ALL: [Action; 4] = [Action::Noop, Action::Left, Action::Main, Action::Right];

    pub fn code(self) -> u8 {
        self as u8
    }

    /// Resolves held thruster inputs into a single action. The main engine
    /// wins; a side engine fires only when its opposite is released.
    pub fn from_thrusters(input: ThrusterInput) -> Self {
        match input {
            ThrusterInput { main: true, .. } => Action::Main,
            ThrusterInput {
                left: true,
                right: false,
                ..
            } => Action::Left,
            ThrusterInput {
                left: false,
                right: true,
                ..
            } => Action::Right,
            _ => Action::Noop,
        }
    }
}

impl TryFrom<u8> for Action {
    type Error = EnvError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Action::Noop),
            1 => Ok(Action::Left),
            2 => Ok(Action::Main),
            3 => Ok(Action::Right),
            other => Err(EnvError::InvalidAction(other)),
        }
    }
}

/// Held state of the three thruster controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ThrusterInput {
    pub left: bool,
    pub main: bool,
    pub right: bool,
}

#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct ThrusterComponent {
    /// Action applied on the next physics step
    pub command: Action,
    pub main_force: f64,
    pub side_force: f64,
    /// Right-hand port in body coordinates, mirrored for the left-hand port
    pub side_port: Vector2<f64>,
}

impl Default for ThrusterComponent {
    fn default() -> Self {
        Self {
            command: Action::Noop,
            main_force: MAIN_ENGINE_FORCE,
            side_force: SIDE_ENGINE_FORCE,
            side_port: Vector2::new(SIDE_ENGINE_PORT[0], SIDE_ENGINE_PORT[1]),
        }
    }
}

impl ThrusterComponent {
    /// Body-frame force produced by `action`, if any.
    pub fn force_for(&self, action: Action) -> Option<Force> {
        let (vector, point) = match action {
            Action::Noop => return None,
            Action::Main => (Vector2::new(0.0, self.main_force), None),
            Action::Left => (Vector2::new(-self.side_force, 0.0), Some(self.side_port)),
            Action::Right => (
                Vector2::new(self.side_force, 0.0),
                Some(Vector2::new(-self.side_port.x, self.side_port.y)),
            ),
        };

        Some(Force {
            vector,
            point,
            frame: ReferenceFrame::Body,
            category: ForceCategory::Propulsive,
        })
    }
}
