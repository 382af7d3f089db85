use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::{ContactEvent, ContactPhase, Leg};

/// Level-triggered ground contact flags for the two leg sensors.
///
/// Flags only change when a [`ContactEvent`] is applied: `Begin` sets,
/// `End` clears. Repeated begins on the same leg leave the flag set.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFlags {
    pub left: bool,
    pub right: bool,
}

impl ContactFlags {
    pub fn apply(&mut self, event: &ContactEvent) {
        let touching = matches!(event.phase, ContactPhase::Begin);
        match event.leg {
            Leg::Left => self.left = touching,
            Leg::Right => self.right = touching,
        }
    }

    pub fn apply_all<'a>(&mut self, events: impl IntoIterator<Item = &'a ContactEvent>) {
        for event in events {
            self.apply(event);
        }
    }

    pub fn count(&self) -> u8 {
        u8::from(self.left) + u8::from(self.right)
    }
}
