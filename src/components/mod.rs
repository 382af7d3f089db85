pub mod collision;
pub mod physics;
pub mod propulsion;
pub mod sensor;
pub mod spatial;
pub mod tasks;

pub use collision::{ContactEvent, ContactPhase, GroundComponent, HullComponent};
pub use physics::{Force, ForceCategory, MassProperties, PhysicsComponent, ReferenceFrame};
pub use propulsion::{Action, CraftComponent, ThrusterComponent, ThrusterInput};
pub use sensor::{Leg, SensorComponent, WeldJoint};
pub use spatial::SpatialComponent;
pub use tasks::{FlightState, LandingParams, TaskComponent, TerminationReason};
