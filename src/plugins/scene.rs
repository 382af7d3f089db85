use bevy::prelude::*;
use nalgebra::Vector2;

use crate::components::{
    CraftComponent, GroundComponent, HullComponent, Leg, MassProperties, PhysicsComponent,
    SensorComponent, SpatialComponent, TaskComponent, ThrusterComponent, WeldJoint,
};
use crate::utils::constants::*;

/// Entities created for one episode.
#[derive(Debug, Clone, Copy)]
pub struct SceneEntities {
    pub ground: Entity,
    pub craft: Entity,
    pub left_leg: Entity,
    pub right_leg: Entity,
}

fn leg_offset(leg: Leg) -> Vector2<f64> {
    match leg {
        Leg::Left => Vector2::new(-LEG_OFFSET[0], LEG_OFFSET[1]),
        Leg::Right => Vector2::new(LEG_OFFSET[0], LEG_OFFSET[1]),
    }
}

/// Hull plus both leg sensors, lumped about the hull center.
pub fn craft_mass_properties() -> MassProperties {
    let leg_half_extents = Vector2::new(LEG_HALF_EXTENTS[0], LEG_HALF_EXTENTS[1]);
    MassProperties::compound(&[
        MassProperties::of_box(
            Vector2::new(HULL_HALF_EXTENTS[0], HULL_HALF_EXTENTS[1]),
            HULL_DENSITY,
            Vector2::zeros(),
        ),
        MassProperties::of_box(leg_half_extents, LEG_DENSITY, leg_offset(Leg::Left)),
        MassProperties::of_box(leg_half_extents, LEG_DENSITY, leg_offset(Leg::Right)),
    ])
}

/// Populates an empty world with the ground edge, the craft at its spawn
/// point and the two welded leg sensors.
pub fn spawn_scene(world: &mut World) -> SceneEntities {
    let ground = world
        .spawn(GroundComponent::new(
            GROUND_HEIGHT,
            GROUND_HALF_LENGTH,
            GROUND_FRICTION,
        ))
        .id();

    let craft_spatial =
        SpatialComponent::at_position(Vector2::new(SPAWN_POSITION[0], SPAWN_POSITION[1]));

    let craft = world
        .spawn((
            CraftComponent,
            craft_spatial.clone(),
            PhysicsComponent::from_mass_properties(&craft_mass_properties())
                .with_damping(LINEAR_DAMPING, ANGULAR_DAMPING),
            HullComponent::new(
                Vector2::new(HULL_HALF_EXTENTS[0], HULL_HALF_EXTENTS[1]),
                HULL_FRICTION,
                HULL_RESTITUTION,
            ),
            ThrusterComponent::default(),
            TaskComponent::default(),
        ))
        .id();

    let mut spawn_leg = |leg: Leg| {
        let offset = leg_offset(leg);
        world
            .spawn((
                SensorComponent::new(
                    leg,
                    Vector2::new(LEG_HALF_EXTENTS[0], LEG_HALF_EXTENTS[1]),
                ),
                WeldJoint::new(craft, offset),
                SpatialComponent::at_position(craft_spatial.to_world(&offset)),
            ))
            .id()
    };
    let left_leg = spawn_leg(Leg::Left);
    let right_leg = spawn_leg(Leg::Right);

    info!(
        "Spawned lander at ({:.2}, {:.2})",
        craft_spatial.position.x, craft_spatial.position.y
    );

    SceneEntities {
        ground,
        craft,
        left_leg,
        right_leg,
    }
}
