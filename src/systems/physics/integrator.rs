use crate::components::{PhysicsComponent, SpatialComponent};
use crate::resources::PhysicsConfig;
use bevy::prelude::*;
use nalgebra::Vector2;

/// System to integrate physics and update spatial states for entities.
/// Net force and torque are held constant over the step; damping is applied
/// as a velocity-proportional deceleration inside the integration.
///
/// # Arguments
/// - `query`: A query for entities with `PhysicsComponent` and `SpatialComponent`.
/// - `config`: Physics configuration resource for the timestep and velocity limits.
pub fn physics_integrator_system(
    mut query: Query<(&PhysicsComponent, &mut SpatialComponent)>,
    config: Res<PhysicsConfig>,
) {
    let dt = config.timestep;
    let max_vel = config.max_velocity;
    let max_ang_vel = config.max_angular_velocity;

    for (physics, mut spatial) in query.iter_mut() {
        integrate_state(physics, &mut spatial, dt);

        // Apply velocity limits *after* integration
        apply_velocity_limits(&mut spatial, max_vel, max_ang_vel);
    }
}

/// Structure to hold state derivatives for RK integration
struct StateDerivatives {
    velocity: Vector2<f64>,
    acceleration: Vector2<f64>,
    angular_velocity: f64,
    angular_acceleration: f64,
}

/// Calculate derivatives for the current state
fn calculate_derivatives(
    physics: &PhysicsComponent,
    velocity: &Vector2<f64>,
    angular_velocity: f64,
) -> StateDerivatives {
    let acceleration = physics.net_force * physics.inverse_mass - velocity * physics.linear_damping;
    let angular_acceleration =
        physics.net_torque * physics.inertia_inv - angular_velocity * physics.angular_damping;

    StateDerivatives {
        velocity: *velocity,
        acceleration,
        angular_velocity,
        angular_acceleration,
    }
}

/// Classic fourth-order Runge-Kutta step of the planar rigid-body state.
pub fn integrate_state(physics: &PhysicsComponent, spatial: &mut SpatialComponent, dt: f64) {
    let initial_position = spatial.position;
    let initial_velocity = spatial.velocity;
    let initial_angle = spatial.angle;
    let initial_angular_velocity = spatial.angular_velocity;

    let k1 = calculate_derivatives(physics, &initial_velocity, initial_angular_velocity);

    let k2 = calculate_derivatives(
        physics,
        &(initial_velocity + k1.acceleration * (dt / 2.0)),
        initial_angular_velocity + k1.angular_acceleration * (dt / 2.0),
    );

    let k3 = calculate_derivatives(
        physics,
        &(initial_velocity + k2.acceleration * (dt / 2.0)),
        initial_angular_velocity + k2.angular_acceleration * (dt / 2.0),
    );

    let k4 = calculate_derivatives(
        physics,
        &(initial_velocity + k3.acceleration * dt),
        initial_angular_velocity + k3.angular_acceleration * dt,
    );

    // Update state variables using weighted average of derivatives
    spatial.position = initial_position
        + (dt / 6.0) * (k1.velocity + 2.0 * k2.velocity + 2.0 * k3.velocity + k4.velocity);
    spatial.velocity = initial_velocity
        + (dt / 6.0)
            * (k1.acceleration + 2.0 * k2.acceleration + 2.0 * k3.acceleration + k4.acceleration);

    spatial.angle = initial_angle
        + (dt / 6.0)
            * (k1.angular_velocity
                + 2.0 * k2.angular_velocity
                + 2.0 * k3.angular_velocity
                + k4.angular_velocity);
    spatial.angular_velocity = initial_angular_velocity
        + (dt / 6.0)
            * (k1.angular_acceleration
                + 2.0 * k2.angular_acceleration
                + 2.0 * k3.angular_acceleration
                + k4.angular_acceleration);
}

/// Applies velocity and angular velocity limits to prevent excessive motion.
fn apply_velocity_limits(
    spatial: &mut SpatialComponent,
    max_velocity: f64,
    max_angular_velocity: f64,
) {
    let velocity_norm = spatial.velocity.norm();
    if velocity_norm > max_velocity {
        spatial.velocity *= max_velocity / velocity_norm;
    }

    spatial.angular_velocity = spatial
        .angular_velocity
        .clamp(-max_angular_velocity, max_angular_velocity);
}
