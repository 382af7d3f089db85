use bevy::prelude::*;
use nalgebra::Vector2;

use crate::components::{GroundComponent, HullComponent, PhysicsComponent, SpatialComponent};
use crate::resources::PhysicsConfig;

/// Resolves hull penetration of the ground edge for every solid body.
pub fn ground_contact_system(
    mut bodies: Query<(&mut SpatialComponent, &PhysicsComponent, &HullComponent)>,
    grounds: Query<&GroundComponent>,
    config: Res<PhysicsConfig>,
) {
    for ground in grounds.iter() {
        for (mut spatial, physics, hull) in bodies.iter_mut() {
            if let Some(depth) =
                resolve_ground_contact(&mut spatial, physics, hull, ground, config.solver_iterations)
            {
                debug!("Hull contact with ground, penetration {:.4} m", depth);
            }
        }
    }
}

/// Impulse solve of hull corners against a horizontal edge.
///
/// Every corner below the edge becomes a contact point. Each iteration first
/// solves the normal impulses, as one block when two corners touch, keeping
/// every accumulated normal impulse non-negative. Friction impulses follow,
/// bounded by the Coulomb cone of the accumulated normal impulse. The body is
/// then lifted out of the ground by the deepest penetration.
///
/// Returns the penetration depth that was corrected, or `None` without contact.
pub fn resolve_ground_contact(
    spatial: &mut SpatialComponent,
    physics: &PhysicsComponent,
    hull: &HullComponent,
    ground: &GroundComponent,
    iterations: usize,
) -> Option<f64> {
    let arms: Vec<Vector2<f64>> = hull
        .corners(spatial)
        .iter()
        .filter(|corner| corner.y < ground.height && ground.spans(corner.x))
        .map(|corner| corner - spatial.position)
        .collect();

    if arms.is_empty() {
        return None;
    }

    let friction = (hull.friction * ground.friction).sqrt();
    let inv_mass = physics.inverse_mass;
    let inv_inertia = physics.inertia_inv;

    // Restitution targets are fixed from the approach velocity before solving
    let bounce: Vec<f64> = arms
        .iter()
        .map(|r| -hull.restitution * spatial.point_velocity(r).y.min(0.0))
        .collect();
    let mut normal_impulses = vec![0.0; arms.len()];
    let mut tangent_impulses = vec![0.0; arms.len()];

    for _ in 0..iterations {
        // Normal (0, 1)
        let solved_as_block = arms.len() == 2
            && solve_normal_block(
                spatial,
                physics,
                [arms[0], arms[1]],
                [bounce[0], bounce[1]],
                &mut normal_impulses,
            );
        if !solved_as_block {
            for (i, r) in arms.iter().enumerate() {
                let vn = spatial.point_velocity(r).y;
                let normal_mass = inv_mass + r.x * r.x * inv_inertia;
                let accumulated = (normal_impulses[i] + (bounce[i] - vn) / normal_mass).max(0.0);
                apply_normal_impulse(spatial, physics, r, accumulated - normal_impulses[i]);
                normal_impulses[i] = accumulated;
            }
        }

        // Tangent (1, 0)
        for (i, r) in arms.iter().enumerate() {
            let vt = spatial.point_velocity(r).x;
            let tangent_mass = inv_mass + r.y * r.y * inv_inertia;
            let max_friction = friction * normal_impulses[i];
            let accumulated =
                (tangent_impulses[i] - vt / tangent_mass).clamp(-max_friction, max_friction);
            let jt = accumulated - tangent_impulses[i];
            tangent_impulses[i] = accumulated;

            spatial.velocity.x += jt * inv_mass;
            spatial.angular_velocity -= r.y * jt * inv_inertia;
        }
    }

    let lowest = arms.iter().map(|r| r.y).fold(f64::INFINITY, f64::min);
    let depth = ground.height - (spatial.position.y + lowest);
    spatial.position.y += depth;

    Some(depth)
}

fn apply_normal_impulse(
    spatial: &mut SpatialComponent,
    physics: &PhysicsComponent,
    r: &Vector2<f64>,
    jn: f64,
) {
    spatial.velocity.y += jn * physics.inverse_mass;
    spatial.angular_velocity += r.x * jn * physics.inertia_inv;
}

/// Solves both normal impulses of a two-corner contact together, picking the
/// first complementary case with non-negative impulses and no approaching
/// corner. Returns `false` when the pair is too ill-conditioned to invert.
fn solve_normal_block(
    spatial: &mut SpatialComponent,
    physics: &PhysicsComponent,
    arms: [Vector2<f64>; 2],
    bounce: [f64; 2],
    normal_impulses: &mut [f64],
) -> bool {
    let inv_mass = physics.inverse_mass;
    let inv_inertia = physics.inertia_inv;
    let k11 = inv_mass + arms[0].x * arms[0].x * inv_inertia;
    let k22 = inv_mass + arms[1].x * arms[1].x * inv_inertia;
    let k12 = inv_mass + arms[0].x * arms[1].x * inv_inertia;
    let det = k11 * k22 - k12 * k12;
    if det <= 1e-9 * k11 * k22 {
        return false;
    }

    let (a1, a2) = (normal_impulses[0], normal_impulses[1]);
    // Relative normal velocity with the accumulated impulses taken back out
    let b1 = spatial.point_velocity(&arms[0]).y - bounce[0] - (k11 * a1 + k12 * a2);
    let b2 = spatial.point_velocity(&arms[1]).y - bounce[1] - (k12 * a1 + k22 * a2);

    let (x1, x2) = {
        let both = ((k12 * b2 - k22 * b1) / det, (k12 * b1 - k11 * b2) / det);
        let first = -b1 / k11;
        let second = -b2 / k22;
        if both.0 >= 0.0 && both.1 >= 0.0 {
            both
        } else if first >= 0.0 && k12 * first + b2 >= 0.0 {
            (first, 0.0)
        } else if second >= 0.0 && k12 * second + b1 >= 0.0 {
            (0.0, second)
        } else {
            (0.0, 0.0)
        }
    };

    apply_normal_impulse(spatial, physics, &arms[0], x1 - a1);
    apply_normal_impulse(spatial, physics, &arms[1], x2 - a2);
    normal_impulses[0] = x1;
    normal_impulses[1] = x2;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn hull() -> HullComponent {
        HullComponent::new(Vector2::new(0.6, 0.9), 0.3, 0.0)
    }

    fn ground() -> GroundComponent {
        GroundComponent::new(0.0, 40.0, 0.8)
    }

    fn physics() -> PhysicsComponent {
        PhysicsComponent::new(2.16, 0.84)
    }

    #[test]
    fn test_no_contact_above_ground() {
        let mut spatial = SpatialComponent::new(Vector2::new(0.0, 2.0), Vector2::new(0.0, -3.0), 0.0, 0.0);
        let before = spatial.clone();

        assert!(resolve_ground_contact(&mut spatial, &physics(), &hull(), &ground(), 10).is_none());
        assert_eq!(spatial, before);
    }

    #[test]
    fn test_level_impact_stops_and_lifts() {
        let mut spatial = SpatialComponent::new(Vector2::new(0.0, 0.8), Vector2::new(0.0, -5.0), 0.0, 0.0);

        let depth = resolve_ground_contact(&mut spatial, &physics(), &hull(), &ground(), 10);

        assert_relative_eq!(depth.unwrap(), 0.1, epsilon = 1e-12);
        assert_relative_eq!(spatial.position.y, 0.9, epsilon = 1e-12);
        assert_relative_eq!(spatial.velocity.y, 0.0, epsilon = 1e-6);
        assert_relative_eq!(spatial.angular_velocity, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_friction_slows_sliding() {
        let mut spatial = SpatialComponent::new(Vector2::new(0.0, 0.85), Vector2::new(2.0, -1.0), 0.0, 0.0);

        resolve_ground_contact(&mut spatial, &physics(), &hull(), &ground(), 10);

        assert!(spatial.velocity.x < 2.0);
        assert!(spatial.velocity.x >= 0.0);
        // Friction at the base may tip the hull onto one corner, but it no
        // longer sinks
        assert!(spatial.velocity.y > -0.5);
    }

    #[test]
    fn test_separating_body_is_not_pulled_down() {
        let mut spatial = SpatialComponent::new(Vector2::new(0.0, 0.85), Vector2::new(0.0, 1.0), 0.0, 0.0);

        resolve_ground_contact(&mut spatial, &physics(), &hull(), &ground(), 10);

        assert_relative_eq!(spatial.velocity.y, 1.0);
    }

    #[test]
    fn test_no_ground_beyond_edge() {
        let mut spatial = SpatialComponent::new(Vector2::new(45.0, 0.5), Vector2::new(0.0, -1.0), 0.0, 0.0);

        assert!(resolve_ground_contact(&mut spatial, &physics(), &hull(), &ground(), 10).is_none());
    }
}
