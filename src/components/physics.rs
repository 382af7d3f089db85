use bevy::prelude::*;
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct PhysicsComponent {
    pub mass: f64,
    pub inverse_mass: f64,
    /// Rotational inertia about the body origin [kg m^2]
    pub inertia: f64,
    pub inertia_inv: f64,
    pub linear_damping: f64,
    pub angular_damping: f64,
    pub net_force: Vector2<f64>,
    pub net_torque: f64,
    pub forces: Vec<Force>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Force {
    pub vector: Vector2<f64>,
    /// Application point in body coordinates; `None` applies at the origin
    pub point: Option<Vector2<f64>>,
    pub frame: ReferenceFrame,
    pub category: ForceCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ReferenceFrame {
    Body,
    Inertial,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ForceCategory {
    Propulsive,
    External,
}

impl PhysicsComponent {
    pub fn new(mass: f64, inertia: f64) -> Self {
        Self {
            mass,
            inverse_mass: if mass > 0.0 { 1.0 / mass } else { 0.0 },
            inertia,
            inertia_inv: if inertia > 0.0 { 1.0 / inertia } else { 0.0 },
            linear_damping: 0.0,
            angular_damping: 0.0,
            net_force: Vector2::zeros(),
            net_torque: 0.0,
            forces: Vec::new(),
        }
    }

    pub fn from_mass_properties(properties: &MassProperties) -> Self {
        Self::new(properties.mass, properties.inertia_about_origin())
    }

    pub fn with_damping(mut self, linear: f64, angular: f64) -> Self {
        self.linear_damping = linear;
        self.angular_damping = angular;
        self
    }

    pub fn add_force(&mut self, force: Force) {
        self.forces.push(force);
    }

    /// Drops every pending force of the given category.
    pub fn clear_category(&mut self, category: ForceCategory) {
        self.forces.retain(|force| force.category != category);
    }
}

/// Mass, centroid and centroidal inertia of a solid shape in body coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MassProperties {
    pub mass: f64,
    pub center: Vector2<f64>,
    /// Rotational inertia about `center`
    pub inertia: f64,
}

impl MassProperties {
    /// Uniform-density box with the given half extents centered at `center`.
    pub fn of_box(half_extents: Vector2<f64>, density: f64, center: Vector2<f64>) -> Self {
        let mass = density * 4.0 * half_extents.x * half_extents.y;
        Self {
            mass,
            center,
            inertia: mass * half_extents.norm_squared() / 3.0,
        }
    }

    /// Inertia about the body origin (parallel-axis theorem).
    pub fn inertia_about_origin(&self) -> f64 {
        self.inertia + self.mass * self.center.norm_squared()
    }

    /// Lumps rigidly attached parts into a single body about the origin.
    pub fn compound(parts: &[MassProperties]) -> Self {
        parts.iter().fold(
            Self {
                mass: 0.0,
                center: Vector2::zeros(),
                inertia: 0.0,
            },
            |acc, part| Self {
                mass: acc.mass + part.mass,
                center: Vector2::zeros(),
                inertia: acc.inertia + part.inertia_about_origin(),
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_box_mass_properties() {
        let hull = MassProperties::of_box(Vector2::new(0.6, 0.9), 1.0, Vector2::zeros());
        assert_relative_eq!(hull.mass, 2.16, epsilon = 1e-12);
        // m (w^2 + h^2) / 12 with full widths 1.2 and 1.8
        assert_relative_eq!(hull.inertia, 2.16 * (1.44 + 3.24) / 12.0, epsilon = 1e-12);
    }

    #[test]
    fn test_compound_uses_parallel_axis() {
        let hull = MassProperties::of_box(Vector2::new(0.6, 0.9), 1.0, Vector2::zeros());
        let leg = MassProperties::of_box(Vector2::new(0.08, 0.5), 0.2, Vector2::new(0.55, -1.1));
        let body = MassProperties::compound(&[hull, leg]);

        assert_relative_eq!(body.mass, hull.mass + leg.mass, epsilon = 1e-12);
        assert_relative_eq!(
            body.inertia,
            hull.inertia + leg.inertia + leg.mass * (0.55 * 0.55 + 1.1 * 1.1),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_clear_category_keeps_other_forces() {
        let mut physics = PhysicsComponent::new(1.0, 1.0);
        physics.add_force(Force {
            vector: Vector2::new(0.0, 1.0),
            point: None,
            frame: ReferenceFrame::Body,
            category: ForceCategory::Propulsive,
        });
        physics.add_force(Force {
            vector: Vector2::new(1.0, 0.0),
            point: None,
            frame: ReferenceFrame::Inertial,
            category: ForceCategory::External,
        });

        physics.clear_category(ForceCategory::Propulsive);
        assert_eq!(physics.forces.len(), 1);
        assert_eq!(physics.forces[0].category, ForceCategory::External);
    }

    #[test]
    fn test_static_body_has_zero_inverse() {
        let physics = PhysicsComponent::new(0.0, 0.0);
        assert_eq!(physics.inverse_mass, 0.0);
        assert_eq!(physics.inertia_inv, 0.0);
    }
}
