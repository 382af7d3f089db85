use nalgebra::{Rotation2, Vector2};
use std::f64::consts::{PI, TAU};

/// Wraps an angle into the half-open interval (-π, π].
pub fn wrap_angle(angle: f64) -> f64 {
    let wrapped = PI - (PI - angle).rem_euclid(TAU);
    // rem_euclid may round up to TAU itself
    if wrapped <= -PI {
        PI
    } else {
        wrapped
    }
}

/// Clamps a value into [-1, 1].
pub fn clamp_unit(value: f64) -> f64 {
    value.clamp(-1.0, 1.0)
}

/// World-space corners of a box with the given half extents, centered at
/// `center` and rotated counter-clockwise by `angle`.
///
/// Corners are ordered bottom-left, bottom-right, top-right, top-left in
/// the box's own frame.
pub fn box_corners(
    center: &Vector2<f64>,
    angle: f64,
    half_extents: &Vector2<f64>,
) -> [Vector2<f64>; 4] {
    let rotation = Rotation2::new(angle);
    let (hx, hy) = (half_extents.x, half_extents.y);
    [
        center + rotation * Vector2::new(-hx, -hy),
        center + rotation * Vector2::new(hx, -hy),
        center + rotation * Vector2::new(hx, hy),
        center + rotation * Vector2::new(-hx, hy),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_wrap_angle_range() {
        assert_relative_eq!(wrap_angle(0.0), 0.0);
        assert_relative_eq!(wrap_angle(PI), PI);
        assert_relative_eq!(wrap_angle(-PI), PI);
        assert_relative_eq!(wrap_angle(3.0 * PI / 2.0), -PI / 2.0, epsilon = 1e-12);
        assert_relative_eq!(wrap_angle(-5.0 * PI / 2.0), -PI / 2.0, epsilon = 1e-12);

        for i in -200..200 {
            let wrapped = wrap_angle(i as f64 * 0.37);
            assert!(wrapped > -PI && wrapped <= PI, "{} out of range", wrapped);
        }
    }

    #[test]
    fn test_clamp_unit() {
        assert_eq!(clamp_unit(3.0), 1.0);
        assert_eq!(clamp_unit(-3.0), -1.0);
        assert_eq!(clamp_unit(0.25), 0.25);
    }

    #[test]
    fn test_box_corners_rotated_quarter_turn() {
        let corners = box_corners(
            &Vector2::new(1.0, 2.0),
            PI / 2.0,
            &Vector2::new(0.5, 1.0),
        );

        // Bottom-left (-0.5, -1.0) rotates to (1.0, -0.5)
        assert_relative_eq!(corners[0].x, 2.0, epsilon = 1e-12);
        assert_relative_eq!(corners[0].y, 1.5, epsilon = 1e-12);
        // Top-right (0.5, 1.0) rotates to (-1.0, 0.5)
        assert_relative_eq!(corners[2].x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(corners[2].y, 2.5, epsilon = 1e-12);
    }
}
