use lander::Observation;
use std::f64::consts::PI;

/// Assert that every observation component lies in its documented range
#[track_caller]
pub fn assert_observation_valid(obs: &Observation) {
    for (name, value) in [
        ("x", obs.x),
        ("y", obs.y),
        ("vx", obs.vx),
        ("vy", obs.vy),
        ("angular_velocity", obs.angular_velocity),
    ] {
        assert!(value.is_finite(), "{} is not finite", name);
        assert!((-1.0..=1.0).contains(&value), "{} = {} out of range", name, value);
    }

    assert!(obs.angle.is_finite(), "Angle is not finite");
    assert!(
        obs.angle > -PI && obs.angle <= PI,
        "Angle {} not wrapped",
        obs.angle
    );

    assert_contacts_binary(obs);
}

/// Assert that contact components are exactly 0 or 1
#[track_caller]
pub fn assert_contacts_binary(obs: &Observation) {
    assert!(
        obs.left_contact == 0.0 || obs.left_contact == 1.0,
        "Left contact {} is not binary",
        obs.left_contact
    );
    assert!(
        obs.right_contact == 0.0 || obs.right_contact == 1.0,
        "Right contact {} is not binary",
        obs.right_contact
    );
}
