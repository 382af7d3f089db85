//! Fixed design parameters of the lander simulation.
//!
//! Units are meters, kilograms, seconds and radians. None of these are
//! exposed for runtime tuning; drivers and trained policies rely on the
//! observation and reward ranges they produce.

// Integration
pub const TIME_STEP: f64 = 1.0 / 60.0;
pub const GRAVITY: f64 = -10.0;
pub const MAX_VELOCITY: f64 = 100.0;
pub const MAX_ANGULAR_VELOCITY: f64 = 50.0;
pub const SOLVER_ITERATIONS: usize = 10;

// Ground plane
pub const GROUND_HEIGHT: f64 = 0.0;
pub const GROUND_HALF_LENGTH: f64 = 40.0;
pub const GROUND_FRICTION: f64 = 0.8;

// Craft hull
pub const SPAWN_POSITION: [f64; 2] = [0.0, 12.0];
pub const HULL_HALF_EXTENTS: [f64; 2] = [0.6, 0.9];
pub const HULL_DENSITY: f64 = 1.0;
pub const HULL_FRICTION: f64 = 0.3;
pub const HULL_RESTITUTION: f64 = 0.0;
pub const LINEAR_DAMPING: f64 = 0.2;
pub const ANGULAR_DAMPING: f64 = 1.5;

// Leg sensors
pub const LEG_OFFSET: [f64; 2] = [0.55, -1.1];
pub const LEG_HALF_EXTENTS: [f64; 2] = [0.08, 0.5];
pub const LEG_DENSITY: f64 = 0.2;

// Thrusters
pub const MAIN_ENGINE_FORCE: f64 = 32.0;
pub const SIDE_ENGINE_FORCE: f64 = 6.0;
/// Right-hand side thruster port in body coordinates; the left port mirrors it.
pub const SIDE_ENGINE_PORT: [f64; 2] = [0.6, 0.5];

// Observation scales
pub const OBSERVATION_SIZE: usize = 8;
pub const POSITION_X_SCALE: f64 = 20.0;
pub const POSITION_Y_SCALE: f64 = 20.0;
pub const VELOCITY_SCALE: f64 = 10.0;
pub const ANGULAR_VELOCITY_SCALE: f64 = 5.0;

// Shaping weights
pub const DISTANCE_WEIGHT: f64 = 100.0;
pub const SPEED_WEIGHT: f64 = 40.0;
pub const ANGLE_WEIGHT: f64 = 10.0;
pub const ANGULAR_VELOCITY_WEIGHT: f64 = 10.0;
pub const CONTACT_WEIGHT: f64 = 10.0;

// Fuel
pub const MAIN_ENGINE_FUEL_COST: f64 = 0.3;
pub const SIDE_ENGINE_FUEL_COST: f64 = 0.03;

// Termination
pub const MAX_ABS_X: f64 = 40.0;
pub const MAX_Y: f64 = 50.0;
pub const CRASH_ALTITUDE: f64 = 0.2;
pub const LANDING_ALTITUDE: f64 = 0.6;
pub const LANDING_SPEED: f64 = 0.2;
pub const LANDING_ANGLE: f64 = 0.2;
pub const MAX_STEPS: u32 = 1000;
pub const TERMINAL_REWARD: f64 = 100.0;
