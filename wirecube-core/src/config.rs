//! Compile-time configuration for the demo

use std::time::Duration;

use crate::math::{Scalar, Vec3};
use crate::rotation::RotationAngles;

/// Logical screen width in surface units
pub const SCREEN_WIDTH: Scalar = 1200.0;
/// Logical screen height in surface units
pub const SCREEN_HEIGHT: Scalar = 900.0;
/// Model units to screen units
pub const SCREEN_SCALE: Scalar = 50.0;

/// Per-frame rotation about the X axis (radians)
pub const ALPHA: Scalar = 0.010;
/// Per-frame rotation about the Y axis (radians)
pub const BETA: Scalar = 0.005;
/// Per-frame rotation about the Z axis (radians)
pub const GAMMA: Scalar = 0.030;

/// Reference corner of the cube in model units
pub const CUBE_REFERENCE: (Scalar, Scalar, Scalar) = (5.0, 5.0, 5.0);
pub const CUBE_EDGE_LENGTH: Scalar = 10.0;

/// Frame pacing used by presentation surfaces without vertical sync
pub const TARGET_FRAME_TIME: Duration = Duration::from_micros(1_000_000 / 60);

pub const WINDOW_TITLE: &str = "Cube Simulation";

/// Offset from the top-left origin to the centre of the screen
pub fn screen_shift() -> Vec3 {
    Vec3::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0, 0.0)
}

pub fn rotation_angles() -> RotationAngles {
    RotationAngles::new(ALPHA, BETA, GAMMA)
}

pub fn cube_reference() -> Vec3 {
    let (x, y, z) = CUBE_REFERENCE;
    Vec3::new(x, y, z)
}
