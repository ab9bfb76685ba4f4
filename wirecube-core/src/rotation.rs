//! Per-axis rotation matrices and their composition
use crate::math::{multiply, Mat3, Scalar};

/// Fixed rotation increments about three axes (in radians)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationAngles {
    pub x: Scalar,
    pub y: Scalar,
    pub z: Scalar,
}

impl RotationAngles {
    pub fn new(x: Scalar, y: Scalar, z: Scalar) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }
}

impl Default for RotationAngles {
    fn default() -> Self {
        Self::zero()
    }
}

/// Rotation about the X axis
pub fn rotation_x(alpha: Scalar) -> Mat3 {
    let (sin, cos) = alpha.sin_cos();
    Mat3::new(
        1.0, 0.0, 0.0, //
        0.0, cos, -sin, //
        0.0, sin, cos,
    )
}

/// Rotation about the Y axis
pub fn rotation_y(beta: Scalar) -> Mat3 {
    let (sin, cos) = beta.sin_cos();
    Mat3::new(
        cos, 0.0, sin, //
        0.0, 1.0, 0.0, //
        -sin, 0.0, cos,
    )
}

/// Rotation about the Z axis
pub fn rotation_z(gamma: Scalar) -> Mat3 {
    let (sin, cos) = gamma.sin_cos();
    Mat3::new(
        cos, -sin, 0.0, //
        sin, cos, 0.0, //
        0.0, 0.0, 1.0,
    )
}

/// Compose the three axis rotations into a single matrix.
///
/// Applied to a column vector the X rotation acts first, then Y, then Z:
/// the result is `Rz · (Ry · Rx)`. Computed once and reused every frame.
pub fn compose(angles: &RotationAngles) -> Mat3 {
    let rx = rotation_x(angles.x);
    let ry = rotation_y(angles.y);
    let rz = rotation_z(angles.z);

    let combined = multiply(&rz, &multiply(&ry, &rx));
    log::debug!("Composed rotation matrix:{}", combined);
    combined
}
