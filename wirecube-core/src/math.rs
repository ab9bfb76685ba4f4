//! Vector and fixed-size matrix primitives
use nalgebra::{SMatrix, Vector3};

/// Scalar type used by every geometric quantity
pub type Scalar = f64;

/// 3x3 matrix, used for rotations
pub type Mat3 = SMatrix<Scalar, 3, 3>;

/// A point or displacement in 3D space.
///
/// This is nalgebra's 3x1 column matrix, so it multiplies directly
/// against a [`Mat3`].
pub type Vec3 = Vector3<Scalar>;

pub fn scale(v: Vec3, scalar: Scalar) -> Vec3 {
    v * scalar
}

/// Component-wise sum
pub fn add(a: Vec3, b: Vec3) -> Vec3 {
    a + b
}

/// Zero-initialised matrix with dimensions fixed at compile time
pub fn zeros<const R: usize, const C: usize>() -> SMatrix<Scalar, R, C> {
    SMatrix::<Scalar, R, C>::zeros()
}

/// Matrix product by the triple-nested sum.
///
/// The inner dimension `K` is shared by both operands, so a column/row
/// mismatch is rejected at compile time.
pub fn multiply<const R: usize, const K: usize, const C: usize>(
    a: &SMatrix<Scalar, R, K>,
    b: &SMatrix<Scalar, K, C>,
) -> SMatrix<Scalar, R, C> {
    let mut result = zeros::<R, C>();
    for i in 0..R {
        for j in 0..C {
            for k in 0..K {
                result[(i, j)] += a[(i, k)] * b[(k, j)];
            }
        }
    }
    result
}
