//! Orthographic projection onto the screen plane
use crate::math::{Scalar, Vec3};

/// A point in screen space
pub type Point2 = nalgebra::Point2<Scalar>;

/// Project a 3D point by discarding its depth
pub fn project(point: Vec3) -> Point2 {
    Point2::new(point.x, point.y)
}
