//! Wirecube Core Library - Geometry for the spinning wireframe cube
//!
//! This library holds the transform pipeline: vector and matrix primitives,
//! the composed per-frame rotation, the cube model, orthographic projection,
//! and the render loop that drives an external drawing surface.

pub mod config;
pub mod cube;
pub mod math;
pub mod pipeline;
pub mod projection;
pub mod render_loop;
pub mod rotation;
pub mod surface;

// Re-export commonly used types
pub use cube::Cube;
pub use math::{Mat3, Scalar, Vec3};
pub use projection::Point2;
pub use render_loop::{LoopState, LoopStats, Scene};
pub use rotation::RotationAngles;
pub use surface::Surface;
