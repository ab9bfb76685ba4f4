//! The wireframe cube model
use crate::math::{add, scale, Scalar, Vec3};

/// Number of corners of a cube
pub const CORNER_COUNT: usize = 8;

/// Edges as corner index pairs, in drawing order: for each `i` in `0..4`
/// the front-face edge, the back-face edge, then the connecting edge.
pub const EDGES: [(usize, usize); 12] = edge_table();

const fn edge_table() -> [(usize, usize); 12] {
    let mut edges = [(0, 0); 12];
    let mut i = 0;
    while i < 4 {
        let next = (i + 1) % 4;
        edges[i * 3] = (i, next);
        edges[i * 3 + 1] = (i + 4, next + 4);
        edges[i * 3 + 2] = (i, i + 4);
        i += 1;
    }
    edges
}

/// An axis-aligned cube given by its eight corners.
///
/// Corners `0..4` form one face in cyclic order and corners `4..8` the
/// parallel face, with corner `i` joined to corner `i + 4`.
#[derive(Debug, Clone, PartialEq)]
pub struct Cube {
    pub corners: [Vec3; CORNER_COUNT],
}

impl Cube {
    /// Build a cube extending in -x and -y from `reference`, with its two
    /// square faces at `reference.z` and `reference.z - edge_length`.
    pub fn new(reference: Vec3, edge_length: Scalar) -> Self {
        let (x, y, z) = (reference.x, reference.y, reference.z);
        let mut corners = [Vec3::zeros(); CORNER_COUNT];
        for face in 0..2 {
            let depth = z - edge_length * face as Scalar;
            corners[face * 4] = Vec3::new(x - edge_length, y, depth);
            corners[face * 4 + 1] = Vec3::new(x, y, depth);
            corners[face * 4 + 2] = Vec3::new(x, y - edge_length, depth);
            corners[face * 4 + 3] = Vec3::new(x - edge_length, y - edge_length, depth);
        }
        Self { corners }
    }

    /// Scale every corner into screen units and move it by `shift`
    pub fn place_on_screen(&mut self, factor: Scalar, shift: Vec3) {
        for corner in &mut self.corners {
            *corner = add(shift, scale(*corner, factor));
        }
    }

    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> {
        EDGES.into_iter()
    }

    /// Endpoints of every edge, in drawing order
    pub fn edge_segments(&self) -> impl Iterator<Item = (Vec3, Vec3)> + '_ {
        self.edges()
            .map(move |(a, b)| (self.corners[a], self.corners[b]))
    }

    #[cfg(test)]
    pub(crate) fn centroid(&self) -> Vec3 {
        self.corners.iter().fold(Vec3::zeros(), |acc, c| acc + c) / CORNER_COUNT as Scalar
    }
}
