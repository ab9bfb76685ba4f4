//! Per-frame transform of the cube's corners
use crate::cube::Cube;
use crate::math::{add, multiply, Mat3, Vec3};

/// Rotate one corner about the point `shift`.
///
/// The corner is moved by `-shift`, multiplied as a 3x1 column by
/// `rotation`, then moved back by `+shift`. `shift` is the screen centre,
/// not the cube's centroid.
pub fn transform_corner(rotation: &Mat3, corner: Vec3, shift: Vec3) -> Vec3 {
    let local = add(corner, -shift);
    add(multiply(rotation, &local), shift)
}

/// Advance the cube by one frame, in place
pub fn advance(cube: &mut Cube, rotation: &Mat3, shift: Vec3) {
    for corner in &mut cube.corners {
        *corner = transform_corner(rotation, *corner, shift);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config;
    use crate::cube::CORNER_COUNT;
    use crate::math::Scalar;
    use crate::rotation::{compose, RotationAngles};

    fn screen_cube() -> Cube {
        let mut cube = Cube::new(config::cube_reference(), config::CUBE_EDGE_LENGTH);
        cube.place_on_screen(config::SCREEN_SCALE, config::screen_shift());
        cube
    }

    fn pairwise_distances(cube: &Cube) -> Vec<Scalar> {
        let mut distances = Vec::new();
        for i in 0..CORNER_COUNT {
            for j in (i + 1)..CORNER_COUNT {
                distances.push(cube.corners[i].metric_distance(&cube.corners[j]));
            }
        }
        distances
    }

    #[test]
    fn test_identity_leaves_corners_unchanged() {
        let mut cube = screen_cube();
        let before = cube.clone();
        advance(&mut cube, &compose(&RotationAngles::zero()), config::screen_shift());
        assert_eq!(cube, before);
    }

    #[test]
    fn test_shift_point_is_fixed() {
        let rotation = compose(&config::rotation_angles());
        let shift = config::screen_shift();
        assert!(transform_corner(&rotation, shift, shift).metric_distance(&shift) < 1e-12);
    }

    #[test]
    fn test_preserves_pairwise_distances() {
        let rotation = compose(&config::rotation_angles());
        let mut cube = screen_cube();
        let before = pairwise_distances(&cube);

        advance(&mut cube, &rotation, config::screen_shift());

        for (b, a) in before.iter().zip(pairwise_distances(&cube)) {
            assert!((b - a).abs() < 1e-4);
        }
        assert!(cube.corners[0] != screen_cube().corners[0]);
    }

    #[test]
    fn test_connecting_edges_hold_length_over_many_frames() {
        let rotation = compose(&config::rotation_angles());
        let shift = config::screen_shift();
        let edge = config::CUBE_EDGE_LENGTH * config::SCREEN_SCALE;
        let mut cube = screen_cube();

        for _ in 0..1000 {
            advance(&mut cube, &rotation, shift);
            for i in 0..4 {
                let length = cube.corners[i].metric_distance(&cube.corners[i + 4]);
                assert!((length - edge).abs() < 1e-3);
            }
        }
    }

    #[test]
    fn test_rotates_about_screen_centre_not_centroid() {
        let rotation = compose(&RotationAngles::new(0.0, 0.0, std::f64::consts::FRAC_PI_2));
        let shift = Vec3::new(100.0, 100.0, 0.0);

        // A cube sitting away from the shift point orbits around it
        let mut cube = Cube::new(Vec3::new(11.0, 1.0, 1.0), 2.0);
        cube.place_on_screen(1.0, shift);
        let before = cube.centroid();
        advance(&mut cube, &rotation, shift);
        let after = cube.centroid();

        assert!(before.metric_distance(&Vec3::new(110.0, 100.0, 0.0)) < 1e-9);
        assert!(after.metric_distance(&Vec3::new(100.0, 110.0, 0.0)) < 1e-9);
    }
}
