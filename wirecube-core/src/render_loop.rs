//! Frame loop driving the cube onto a [`Surface`]
use std::io;

use crate::config;
use crate::cube::Cube;
use crate::math::{Mat3, Vec3};
use crate::pipeline;
use crate::projection::project;
use crate::rotation::{compose, RotationAngles};
use crate::surface::Surface;

/// Render loop state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Terminating,
}

/// Summary of a finished run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoopStats {
    /// Frames transformed and presented
    pub frames: u64,
}

/// Everything one frame update reads or mutates
#[derive(Debug, Clone)]
pub struct Scene {
    pub cube: Cube,
    /// Per-frame rotation, fixed for the lifetime of the loop
    pub rotation: Mat3,
    /// Point the cube rotates about
    pub shift: Vec3,
}

impl Scene {
    pub fn new(cube: Cube, angles: &RotationAngles, shift: Vec3) -> Self {
        Self {
            cube,
            rotation: compose(angles),
            shift,
        }
    }

    /// The demo scene: the configured cube placed at the screen centre
    pub fn demo() -> Self {
        let shift = config::screen_shift();
        let mut cube = Cube::new(config::cube_reference(), config::CUBE_EDGE_LENGTH);
        cube.place_on_screen(config::SCREEN_SCALE, shift);
        Self::new(cube, &config::rotation_angles(), shift)
    }
}

/// Clear, draw all twelve edges and present
pub fn draw_frame<S: Surface>(surface: &mut S, cube: &Cube) -> io::Result<()> {
    surface.clear_frame()?;
    for (from, to) in cube.edge_segments() {
        surface.draw_line(project(from), project(to))?;
    }
    surface.present_frame()
}

/// Run a single iteration of the loop.
///
/// A quit request ends the iteration before anything is transformed or
/// drawn.
pub fn step<S: Surface>(surface: &mut S, scene: &mut Scene) -> io::Result<LoopState> {
    if surface.poll_termination()? {
        return Ok(LoopState::Terminating);
    }

    pipeline::advance(&mut scene.cube, &scene.rotation, scene.shift);
    draw_frame(surface, &scene.cube)?;
    Ok(LoopState::Running)
}

/// Drive frames until the surface reports a quit.
///
/// The surface is owned by the loop and dropped exactly once when it
/// returns, whether it ends normally or with an error.
pub fn run<S: Surface>(mut surface: S, scene: &mut Scene) -> io::Result<LoopStats> {
    let mut stats = LoopStats::default();
    let mut state = LoopState::Running;

    while state == LoopState::Running {
        state = step(&mut surface, scene)?;
        if state == LoopState::Running {
            stats.frames += 1;
        }
    }

    log::debug!("Termination requested after {} frames", stats.frames);
    Ok(stats)
}
