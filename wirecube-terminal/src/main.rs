//! Wirecube - Spinning wireframe cube in the terminal
//!
//! Controls:
//!   - Q/ESC/Ctrl-C: Quit
//!
//! Set `RUST_LOG=debug` to log the composed rotation matrix and run stats
//! to stderr.

use std::io;
use std::process::ExitCode;
use wirecube_core::{render_loop, LoopStats, Scene};
use wirecube_terminal::TerminalSurface;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let mut scene = Scene::demo();

    let surface = match TerminalSurface::new() {
        Ok(surface) => surface,
        Err(e) => {
            log::error!("Terminal surface couldn't be created: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if report(&render_loop::run(surface, &mut scene)) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Log how the run ended; returns whether it ended cleanly
fn report(result: &io::Result<LoopStats>) -> bool {
    match result {
        Ok(stats) => {
            log::info!("Shut down cleanly after {} frames", stats.frames);
            true
        }
        Err(e) => {
            log::error!("Render loop failed: {}", e);
            false
        }
    }
}
