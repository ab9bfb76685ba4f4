//! Terminal surface for the wireframe cube
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self},
};
use std::io::{self, stdout, Stdout, Write};
use std::time::{Duration, Instant};
use wirecube_core::{config, Point2, Surface};

pub mod renderer;

pub use renderer::LineRasterizer;

/// Restores the terminal when dropped.
///
/// Created right after raw mode is enabled so every later failure,
/// and the normal end of the run, goes through the same teardown.
struct TerminalGuard;

impl TerminalGuard {
    fn acquire() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

/// Log a failed teardown step; returns whether it succeeded
fn check_restore(step: &str, result: io::Result<()>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            log::warn!("Failed to {}: {}", step, e);
            false
        }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        check_restore(
            "restore terminal screen",
            execute!(stdout(), ResetColor, terminal::LeaveAlternateScreen, cursor::Show),
        );
        check_restore("disable raw mode", terminal::disable_raw_mode());
    }
}

/// Map a point in logical screen units onto the cell grid
pub fn to_cell(point: Point2, width: usize, height: usize) -> (i64, i64) {
    let x = point.x / config::SCREEN_WIDTH * width.saturating_sub(1) as f64;
    let y = point.y / config::SCREEN_HEIGHT * height.saturating_sub(1) as f64;
    (x.round() as i64, y.round() as i64)
}

/// Whether a key event asks to quit
fn is_quit_key(key: &KeyEvent) -> bool {
    if key.kind == KeyEventKind::Release {
        return false;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// A [`Surface`] drawing into the terminal's alternate screen
pub struct TerminalSurface {
    rasterizer: LineRasterizer,
    out: Stdout,
    frame_time: Duration,
    last_present: Instant,
    // Dropped last, after all output has been queued
    _guard: TerminalGuard,
}

impl TerminalSurface {
    /// Take over the terminal.
    ///
    /// On error the terminal is left as it was found.
    pub fn new() -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        let guard = TerminalGuard::acquire()?;

        let mut out = stdout();
        execute!(
            out,
            terminal::EnterAlternateScreen,
            terminal::SetTitle(config::WINDOW_TITLE),
            cursor::Hide,
            terminal::Clear(terminal::ClearType::All)
        )?;
        log::debug!("Terminal surface created: {}x{} cells", width, height);

        Ok(Self {
            rasterizer: LineRasterizer::new(width as usize, height as usize),
            out,
            frame_time: config::TARGET_FRAME_TIME,
            last_present: Instant::now(),
            _guard: guard,
        })
    }

    fn handle_event(&mut self, event: Event) -> bool {
        match event {
            Event::Key(key) => is_quit_key(&key),
            Event::Resize(width, height) => {
                log::debug!("Terminal resized to {}x{}", width, height);
                self.rasterizer.resize(width as usize, height as usize);
                false
            }
            _ => false,
        }
    }
}

impl Surface for TerminalSurface {
    fn poll_termination(&mut self) -> io::Result<bool> {
        let mut quit = false;
        while event::poll(Duration::ZERO)? {
            let event = event::read()?;
            quit |= self.handle_event(event);
        }
        Ok(quit)
    }

    fn clear_frame(&mut self) -> io::Result<()> {
        self.rasterizer.clear();
        Ok(())
    }

    fn draw_line(&mut self, from: Point2, to: Point2) -> io::Result<()> {
        let (width, height) = (self.rasterizer.width(), self.rasterizer.height());
        self.rasterizer
            .draw_line(to_cell(from, width, height), to_cell(to, width, height));
        Ok(())
    }

    fn present_frame(&mut self) -> io::Result<()> {
        self.rasterizer.draw(&mut self.out)?;
        queue!(
            self.out,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(format!("{} | Q/Esc=Quit", config::WINDOW_TITLE)),
            ResetColor
        )?;
        self.out.flush()?;

        let elapsed = self.last_present.elapsed();
        if elapsed < self.frame_time {
            std::thread::sleep(self.frame_time - elapsed);
        }
        self.last_present = Instant::now();
        Ok(())
    }
}
