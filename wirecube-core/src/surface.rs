//! The drawing surface the render loop targets
use std::io;

use crate::projection::Point2;

/// An external rendering surface.
///
/// The render loop only needs frame boundaries, straight lines between
/// screen points, and a non-blocking quit check. Window or terminal setup
/// belongs to the implementor, and dropping it releases those resources.
pub trait Surface {
    /// Drain pending input, returning `true` if the user asked to quit
    fn poll_termination(&mut self) -> io::Result<bool>;

    fn clear_frame(&mut self) -> io::Result<()>;

    fn draw_line(&mut self, from: Point2, to: Point2) -> io::Result<()>;

    /// Show the finished frame. Pacing (vsync or a delay) happens here.
    fn present_frame(&mut self) -> io::Result<()>;
}
