//! ASCII line rasterizer for terminal rendering
use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    QueueableCommand,
};
use std::io::Write;

const BACKGROUND: char = ' ';

/// Character grid that wireframe edges are rasterized into
pub struct LineRasterizer {
    width: usize,
    height: usize,
    char_buffer: Vec<char>,
}

impl LineRasterizer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            char_buffer: vec![BACKGROUND; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn clear(&mut self) {
        self.char_buffer.fill(BACKGROUND);
    }

    /// Resize the grid, discarding its contents
    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.char_buffer = vec![BACKGROUND; width * height];
    }

    pub fn cell(&self, x: usize, y: usize) -> Option<char> {
        if x < self.width && y < self.height {
            Some(self.char_buffer[y * self.width + x])
        } else {
            None
        }
    }

    /// Set a cell, ignoring coordinates outside the grid
    fn plot(&mut self, x: i64, y: i64, character: char) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let idx = y as usize * self.width + x as usize;
        self.char_buffer[idx] = character;
    }

    /// Bresenham line between two cells, clipped to the grid
    pub fn draw_line(&mut self, from: (i64, i64), to: (i64, i64)) {
        let character = line_glyph(to.0 - from.0, to.1 - from.1);
        let Some((from, to)) = clip_segment(from, to, self.width, self.height) else {
            return;
        };

        let (mut x, mut y) = from;
        let dx = (to.0 - from.0).abs();
        let dy = -(to.1 - from.1).abs();
        let sx = if from.0 < to.0 { 1 } else { -1 };
        let sy = if from.1 < to.1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.plot(x, y, character);
            if x == to.0 && y == to.1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.queue(SetBackgroundColor(Color::Black))?;
        writer.queue(SetForegroundColor(Color::White))?;
        for (y, row) in self.char_buffer.chunks(self.width.max(1)).enumerate() {
            let line: String = row.iter().collect();
            writer.queue(cursor::MoveTo(0, y as u16))?;
            writer.queue(Print(line))?;
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

/// Liang-Barsky clip of a segment to the cell grid. Returns `None` when no
/// part of the segment lies on the grid.
fn clip_segment(
    from: (i64, i64),
    to: (i64, i64),
    width: usize,
    height: usize,
) -> Option<((i64, i64), (i64, i64))> {
    if width == 0 || height == 0 {
        return None;
    }
    let (x0, y0) = (from.0 as f64, from.1 as f64);
    let (dx, dy) = (to.0 as f64 - x0, to.1 as f64 - y0);
    let (x_max, y_max) = ((width - 1) as f64, (height - 1) as f64);

    let mut t0: f64 = 0.0;
    let mut t1: f64 = 1.0;
    for (p, q) in [(-dx, x0), (dx, x_max - x0), (-dy, y0), (dy, y_max - y0)] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }

    let at = |t: f64| ((x0 + t * dx).round() as i64, (y0 + t * dy).round() as i64);
    Some((at(t0), at(t1)))
}

/// Pick a character that follows the slope of a line. Rows grow downwards.
fn line_glyph(dx: i64, dy: i64) -> char {
    let (adx, ady) = (dx.abs(), dy.abs());
    if adx == 0 && ady == 0 {
        '+'
    } else if ady * 2 < adx {
        '-'
    } else if adx * 2 < ady {
        '|'
    } else if (dx > 0) == (dy > 0) {
        '\\'
    } else {
        '/'
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(r: &LineRasterizer, y: usize) -> String {
        (0..r.width()).filter_map(|x| r.cell(x, y)).collect()
    }

    #[test]
    fn test_horizontal_line() {
        let mut r = LineRasterizer::new(8, 3);
        r.draw_line((1, 1), (5, 1));
        assert_eq!(row(&r, 1), " -----  ");
        assert_eq!(row(&r, 0), "        ");
    }

    #[test]
    fn test_vertical_and_diagonal_lines() {
        let mut r = LineRasterizer::new(4, 4);
        r.draw_line((0, 0), (0, 3));
        assert!((0..4).all(|y| r.cell(0, y) == Some('|')));

        r.clear();
        r.draw_line((0, 0), (3, 3));
        assert!((0..4).all(|i| r.cell(i, i) == Some('\\')));

        r.clear();
        r.draw_line((3, 0), (0, 3));
        assert!((0..4).all(|i| r.cell(3 - i, i) == Some('/')));
    }

    #[test]
    fn test_line_is_clipped_to_grid() {
        let mut r = LineRasterizer::new(5, 5);
        r.draw_line((-10, 2), (20, 2));
        assert_eq!(row(&r, 2), "-----");
        assert_eq!(r.cell(5, 2), None);
    }

    #[test]
    fn test_far_off_grid_line_is_clipped_before_stepping() {
        let mut r = LineRasterizer::new(5, 5);
        r.draw_line((-1_000_000_000_000, 2), (1_000_000_000_000, 2));
        assert_eq!(row(&r, 2), "-----");

        r.clear();
        r.draw_line((-1_000_000_000_000, -1_000_000_000_000), (-5, -5));
        assert!((0..5).all(|y| row(&r, y) == "     "));
    }

    #[test]
    fn test_clip_segment() {
        assert_eq!(clip_segment((1, 1), (3, 2), 5, 5), Some(((1, 1), (3, 2))));
        assert_eq!(clip_segment((-4, 0), (8, 0), 5, 5), Some(((0, 0), (4, 0))));
        assert_eq!(clip_segment((-2, 7), (-2, -7), 5, 5), None);
        assert_eq!(clip_segment((0, 0), (1, 1), 0, 3), None);
    }

    #[test]
    fn test_single_point_line() {
        let mut r = LineRasterizer::new(3, 3);
        r.draw_line((1, 1), (1, 1));
        assert_eq!(r.cell(1, 1), Some('+'));
    }

    #[test]
    fn test_resize_and_clear() {
        let mut r = LineRasterizer::new(3, 3);
        r.draw_line((0, 0), (2, 0));
        r.clear();
        assert_eq!(row(&r, 0), "   ");

        r.resize(6, 2);
        assert_eq!((r.width(), r.height()), (6, 2));
        assert_eq!(row(&r, 1), "      ");
    }

    #[test]
    fn test_draw_writes_rows() {
        let mut r = LineRasterizer::new(3, 2);
        r.draw_line((0, 1), (2, 1));
        let mut out = Vec::new();
        r.draw(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("---"));
    }
}
