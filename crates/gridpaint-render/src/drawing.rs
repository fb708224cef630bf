#![forbid(unsafe_code)]

//! Drawing primitives for the canvas.
//!
//! Ergonomic, well-tested helpers on top of [`Canvas::plot`] so the command
//! layer can draw shapes without duplicating low-level cell loops. Every
//! operation clips silently against the canvas bounds via `plot`; geometry
//! that lies partly or wholly outside the grid is a normal input, never an
//! error.
//!
//! The line rasterizer is a plain digital differential analyzer with
//! truncating integer division, and the circle is a nearest-boundary column
//! scan. Both are deliberately simple: output is coarse character art, and
//! the exact truncation behavior is part of the observable contract (replay
//! of a saved command log must reproduce the grid cell for cell).
//!
//! Every argument is clamped to a canvas-relative window before stepping,
//! so extreme coordinates (up to `i32::MIN`/`i32::MAX`) neither overflow
//! the stepping arithmetic nor stall the loop. Clamping is deterministic,
//! which keeps replay exact.

use std::collections::VecDeque;

use crate::canvas::Canvas;

/// Extension trait for drawing shapes on a [`Canvas`].
pub trait Draw {
    /// Draw a line from (x0, y0) to (x1, y1) with the active pen.
    ///
    /// Steps `n = max(|dx|, |dy|)` times, plotting
    /// `(x0 + i*dx/n, y0 + i*dy/n)` with truncating division. A degenerate
    /// line (`n == 0`) plots the single cell (x0, y0).
    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32);

    /// Draw the outline of a `w` x `h` rectangle with its top-left corner
    /// at (x0, y0). Non-positive `w` or `h` draws nothing.
    fn draw_rect(&mut self, x0: i32, y0: i32, w: i32, h: i32);

    /// Draw an approximate circle of radius `r` centered at (x0, y0).
    ///
    /// Scans each column in `[x0-r+1, x0+r-1]` for the row nearest the
    /// ring, plots it and its vertical mirror, and fills the span between
    /// the two at the extreme columns so the caps close. `r <= 0` draws
    /// nothing; `r == 1` plots just the center.
    fn draw_circle(&mut self, x0: i32, y0: i32, r: i32);

    /// Flood-fill the 4-connected region around (x0, y0) with the active
    /// pen. No-op when the seed is out of range or already carries the pen
    /// glyph (the latter guard is what makes a repeated fill terminate
    /// immediately instead of looping).
    fn flood_fill(&mut self, x0: i32, y0: i32);
}

/// Fold a coordinate or size argument into the canvas-relative window
/// `±(width + height)`.
///
/// Inside the window, stepping products fit in `i64` and loop lengths
/// stay proportional to the canvas.
fn clamp_to_window(canvas: &Canvas, v: i32) -> i32 {
    let limit = i32::from(canvas.width()) + i32::from(canvas.height());
    v.clamp(-limit, limit)
}

impl Draw for Canvas {
    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) {
        let x0 = clamp_to_window(self, x0);
        let y0 = clamp_to_window(self, y0);
        let x1 = clamp_to_window(self, x1);
        let y1 = clamp_to_window(self, y1);
        // The step products exceed i32 even inside the window.
        let dx = i64::from(x1) - i64::from(x0);
        let dy = i64::from(y1) - i64::from(y0);
        let n = dx.abs().max(dy.abs());
        self.plot(x0, y0);
        for i in 1..=n {
            let x = i64::from(x0) + i * dx / n;
            let y = i64::from(y0) + i * dy / n;
            self.plot(x as i32, y as i32);
        }
    }

    fn draw_rect(&mut self, x0: i32, y0: i32, w: i32, h: i32) {
        let x0 = clamp_to_window(self, x0);
        let y0 = clamp_to_window(self, y0);
        let w = clamp_to_window(self, w);
        let h = clamp_to_window(self, h);
        // Vertical runs at the left and right edges.
        for i in 0..h {
            self.plot(x0, y0 + i);
            self.plot(x0 + w - 1, y0 + i);
        }
        // Horizontal runs at the top and bottom edges. Corners are plotted
        // twice; plotting is a pure overwrite, so that is harmless.
        for i in 0..w {
            self.plot(x0 + i, y0);
            self.plot(x0 + i, y0 + h - 1);
        }
    }

    fn draw_circle(&mut self, x0: i32, y0: i32, r: i32) {
        let x0 = clamp_to_window(self, x0);
        let y0 = clamp_to_window(self, y0);
        let r = clamp_to_window(self, r);
        let radius = f64::from(r);
        // Columns outside the grid only ever plot clipped cells; visiting
        // just the on-grid ones is output-identical and bounds the scan.
        let x_first = x0 - r + 1;
        let x_last = x0 + r - 1;
        for x in x_first.max(0)..=x_last.min(i32::from(self.width()) - 1) {
            // Per column, keep the first row whose distance to the center
            // is nearest the ring. The residual is stored signed: once the
            // scan dips inside the ring, later rows can no longer win ties.
            let mut best_y = 0;
            let mut residual = f64::from(self.width()) * f64::from(self.height());
            for y in (y0 - r + 1)..=(y0 + r - 1) {
                let dx = f64::from(x - x0);
                let dy = f64::from(y - y0);
                let dist = (dx * dx + dy * dy).sqrt();
                if (dist - radius).abs() < residual {
                    best_y = y;
                    residual = dist - radius;
                }
            }
            let mirror_y = 2 * y0 - best_y;
            self.plot(x, best_y);
            self.plot(x, mirror_y);
            // Close the caps: the two extreme columns get the whole span
            // between the mirrored rows.
            if x == x_first || x == x_last {
                for y in best_y.min(mirror_y)..=best_y.max(mirror_y) {
                    self.plot(x, y);
                }
            }
        }
    }

    fn flood_fill(&mut self, x0: i32, y0: i32) {
        if !self.in_bounds(x0, y0) {
            return;
        }
        let pen = self.pen();
        if self.get(x0, y0).is_none_or(|c| c.glyph == pen) {
            return;
        }

        let width = self.width() as usize;
        let height = self.height() as usize;
        let mut visited = vec![false; width * height];
        let mut frontier = VecDeque::new();

        visited[y0 as usize * width + x0 as usize] = true;
        self.plot(x0, y0);
        frontier.push_back((x0, y0));

        while let Some((x, y)) = frontier.pop_front() {
            for (dx, dy) in [(-1, 0), (1, 0), (0, -1), (0, 1)] {
                let nx = x + dx;
                let ny = y + dy;
                if !self.in_bounds(nx, ny) {
                    continue;
                }
                let idx = ny as usize * width + nx as usize;
                if visited[idx] {
                    continue;
                }
                if self.get(nx, ny).is_none_or(|c| c.glyph == pen) {
                    continue;
                }
                visited[idx] = true;
                self.plot(nx, ny);
                frontier.push_back((nx, ny));
            }
        }
    }
}
