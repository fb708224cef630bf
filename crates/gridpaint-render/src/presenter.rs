#![forbid(unsafe_code)]

//! Frame presentation: turn a [`Canvas`] into bordered terminal output.
//!
//! The presenter owns a writer and emits one complete frame per call: an
//! ASCII box border around the grid, with an SGR foreground change only
//! when the color actually changes along a row. Every row ends back on the
//! default foreground so partial redraws never leak color into the prompt.

use std::io::{self, Write};

use crate::ansi;
use crate::canvas::Canvas;
use crate::cell::PaintColor;

/// Writes canvas frames to a terminal (or any `io::Write`).
#[derive(Debug)]
pub struct Presenter<W: Write> {
    writer: W,
}

impl<W: Write> Presenter<W> {
    /// Create a presenter over the given writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Number of terminal rows one frame of `canvas` occupies.
    ///
    /// The grid plus the top and bottom border rows.
    #[must_use]
    pub fn frame_height(canvas: &Canvas) -> u16 {
        canvas.height().saturating_add(2)
    }

    /// Draw one complete frame and flush.
    pub fn draw(&mut self, canvas: &Canvas) -> io::Result<()> {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "draw",
            width = canvas.width(),
            height = canvas.height()
        )
        .entered();

        self.border(canvas.width())?;
        for y in 0..canvas.height() {
            self.writer.write_all(b"|")?;
            // Track the active SGR color across the row; emit an escape
            // only on transitions.
            let mut current = PaintColor::None;
            for cell in canvas.row_cells(y) {
                if cell.color != current {
                    ansi::sgr_fg(&mut self.writer, cell.color.sgr_code())?;
                    current = cell.color;
                }
                let mut buf = [0u8; 4];
                self.writer
                    .write_all(cell.glyph.encode_utf8(&mut buf).as_bytes())?;
            }
            if current != PaintColor::None {
                self.writer.write_all(ansi::SGR_FG_DEFAULT)?;
            }
            self.writer.write_all(b"|\n")?;
        }
        self.border(canvas.width())?;
        self.writer.flush()
    }

    fn border(&mut self, width: u16) -> io::Result<()> {
        self.writer.write_all(b"+")?;
        for _ in 0..width {
            self.writer.write_all(b"-")?;
        }
        self.writer.write_all(b"+\n")
    }

    /// Borrow the underlying writer.
    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consume the presenter and return the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}
