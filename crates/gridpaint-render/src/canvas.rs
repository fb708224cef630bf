#![forbid(unsafe_code)]

//! Canvas grid storage.
//!
//! The `Canvas` is a 2D grid of [`Cell`]s plus the active pen state.
//! Drawing code writes through [`Canvas::set`], which clips silently:
//! out-of-range geometry is a normal condition for the rasterizer, not an
//! error. Reads are bounds-checked and return `None` outside the grid.
//!
//! # Layout
//!
//! Cells are stored in row-major order: `index = y * width + x`.
//!
//! # Invariants
//!
//! 1. `cells.len() == width * height`
//! 2. Width and height never change after creation
//! 3. `pen` is always exactly one character
//! 4. `reset` touches cells only; pen and color name survive it

use std::fmt;

use crate::cell::{Cell, PaintColor};

/// Errors raised by canvas construction and explicit cell access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasError {
    /// A requested dimension was zero.
    InvalidDimension { width: u16, height: u16 },
    /// An explicit access named a coordinate outside the grid.
    OutOfRange { x: i32, y: i32 },
}

impl fmt::Display for CanvasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { width, height } => {
                write!(f, "invalid canvas dimensions: {width}x{height}")
            }
            Self::OutOfRange { x, y } => write!(f, "out of range: ({x}, {y})"),
        }
    }
}

impl std::error::Error for CanvasError {}

/// A fixed-size grid of cells with the active pen and color state.
///
/// # Example
///
/// ```
/// use gridpaint_render::canvas::Canvas;
///
/// let mut canvas = Canvas::new(20, 10, '*').unwrap();
/// canvas.set(0, 0, gridpaint_render::cell::Cell::new('#', Default::default()));
/// assert_eq!(canvas.get(0, 0).unwrap().glyph, '#');
/// ```
#[derive(Debug, Clone)]
pub struct Canvas {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
    pen: char,
    color_name: String,
}

impl Canvas {
    /// Create a canvas with every cell blank.
    ///
    /// Fails with [`CanvasError::InvalidDimension`] when either dimension
    /// is zero.
    pub fn new(width: u16, height: u16, pen: char) -> Result<Self, CanvasError> {
        if width == 0 || height == 0 {
            return Err(CanvasError::InvalidDimension { width, height });
        }
        let size = width as usize * height as usize;
        Ok(Self {
            width,
            height,
            cells: vec![Cell::BLANK; size],
            pen,
            color_name: PaintColor::None.name().to_string(),
        })
    }

    /// Canvas width in cells.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Canvas height in cells.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Active pen glyph.
    #[inline]
    #[must_use]
    pub const fn pen(&self) -> char {
        self.pen
    }

    /// Replace the pen glyph.
    #[inline]
    pub fn set_pen(&mut self, glyph: char) {
        self.pen = glyph;
    }

    /// Active color name, verbatim as last set.
    #[inline]
    #[must_use]
    pub fn color_name(&self) -> &str {
        &self.color_name
    }

    /// Replace the color name. Unrecognized names are stored as-is and
    /// fall back to the default foreground at plot time.
    pub fn set_color_name(&mut self, name: impl Into<String>) {
        self.color_name = name.into();
    }

    /// The color drawn by the pen right now.
    #[must_use]
    pub fn color(&self) -> PaintColor {
        PaintColor::from_name(&self.color_name).unwrap_or(PaintColor::None)
    }

    /// Check whether a coordinate lies inside the grid.
    #[inline]
    #[must_use]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < i32::from(self.width) && y >= 0 && y < i32::from(self.height)
    }

    /// Convert (x, y) to a linear index, or `None` when out of bounds.
    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if self.in_bounds(x, y) {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Get the cell at (x, y), or `None` when out of bounds.
    #[inline]
    #[must_use]
    pub fn get(&self, x: i32, y: i32) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Set the cell at (x, y). Out-of-range writes are silently dropped.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = cell;
        }
    }

    /// Stamp the pen at (x, y) with the active color. Clips silently.
    #[inline]
    pub fn plot(&mut self, x: i32, y: i32) {
        let cell = Cell::new(self.pen, self.color());
        self.set(x, y, cell);
    }

    /// Clear one cell back to blank.
    ///
    /// Unlike the drawing paths, `erase` names a specific cell, so an
    /// out-of-range coordinate is an error rather than a clip.
    pub fn erase(&mut self, x: i32, y: i32) -> Result<(), CanvasError> {
        match self.index(x, y) {
            Some(i) => {
                self.cells[i] = Cell::BLANK;
                Ok(())
            }
            None => Err(CanvasError::OutOfRange { x, y }),
        }
    }

    /// Reset every cell to blank. Pen and color name are untouched.
    pub fn reset(&mut self) {
        self.cells.fill(Cell::BLANK);
    }

    /// Raw access to the cell slice, row-major.
    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The cells of one row as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    #[must_use]
    pub fn row_cells(&self, y: u16) -> &[Cell] {
        let start = y as usize * self.width as usize;
        &self.cells[start..start + self.width as usize]
    }

    /// The glyphs of one row collected into a `String`, colors ignored.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[must_use]
    pub fn row_glyphs(&self, y: u16) -> String {
        self.row_cells(y).iter().map(|c| c.glyph).collect()
    }
}
