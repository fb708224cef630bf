#![forbid(unsafe_code)]

//! Render kernel: cells, the canvas grid, rasterization, and ANSI output.

pub mod ansi;
pub mod canvas;
pub mod cell;
pub mod drawing;
pub mod presenter;

pub use canvas::{Canvas, CanvasError};
pub use cell::{Cell, PaintColor};
pub use drawing::Draw;
pub use presenter::Presenter;
