#![forbid(unsafe_code)]

//! ANSI escape sequence generation helpers.
//!
//! Pure byte-generation functions for the handful of VT control sequences
//! the paint loop needs. No state tracking here; the [`Presenter`] and the
//! REPL own sequencing decisions.
//!
//! # Sequence Reference
//!
//! | Category | Sequence | Description |
//! |----------|----------|-------------|
//! | CSI | `ESC [ n m` | SGR foreground color |
//! | CSI | `ESC [ n A` | CUU (cursor up) |
//! | CSI | `ESC [ 2 K` | EL (erase entire line) |
//! | CSI | `ESC [ 2 J` | ED (erase entire display) |
//!
//! [`Presenter`]: crate::presenter::Presenter

use std::io::{self, Write};

/// SGR default foreground: `CSI 39 m`.
pub const SGR_FG_DEFAULT: &[u8] = b"\x1b[39m";

/// Write an SGR foreground color sequence for the given code.
#[inline]
pub fn sgr_fg<W: Write>(w: &mut W, code: u8) -> io::Result<()> {
    write!(w, "\x1b[{code}m")
}

/// Move the cursor up by `lines` rows.
#[inline]
pub fn cursor_up<W: Write>(w: &mut W, lines: u16) -> io::Result<()> {
    write!(w, "\x1b[{lines}A")
}

/// Erase the entire current line.
#[inline]
pub fn erase_line<W: Write>(w: &mut W) -> io::Result<()> {
    w.write_all(b"\x1b[2K")
}

/// Erase the entire display.
#[inline]
pub fn erase_display<W: Write>(w: &mut W) -> io::Result<()> {
    w.write_all(b"\x1b[2J")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> Vec<u8> {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        out
    }

    #[test]
    fn sgr_fg_encodes_code() {
        assert_eq!(capture(|w| sgr_fg(w, 31)), b"\x1b[31m");
        assert_eq!(capture(|w| sgr_fg(w, 39)), SGR_FG_DEFAULT);
    }

    #[test]
    fn cursor_up_encodes_count() {
        assert_eq!(capture(|w| cursor_up(w, 1)), b"\x1b[1A");
        assert_eq!(capture(|w| cursor_up(w, 12)), b"\x1b[12A");
    }

    #[test]
    fn erase_sequences() {
        assert_eq!(capture(erase_line), b"\x1b[2K");
        assert_eq!(capture(erase_display), b"\x1b[2J");
    }
}
