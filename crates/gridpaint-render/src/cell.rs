#![forbid(unsafe_code)]

//! Cell types and invariants.
//!
//! The [`Cell`] is the fundamental unit of the paint grid: one glyph plus
//! one foreground color. Cells are plain `Copy` values; the grid overwrites
//! them wholesale, so there is no blending or partial-update state to track.
//!
//! # Invariants
//!
//! 1. A cell's glyph is always exactly one character. Callers that accept
//!    user input (the `chpen` command) validate single-column width with
//!    [`is_single_width`] before a glyph ever reaches a cell.
//! 2. The default cell is a blank: space glyph, default color.

use unicode_width::UnicodeWidthChar;

/// Foreground color of a cell.
///
/// The seven states map onto the classic ANSI 30-series SGR codes; `None`
/// renders as the terminal's default foreground (code 39).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PaintColor {
    /// Terminal default foreground (SGR 39).
    #[default]
    None,
    /// Red (SGR 31).
    Red,
    /// Green (SGR 32).
    Green,
    /// Yellow (SGR 33).
    Yellow,
    /// Blue (SGR 34).
    Blue,
    /// Magenta (SGR 35).
    Magenta,
    /// Cyan (SGR 36).
    Cyan,
}

impl PaintColor {
    /// SGR foreground code for this color.
    #[must_use]
    pub const fn sgr_code(self) -> u8 {
        match self {
            Self::None => 39,
            Self::Red => 31,
            Self::Green => 32,
            Self::Yellow => 33,
            Self::Blue => 34,
            Self::Magenta => 35,
            Self::Cyan => 36,
        }
    }

    /// Parse a color name as accepted by the `chcolor` command.
    ///
    /// Returns `None` for unrecognized names; callers decide whether that
    /// is a warning (soft validation) or an error.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "red" => Some(Self::Red),
            "green" => Some(Self::Green),
            "yellow" => Some(Self::Yellow),
            "blue" => Some(Self::Blue),
            "magenta" => Some(Self::Magenta),
            "cyan" => Some(Self::Cyan),
            _ => None,
        }
    }

    /// Canonical lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "default",
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
        }
    }
}

/// A single grid cell: glyph plus foreground color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Displayed character.
    pub glyph: char,
    /// Foreground color used when presenting the glyph.
    pub color: PaintColor,
}

impl Cell {
    /// The empty cell: a space with the default foreground.
    pub const BLANK: Self = Self {
        glyph: ' ',
        color: PaintColor::None,
    };

    /// Create a cell.
    #[must_use]
    pub const fn new(glyph: char, color: PaintColor) -> Self {
        Self { glyph, color }
    }

    /// Check if this cell is the blank cell.
    #[must_use]
    pub fn is_blank(self) -> bool {
        self == Self::BLANK
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::BLANK
    }
}

/// Check that a character occupies exactly one terminal column.
///
/// Control characters and zero-width marks report no width; wide CJK
/// glyphs report two columns. Both would desynchronize the frame border,
/// so neither is accepted as a pen.
#[must_use]
pub fn is_single_width(c: char) -> bool {
    UnicodeWidthChar::width(c) == Some(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- PaintColor ---

    #[test]
    fn sgr_codes_match_ansi_table() {
        assert_eq!(PaintColor::Red.sgr_code(), 31);
        assert_eq!(PaintColor::Green.sgr_code(), 32);
        assert_eq!(PaintColor::Yellow.sgr_code(), 33);
        assert_eq!(PaintColor::Blue.sgr_code(), 34);
        assert_eq!(PaintColor::Magenta.sgr_code(), 35);
        assert_eq!(PaintColor::Cyan.sgr_code(), 36);
        assert_eq!(PaintColor::None.sgr_code(), 39);
    }

    #[test]
    fn name_roundtrip() {
        for color in [
            PaintColor::Red,
            PaintColor::Green,
            PaintColor::Yellow,
            PaintColor::Blue,
            PaintColor::Magenta,
            PaintColor::Cyan,
        ] {
            assert_eq!(PaintColor::from_name(color.name()), Some(color));
        }
    }

    #[test]
    fn unknown_names_rejected() {
        assert_eq!(PaintColor::from_name("crimson"), None);
        assert_eq!(PaintColor::from_name("RED"), None);
        assert_eq!(PaintColor::from_name(""), None);
        // "default" is the render-time fallback, not a selectable color.
        assert_eq!(PaintColor::from_name("default"), None);
    }

    #[test]
    fn default_color_is_none() {
        assert_eq!(PaintColor::default(), PaintColor::None);
    }

    // --- Cell ---

    #[test]
    fn default_cell_is_blank() {
        let cell = Cell::default();
        assert_eq!(cell.glyph, ' ');
        assert_eq!(cell.color, PaintColor::None);
        assert!(cell.is_blank());
    }

    #[test]
    fn colored_space_is_not_blank() {
        assert!(!Cell::new(' ', PaintColor::Red).is_blank());
        assert!(!Cell::new('*', PaintColor::None).is_blank());
    }

    // --- Width check ---

    #[test]
    fn ascii_printables_are_single_width() {
        for c in ' '..='~' {
            assert!(is_single_width(c), "{c:?} should be one column");
        }
    }

    #[test]
    fn control_and_wide_chars_rejected() {
        assert!(!is_single_width('\n'));
        assert!(!is_single_width('\t'));
        assert!(!is_single_width('\u{0}'));
        assert!(!is_single_width('中'));
        assert!(!is_single_width('\u{200b}'));
    }
}
