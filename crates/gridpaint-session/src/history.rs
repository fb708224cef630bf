#![forbid(unsafe_code)]

//! The accepted-command log.
//!
//! `History` is an ordered, append-mostly sequence of command lines. Only
//! lines the interpreter classified as plain drawing/state mutations are
//! ever pushed, which is what makes the log exactly replayable: feeding
//! every entry back through the interpreter reconstructs the canvas
//! deterministically.
//!
//! # Invariants
//!
//! 1. Insertion order is acceptance order.
//! 2. Every entry ends with exactly one `\n` (normalized on push), so the
//!    on-disk format round-trips byte for byte.
//! 3. Undo operates by truncation plus replay, never by patching cells.
//!
//! # File format
//!
//! Plain text, one command per line, no header, no escaping. [`save`]
//! writes the entries verbatim; [`read_command_file`] returns a file's
//! lines in order with their terminators preserved.
//!
//! [`save`]: History::save
//! [`read_command_file`]: read_command_file

use std::fs;
use std::io;
use std::path::Path;

/// Ordered log of accepted command lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    entries: Vec<String>,
}

impl History {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the log is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in acceptance order.
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Append an accepted line.
    ///
    /// The stored entry always carries a trailing newline; a line arriving
    /// without one (last line of a file, EOF-terminated input) gains it
    /// here so replay and persistence stay uniform.
    pub fn push(&mut self, line: impl Into<String>) {
        let mut entry = line.into();
        if !entry.ends_with('\n') {
            entry.push('\n');
        }
        self.entries.push(entry);
    }

    /// Remove and return the most recent entry.
    pub fn pop_last(&mut self) -> Option<String> {
        self.entries.pop()
    }

    /// All entries except the most recent, in order.
    ///
    /// This is the replay operand for undo. The iterator borrows the log;
    /// callers that need to mutate the history while replaying collect it
    /// first.
    pub fn all_but_last(&self) -> impl Iterator<Item = &str> {
        let keep = self.entries.len().saturating_sub(1);
        self.entries[..keep].iter().map(String::as_str)
    }

    /// Write every entry verbatim, in order, to `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, self.entries.concat())
    }
}

/// Read a history file as an ordered sequence of lines, terminators
/// preserved.
pub fn read_command_file(path: impl AsRef<Path>) -> io::Result<Vec<String>> {
    let text = fs::read_to_string(path)?;
    Ok(text.split_inclusive('\n').map(str::to_string).collect())
}
