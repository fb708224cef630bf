#![forbid(unsafe_code)]

//! The command interpreter.
//!
//! [`interpret`] is a pure parse-and-dispatch function: one input line in,
//! one [`Reply`] out. It validates arguments before mutating anything, so
//! a rejected command leaves both canvas and history exactly as they were.
//!
//! The caller (the REPL loop, or `load`/`undo` replaying recorded lines)
//! owns the recording rule: only [`Outcome::Normal`] lines are pushed into
//! the history. Meta commands, rejects, and unknown verbs are never
//! recorded, which keeps the log exactly replayable.
//!
//! `load` and `undo` re-enter `interpret` by plain synchronous recursion;
//! replay order is file/log order, strictly sequential.

use std::path::Path;

use gridpaint_render::canvas::Canvas;
use gridpaint_render::cell::{PaintColor, is_single_width};
use gridpaint_render::drawing::Draw;

use crate::history::{self, History};

/// History file used when `save`/`load` get no explicit path.
pub const DEFAULT_HISTORY_FILE: &str = "history.txt";

/// Classification of one interpreted line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// `quit`: unwind the session.
    Exit,
    /// A drawing/state mutation that belongs in the history.
    Normal,
    /// A meta operation (`save`, `load`, `undo`): executed, never recorded.
    Command,
    /// Unrecognized verb; no state change.
    Unknown,
    /// Rejected input (bad arguments, out-of-range erase, unreadable
    /// load file); no state change.
    Error,
}

/// Outcome of a line plus the one-line status the REPL shows for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// How the line was classified.
    pub outcome: Outcome,
    /// Transient status line, if any.
    pub message: Option<String>,
}

impl Reply {
    fn normal(message: impl Into<String>) -> Self {
        Self {
            outcome: Outcome::Normal,
            message: Some(message.into()),
        }
    }

    fn command(message: impl Into<String>) -> Self {
        Self {
            outcome: Outcome::Command,
            message: Some(message.into()),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            outcome: Outcome::Error,
            message: Some(message.into()),
        }
    }
}

/// Parse the leading `N` arguments as integers.
///
/// Extra trailing tokens are ignored, matching the tokenizer's forgiving
/// behavior for everything after the expected arguments.
fn parse_ints<const N: usize>(args: &[&str]) -> Result<[i32; N], String> {
    if args.len() < N {
        return Err(format!("expected {N} integer arguments, got {}", args.len()));
    }
    let mut out = [0i32; N];
    for (slot, tok) in out.iter_mut().zip(args) {
        *slot = tok
            .parse()
            .map_err(|_| format!("non-integer argument: {tok}"))?;
    }
    Ok(out)
}

/// Interpret one line of input against the session state.
///
/// The line may arrive with or without its terminator; recorded entries
/// keep theirs, interactive reads usually have one.
pub fn interpret(line: &str, history: &mut History, canvas: &mut Canvas) -> Reply {
    let trimmed = line.strip_suffix('\n').unwrap_or(line);
    let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
    let mut tokens = trimmed.split_whitespace();
    let Some(verb) = tokens.next() else {
        // Blank input: harmless, invisible, never recorded.
        return Reply {
            outcome: Outcome::Unknown,
            message: None,
        };
    };
    let args: Vec<&str> = tokens.collect();

    #[cfg(feature = "tracing")]
    tracing::debug!(verb, argc = args.len(), "dispatch");

    match verb {
        "line" => match parse_ints::<4>(&args) {
            Ok([x0, y0, x1, y1]) => {
                canvas.draw_line(x0, y0, x1, y1);
                Reply::normal("1 line drawn")
            }
            Err(msg) => Reply::error(msg),
        },
        "rect" => match parse_ints::<4>(&args) {
            Ok([x0, y0, w, h]) => {
                canvas.draw_rect(x0, y0, w, h);
                Reply::normal("1 rectangle drawn")
            }
            Err(msg) => Reply::error(msg),
        },
        "circle" => match parse_ints::<3>(&args) {
            Ok([x0, y0, r]) => {
                canvas.draw_circle(x0, y0, r);
                Reply::normal("1 circle drawn")
            }
            Err(msg) => Reply::error(msg),
        },
        "fill" => match parse_ints::<2>(&args) {
            Ok([x0, y0]) => {
                canvas.flood_fill(x0, y0);
                Reply::normal(format!("filled from ({x0}, {y0})"))
            }
            Err(msg) => Reply::error(msg),
        },
        "erase" => match parse_ints::<2>(&args) {
            Ok([x, y]) => match canvas.erase(x, y) {
                Ok(()) => Reply::normal(format!("erased ({x}, {y})")),
                Err(err) => Reply::error(err.to_string()),
            },
            Err(msg) => Reply::error(msg),
        },
        "chpen" => {
            let Some(tok) = args.first() else {
                return Reply::error("chpen needs a pen character");
            };
            let mut chars = tok.chars();
            match (chars.next(), chars.next()) {
                (Some(glyph), None) if is_single_width(glyph) => {
                    let past = canvas.pen();
                    canvas.set_pen(glyph);
                    Reply::normal(format!("pen changed: {past} -> {glyph}"))
                }
                _ => Reply::error(format!("not a single printable character: {tok}")),
            }
        }
        "chcolor" => {
            let Some(name) = args.first() else {
                return Reply::error("chcolor needs a color name");
            };
            // Soft validation: the name is stored either way and simply
            // renders as the default foreground when unrecognized.
            canvas.set_color_name(*name);
            match PaintColor::from_name(name) {
                Some(color) => Reply::normal(format!("color changed to {}", color.name())),
                None => Reply::normal(format!("color not registered: {name}")),
            }
        }
        "save" => {
            let path = args.first().copied().unwrap_or(DEFAULT_HISTORY_FILE);
            match history.save(Path::new(path)) {
                Ok(()) => Reply::command(format!("saved as \"{path}\"")),
                Err(err) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(path, %err, "history save failed");
                    Reply::command(format!("cannot open \"{path}\": {err}"))
                }
            }
        }
        "load" => {
            let path = args.first().copied().unwrap_or(DEFAULT_HISTORY_FILE);
            let lines = match history::read_command_file(Path::new(path)) {
                Ok(lines) => lines,
                Err(err) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(path, %err, "history load failed");
                    return Reply::error(format!("cannot open \"{path}\": {err}"));
                }
            };
            for raw in lines {
                let reply = interpret(&raw, history, canvas);
                match reply.outcome {
                    Outcome::Exit => break,
                    Outcome::Normal => history.push(raw),
                    _ => {}
                }
            }
            Reply::command(format!("\"{path}\" loaded"))
        }
        "undo" => {
            canvas.reset();
            // Replay needs `&mut History` for the recursive call, so the
            // surviving entries are collected up front. Recorded entries
            // are all Normal and never touch the log during replay.
            let replay: Vec<String> = history.all_but_last().map(str::to_owned).collect();
            for entry in &replay {
                let _ = interpret(entry, history, canvas);
            }
            history.pop_last();
            Reply::command("undo one operation")
        }
        "reset" => {
            canvas.reset();
            Reply::normal("reset completed")
        }
        "quit" => Reply {
            outcome: Outcome::Exit,
            message: None,
        },
        other => Reply {
            outcome: Outcome::Unknown,
            message: Some(format!("unknown command: {other}")),
        },
    }
}
