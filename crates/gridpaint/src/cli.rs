#![forbid(unsafe_code)]

//! Command-line argument parsing.
//!
//! Parses args manually (no external dependencies) to keep the binary
//! lean. Two required positionals: canvas width and height, both positive
//! integers. Anything else prints usage to stderr and exits nonzero before
//! any session state exists.

use std::env;
use std::process;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
gridpaint — interactive terminal raster painting

USAGE:
    gridpaint <width> <height>

ARGUMENTS:
    <width>    Canvas width in cells (positive integer)
    <height>   Canvas height in cells (positive integer)

OPTIONS:
    --help, -h       Show this help message
    --version, -V    Show version

COMMANDS (at the prompt):
    line x0 y0 x1 y1    Draw a line between two points
    rect x0 y0 w h      Draw a rectangle outline
    circle x0 y0 r      Draw a circle of radius r
    fill x0 y0          Flood-fill the region around a point
    erase x0 y0         Clear one cell
    chpen c             Change the pen character
    chcolor name        Change the pen color (red, green, yellow,
                        blue, magenta, cyan)
    save [file]         Save the command history (default history.txt)
    load [file]         Replay a saved command history
    undo                Undo the last drawing command
    reset               Clear the canvas
    quit                Exit

ENVIRONMENT VARIABLES:
    RUST_LOG    Log filter for diagnostics on stderr (e.g. debug)";

/// Parsed command-line options.
pub struct Opts {
    /// Canvas width in cells.
    pub width: u16,
    /// Canvas height in cells.
    pub height: u16,
}

impl Opts {
    /// Parse command-line arguments, exiting on `--help`, `--version`, or
    /// invalid input.
    pub fn parse() -> Self {
        let args: Vec<String> = env::args().skip(1).collect();
        let mut positionals = Vec::new();

        for arg in &args {
            match arg.as_str() {
                "--help" | "-h" => {
                    println!("{HELP_TEXT}");
                    process::exit(0);
                }
                "--version" | "-V" => {
                    println!("gridpaint {VERSION}");
                    process::exit(0);
                }
                other => positionals.push(other),
            }
        }

        if positionals.len() != 2 {
            eprintln!("usage: gridpaint <width> <height>");
            process::exit(1);
        }

        let width = parse_dimension(positionals[0], "width");
        let height = parse_dimension(positionals[1], "height");
        Self { width, height }
    }
}

fn parse_dimension(token: &str, name: &str) -> u16 {
    match check_dimension(token) {
        Ok(n) => n,
        Err(reason) => {
            eprintln!("{token}: {name} {reason}");
            eprintln!("usage: gridpaint <width> <height>");
            process::exit(1);
        }
    }
}

/// Validate one dimension token, separating "too big" from "not a
/// positive integer" so the error message names the actual problem.
fn check_dimension(token: &str) -> Result<u16, &'static str> {
    match token.parse::<u64>() {
        Ok(n) if n > u64::from(u16::MAX) => Err("too large, max 65535"),
        Ok(n) if n > 0 => Ok(n as u16),
        _ => Err("must be a positive integer"),
    }
}
