#![forbid(unsafe_code)]

//! gridpaint: an interactive terminal raster-painting REPL.

mod cli;
mod repl;

use std::io;
use std::process;

use gridpaint_render::canvas::Canvas;
use gridpaint_session::History;
use tracing_subscriber::EnvFilter;

fn main() {
    // Diagnostics go to stderr; stdout belongs to the canvas frame.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let opts = cli::Opts::parse();
    let mut canvas = match Canvas::new(opts.width, opts.height, repl::DEFAULT_PEN) {
        Ok(canvas) => canvas,
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    };
    let mut history = History::new();

    tracing::debug!(width = opts.width, height = opts.height, "session start");

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(err) = repl::run(stdin.lock(), stdout.lock(), &mut canvas, &mut history) {
        eprintln!("terminal i/o failed: {err}");
        process::exit(1);
    }
}
