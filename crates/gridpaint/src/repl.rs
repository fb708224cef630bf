#![forbid(unsafe_code)]

//! The interactive driving loop.
//!
//! Owns the draw/prompt/read/interpret cycle and the recording rule: lines
//! the interpreter classifies `Normal` go into the history, everything
//! else does not. The loop is generic over its reader and writer so tests
//! can drive it with in-memory buffers.
//!
//! Screen handling mirrors a fixed choreography per iteration: draw the
//! full frame, prompt, read, show the transient status line, then rewind
//! the cursor to the frame's top so the next iteration paints over it. On
//! exit the display is cleared.

use std::io::{self, BufRead, Write};

use gridpaint_render::ansi;
use gridpaint_render::canvas::Canvas;
use gridpaint_render::presenter::Presenter;
use gridpaint_session::{History, Outcome, interpret};

/// Pen glyph every session starts with.
pub const DEFAULT_PEN: char = '*';

/// Run the session loop until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(
    mut input: R,
    output: W,
    canvas: &mut Canvas,
    history: &mut History,
) -> io::Result<()> {
    let mut presenter = Presenter::new(output);
    let frame_height = Presenter::<W>::frame_height(canvas);
    let mut line = String::new();
    let mut count: u64 = 0;

    writeln!(presenter.writer_mut())?;
    loop {
        count += 1;
        presenter.draw(canvas)?;
        write!(presenter.writer_mut(), "{count} > ")?;
        presenter.writer_mut().flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            // End of input behaves like quit.
            break;
        }

        let reply = interpret(&line, history, canvas);
        match reply.outcome {
            Outcome::Exit => break,
            Outcome::Normal => history.push(line.as_str()),
            _ => {}
        }

        let out = presenter.writer_mut();
        // Status line: erased first so a shorter message never shows the
        // tail of the previous one.
        ansi::erase_line(out)?;
        writeln!(out, "{}", reply.message.as_deref().unwrap_or(""))?;
        // Rewind over the status line and the prompt, blank the prompt
        // row, then return to the top of the frame.
        ansi::cursor_up(out, 2)?;
        ansi::erase_line(out)?;
        ansi::cursor_up(out, frame_height)?;
    }

    ansi::erase_display(presenter.writer_mut())?;
    presenter.writer_mut().flush()
}
