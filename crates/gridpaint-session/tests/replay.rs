#![forbid(unsafe_code)]

//! Cross-module scenarios: persistence round-trips and replay determinism.

use gridpaint_render::canvas::Canvas;
use gridpaint_session::{History, Outcome, interpret};
use tempfile::TempDir;

fn fresh(w: u16, h: u16) -> (History, Canvas) {
    (History::new(), Canvas::new(w, h, '*').unwrap())
}

/// Drive lines the way the REPL does: interpret, record Normal outcomes.
fn run(lines: &[&str], history: &mut History, canvas: &mut Canvas) {
    for line in lines {
        let reply = interpret(line, history, canvas);
        if reply.outcome == Outcome::Normal {
            history.push(*line);
        }
    }
}

fn glyph_grid(canvas: &Canvas) -> Vec<String> {
    (0..canvas.height()).map(|y| canvas.row_glyphs(y)).collect()
}

#[test]
fn save_load_roundtrip_rebuilds_canvas_and_log() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("drawing.txt");
    let path_str = path.to_str().unwrap();

    let commands = [
        "chpen #\n",
        "rect 0 0 5 5\n",
        "chcolor cyan\n",
        "fill 2 2\n",
        "erase 2 2\n",
    ];

    let (mut history, mut canvas) = fresh(5, 5);
    run(&commands, &mut history, &mut canvas);
    let save = interpret(&format!("save {path_str}\n"), &mut history, &mut canvas);
    assert_eq!(save.outcome, Outcome::Command);

    let (mut history2, mut canvas2) = fresh(5, 5);
    let load = interpret(&format!("load {path_str}\n"), &mut history2, &mut canvas2);
    assert_eq!(load.outcome, Outcome::Command);

    assert_eq!(history2.entries(), history.entries());
    assert_eq!(glyph_grid(&canvas2), glyph_grid(&canvas));
    assert_eq!(canvas2.cells(), canvas.cells());
    assert_eq!(canvas2.pen(), '#');
    assert_eq!(canvas2.color_name(), "cyan");
}

#[test]
fn load_missing_file_is_error_and_mutates_nothing() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("absent.txt");
    let (mut history, mut canvas) = fresh(4, 4);
    let reply = interpret(
        &format!("load {}\n", missing.display()),
        &mut history,
        &mut canvas,
    );
    assert_eq!(reply.outcome, Outcome::Error);
    assert!(history.is_empty());
    assert!(canvas.cells().iter().all(|c| c.is_blank()));
}

#[test]
fn load_stops_at_quit_line() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("partial.txt");
    std::fs::write(&path, "line 0 0 3 0\nquit\nline 0 2 3 2\n").unwrap();

    let (mut history, mut canvas) = fresh(4, 4);
    let reply = interpret(
        &format!("load {}\n", path.display()),
        &mut history,
        &mut canvas,
    );
    assert_eq!(reply.outcome, Outcome::Command);
    assert_eq!(history.entries(), ["line 0 0 3 0\n"]);
    assert_eq!(canvas.row_glyphs(0), "****");
    assert_eq!(canvas.row_glyphs(2), "    ");
}

#[test]
fn load_skips_junk_lines_but_keeps_going() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mixed.txt");
    std::fs::write(&path, "line 0 0 3 0\nnonsense here\nline 0 2 3 2\n").unwrap();

    let (mut history, mut canvas) = fresh(4, 4);
    interpret(
        &format!("load {}\n", path.display()),
        &mut history,
        &mut canvas,
    );
    assert_eq!(history.entries(), ["line 0 0 3 0\n", "line 0 2 3 2\n"]);
    assert_eq!(canvas.row_glyphs(2), "****");
}

#[test]
fn undo_matches_replaying_shorter_log() {
    let commands = [
        "chpen o\n",
        "circle 3 3 3\n",
        "chcolor red\n",
        "line 0 0 6 6\n",
        "fill 3 3\n",
    ];

    // Session A: run everything, then undo once.
    let (mut history_a, mut canvas_a) = fresh(7, 7);
    run(&commands, &mut history_a, &mut canvas_a);
    interpret("undo\n", &mut history_a, &mut canvas_a);

    // Session B: run everything except the last command.
    let (mut history_b, mut canvas_b) = fresh(7, 7);
    run(&commands[..commands.len() - 1], &mut history_b, &mut canvas_b);

    assert_eq!(history_a.entries(), history_b.entries());
    assert_eq!(canvas_a.cells(), canvas_b.cells());
}

#[test]
fn repeated_undo_walks_back_to_empty() {
    let commands = ["line 0 0 2 2\n", "rect 0 0 3 3\n", "fill 1 1\n"];
    let (mut history, mut canvas) = fresh(3, 3);
    run(&commands, &mut history, &mut canvas);

    for _ in 0..commands.len() {
        interpret("undo\n", &mut history, &mut canvas);
    }
    assert!(history.is_empty());
    assert!(canvas.cells().iter().all(|c| c.is_blank()));

    // One more than recorded: still a harmless no-op.
    let reply = interpret("undo\n", &mut history, &mut canvas);
    assert_eq!(reply.outcome, Outcome::Command);
    assert!(history.is_empty());
}

#[test]
fn extreme_coordinates_draw_without_panicking() {
    let (mut history, mut canvas) = fresh(5, 4);
    let commands = [
        "line 1 0 -2147483648 0\n",
        "line 0 0 2147483647 0\n",
        "rect -2147483648 -2147483648 2147483647 2147483647\n",
        "circle 0 -2147483648 2147483647\n",
        "fill 2147483647 2147483647\n",
    ];
    for command in commands {
        let reply = interpret(command, &mut history, &mut canvas);
        assert_eq!(reply.outcome, Outcome::Normal, "rejected: {command}");
    }
    // The second line covers the top row; everything else clips entirely.
    assert_eq!(canvas.row_glyphs(0), "*****");
}

#[test]
fn replayed_log_reproduces_canvas_exactly() {
    let commands = [
        "rect 1 1 6 4\n",
        "chpen +\n",
        "line 0 5 7 0\n",
        "chcolor blue\n",
        "fill 3 2\n",
        "erase 4 2\n",
    ];

    let (mut history, mut canvas) = fresh(8, 6);
    run(&commands, &mut history, &mut canvas);

    // Rebuild purely from the recorded entries.
    let entries: Vec<String> = history.entries().to_vec();
    let (mut history2, mut canvas2) = fresh(8, 6);
    for entry in &entries {
        let reply = interpret(entry, &mut history2, &mut canvas2);
        assert_eq!(reply.outcome, Outcome::Normal);
        history2.push(entry.clone());
    }
    assert_eq!(canvas2.cells(), canvas.cells());
    assert_eq!(history2.entries(), history.entries());
}
