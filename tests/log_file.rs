//! Log file and event hook behavior across a whole session.
//!
//! The hooks are process-wide, so this binary holds a single test.

mod fixtures;

use fixtures::MockSurface;
use modal_edit::{
    Editor, EditorState, RenderOptions, TextBuffer, clear_event_callback, clear_log_callback,
    set_event_callback, set_log_file,
};
use std::fs;
use std::sync::{Arc, Mutex};

#[test]
fn test_session_logs_and_mode_events() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("medit.log");
    fs::write(&path, "[INFO] previous session\n").unwrap();

    set_log_file(&path).expect("log file should open");

    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    set_event_callback(move |name, data| {
        sink.lock().unwrap().push(format!("{name}={data}"));
    });

    let surface = MockSurface::new(80, 24).with_keys(b"qiA\x1bi");
    let mut editor = Editor::new(
        surface,
        EditorState::new(TextBuffer::from_text("text")),
        RenderOptions::default(),
    );
    let err = editor.run().unwrap_err();

    clear_log_callback();
    clear_event_callback();

    assert_eq!(
        *events.lock().unwrap(),
        vec!["mode=insert", "mode=control", "mode=insert"]
    );

    let log = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = log.lines().collect();

    // Appended, not truncated.
    assert_eq!(lines[0], "[INFO] previous session");
    assert_eq!(lines[1], "[INFO] editor started (80x24, 1 lines)");
    assert!(lines.contains(&"[DEBUG] ignored byte 0x71 in control mode"));
    assert!(lines.contains(&"[DEBUG] mode control -> insert"));
    assert!(lines.contains(&"[DEBUG] insert 1 bytes at 1:1"));
    assert!(lines.contains(&"[DEBUG] mode insert -> control"));
    assert_eq!(lines.last().copied(), Some(format!("[ERROR] {err}").as_str()));
}
