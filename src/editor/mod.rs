//! Editor state machine and interaction loop.
//!
//! [`EditorState`] owns the text buffer, cursor and mode; [`EditorState::dispatch`]
//! is the only place they change. [`Editor`] drives the loop over a
//! [`Surface`]: render, block on input, dispatch, repeat.

mod cursor;
mod mode;
mod render;

pub use cursor::{Cursor, Viewport, clamp};
pub use mode::Mode;
pub use render::{DEFAULT_FILLER, RenderOptions, render, status_line};

use crate::ansi::FrameBuffer;
use crate::error::Result;
use crate::event::{LogLevel, emit_event, emit_log};
use crate::input::Command;
use crate::terminal::Surface;
use crate::text::TextBuffer;

/// Largest chunk read from the terminal in one go.
pub const INPUT_CHUNK: usize = 64;

/// Text buffer, cursor and mode of one editing session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditorState {
    buffer: TextBuffer,
    cursor: Cursor,
    mode: Mode,
}

impl EditorState {
    /// Start in control mode at (1, 1).
    #[must_use]
    pub fn new(buffer: TextBuffer) -> Self {
        Self {
            buffer,
            cursor: Cursor::default(),
            mode: Mode::default(),
        }
    }

    /// Builder-style override of the starting mode.
    #[must_use]
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    #[must_use]
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Place the cursor, clamped to the buffer and viewport.
    pub fn set_cursor(&mut self, cursor: Cursor, viewport: Viewport) {
        self.cursor = clamp(cursor, &self.buffer, viewport);
    }

    /// Switch mode, announcing the transition through the event hook.
    pub fn set_mode(&mut self, mode: Mode) {
        if self.mode == mode {
            return;
        }
        emit_log(
            LogLevel::Debug,
            &format!("mode {} -> {}", self.mode, mode),
        );
        self.mode = mode;
        emit_event("mode", mode.name());
    }

    /// Interpret one input chunk and apply it.
    ///
    /// The cursor is clamped against `viewport` both before and after the
    /// command runs: the terminal may have been resized since the previous
    /// dispatch.
    pub fn dispatch(&mut self, input: &[u8], viewport: Viewport) -> Result<()> {
        self.cursor = clamp(self.cursor, &self.buffer, viewport);
        let command = Command::decode(self.mode, input);
        if command == Command::Ignore {
            if let Some(byte) = input.first() {
                emit_log(
                    LogLevel::Debug,
                    &format!("ignored byte 0x{byte:02x} in {} mode", self.mode),
                );
            }
        }
        self.apply(command)?;
        self.cursor = clamp(self.cursor, &self.buffer, viewport);
        debug_assert!(self.cursor.is_valid(&self.buffer, viewport));
        Ok(())
    }

    fn apply(&mut self, command: Command<'_>) -> Result<()> {
        let Cursor { line, column } = self.cursor;
        match command {
            Command::MoveUp => self.cursor.line = line.saturating_sub(1),
            Command::MoveDown => self.cursor.line = line.saturating_add(1),
            Command::MoveLeft => self.cursor.column = column.saturating_sub(1),
            Command::MoveRight => self.cursor.column = column.saturating_add(1),
            Command::EnterInsert | Command::ExitInsert => {
                if let Some(mode) = command.target_mode() {
                    self.set_mode(mode);
                }
            }
            Command::Insert(text) => {
                self.buffer.insert(line, column, text)?;
                self.cursor.column = column.saturating_add(text.len());
                emit_log(
                    LogLevel::Debug,
                    &format!("insert {} bytes at {line}:{column}", text.len()),
                );
            }
            Command::Ignore => {}
        }
        Ok(())
    }
}

/// The interactive loop over a terminal surface.
pub struct Editor<S: Surface> {
    surface: S,
    state: EditorState,
    options: RenderOptions,
    frame: FrameBuffer,
    input: [u8; INPUT_CHUNK],
}

impl<S: Surface> Editor<S> {
    /// Create an editor drawing `state` onto `surface`.
    pub fn new(surface: S, state: EditorState, options: RenderOptions) -> Self {
        Self {
            surface,
            state,
            options,
            frame: FrameBuffer::new(),
            input: [0; INPUT_CHUNK],
        }
    }

    #[must_use]
    pub fn state(&self) -> &EditorState {
        &self.state
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Give back the surface, dropping the editor state.
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Draw the current state and push it to the surface in one write.
    pub fn render(&mut self) -> Result<()> {
        let viewport = self.surface.size()?;
        self.frame.reset();
        render(&self.state, viewport, &self.options, &mut self.frame);
        self.surface.write(self.frame.buffer())?;
        self.frame.reset();
        Ok(())
    }

    /// One loop iteration: render, block for input, dispatch.
    pub fn step(&mut self) -> Result<()> {
        self.render()?;
        let n = self.surface.read_input(&mut self.input)?;
        let viewport = self.surface.size()?;
        self.state.dispatch(&self.input[..n.min(INPUT_CHUNK)], viewport)
    }

    /// Run until the first error. Only an error ends the loop.
    pub fn run(&mut self) -> Result<()> {
        self.run_loop()
            .inspect_err(|e| emit_log(LogLevel::Error, &e.to_string()))
    }

    fn run_loop(&mut self) -> Result<()> {
        let viewport = self.surface.size()?;
        emit_log(
            LogLevel::Info,
            &format!(
                "editor started ({}x{}, {} lines)",
                viewport.width(),
                viewport.height(),
                self.state.buffer().line_count()
            ),
        );
        loop {
            self.step()?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, SurfaceError};
    use std::collections::VecDeque;

    const VP: Viewport = Viewport::new(80, 24);

    fn sample() -> EditorState {
        EditorState::new(TextBuffer::from_text("\nhello\nworld"))
    }

    #[test]
    fn test_initial_state() {
        let st = sample();
        assert_eq!(st.mode(), Mode::Control);
        assert_eq!(st.cursor(), Cursor::new(1, 1));
    }

    #[test]
    fn test_scenario_move_insert_escape() {
        let mut st = sample();

        st.dispatch(b"j", VP).unwrap();
        assert_eq!(st.cursor(), Cursor::new(2, 1));

        st.dispatch(b"i", VP).unwrap();
        assert_eq!(st.mode(), Mode::Insert);
        assert_eq!(st.buffer().line(2), Some(&b"hello"[..]));

        st.dispatch(b"X", VP).unwrap();
        assert_eq!(st.buffer().line(2), Some(&b"Xhello"[..]));
        assert_eq!(st.cursor(), Cursor::new(2, 2));

        st.dispatch(b"\x1b", VP).unwrap();
        assert_eq!(st.mode(), Mode::Control);
        assert_eq!(st.cursor(), Cursor::new(2, 2));
    }

    #[test]
    fn test_scenario_multi_byte_insert() {
        let mut st = EditorState::new(TextBuffer::new()).with_mode(Mode::Insert);
        st.dispatch(b"hi", VP).unwrap();
        assert_eq!(st.buffer().line(1), Some(&b"hi"[..]));
        assert_eq!(st.cursor(), Cursor::new(1, 3));
    }

    #[test]
    fn test_boundary_moves_are_noops() {
        let mut st = sample();
        st.dispatch(b"k", VP).unwrap();
        st.dispatch(b"h", VP).unwrap();
        assert_eq!(st.cursor(), Cursor::new(1, 1));

        st.set_cursor(Cursor::new(3, 6), VP);
        assert_eq!(st.cursor(), Cursor::new(3, 6));
        st.dispatch(b"j", VP).unwrap();
        st.dispatch(b"l", VP).unwrap();
        assert_eq!(st.cursor(), Cursor::new(3, 6));
    }

    #[test]
    fn test_vertical_move_clamps_column() {
        let mut st = sample();
        st.set_cursor(Cursor::new(2, 6), VP);
        st.dispatch(b"k", VP).unwrap();
        assert_eq!(st.cursor(), Cursor::new(1, 1));
    }

    #[test]
    fn test_only_mode_keys_change_mode() {
        let mut st = sample();
        for byte in 0u8..=255 {
            if byte == b'i' {
                continue;
            }
            st.dispatch(&[byte], VP).unwrap();
            assert_eq!(st.mode(), Mode::Control, "byte 0x{byte:02x}");
        }

        let mut st = sample().with_mode(Mode::Insert);
        for byte in 0u8..=255 {
            if byte == 0x1b {
                continue;
            }
            st.dispatch(&[byte], VP).unwrap();
            assert_eq!(st.mode(), Mode::Insert, "byte 0x{byte:02x}");
        }
    }

    #[test]
    fn test_insert_cursor_clamped_to_width() {
        let narrow = Viewport::new(4, 24);
        let mut st = EditorState::new(TextBuffer::new()).with_mode(Mode::Insert);
        st.dispatch(b"abcdef", narrow).unwrap();
        assert_eq!(st.buffer().line(1), Some(&b"abcdef"[..]));
        assert_eq!(st.cursor(), Cursor::new(1, 4));
    }

    #[test]
    fn test_resize_reclamps_before_command() {
        let mut st = EditorState::new(TextBuffer::from_text("1\n2\n3\n4\n5"));
        st.set_cursor(Cursor::new(5, 2), VP);
        // Shrink to three text rows; an ignored key still re-clamps.
        st.dispatch(b"z", Viewport::new(80, 4)).unwrap();
        assert_eq!(st.cursor(), Cursor::new(3, 2));
    }

    #[test]
    fn test_empty_input_changes_nothing() {
        let mut st = sample();
        let before = st.clone();
        st.dispatch(b"", VP).unwrap();
        assert_eq!(st, before);
    }

    /// Surface fed from a script of reads.
    struct ScriptedSurface {
        viewport: Viewport,
        reads: VecDeque<Vec<u8>>,
        writes: Vec<Vec<u8>>,
        size_fails: bool,
    }

    impl ScriptedSurface {
        fn new(reads: &[&[u8]]) -> Self {
            Self {
                viewport: VP,
                reads: reads.iter().map(|r| r.to_vec()).collect(),
                writes: Vec::new(),
                size_fails: false,
            }
        }
    }

    impl Surface for ScriptedSurface {
        fn size(&self) -> std::result::Result<Viewport, SurfaceError> {
            if self.size_fails {
                return Err(SurfaceError::Size(std::io::Error::other("no size")));
            }
            Ok(self.viewport)
        }

        fn read_input(&mut self, buf: &mut [u8]) -> std::result::Result<usize, SurfaceError> {
            let chunk = self.reads.pop_front().ok_or(SurfaceError::InputClosed)?;
            buf[..chunk.len()].copy_from_slice(&chunk);
            Ok(chunk.len())
        }

        fn write(&mut self, bytes: &[u8]) -> std::result::Result<(), SurfaceError> {
            self.writes.push(bytes.to_vec());
            Ok(())
        }
    }

    #[test]
    fn test_step_renders_once_per_iteration() {
        let surface = ScriptedSurface::new(&[b"j", b"i"]);
        let mut editor = Editor::new(surface, sample(), RenderOptions::default());

        editor.step().unwrap();
        editor.step().unwrap();
        assert_eq!(editor.surface().writes.len(), 2);
        assert_eq!(editor.state().mode(), Mode::Insert);
        assert_eq!(editor.state().cursor(), Cursor::new(2, 1));

        let first = &editor.surface().writes[0];
        assert!(first.starts_with(b"\x1b[2J"));
        assert!(first.ends_with(b"\x1b[1;1H"));
    }

    #[test]
    fn test_run_stops_on_closed_input() {
        let surface = ScriptedSurface::new(&[b"i", b"ok"]);
        let mut editor = Editor::new(surface, sample(), RenderOptions::default());

        let err = editor.run().unwrap_err();
        assert!(matches!(err, Error::Surface(SurfaceError::InputClosed)));
        assert_eq!(editor.state().buffer().line(1), Some(&b"ok"[..]));
        // A frame is drawn before every read, including the failing one.
        assert_eq!(editor.into_surface().writes.len(), 3);
    }

    #[test]
    fn test_render_writes_whole_frame_once() {
        let surface = ScriptedSurface::new(&[]);
        let mut editor = Editor::new(surface, sample(), RenderOptions::default());

        editor.render().unwrap();
        assert!(editor.frame.is_empty());
        let writes = &editor.surface().writes;
        assert_eq!(writes.len(), 1);
        assert!(writes[0].starts_with(b"\x1b[2J"));
        assert!(writes[0].ends_with(b"\x1b[1;1H"));
    }

    #[test]
    fn test_run_fails_when_size_unavailable() {
        let mut surface = ScriptedSurface::new(&[b"j"]);
        surface.size_fails = true;
        let mut editor = Editor::new(surface, sample(), RenderOptions::default());

        let err = editor.run().unwrap_err();
        assert!(matches!(err, Error::Surface(SurfaceError::Size(_))));
        assert!(editor.surface().writes.is_empty());
        assert_eq!(editor.state().cursor(), Cursor::new(1, 1));
    }
}
