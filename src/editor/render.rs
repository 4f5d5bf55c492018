//! Render engine: editor state to frame primitives.
//!
//! A pass always has the same shape:
//!
//! 1. erase the screen
//! 2. one row per text row: move, erase to end of line, then the buffer line
//!    (truncated to the viewport width) or the filler glyph past the end
//! 3. the status line on the last row
//! 4. the cursor placed at the editor cursor, clamped to the viewport
//!
//! Rendering only reads the state. Encoding and flushing belong to the
//! [`FrameWriter`] and the caller.

use crate::ansi::FrameWriter;
use crate::editor::{Cursor, EditorState, Mode, Viewport, clamp};

/// Glyph marking rows past the end of the buffer.
pub const DEFAULT_FILLER: u8 = b'~';

/// Presentation settings for the render engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    /// Byte drawn on rows with no buffer content.
    pub filler: u8,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            filler: DEFAULT_FILLER,
        }
    }
}

/// Status line text: mode name and cursor position.
#[must_use]
pub fn status_line(state: &EditorState) -> String {
    status_text(state.mode(), state.cursor())
}

fn status_text(mode: Mode, cursor: Cursor) -> String {
    format!("mode: {mode} -- {}:{}", cursor.line, cursor.column)
}

/// Draw one full frame of `state` into `frame`.
///
/// The cursor shown on screen and in the status line is the state's cursor
/// clamped to `viewport`; the state itself is left as is.
pub fn render<W: FrameWriter>(
    state: &EditorState,
    viewport: Viewport,
    options: &RenderOptions,
    frame: &mut W,
) {
    let width = usize::from(viewport.width());
    let status_row = viewport.status_row();
    let cursor = clamp(state.cursor(), state.buffer(), viewport);

    frame.erase_screen();

    let mut lines = state.buffer().lines();
    for row in 1..status_row {
        frame.move_cursor(u32::from(row), 1);
        frame.erase_line();
        match lines.next() {
            Some(text) => {
                let visible = &text[..text.len().min(width)];
                if !visible.is_empty() {
                    frame.write_text(visible);
                }
            }
            None => frame.write_text(&[options.filler]),
        }
    }

    let status = status_text(state.mode(), cursor);
    frame.move_cursor(u32::from(status_row), 1);
    frame.erase_line();
    frame.write_text(&status.as_bytes()[..status.len().min(width)]);

    frame.move_cursor(
        u32::try_from(cursor.line).unwrap_or(u32::MAX),
        u32::try_from(cursor.column).unwrap_or(u32::MAX),
    );
}
