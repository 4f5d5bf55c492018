//! Frame output builders.
//!
//! The render engine never formats escape sequences itself. It talks to a
//! [`FrameWriter`], which has one method per screen primitive. [`FrameBuffer`]
//! turns those calls into bytes for the terminal; [`FrameRecorder`] keeps them
//! as [`FrameOp`]s so rendering can be checked without a terminal.

use crate::ansi::{self, sequences};

/// Screen primitives a render pass is built from.
///
/// Coordinates are 1-based (row 1, column 1 is the top-left cell).
pub trait FrameWriter {
    /// Erase the whole screen.
    fn erase_screen(&mut self);

    /// Move the terminal cursor to an absolute position.
    fn move_cursor(&mut self, row: u32, col: u32);

    /// Erase from the cursor to the end of the current row.
    fn erase_line(&mut self);

    /// Write text at the cursor position.
    fn write_text(&mut self, text: &[u8]);
}

/// Byte accumulator for one render pass.
///
/// Everything appended between two resets is handed to the terminal in a
/// single write.
#[derive(Clone, Debug, Default)]
pub struct FrameBuffer {
    buffer: Vec<u8>,
}

impl FrameBuffer {
    /// Create an empty frame buffer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            buffer: Vec::with_capacity(4096),
        }
    }

    /// Discard everything accumulated so far.
    pub fn reset(&mut self) {
        self.buffer.clear();
    }

    /// Get a reference to the buffer.
    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    /// Number of bytes accumulated.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Whether nothing has been accumulated since the last reset.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

impl FrameWriter for FrameBuffer {
    fn erase_screen(&mut self) {
        self.buffer
            .extend_from_slice(sequences::CLEAR_SCREEN.as_bytes());
    }

    fn move_cursor(&mut self, row: u32, col: u32) {
        // Writing into a Vec cannot fail.
        let _ = ansi::write_cursor_position(&mut self.buffer, row, col);
    }

    fn erase_line(&mut self) {
        self.buffer
            .extend_from_slice(sequences::CLEAR_LINE_RIGHT.as_bytes());
    }

    fn write_text(&mut self, text: &[u8]) {
        self.buffer.extend_from_slice(text);
    }
}

/// A single recorded [`FrameWriter`] call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FrameOp {
    EraseScreen,
    MoveCursor { row: u32, col: u32 },
    EraseLine,
    Text(Vec<u8>),
}

/// [`FrameWriter`] that records calls instead of encoding them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameRecorder {
    ops: Vec<FrameOp>,
}

impl FrameRecorder {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded operations, oldest first.
    #[must_use]
    pub fn ops(&self) -> &[FrameOp] {
        &self.ops
    }

    /// Text written after the cursor first moved to `row`, column 1.
    ///
    /// Convenience for tests that only care about what a row shows. The final
    /// cursor placement of a frame comes after every row has been drawn, so
    /// it never shadows the row's content.
    #[must_use]
    pub fn row_text(&self, row: u32) -> Option<&[u8]> {
        let start = self
            .ops
            .iter()
            .position(|op| *op == FrameOp::MoveCursor { row, col: 1 })?;
        self.ops[start + 1..]
            .iter()
            .take_while(|op| !matches!(op, FrameOp::MoveCursor { .. }))
            .find_map(|op| match op {
                FrameOp::Text(text) => Some(text.as_slice()),
                _ => None,
            })
    }
}

impl FrameWriter for FrameRecorder {
    fn erase_screen(&mut self) {
        self.ops.push(FrameOp::EraseScreen);
    }

    fn move_cursor(&mut self, row: u32, col: u32) {
        self.ops.push(FrameOp::MoveCursor { row, col });
    }

    fn erase_line(&mut self) {
        self.ops.push(FrameOp::EraseLine);
    }

    fn write_text(&mut self, text: &[u8]) {
        self.ops.push(FrameOp::Text(text.to_vec()));
    }
}
