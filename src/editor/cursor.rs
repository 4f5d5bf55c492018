//! Cursor position, viewport geometry and clamping.
//!
//! All coordinates are 1-based. The bottom viewport row belongs to the status
//! line, so the cursor can only reach rows `1..=height - 1`; a one-row
//! viewport still admits row 1 so the valid range is never empty.

use crate::text::TextBuffer;

/// Visible terminal grid in character cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Viewport {
    width: u16,
    height: u16,
}

impl Viewport {
    /// Create a viewport. Zero dimensions are raised to 1.
    #[must_use]
    pub const fn new(width: u16, height: u16) -> Self {
        Self {
            width: if width == 0 { 1 } else { width },
            height: if height == 0 { 1 } else { height },
        }
    }

    /// Width in cells.
    #[must_use]
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Height in cells, status row included.
    #[must_use]
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Rows the cursor may occupy.
    #[must_use]
    pub fn text_rows(&self) -> u16 {
        self.height.saturating_sub(1).max(1)
    }

    /// Row holding the status line (always the last one).
    #[must_use]
    pub fn status_row(&self) -> u16 {
        self.height
    }
}

/// A (line, column) position in the text buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cursor {
    pub line: usize,
    pub column: usize,
}

impl Default for Cursor {
    fn default() -> Self {
        Self { line: 1, column: 1 }
    }
}

impl Cursor {
    /// Create a cursor at `(line, column)`. No clamping is applied.
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Whether the position satisfies the buffer and viewport bounds.
    #[must_use]
    pub fn is_valid(&self, buffer: &TextBuffer, viewport: Viewport) -> bool {
        let (max_line, max_column) = bounds(self.line, buffer, viewport);
        (1..=max_line).contains(&self.line) && (1..=max_column).contains(&self.column)
    }
}

/// Largest valid line overall and largest valid column on `line`.
fn bounds(line: usize, buffer: &TextBuffer, viewport: Viewport) -> (usize, usize) {
    let max_line = usize::from(viewport.text_rows())
        .min(buffer.line_count())
        .max(1);
    let max_column = usize::from(viewport.width())
        .min(buffer.line_len(line) + 1)
        .max(1);
    (max_line, max_column)
}

/// Move a candidate position to the nearest valid one.
///
/// The line is clamped first, then the column is clamped against the length
/// of the resulting line, so a vertical move onto a shorter line pulls the
/// column back to that line's append position.
#[must_use]
pub fn clamp(candidate: Cursor, buffer: &TextBuffer, viewport: Viewport) -> Cursor {
    let (max_line, _) = bounds(candidate.line, buffer, viewport);
    let line = candidate.line.clamp(1, max_line);
    let (_, max_column) = bounds(line, buffer, viewport);
    let column = candidate.column.clamp(1, max_column);
    Cursor { line, column }
}
