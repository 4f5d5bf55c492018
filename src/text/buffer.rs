//! Line-oriented text storage.

use crate::error::{Error, Result};

/// Ordered sequence of byte lines.
///
/// Never empty: a buffer always holds at least one (possibly empty) line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextBuffer {
    lines: Vec<Vec<u8>>,
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextBuffer {
    /// Create a buffer holding a single empty line.
    #[must_use]
    pub fn new() -> Self {
        Self {
            lines: vec![Vec::new()],
        }
    }

    /// Create a buffer from text, one line per `\n`.
    ///
    /// A trailing `\r` on each line is dropped so CRLF input behaves like LF.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let lines = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line).as_bytes().to_vec())
            .collect();
        Self::from_lines(lines)
    }

    /// Create a buffer from pre-split lines.
    ///
    /// An empty vector yields a single empty line.
    #[must_use]
    pub fn from_lines(lines: Vec<Vec<u8>>) -> Self {
        if lines.is_empty() {
            Self::new()
        } else {
            Self { lines }
        }
    }

    /// Number of lines (always at least 1).
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Bytes of the 1-based line `line`.
    #[must_use]
    pub fn line(&self, line: usize) -> Option<&[u8]> {
        let idx = line.checked_sub(1)?;
        self.lines.get(idx).map(Vec::as_slice)
    }

    /// Length in bytes of the 1-based line `line`, or 0 if it does not exist.
    #[must_use]
    pub fn line_len(&self, line: usize) -> usize {
        self.line(line).map_or(0, <[u8]>::len)
    }

    /// Iterate over all lines in order.
    pub fn lines(&self) -> impl Iterator<Item = &[u8]> {
        self.lines.iter().map(Vec::as_slice)
    }

    /// Insert `text` into `line` so that its first byte lands at `column`.
    ///
    /// Both coordinates are 1-based. Valid columns are `1..=len + 1`; column
    /// `len + 1` appends. Anything else is rejected without touching the buffer.
    pub fn insert(&mut self, line: usize, column: usize, text: &[u8]) -> Result<()> {
        let count = self.lines.len();
        let target = line
            .checked_sub(1)
            .and_then(|idx| self.lines.get_mut(idx))
            .ok_or(Error::LineOutOfRange { line, count })?;

        let len = target.len();
        if column == 0 || column > len + 1 {
            return Err(Error::ColumnOutOfRange { line, column, len });
        }

        let at = column - 1;
        target.splice(at..at, text.iter().copied());
        Ok(())
    }
}
