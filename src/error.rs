//! Error types for the editor.

use std::fmt;
use std::io;

/// Result type alias for editor operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Failure of a terminal surface operation.
///
/// Every variant is fatal: the editor restores the terminal and exits.
#[derive(Debug)]
pub enum SurfaceError {
    /// Standard input or output is not an interactive terminal.
    NotATerminal,
    /// Entering or leaving raw mode failed.
    RawMode(io::Error),
    /// Viewport size query failed or reported zero cells.
    Size(io::Error),
    /// Reading keyboard input failed.
    Read(io::Error),
    /// Standard input reached end of file.
    InputClosed,
    /// Writing a frame to the terminal failed.
    Write(io::Error),
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotATerminal => write!(f, "not an interactive terminal"),
            Self::RawMode(e) => write!(f, "failed to toggle raw mode: {e}"),
            Self::Size(e) => write!(f, "failed to query terminal size: {e}"),
            Self::Read(e) => write!(f, "failed to read input: {e}"),
            Self::InputClosed => write!(f, "input closed"),
            Self::Write(e) => write!(f, "failed to write to terminal: {e}"),
        }
    }
}

impl std::error::Error for SurfaceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::RawMode(e) | Self::Size(e) | Self::Read(e) | Self::Write(e) => Some(e),
            Self::NotATerminal | Self::InputClosed => None,
        }
    }
}

/// Error type for editor operations.
#[derive(Debug)]
pub enum Error {
    /// Terminal surface failure.
    Surface(SurfaceError),
    /// Insertion column outside `1..=len + 1`.
    ColumnOutOfRange { line: usize, column: usize, len: usize },
    /// Line index outside `1..=count`.
    LineOutOfRange { line: usize, count: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Surface(e) => write!(f, "{e}"),
            Self::ColumnOutOfRange { line, column, len } => write!(
                f,
                "column {column} out of range for line {line} of length {len}"
            ),
            Self::LineOutOfRange { line, count } => {
                write!(f, "line {line} out of range for buffer of {count} lines")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Surface(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SurfaceError> for Error {
    fn from(e: SurfaceError) -> Self {
        Self::Surface(e)
    }
}
