//! Editing modes.

use std::fmt;

/// Which interpretation input currently gets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Input bytes are navigation and mode-switch commands.
    #[default]
    Control,
    /// Input bytes are literal text inserted at the cursor.
    Insert,
}

impl Mode {
    /// Lower-case name shown in the status line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Control => "control",
            Self::Insert => "insert",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
