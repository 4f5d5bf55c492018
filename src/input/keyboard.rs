//! Keyboard command decoding.
//!
//! Raw reads are turned into a [`Command`] once, before anything is mutated,
//! so what a key means is decided in one place and can be tested without a
//! terminal.

use crate::ansi::ESC;
use crate::editor::Mode;

/// Control-mode key: move up one line.
pub const KEY_UP: u8 = b'k';
/// Control-mode key: move down one line.
pub const KEY_DOWN: u8 = b'j';
/// Control-mode key: move left one column.
pub const KEY_LEFT: u8 = b'h';
/// Control-mode key: move right one column.
pub const KEY_RIGHT: u8 = b'l';
/// Control-mode key: switch to insert mode.
pub const KEY_INSERT: u8 = b'i';
/// Insert-mode key: return to control mode.
pub const KEY_ESCAPE: u8 = ESC;

/// What one chunk of input asks the editor to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command<'a> {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    /// Switch from control to insert mode.
    EnterInsert,
    /// Switch from insert to control mode.
    ExitInsert,
    /// Insert the whole chunk at the cursor.
    Insert(&'a [u8]),
    /// Unbound key (or an empty read). Not an error.
    Ignore,
}

impl<'a> Command<'a> {
    /// Decode a raw input chunk under the given mode.
    ///
    /// Control mode only looks at the first byte; insert mode takes the chunk
    /// as text unless it starts with ESC. A read may carry several bytes, for
    /// example a paste or an escape sequence from an arrow key.
    #[must_use]
    pub fn decode(mode: Mode, input: &'a [u8]) -> Self {
        let Some(&first) = input.first() else {
            return Self::Ignore;
        };

        match mode {
            Mode::Control => match first {
                KEY_UP => Self::MoveUp,
                KEY_DOWN => Self::MoveDown,
                KEY_LEFT => Self::MoveLeft,
                KEY_RIGHT => Self::MoveRight,
                KEY_INSERT => Self::EnterInsert,
                _ => Self::Ignore,
            },
            Mode::Insert => {
                if first == KEY_ESCAPE {
                    Self::ExitInsert
                } else {
                    Self::Insert(input)
                }
            }
        }
    }

    /// Mode this command switches to, if it switches at all.
    #[must_use]
    pub const fn target_mode(&self) -> Option<Mode> {
        match self {
            Self::EnterInsert => Some(Mode::Insert),
            Self::ExitInsert => Some(Mode::Control),
            _ => None,
        }
    }
}
