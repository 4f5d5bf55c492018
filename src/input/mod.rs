//! Input interpretation.
//!
//! Bytes arrive from the terminal in chunks of whatever size the read
//! returned. This module maps a chunk plus the current mode to a [`Command`].

mod keyboard;

pub use keyboard::{
    Command, KEY_DOWN, KEY_ESCAPE, KEY_INSERT, KEY_LEFT, KEY_RIGHT, KEY_UP,
};
