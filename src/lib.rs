//! `modal_edit` - a minimal modal terminal text editor
//!
//! Two modes: control mode moves the cursor with `h`/`j`/`k`/`l` and `i`
//! switches to insert mode; insert mode types text at the cursor and ESC
//! switches back. Every keystroke redraws the whole screen in one write.
//!
//! The core ([`EditorState`], [`render`]) never touches a terminal directly;
//! it talks to a [`Surface`], so it can be driven from tests with scripted
//! input and recorded output.

// Crate-level lint configuration
#![warn(unsafe_code)] // Unsafe code needs justification (required for termios FFI)
#![allow(clippy::cast_possible_truncation)] // Intentional coordinate casts
#![allow(clippy::module_name_repetitions)] // Allow editor::EditorState etc
#![allow(clippy::missing_errors_doc)] // Error variants are documented on the enums
#![allow(clippy::missing_panics_doc)] // Panics are test-only
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::must_use_candidate)] // Accessors are obvious
#![allow(clippy::items_after_statements)] // Common pattern in tests

pub mod ansi;
pub mod config;
pub mod editor;
pub mod error;
pub mod event;
pub mod input;
pub mod terminal;
pub mod text;

// Re-export core types at crate root
pub use error::{Error, Result, SurfaceError};
pub use event::{
    LogLevel, clear_event_callback, clear_log_callback, emit_event, emit_log, set_event_callback,
    set_log_callback, set_log_file,
};

pub use config::{Config, ParseResult};
pub use editor::{
    Cursor, DEFAULT_FILLER, Editor, EditorState, INPUT_CHUNK, Mode, RenderOptions, Viewport,
    clamp, render, status_line,
};
pub use input::Command;
pub use text::TextBuffer;

// Re-export terminal and output types
pub use ansi::{FrameBuffer, FrameOp, FrameRecorder, FrameWriter};
pub use terminal::{Surface, TtySurface};
