//! Document model.
//!
//! Text is byte-oriented: a line is a `Vec<u8>` and a column counts bytes.
//! Lines and columns are 1-based everywhere in the public API, matching the
//! cursor and the terminal's own coordinates.
//!
//! # Example
//!
//! ```
//! use modal_edit::TextBuffer;
//!
//! let mut buffer = TextBuffer::from_text("hello\nworld");
//! buffer.insert(1, 6, b"!").unwrap();
//! assert_eq!(buffer.line(1), Some(&b"hello!"[..]));
//! assert_eq!(buffer.line_count(), 2);
//! ```

mod buffer;

pub use buffer::TextBuffer;
