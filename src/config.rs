//! Command-line configuration for the `medit` binary.

use crate::editor::{DEFAULT_FILLER, EditorState, Mode, RenderOptions};
use crate::text::TextBuffer;
use std::ffi::OsString;
use std::path::PathBuf;

/// Usage text printed for `--help`.
pub const HELP_TEXT: &str = "medit - minimal modal terminal text editor

USAGE:
    medit [OPTIONS]

OPTIONS:
    -h, --help              Print this help message and exit
    -V, --version           Print version information and exit
    --text <STRING>         Initial buffer content (lines split on \\n)
    --filler <CHAR>         Glyph for rows past the end of the buffer (default: ~)
    --insert                Start in insert mode
    --log-file <PATH>       Append diagnostic log lines to PATH

KEYS:
    control mode    h/j/k/l move, i enters insert mode
    insert mode     text is inserted at the cursor, ESC returns to control mode
";

/// Editor configuration parsed from command-line arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub initial_text: String,
    pub filler: u8,
    pub start_mode: Mode,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_text: String::new(),
            filler: DEFAULT_FILLER,
            start_mode: Mode::Control,
            log_file: None,
        }
    }
}

/// Result of CLI parsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseResult {
    /// Successfully parsed configuration.
    Config(Config),
    /// User requested help.
    Help,
    /// User requested the version.
    Version,
    /// Parse error with message.
    Error(String),
}

impl Config {
    /// Parse configuration from command-line arguments.
    ///
    /// The first item is the program name and is skipped.
    pub fn from_args<I>(args: I) -> ParseResult
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();

        // Skip program name
        args.next();

        while let Some(arg) = args.next() {
            let arg_str = arg.to_string_lossy();

            match arg_str.as_ref() {
                "-h" | "--help" => return ParseResult::Help,
                "-V" | "--version" => return ParseResult::Version,

                "--text" => match args.next() {
                    Some(v) => config.initial_text = v.to_string_lossy().into_owned(),
                    None => return ParseResult::Error("--text requires a value".to_string()),
                },

                "--filler" => {
                    let value = match args.next() {
                        Some(v) => v.to_string_lossy().into_owned(),
                        None => {
                            return ParseResult::Error("--filler requires a value".to_string());
                        }
                    };
                    match parse_filler(&value) {
                        Some(byte) => config.filler = byte,
                        None => {
                            return ParseResult::Error(format!(
                                "Invalid --filler value: {value:?} \
                                 (must be one printable ASCII character)"
                            ));
                        }
                    }
                }

                "--insert" => config.start_mode = Mode::Insert,

                "--log-file" => match args.next() {
                    Some(v) => config.log_file = Some(PathBuf::from(v)),
                    None => {
                        return ParseResult::Error("--log-file requires a value".to_string());
                    }
                },

                other => {
                    if other.starts_with('-') {
                        return ParseResult::Error(format!("Unknown option: {other}"));
                    }
                    return ParseResult::Error(format!(
                        "Unexpected argument: {other} (medit does not open files)"
                    ));
                }
            }
        }

        ParseResult::Config(config)
    }

    /// Get render options from config.
    #[must_use]
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            filler: self.filler,
        }
    }

    /// Build the starting editor state.
    #[must_use]
    pub fn initial_state(&self) -> EditorState {
        EditorState::new(TextBuffer::from_text(&self.initial_text)).with_mode(self.start_mode)
    }
}

/// Accept exactly one printable, non-space ASCII character.
fn parse_filler(s: &str) -> Option<u8> {
    match s.as_bytes() {
        [b] if b.is_ascii_graphic() => Some(*b),
        _ => None,
    }
}
