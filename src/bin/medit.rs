//! `medit` - minimal modal terminal text editor.
//!
//! Runs until input ends or the terminal fails. Every exit goes through an
//! error: the message is printed after the terminal has been restored.

use modal_edit::config::HELP_TEXT;
use modal_edit::{Config, Editor, LogLevel, ParseResult, TtySurface, emit_log, set_log_file};
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = match Config::from_args(std::env::args_os()) {
        ParseResult::Config(config) => config,
        ParseResult::Help => {
            print!("{HELP_TEXT}");
            return ExitCode::SUCCESS;
        }
        ParseResult::Version => {
            println!("medit {}", env!("CARGO_PKG_VERSION"));
            return ExitCode::SUCCESS;
        }
        ParseResult::Error(msg) => {
            eprintln!("medit: {msg}");
            eprintln!("Run with --help for usage information.");
            return ExitCode::from(2);
        }
    };

    if let Some(path) = &config.log_file {
        if let Err(e) = set_log_file(path) {
            eprintln!("medit: cannot open log file {}: {e}", path.display());
            return ExitCode::from(2);
        }
    }

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("medit: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Open the terminal and run the editor loop.
///
/// The surface is dropped (restoring the terminal) before this returns.
fn run(config: &Config) -> modal_edit::Result<()> {
    let surface = TtySurface::open()?;
    let mut editor = Editor::new(surface, config.initial_state(), config.render_options());
    let result = editor.run();
    if editor.surface().is_raw_mode() {
        editor.surface_mut().restore_mode();
        emit_log(LogLevel::Info, "terminal restored");
    }
    result
}
