//! Test fixtures shared by the integration tests.
//!
//! - [`MockSurface`] - scripted input, captured frames
//! - [`screen_rows`] / [`init_test_logging`] - small helpers

#![allow(dead_code)] // Not every test binary uses every helper
#![allow(clippy::nursery)] // Test fixtures prioritize clarity over pedantry
#![allow(clippy::pedantic)] // Test fixtures prioritize clarity over pedantry

pub mod mock_surface;

pub use mock_surface::*;

use modal_edit::LogLevel;
use std::sync::Once;

/// Route `tracing` output to the test harness once per binary, and forward
/// the editor's own log hook into it.
pub fn init_test_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
        modal_edit::set_log_callback(|level, message| match level {
            LogLevel::Debug => tracing::debug!(target: "modal_edit", "{message}"),
            LogLevel::Info => tracing::info!(target: "modal_edit", "{message}"),
            LogLevel::Warn => tracing::warn!(target: "modal_edit", "{message}"),
            LogLevel::Error => tracing::error!(target: "modal_edit", "{message}"),
        });
    });
}

/// Visible rows of an emulated screen, trailing blanks trimmed.
pub fn screen_rows(parser: &vt100::Parser) -> Vec<String> {
    let screen = parser.screen();
    let (_, cols) = screen.size();
    screen
        .rows(0, cols)
        .map(|row| row.trim_end().to_string())
        .collect()
}
