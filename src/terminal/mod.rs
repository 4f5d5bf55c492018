//! Terminal surface: the editor's only contact with the outside world.
//!
//! The core talks to a [`Surface`]; [`TtySurface`] is the real one, backed by
//! stdin/stdout in raw mode. Tests substitute scripted surfaces.

mod raw;

pub use raw::{RawModeGuard, enable_raw_mode, is_tty, terminal_size};

use crate::editor::Viewport;
use crate::error::SurfaceError;
use std::io::{self, Read, Write};

/// Operations the editor needs from a terminal.
///
/// Every failure is a [`SurfaceError`] and every [`SurfaceError`] is fatal.
pub trait Surface {
    /// Current viewport size. Queried fresh on every call.
    fn size(&self) -> Result<Viewport, SurfaceError>;

    /// Block until input is available and copy up to `buf.len()` bytes.
    ///
    /// Returns the number of bytes read, at least 1. End of input is
    /// [`SurfaceError::InputClosed`].
    fn read_input(&mut self, buf: &mut [u8]) -> Result<usize, SurfaceError>;

    /// Write a complete frame.
    fn write(&mut self, bytes: &[u8]) -> Result<(), SurfaceError>;
}

/// Surface over the process's stdin and stdout.
#[derive(Debug)]
pub struct TtySurface {
    stdin: io::Stdin,
    stdout: io::Stdout,
    raw_mode_guard: Option<RawModeGuard>,
}

impl TtySurface {
    /// Check both streams are terminals and switch stdin to raw mode.
    ///
    /// Raw mode lasts until [`TtySurface::restore_mode`] or drop, whichever
    /// comes first.
    pub fn open() -> Result<Self, SurfaceError> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        if !is_tty(&stdin) || !is_tty(&stdout) {
            return Err(SurfaceError::NotATerminal);
        }

        let mut surface = Self {
            stdin,
            stdout,
            raw_mode_guard: None,
        };
        surface.enter_raw_mode()?;
        Ok(surface)
    }

    /// Check if terminal is in raw mode.
    #[must_use]
    pub fn is_raw_mode(&self) -> bool {
        self.raw_mode_guard.is_some()
    }

    /// Enter raw mode. A no-op if already raw.
    pub fn enter_raw_mode(&mut self) -> Result<(), SurfaceError> {
        if self.raw_mode_guard.is_none() {
            self.raw_mode_guard = Some(enable_raw_mode().map_err(SurfaceError::RawMode)?);
        }
        Ok(())
    }

    /// Restore the terminal settings saved by [`TtySurface::enter_raw_mode`].
    pub fn restore_mode(&mut self) {
        self.raw_mode_guard = None;
    }
}

impl Surface for TtySurface {
    fn size(&self) -> Result<Viewport, SurfaceError> {
        let (width, height) = terminal_size().map_err(SurfaceError::Size)?;
        Ok(Viewport::new(width, height))
    }

    fn read_input(&mut self, buf: &mut [u8]) -> Result<usize, SurfaceError> {
        match self.stdin.lock().read(buf) {
            Ok(0) => Err(SurfaceError::InputClosed),
            Ok(n) => Ok(n),
            Err(e) => Err(SurfaceError::Read(e)),
        }
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), SurfaceError> {
        let mut out = self.stdout.lock();
        out.write_all(bytes)
            .and_then(|()| out.flush())
            .map_err(SurfaceError::Write)
    }
}
