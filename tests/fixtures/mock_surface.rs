//! Scripted terminal surface for driving the editor without a TTY.
//!
//! [`MockSurface`] replays a queue of input chunks, records every frame the
//! editor writes, and reports `InputClosed` once the script runs dry. Frames
//! can be fed through a `vt100` parser to check what a real terminal would
//! show.

use modal_edit::{Surface, SurfaceError, Viewport};
use std::collections::VecDeque;
use std::io;

/// One scripted step.
#[derive(Clone, Debug)]
pub enum Step {
    /// Bytes returned by the next read.
    Input(Vec<u8>),
    /// Change the reported size before the next read.
    Resize(u16, u16),
}

/// A mock surface that captures all output for inspection.
pub struct MockSurface {
    viewport: Viewport,
    script: VecDeque<Step>,
    frames: Vec<Vec<u8>>,
    fail_writes: bool,
    reads: usize,
}

impl MockSurface {
    /// Create a mock surface with the given dimensions and no input.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            viewport: Viewport::new(width, height),
            script: VecDeque::new(),
            frames: Vec::new(),
            fail_writes: false,
            reads: 0,
        }
    }

    /// Queue one read per chunk.
    pub fn with_input(mut self, chunks: &[&[u8]]) -> Self {
        self.script
            .extend(chunks.iter().map(|chunk| Step::Input(chunk.to_vec())));
        self
    }

    /// Queue one read per byte of `keys`, as a typist would produce them.
    pub fn with_keys(mut self, keys: &[u8]) -> Self {
        self.script
            .extend(keys.iter().map(|&byte| Step::Input(vec![byte])));
        self
    }

    /// Queue a resize.
    pub fn with_resize(mut self, width: u16, height: u16) -> Self {
        self.script.push_back(Step::Resize(width, height));
        self
    }

    /// Make every write fail (simulates a broken terminal).
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// All frames written so far.
    pub fn frames(&self) -> &[Vec<u8>] {
        &self.frames
    }

    /// The most recent frame.
    pub fn last_frame(&self) -> Option<&[u8]> {
        self.frames.last().map(Vec::as_slice)
    }

    /// Number of successful reads.
    pub fn reads(&self) -> usize {
        self.reads
    }

    /// Current viewport.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Feed every frame through a terminal emulator sized like the surface.
    pub fn screen(&self) -> vt100::Parser {
        let mut parser = vt100::Parser::new(self.viewport.height(), self.viewport.width(), 0);
        for frame in &self.frames {
            parser.process(frame);
        }
        parser
    }
}

impl Surface for MockSurface {
    fn size(&self) -> Result<Viewport, SurfaceError> {
        Ok(self.viewport)
    }

    fn read_input(&mut self, buf: &mut [u8]) -> Result<usize, SurfaceError> {
        loop {
            match self.script.pop_front() {
                Some(Step::Resize(width, height)) => {
                    self.viewport = Viewport::new(width, height);
                }
                Some(Step::Input(chunk)) => {
                    let n = chunk.len().min(buf.len());
                    buf[..n].copy_from_slice(&chunk[..n]);
                    self.reads += 1;
                    return Ok(n);
                }
                None => return Err(SurfaceError::InputClosed),
            }
        }
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), SurfaceError> {
        if self.fail_writes {
            return Err(SurfaceError::Write(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "mock terminal closed",
            )));
        }
        self.frames.push(bytes.to_vec());
        Ok(())
    }
}
