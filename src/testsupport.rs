//! Shared test fixtures for screen and prompt test modules.
//!
//! Kept tiny and std-only: a clearer that records calls, a scripted stdin,
//! broken sinks and sources, and a helper that splits captured output back
//! into rows.

use crate::error::ClearError;
use crate::screen::ScreenClearer;
use std::cell::Cell;
use std::io::{self, Cursor, Read, Write};
use std::rc::Rc;

/// Clearer that counts invocations and can be told to fail.
///
/// Clones share the same counter so a test can keep a handle after moving
/// one copy into a renderer.
#[derive(Debug, Clone, Default)]
pub struct RecordingClearer {
    calls: Rc<Cell<usize>>,
    fail: bool,
}

impl RecordingClearer {
    /// A clearer whose every call fails with an I/O error.
    pub fn failing() -> Self {
        Self {
            calls: Rc::default(),
            fail: true,
        }
    }

    /// Number of clear requests seen so far.
    pub fn clears(&self) -> usize {
        self.calls.get()
    }
}

impl ScreenClearer for RecordingClearer {
    fn clear_screen(&mut self) -> Result<(), ClearError> {
        self.calls.set(self.calls.get() + 1);
        if self.fail {
            return Err(ClearError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                "clear: command not found",
            )));
        }
        Ok(())
    }
}

/// Build an in-memory input source from newline-terminated lines.
pub fn scripted_input(lines: &[&str]) -> Cursor<Vec<u8>> {
    let mut text = String::new();
    for line in lines {
        text.push_str(line);
        text.push('\n');
    }
    Cursor::new(text.into_bytes())
}

/// Split captured output into rows.
pub fn output_lines(out: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(out)
        .lines()
        .map(str::to_string)
        .collect()
}

/// Output sink whose every write fails with `BrokenPipe`.
#[derive(Debug, Default)]
pub struct BrokenPipeWriter;

impl Write for BrokenPipeWriter {
    fn write(&mut self, _: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "stdout closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "stdout closed"))
    }
}

/// Input source whose every read fails with `InvalidData`.
#[derive(Debug, Default)]
pub struct CorruptReader;

impl Read for CorruptReader {
    fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::InvalidData, "terminal read failed"))
    }
}
