//! Pending screen content.

use crate::error::BufferError;
use std::fmt::Display;

/// Ordered lines waiting to be drawn.
///
/// Insertion order is display order. An empty buffer is valid and renders as
/// zero rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineBuffer {
    lines: Vec<String>,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `text` as a new final line.
    pub fn append_line(&mut self, text: impl Display) {
        self.lines.push(text.to_string());
    }

    /// Concatenate `text` onto the final line.
    ///
    /// Fails with [`BufferError::Empty`] when there is no line to extend; the
    /// buffer is left untouched in that case.
    pub fn append_to_last_line(&mut self, text: impl Display) -> Result<(), BufferError> {
        let last = self.lines.last_mut().ok_or(BufferError::Empty)?;
        last.push_str(&text.to_string());
        Ok(())
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Independent copy of the current lines for rendering.
    pub fn snapshot(&self) -> Vec<String> {
        self.lines.clone()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
