//! Buffered, bordered terminal screen.
//!
//! `Screen` owns the pending lines, the layout, and the renderer, so every
//! caller (and every test) works on its own independent state instead of a
//! process-wide singleton. Layout math lives in `text`, output in `renderer`,
//! and clearing strategies in `clear`.

pub mod buffer;
pub mod clear;
pub mod layout;
pub mod renderer;
pub mod text;

pub use buffer::LineBuffer;
pub use clear::{AnsiClearer, ClearMode, CommandClearer, NoopClearer, ScreenClearer};
pub use layout::{LayoutConfig, DEFAULT_WIDTH, MAX_WIDTH};
pub use renderer::{frame_row, layout_rows, ScreenRenderer};

use crate::error::BufferError;
use std::fmt::Display;
use std::io::{self, Write};

/// Line buffer plus layout plus renderer.
#[derive(Debug)]
pub struct Screen<W, C> {
    buffer: LineBuffer,
    layout: LayoutConfig,
    renderer: ScreenRenderer<W, C>,
}

impl<W: Write, C: ScreenClearer> Screen<W, C> {
    pub fn new(layout: LayoutConfig, out: W, clearer: C) -> Self {
        Self {
            buffer: LineBuffer::new(),
            layout,
            renderer: ScreenRenderer::new(out, clearer),
        }
    }

    pub fn append_line(&mut self, text: impl Display) {
        self.buffer.append_line(text);
    }

    pub fn append_to_last_line(&mut self, text: impl Display) -> Result<(), BufferError> {
        self.buffer.append_to_last_line(text)
    }

    /// Drop all pending lines.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Clear the terminal and draw the current buffer. The buffer is kept.
    pub fn render(&mut self) -> io::Result<()> {
        let snapshot = self.buffer.snapshot();
        self.renderer.render(&snapshot, &self.layout)
    }

    /// Append `text` as a new line and redraw.
    pub fn print(&mut self, text: impl Display) -> io::Result<()> {
        self.append_line(text);
        self.render()
    }

    pub fn set_width(&mut self, width: i64) {
        self.layout.set_width(width);
    }

    pub fn set_borders(&mut self, border: &str) {
        self.layout.set_borders(border);
    }

    pub fn set_border_pair(&mut self, left: &str, right: &str) {
        self.layout.set_border_pair(left, right);
    }

    pub fn buffer(&self) -> &LineBuffer {
        &self.buffer
    }

    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    pub fn writer(&self) -> &W {
        self.renderer.writer()
    }

    pub fn into_parts(self) -> (LineBuffer, LayoutConfig, W, C) {
        let (out, clearer) = self.renderer.into_parts();
        (self.buffer, self.layout, out, clearer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testsupport::{output_lines, RecordingClearer};

    fn test_screen(width: i64) -> (Screen<Vec<u8>, RecordingClearer>, RecordingClearer) {
        let clearer = RecordingClearer::default();
        let layout = LayoutConfig::new().with_width(width).with_borders("|");
        (Screen::new(layout, Vec::new(), clearer.clone()), clearer)
    }

    #[test]
    fn print_appends_and_renders() {
        let (mut screen, clearer) = test_screen(6);
        screen.print("hello").expect("render");
        assert_eq!(screen.buffer().lines(), ["hello"]);
        assert_eq!(output_lines(screen.writer()), vec!["| hello  |"]);
        assert_eq!(clearer.clears(), 1);
    }

    #[test]
    fn render_does_not_consume_the_buffer() {
        let (mut screen, _) = test_screen(4);
        screen.append_line("abcdefgh");
        screen.render().expect("render");
        assert_eq!(screen.buffer().lines(), ["abcdefgh"]);
    }

    #[test]
    fn empty_line_at_width_ten_renders_ten_spaces() {
        let (mut screen, _) = test_screen(10);
        screen.append_line("");
        screen.render().expect("render");
        assert_eq!(
            output_lines(screen.writer()),
            vec![format!("| {} |", " ".repeat(10))]
        );
    }

    #[test]
    fn setters_ignore_invalid_values() {
        let (mut screen, _) = test_screen(20);
        screen.set_width(-5);
        screen.set_borders("");
        screen.set_border_pair("", "");
        assert_eq!(screen.layout().width(), 20);
        assert_eq!(screen.layout().left_border(), "|");
        assert_eq!(screen.layout().right_border(), "|");
    }

    #[test]
    fn append_to_last_line_requires_a_line() {
        let (mut screen, _) = test_screen(10);
        assert_eq!(screen.append_to_last_line("x"), Err(BufferError::Empty));
        screen.append_line("a");
        screen.append_to_last_line("b").expect("line exists");
        assert_eq!(screen.buffer().lines(), ["ab"]);
    }

    #[test]
    fn into_parts_returns_state() {
        let (mut screen, _) = test_screen(3);
        screen.append_line("x");
        let (buffer, layout, out, _) = screen.into_parts();
        assert_eq!(buffer.len(), 1);
        assert_eq!(layout.width(), 3);
        assert!(out.is_empty());
    }
}
