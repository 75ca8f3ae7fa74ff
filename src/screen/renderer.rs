//! Framed, word-wrapped screen output.

use crate::screen::clear::ScreenClearer;
use crate::screen::layout::LayoutConfig;
use crate::screen::text::{pad_line, wrap_line};
use std::io::{self, Write};

/// Frame one already-wrapped row: `left + " " + padded + " " + right`.
pub fn frame_row(row: &str, layout: &LayoutConfig) -> String {
    format!(
        "{} {} {}",
        layout.left_border(),
        pad_line(row, layout.width()),
        layout.right_border()
    )
}

/// Expand a line snapshot into the framed rows a render would print.
pub fn layout_rows(lines: &[String], layout: &LayoutConfig) -> Vec<String> {
    lines
        .iter()
        .flat_map(|line| wrap_line(line, layout.width()))
        .map(|row| frame_row(&row, layout))
        .collect()
}

/// Clears the terminal and writes framed rows to an output sink.
#[derive(Debug)]
pub struct ScreenRenderer<W, C> {
    out: W,
    clearer: C,
}

impl<W: Write, C: ScreenClearer> ScreenRenderer<W, C> {
    pub fn new(out: W, clearer: C) -> Self {
        Self { out, clearer }
    }

    /// Clear the display, then print every row of `lines` in order.
    ///
    /// A failed clear is logged and drawing continues; only write errors on
    /// the output sink are returned.
    pub fn render(&mut self, lines: &[String], layout: &LayoutConfig) -> io::Result<()> {
        if let Err(err) = self.clearer.clear_screen() {
            tracing::warn!(error = %err, "failed to clear terminal");
        }

        let rows = layout_rows(lines, layout);
        tracing::trace!(lines = lines.len(), rows = rows.len(), "rendering frame");
        for row in &rows {
            writeln!(self.out, "{row}")?;
        }
        self.out.flush()
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    pub fn into_parts(self) -> (W, C) {
        (self.out, self.clearer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screen::layout::MAX_WIDTH;
    use crate::testsupport::{output_lines, RecordingClearer};

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn short_line_is_padded_between_borders() {
        let layout = LayoutConfig::new().with_width(8).with_borders("|");
        assert_eq!(frame_row("abc", &layout), "| abc      |");
    }

    #[test]
    fn empty_line_renders_width_spaces() {
        let layout = LayoutConfig::new().with_width(10).with_borders("|");
        let rows = layout_rows(&lines(&[""]), &layout);
        assert_eq!(rows, vec![format!("| {} |", " ".repeat(10))]);
    }

    #[test]
    fn huge_width_request_renders_at_max_width() {
        let layout = LayoutConfig::new().with_width(i64::MAX).with_borders("|");
        let row = frame_row("x", &layout);
        assert_eq!(row.chars().count(), MAX_WIDTH + 4);
        assert!(row.starts_with("| x "));
        assert!(row.ends_with(" |"));
    }

    #[test]
    fn empty_snapshot_renders_nothing() {
        let layout = LayoutConfig::new();
        assert!(layout_rows(&[], &layout).is_empty());
    }

    #[test]
    fn rows_without_borders_keep_framing_spaces() {
        let layout = LayoutConfig::new().with_width(3);
        assert_eq!(frame_row("a", &layout), " a   ");
    }

    #[test]
    fn wrapped_rows_follow_source_order() {
        let layout = LayoutConfig::new().with_width(5).with_border_pair("<", ">");
        let rows = layout_rows(&lines(&["top", "aaaaaaa", "end"]), &layout);
        assert_eq!(
            rows,
            vec![
                "< top   >".to_string(),
                "< aaaaa >".to_string(),
                "< aa    >".to_string(),
                "< end   >".to_string(),
            ]
        );
    }

    #[test]
    fn render_clears_once_then_writes_rows() {
        let clearer = RecordingClearer::default();
        let mut renderer = ScreenRenderer::new(Vec::new(), clearer.clone());
        let layout = LayoutConfig::new().with_width(4).with_borders("#");

        renderer
            .render(&lines(&["hi", "a b c d"]), &layout)
            .expect("in-memory write");

        assert_eq!(clearer.clears(), 1);
        assert_eq!(
            output_lines(renderer.writer()),
            vec!["# hi   #", "# a b  #", "# c d  #"]
        );
    }

    #[test]
    fn render_continues_when_clear_fails() {
        let clearer = RecordingClearer::failing();
        let mut renderer = ScreenRenderer::new(Vec::new(), clearer.clone());
        let layout = LayoutConfig::new().with_width(2);

        renderer
            .render(&lines(&["ok"]), &layout)
            .expect("clear failure is not fatal");

        assert_eq!(clearer.clears(), 1);
        assert_eq!(output_lines(renderer.writer()), vec![" ok "]);
    }
}
