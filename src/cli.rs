//! CLI argument parsing via clap.

use clap::Parser;
use termframe::build_info;
use termframe::prompt::Acceptance;
use termframe::screen::{ClearMode, LayoutConfig};
use termframe::validators::ValidatorKind;

/// Draw word-wrapped, bordered text in the terminal and optionally prompt for input.
#[derive(Debug, Parser)]
#[command(name = "termframe", version, long_version = build_info::LONG_VERSION)]
pub struct Args {
    /// Lines to display, in order.
    pub lines: Vec<String>,

    /// Path to config file (default: ./termframe.toml or ~/.config/termframe/termframe.toml).
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Columns per row. Non-positive values are ignored.
    #[arg(short = 'w', long = "width", allow_negative_numbers = true)]
    pub width: Option<i64>,

    /// Border drawn on both sides of every row.
    #[arg(short = 'b', long = "border")]
    pub border: Option<String>,

    /// Border drawn on the left side only (overrides --border).
    #[arg(long = "left-border")]
    pub left_border: Option<String>,

    /// Border drawn on the right side only (overrides --border).
    #[arg(long = "right-border")]
    pub right_border: Option<String>,

    /// How to clear the terminal before each redraw.
    #[arg(long = "clear", value_enum)]
    pub clear: Option<ClearMode>,

    /// Ask this question after the lines and print the accepted answer.
    #[arg(short = 'p', long = "prompt")]
    pub prompt: Option<String>,

    /// Acceptable answer (repeatable). Without --accept or --validate any answer is taken.
    #[arg(long = "accept", requires = "prompt", conflicts_with = "validate")]
    pub accept: Vec<String>,

    /// Built-in validator the answer must satisfy.
    #[arg(long = "validate", value_enum, requires = "prompt")]
    pub validate: Option<ValidatorKind>,

    /// Wait for enter after drawing the lines.
    #[arg(long = "pause", conflicts_with = "prompt")]
    pub pause: bool,
}

impl Args {
    /// Layer CLI layout flags on top of `layout`.
    pub fn apply_layout(&self, layout: &mut LayoutConfig) {
        if let Some(width) = self.width {
            layout.set_width(width);
        }
        if let Some(border) = &self.border {
            layout.set_borders(border);
        }
        layout.set_border_pair(
            self.left_border.as_deref().unwrap_or_default(),
            self.right_border.as_deref().unwrap_or_default(),
        );
    }

    /// Acceptance rule for `--prompt`.
    pub fn acceptance(&self) -> Acceptance {
        if let Some(kind) = self.validate {
            return kind.acceptance();
        }
        if self.accept.is_empty() {
            return Acceptance::predicate(|_| true);
        }
        Acceptance::one_of(self.accept.iter().cloned())
    }
}
