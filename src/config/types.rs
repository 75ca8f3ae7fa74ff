//! Configuration data model.
//!
//! Plain serde structs plus the conversion into runtime layout settings.
//! Discovery and loading live in `config::mod` and `config::sources`.

use serde::{Deserialize, Serialize};

use crate::screen::{ClearMode, LayoutConfig};

/// Top-level `termframe.toml` contents.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub layout: LayoutSection,
    pub terminal: TerminalSection,
}

/// `[layout]` table.
///
/// Every field is optional; values are applied through the same setters as
/// runtime updates, so a non-positive width or empty border is ignored.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutSection {
    pub width: Option<i64>,
    /// Shorthand for setting both sides at once.
    pub border: Option<String>,
    pub left_border: Option<String>,
    pub right_border: Option<String>,
}

/// `[terminal]` table.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct TerminalSection {
    pub clear: ClearMode,
}

impl Config {
    /// Build the runtime layout, starting from defaults.
    pub fn layout_config(&self) -> LayoutConfig {
        let mut layout = LayoutConfig::default();
        self.layout.apply_to(&mut layout);
        layout
    }
}

impl LayoutSection {
    /// Apply configured values on top of `layout`. `border` goes first so the
    /// per-side keys can override it.
    pub fn apply_to(&self, layout: &mut LayoutConfig) {
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

    pub(super) fn borders(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("border", self.border.as_deref()),
            ("left_border", self.left_border.as_deref()),
            ("right_border", self.right_border.as_deref()),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key, v)))
    }
}
