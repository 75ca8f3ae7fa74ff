//! Display width and border settings.

/// Columns per row when nothing else is configured.
pub const DEFAULT_WIDTH: usize = 32;

/// Widest row accepted; larger requests are clamped to this.
pub const MAX_WIDTH: usize = u16::MAX as usize;

/// Width and border strings applied to every rendered row.
///
/// Setters ignore invalid updates (non-positive width, empty border) and keep
/// the previous value, so `width` always stays within `1..=MAX_WIDTH`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutConfig {
    width: usize,
    left_border: String,
    right_border: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            left_border: String::new(),
            right_border: String::new(),
        }
    }
}

impl LayoutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn left_border(&self) -> &str {
        &self.left_border
    }

    pub fn right_border(&self) -> &str {
        &self.right_border
    }

    /// Set the row width. Zero or negative values are ignored and values
    /// above [`MAX_WIDTH`] are clamped.
    pub fn set_width(&mut self, width: i64) {
        if width <= 0 {
            tracing::debug!(width, "ignoring non-positive width");
            return;
        }
        self.width = usize::try_from(width).map_or(MAX_WIDTH, |w| w.min(MAX_WIDTH));
    }

    /// Use `border` on both sides. An empty string is ignored.
    pub fn set_borders(&mut self, border: &str) {
        self.set_border_pair(border, border);
    }

    /// Set each side independently. Either side is ignored when empty.
    pub fn set_border_pair(&mut self, left: &str, right: &str) {
        if !left.is_empty() {
            self.left_border = left.to_string();
        }
        if !right.is_empty() {
            self.right_border = right.to_string();
        }
    }

    /// Builder-style [`set_width`](Self::set_width).
    pub fn with_width(mut self, width: i64) -> Self {
        self.set_width(width);
        self
    }

    /// Builder-style [`set_borders`](Self::set_borders).
    pub fn with_borders(mut self, border: &str) -> Self {
        self.set_borders(border);
        self
    }

    /// Builder-style [`set_border_pair`](Self::set_border_pair).
    pub fn with_border_pair(mut self, left: &str, right: &str) -> Self {
        self.set_border_pair(left, right);
        self
    }
}
