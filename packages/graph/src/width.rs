use serde::{Deserialize, Serialize};

pub const DEFAULT_FONT_SIZE: f64 = 14.0;
pub const DEFAULT_CHAR_WIDTH_RATIO: f64 = 0.7;
pub const DEFAULT_PADDING: f64 = 40.0;
pub const DEFAULT_MIN_WIDTH: f64 = 120.0;

/// Heuristic for the rendered width of a node label
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WidthOptions {
    pub font_size: f64,
    /// Average glyph width as a fraction of the font size
    pub char_width_ratio: f64,
    pub padding: f64,
    pub min_width: f64,
}

impl Default for WidthOptions {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
            char_width_ratio: DEFAULT_CHAR_WIDTH_RATIO,
            padding: DEFAULT_PADDING,
            min_width: DEFAULT_MIN_WIDTH,
        }
    }
}

impl WidthOptions {
    /// Estimated width of `label`, never below `min_width`
    pub fn estimate(&self, label: &str) -> f64 {
        let chars = label.chars().count() as f64;
        let width = chars * self.font_size * self.char_width_ratio + self.padding;
        width.max(self.min_width)
    }
}

/// `max(120, len * font_size * 0.7 + 40)`
pub fn estimate_width(label: &str, font_size: f64) -> f64 {
    WidthOptions {
        font_size,
        ..WidthOptions::default()
    }
    .estimate(label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_labels_use_minimum() {
        assert_eq!(estimate_width("", DEFAULT_FONT_SIZE), 120.0);
        assert_eq!(estimate_width("A", DEFAULT_FONT_SIZE), 120.0);
        // 8 * 9.8 + 40 = 118.4
        assert_eq!(estimate_width("12345678", DEFAULT_FONT_SIZE), 120.0);
    }

    #[test]
    fn test_long_labels_scale_with_length() {
        // 10 * 14 * 0.7 + 40 = 138
        let width = estimate_width("0123456789", DEFAULT_FONT_SIZE);
        assert!((width - 138.0).abs() < 1e-9);

        let wider = estimate_width("0123456789012345", DEFAULT_FONT_SIZE);
        assert!(wider > width);
    }

    #[test]
    fn test_font_size_scales_width() {
        let small = estimate_width("a fairly long label", 10.0);
        let large = estimate_width("a fairly long label", 20.0);
        assert!(large > small);
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        // Ten CJK characters are ten glyphs, not thirty bytes
        assert_eq!(
            estimate_width("思维导图思维导图思维", DEFAULT_FONT_SIZE),
            estimate_width("abcdefghij", DEFAULT_FONT_SIZE)
        );
    }

    #[test]
    fn test_custom_options() {
        let options = WidthOptions {
            min_width: 0.0,
            padding: 0.0,
            char_width_ratio: 1.0,
            font_size: 10.0,
        };
        assert_eq!(options.estimate("abc"), 30.0);
    }
}
