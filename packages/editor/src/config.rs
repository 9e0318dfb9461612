use crate::errors::EditorError;
use mindmap_graph::{CompileOptions, LayoutOptions, WidthOptions};
use mindmap_parser::{OutlineParser, RootPolicy, DEFAULT_INDENT};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Editing session settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EditorConfig {
    /// Typing pause (ms) after which the outline is committed to history
    pub history_delay_ms: u64,

    /// Undo steps kept behind the newest snapshot (0 = unlimited)
    pub max_undo_levels: usize,

    /// Whether top-level topics after the first are rendered
    pub root_policy: RootPolicy,

    /// Indent marker, exactly one character
    pub indent: String,

    pub layout: LayoutOptions,

    pub width: WidthOptions,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            history_delay_ms: 800,
            max_undo_levels: 0,
            root_policy: RootPolicy::First,
            indent: DEFAULT_INDENT.to_string(),
            layout: LayoutOptions::default(),
            width: WidthOptions::default(),
        }
    }
}

impl EditorConfig {
    pub fn from_json(json: &str) -> Result<Self, EditorError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn history_delay(&self) -> Duration {
        Duration::from_millis(self.history_delay_ms)
    }

    pub fn compile_options(&self) -> Result<CompileOptions, EditorError> {
        Ok(CompileOptions {
            parser: OutlineParser::from_indent_str(&self.indent)?,
            root_policy: self.root_policy,
            layout: self.layout,
            width: self.width,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "historyDelayMs": 300,
            "maxUndoLevels": 50,
            "rootPolicy": "forest",
            "indent": " ",
            "layout": { "horizontalSpacing": 200 },
            "width": { "fontSize": 16 }
        }"#;

        let config = EditorConfig::from_json(json).unwrap();
        assert_eq!(config.history_delay(), Duration::from_millis(300));
        assert_eq!(config.max_undo_levels, 50);
        assert_eq!(config.root_policy, RootPolicy::Forest);
        assert_eq!(config.layout.horizontal_spacing, 200.0);
        // Unspecified nested fields keep their defaults
        assert_eq!(config.layout.vertical_spacing, 120.0);
        assert_eq!(config.width.font_size, 16.0);
        assert_eq!(config.width.min_width, 120.0);

        let options = config.compile_options().unwrap();
        assert_eq!(options.parser.indent(), ' ');
    }

    #[test]
    fn test_default_config() {
        let config = EditorConfig::from_json("{}").unwrap();
        assert_eq!(config, EditorConfig::default());
        assert_eq!(config.history_delay_ms, 800);
        assert_eq!(config.compile_options().unwrap(), CompileOptions::default());
    }

    #[test]
    fn test_invalid_indent() {
        let config = EditorConfig {
            indent: "\t\t".to_string(),
            ..EditorConfig::default()
        };
        assert!(matches!(config.compile_options(), Err(EditorError::Config(_))));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            EditorConfig::from_json(r#"{"rootPolicy": "all"}"#),
            Err(EditorError::ConfigJson(_))
        ));
    }
}
