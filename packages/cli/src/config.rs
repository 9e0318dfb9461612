use anyhow::{anyhow, Context};
use mindmap_editor::EditorConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_NAME: &str = "mindmap.config.json";

/// Mindmap configuration file format
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Session, parser and layout settings
    #[serde(flatten)]
    pub editor: EditorConfig,

    /// Pretty-print rendered JSON by default
    #[serde(default)]
    pub pretty: bool,
}

impl Config {
    /// Load `explicit`, or the config in `cwd` if there is one.
    ///
    /// A missing default config gives the defaults; a missing explicit one is an error.
    pub fn load(cwd: &Path, explicit: Option<&Path>) -> anyhow::Result<Self> {
        let config_path = match explicit {
            Some(path) if !path.exists() => {
                return Err(anyhow!("Config file not found: {}", path.display()));
            }
            Some(path) => path.to_path_buf(),
            None => cwd.join(DEFAULT_CONFIG_NAME),
        };

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read {}", config_path.display()))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Invalid config {}", config_path.display()))?;
            // Surface a bad indent here rather than at first use
            config.editor.compile_options()?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn path_in(cwd: &Path) -> PathBuf {
        cwd.join(DEFAULT_CONFIG_NAME)
    }
}
