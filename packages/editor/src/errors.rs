//! Error types for the editor

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] mindmap_parser::ParseError),

    #[error("Invalid configuration JSON: {0}")]
    ConfigJson(#[from] serde_json::Error),
}
