use thiserror::Error;

pub type ParseResult<T> = Result<T, ParseError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid node id '{id}': expected 'node-<line>' or 'empty'")]
    InvalidNodeId { id: String },

    #[error("Invalid indent character {found:?}: must be a single non-newline character")]
    InvalidIndent { found: String },

    #[error("Unknown root policy '{found}': expected 'first' or 'forest'")]
    UnknownRootPolicy { found: String },
}

impl ParseError {
    pub fn invalid_node_id(id: impl Into<String>) -> Self {
        Self::InvalidNodeId { id: id.into() }
    }

    pub fn invalid_indent(found: impl Into<String>) -> Self {
        Self::InvalidIndent {
            found: found.into(),
        }
    }

    pub fn unknown_root_policy(found: impl Into<String>) -> Self {
        Self::UnknownRootPolicy {
            found: found.into(),
        }
    }
}
