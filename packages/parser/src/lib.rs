//! # Mindmap Parser
//!
//! Turns indent-marked outline text into a tree of topics.
//!
//! ```text
//! Topic            node-0
//! \tSubtopic 1     node-1   (child of node-0)
//! \t\tDetail       node-2   (child of node-1)
//! \tSubtopic 2     node-3   (child of node-0)
//! ```
//!
//! One topic per line; the number of leading indent markers is its depth.
//! Node ids encode the line index, so they only identify a topic within the
//! text they were built from.

pub mod ast;
pub mod error;
pub mod parser;
pub mod serializer;
pub mod tokenizer;

pub use ast::{NodeId, Position, RootPolicy, TreeNode, Walk, PLACEHOLDER_LABEL};
pub use error::{ParseError, ParseResult};
pub use parser::{build, build_forest, OutlineParser};
pub use serializer::{serialize, serialize_forest, Serializer};
pub use tokenizer::{indent_depth, join_lines, split_lines, tokenize, OutlineLine, DEFAULT_INDENT};
