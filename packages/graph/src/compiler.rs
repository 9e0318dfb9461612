//! Outline text → positioned tree → flat graph

use crate::graph::{emit_forest, GraphDocument};
use crate::layout::{layout_forest, LayoutOptions};
use crate::width::WidthOptions;
use mindmap_parser::{OutlineParser, Position, RootPolicy, TreeNode};
use tracing::{debug, instrument};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CompileOptions {
    pub parser: OutlineParser,
    pub root_policy: RootPolicy,
    pub layout: LayoutOptions,
    pub width: WidthOptions,
}

impl CompileOptions {
    /// Build the visible top-level topics of `text` (never empty)
    pub fn build(&self, text: &str) -> Vec<TreeNode> {
        self.parser.build_with_policy(text, self.root_policy)
    }
}

/// Build and position the visible trees of `text`, first root at the origin column
pub fn compile_tree(text: &str, options: &CompileOptions) -> Vec<TreeNode> {
    let mut roots = options.build(text);
    layout_forest(&mut roots, Position::default(), &options.layout);
    roots
}

/// Compile outline text into renderable nodes and edges.
///
/// Deterministic: the same text and options always give the same document.
#[instrument(skip(text, options), fields(bytes = text.len(), policy = ?options.root_policy))]
pub fn compile(text: &str, options: &CompileOptions) -> GraphDocument {
    let roots = compile_tree(text, options);
    let doc = emit_forest(&roots, &options.width);
    debug!(nodes = doc.nodes.len(), edges = doc.edges.len(), "Compiled outline graph");
    doc
}
