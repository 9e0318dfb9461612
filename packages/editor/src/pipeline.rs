//! # Outline Pipeline
//!
//! Holds the current outline text and the graph derived from it.
//!
//! The Pipeline manages:
//! - Replacing the outline text
//! - Recompiling to nodes/edges on every accepted change
//! - A version counter that bumps whenever the text actually changes

use mindmap_graph::{compile, CompileOptions, GraphDocument};
use tracing::debug;

/// Outline text → graph, kept in sync
#[derive(Debug, Clone)]
pub struct Pipeline {
    options: CompileOptions,
    outline: String,
    graph: GraphDocument,
    version: u64,
}

impl Pipeline {
    /// Create pipeline for an initial outline (compiled immediately)
    pub fn new(outline: impl Into<String>, options: CompileOptions) -> Self {
        let outline = outline.into();
        let graph = compile(&outline, &options);
        Self {
            options,
            outline,
            graph,
            version: 0,
        }
    }

    /// Replace the outline and recompile.
    ///
    /// Returns `false` without recompiling when the text is unchanged.
    pub fn apply_text(&mut self, text: String) -> bool {
        if text == self.outline {
            return false;
        }
        self.outline = text;
        self.graph = compile(&self.outline, &self.options);
        self.version += 1;
        debug!(version = self.version, nodes = self.graph.nodes.len(), "Outline recompiled");
        true
    }

    pub fn outline(&self) -> &str {
        &self.outline
    }

    pub fn graph(&self) -> &GraphDocument {
        &self.graph
    }

    pub fn options(&self) -> &CompileOptions {
        &self.options
    }

    pub fn version(&self) -> u64 {
        self.version
    }
}
