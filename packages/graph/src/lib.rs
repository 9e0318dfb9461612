//! # Mindmap Graph
//!
//! Positions outline trees and flattens them into node/edge lists.
//!
//! ```text
//! text ──parser──▶ TreeNode ──layout──▶ positioned TreeNode ──emit──▶ GraphDocument
//! ```
//!
//! The graph is a derived view: it is recomputed from scratch for every text
//! change and carries no identity beyond the positional node ids.

pub mod compiler;
pub mod graph;
pub mod layout;
pub mod width;

pub use compiler::{compile, compile_tree, CompileOptions};
pub use graph::{edge_id, emit, emit_forest, GraphDocument, GraphEdge, GraphNode, NodeKind};
pub use layout::{layout, layout_forest, LayoutOptions};
pub use width::{estimate_width, WidthOptions};
