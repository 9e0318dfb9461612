use crate::width::WidthOptions;
use mindmap_parser::{NodeId, Position, TreeNode};
use serde::{Deserialize, Serialize};

/// Role of a node in the rendered graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// Top-level topic
    Root,
    Topic,
    /// Stand-in for an empty outline
    Placeholder,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: NodeId,
    pub label: String,
    pub position: Position,
    pub width: f64,
    pub kind: NodeKind,
}

/// Parent → child connection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub id: String,
    pub source: NodeId,
    pub target: NodeId,
}

impl GraphEdge {
    pub fn new(source: NodeId, target: NodeId) -> Self {
        Self {
            id: edge_id(source, target),
            source,
            target,
        }
    }
}

/// `edge-<parent>-<child>`
pub fn edge_id(source: NodeId, target: NodeId) -> String {
    format!("edge-{}-{}", source, target)
}

/// Flat node and edge lists handed to a renderer
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GraphDocument {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl GraphDocument {
    pub fn node(&self, id: NodeId) -> Option<&GraphNode> {
        self.nodes.iter().find(|node| node.id == id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    /// Edges leaving `id`, in emission order
    pub fn edges_from(&self, id: NodeId) -> impl Iterator<Item = &GraphEdge> {
        self.edges.iter().filter(move |edge| edge.source == id)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Flatten a positioned tree (pre-order)
pub fn emit(tree: &TreeNode, width: &WidthOptions) -> GraphDocument {
    emit_forest(std::slice::from_ref(tree), width)
}

/// Flatten several positioned top-level topics (pre-order, roots in order)
pub fn emit_forest(roots: &[TreeNode], width: &WidthOptions) -> GraphDocument {
    let mut doc = GraphDocument::default();
    for root in roots {
        let kind = if root.is_placeholder() {
            NodeKind::Placeholder
        } else {
            NodeKind::Root
        };
        emit_node(root, kind, width, &mut doc);
    }
    doc
}

fn emit_node(node: &TreeNode, kind: NodeKind, width: &WidthOptions, doc: &mut GraphDocument) {
    doc.nodes.push(GraphNode {
        id: node.id,
        label: node.label.clone(),
        position: node.position,
        width: width.estimate(&node.label),
        kind,
    });

    for child in &node.children {
        doc.edges.push(GraphEdge::new(node.id, child.id));
        emit_node(child, NodeKind::Topic, width, doc);
    }
}
