//! Graph updates pushed to session subscribers

use mindmap_editor::EditSession;
use mindmap_graph::{GraphEdge, GraphNode};
use serde::{Deserialize, Serialize};

/// Everything a renderer needs after a change
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphUpdate {
    pub version: u64,
    pub outline: String,
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
    pub can_undo: bool,
    pub can_redo: bool,
    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
}

impl GraphUpdate {
    pub fn from_session(session: &EditSession) -> Self {
        let graph = session.graph();
        Self {
            version: session.version(),
            outline: session.outline().to_string(),
            nodes: graph.nodes.clone(),
            edges: graph.edges.clone(),
            can_undo: session.can_undo(),
            can_redo: session.can_redo(),
            timestamp: chrono::Utc::now().timestamp_millis(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mindmap_editor::EditorConfig;

    #[test]
    fn test_update_json_shape() {
        let session = EditSession::new("A\n\tB", &EditorConfig::default()).unwrap();
        let update = GraphUpdate::from_session(&session);

        let value: serde_json::Value = serde_json::from_str(&update.to_json().unwrap()).unwrap();
        assert_eq!(value["version"], 0);
        assert_eq!(value["outline"], "A\n\tB");
        assert_eq!(value["canUndo"], false);
        assert_eq!(value["canRedo"], false);
        assert_eq!(value["nodes"].as_array().unwrap().len(), 2);
        assert_eq!(value["edges"][0]["id"], "edge-node-0-node-1");
        assert!(value["timestamp"].as_i64().unwrap() > 0);
    }
}
