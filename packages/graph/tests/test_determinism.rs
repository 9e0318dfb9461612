//! Compilation must produce byte-identical output for identical input

use mindmap_graph::{compile, CompileOptions, GraphDocument, NodeKind};
use mindmap_parser::{NodeId, Position, RootPolicy};

const OUTLINE: &str = "Mind map\n\tTopic 1\n\t\tTopic 1.1\n\t\tTopic 1.2\n\tTopic 2\n\t\tTopic 2.1\n\t\t\tTopic 2.1.1\n\tTopic 3";

fn json(doc: &GraphDocument) -> String {
    doc.to_json().unwrap()
}

#[test]
fn test_repeated_compilation_is_identical() {
    let options = CompileOptions::default();
    let first = json(&compile(OUTLINE, &options));
    for _ in 0..10 {
        assert_eq!(json(&compile(OUTLINE, &options)), first);
    }
}

#[test]
fn test_forest_compilation_is_identical() {
    let options = CompileOptions {
        root_policy: RootPolicy::Forest,
        ..CompileOptions::default()
    };
    let text = "A\n\tA1\nB\n\tB1\n\tB2\nC";
    assert_eq!(json(&compile(text, &options)), json(&compile(text, &options)));
}

#[test]
fn test_sample_outline_layout() {
    let doc = compile(OUTLINE, &CompileOptions::default());

    assert_eq!(doc.nodes.len(), 8);
    assert_eq!(doc.edges.len(), 7);

    let pos = |i: usize| doc.node(NodeId::Line(i)).unwrap().position;
    assert_eq!(pos(0), Position::new(0.0, 0.0));
    assert_eq!(pos(1), Position::new(250.0, -120.0));
    assert_eq!(pos(4), Position::new(250.0, 0.0));
    assert_eq!(pos(7), Position::new(250.0, 120.0));
    assert_eq!(pos(2), Position::new(500.0, -180.0));
    assert_eq!(pos(3), Position::new(500.0, -60.0));
    assert_eq!(pos(5), Position::new(500.0, 0.0));
    assert_eq!(pos(6), Position::new(750.0, 0.0));
}

#[test]
fn test_every_edge_connects_emitted_nodes() {
    let doc = compile(OUTLINE, &CompileOptions::default());
    for edge in &doc.edges {
        assert!(doc.contains(edge.source));
        assert!(doc.contains(edge.target));
        assert_eq!(edge.id, format!("edge-{}-{}", edge.source, edge.target));
    }
    // Tree: every node but the root has exactly one incoming edge
    assert_eq!(doc.edges.len(), doc.nodes.len() - 1);
}

#[test]
fn test_whitespace_only_outline() {
    let doc = compile("  \n\t\n", &CompileOptions::default());
    assert_eq!(doc.nodes.len(), 1);
    assert_eq!(doc.nodes[0].id, NodeId::Empty);
    assert_eq!(doc.nodes[0].kind, NodeKind::Placeholder);
    assert!(doc.edges.is_empty());
}
