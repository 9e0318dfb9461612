//! Structural properties of trees built from outlines

use mindmap_parser::{build, build_forest, split_lines, NodeId, TreeNode};

const SAMPLES: &[&str] = &[
    "A\n\tB",
    "Mind map\n\tTopic 1\n\t\tTopic 1.1\n\t\tTopic 1.2\n\tTopic 2\n\t\tTopic 2.1\n\t\t\tTopic 2.1.1\n\tTopic 3",
    "A\n\t\t\tB\n\t\tC\n\tD\n\t\t\t\tE",
    "\tIndented start\n\t\tChild\nTop\n\tUnder top",
    "A\n\n\n\tB\n\t\n\t\tC\n",
    "Root\n\tx\n\ty\n\tz\n\t\tz1\n\t\tz2\n\t\t\tz21\n\tw",
    "单行主题\n\t子主题",
];

/// (depth, line index) for every non-blank line, in document order
fn source_lines(text: &str) -> Vec<(usize, usize)> {
    split_lines(text)
        .iter()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| (line.chars().take_while(|&c| c == '\t').count(), index))
        .collect()
}

fn collect_parents(node: &TreeNode, out: &mut Vec<(NodeId, NodeId)>) {
    for child in &node.children {
        out.push((node.id, child.id));
        collect_parents(child, out);
    }
}

#[test]
fn test_parent_is_nearest_preceding_shallower_line() {
    for text in SAMPLES {
        let lines = source_lines(text);
        let forest = build_forest(text);

        let mut pairs = Vec::new();
        for root in &forest {
            collect_parents(root, &mut pairs);
        }

        for (parent, child) in pairs {
            let child_line = child.line().unwrap();
            let pos = lines.iter().position(|(_, i)| *i == child_line).unwrap();
            let child_depth = lines[pos].0;

            let expected = lines[..pos]
                .iter()
                .rev()
                .find(|(depth, _)| *depth < child_depth)
                .map(|(_, i)| NodeId::Line(*i));

            assert_eq!(Some(parent), expected, "wrong parent for {} in {:?}", child, text);
        }
    }
}

#[test]
fn test_parent_level_strictly_less() {
    fn check(node: &TreeNode) {
        for child in &node.children {
            assert!(node.level < child.level);
            check(child);
        }
    }
    for text in SAMPLES {
        for root in build_forest(text) {
            check(&root);
        }
    }
}

#[test]
fn test_forest_covers_every_non_blank_line() {
    for text in SAMPLES {
        let total: usize = build_forest(text).iter().map(TreeNode::count).sum();
        assert_eq!(total, source_lines(text).len(), "{:?}", text);
    }
}

#[test]
fn test_single_root_count_matches_lines() {
    // Only one top-level line, so nothing is dropped
    let text = SAMPLES[1];
    assert_eq!(build(text).count(), source_lines(text).len());
}

#[test]
fn test_build_is_deterministic() {
    for text in SAMPLES {
        assert_eq!(build(text), build(text));
    }
}

#[test]
fn test_example_tree_shape() {
    let tree = build("A\n\tB");
    let json = serde_json::to_value(&tree).unwrap();
    assert_eq!(json["id"], "node-0");
    assert_eq!(json["label"], "A");
    assert_eq!(json["children"][0]["id"], "node-1");
    assert_eq!(json["children"][0]["label"], "B");
    assert_eq!(json["children"][0]["children"].as_array().unwrap().len(), 0);
}
