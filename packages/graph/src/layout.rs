//! # Tree Layout
//!
//! Depth-first placement: every child column sits `horizontal_spacing` to the
//! right of its parent, and siblings are spread `vertical_spacing` apart,
//! centered on the parent's y.
//!
//! Subtrees are not checked against each other for overlap. Each parent only
//! reserves room proportional to its own child count.

use mindmap_parser::{Position, TreeNode};
use serde::{Deserialize, Serialize};

pub const DEFAULT_HORIZONTAL_SPACING: f64 = 250.0;
pub const DEFAULT_VERTICAL_SPACING: f64 = 120.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutOptions {
    pub horizontal_spacing: f64,
    pub vertical_spacing: f64,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            horizontal_spacing: DEFAULT_HORIZONTAL_SPACING,
            vertical_spacing: DEFAULT_VERTICAL_SPACING,
        }
    }
}

/// Assign positions to `node` and all of its descendants, with `node` at `origin`
pub fn layout(node: &mut TreeNode, origin: Position, options: &LayoutOptions) {
    node.position = origin;
    place_column(
        &mut node.children,
        origin.x + options.horizontal_spacing,
        origin.y,
        options,
    );
}

/// Lay out several top-level topics as one column centered on `origin.y`.
///
/// A single root lands exactly on `origin`.
pub fn layout_forest(roots: &mut [TreeNode], origin: Position, options: &LayoutOptions) {
    place_column(roots, origin.x, origin.y, options);
}

fn place_column(nodes: &mut [TreeNode], x: f64, center_y: f64, options: &LayoutOptions) {
    if nodes.is_empty() {
        return;
    }

    let span = (nodes.len() - 1) as f64 * options.vertical_spacing;
    let mut y = center_y - span / 2.0;

    for node in nodes.iter_mut() {
        layout(node, Position::new(x, y), options);
        y += options.vertical_spacing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mindmap_parser::{build, build_forest};

    #[test]
    fn test_single_node_at_origin() {
        let mut tree = build("A");
        layout(&mut tree, Position::default(), &LayoutOptions::default());
        assert_eq!(tree.position, Position::new(0.0, 0.0));
    }

    #[test]
    fn test_children_centered_on_parent() {
        let mut tree = build("A\n\tB\n\tC\n\tD");
        layout(&mut tree, Position::default(), &LayoutOptions::default());

        let ys: Vec<f64> = tree.children.iter().map(|c| c.position.y).collect();
        assert_eq!(ys, vec![-120.0, 0.0, 120.0]);
        assert!(tree.children.iter().all(|c| c.position.x == 250.0));
    }

    #[test]
    fn test_two_children_straddle_parent() {
        let mut tree = build("A\n\tB\n\tC");
        layout(&mut tree, Position::default(), &LayoutOptions::default());
        assert_eq!(tree.children[0].position, Position::new(250.0, -60.0));
        assert_eq!(tree.children[1].position, Position::new(250.0, 60.0));
    }

    #[test]
    fn test_grandchildren_centered_on_their_parent() {
        let mut tree = build("A\n\tB\n\t\tB1\n\t\tB2\n\tC");
        layout(&mut tree, Position::default(), &LayoutOptions::default());

        let b = &tree.children[0];
        assert_eq!(b.position, Position::new(250.0, -60.0));
        assert_eq!(b.children[0].position, Position::new(500.0, -120.0));
        assert_eq!(b.children[1].position, Position::new(500.0, 0.0));
    }

    #[test]
    fn test_custom_origin_and_spacing() {
        let mut tree = build("A\n\tB\n\tC");
        let options = LayoutOptions {
            horizontal_spacing: 100.0,
            vertical_spacing: 50.0,
        };
        layout(&mut tree, Position::new(10.0, 20.0), &options);

        assert_eq!(tree.position, Position::new(10.0, 20.0));
        assert_eq!(tree.children[0].position, Position::new(110.0, -5.0));
        assert_eq!(tree.children[1].position, Position::new(110.0, 45.0));
    }

    #[test]
    fn test_forest_stacks_roots() {
        let mut roots = build_forest("A\nB\n\tB1");
        layout_forest(&mut roots, Position::default(), &LayoutOptions::default());

        assert_eq!(roots[0].position, Position::new(0.0, -60.0));
        assert_eq!(roots[1].position, Position::new(0.0, 60.0));
        assert_eq!(roots[1].children[0].position, Position::new(250.0, 60.0));
    }

    #[test]
    fn test_forest_with_single_root_matches_layout() {
        let mut a = build_forest("A\n\tB\n\tC");
        let mut b = build("A\n\tB\n\tC");
        layout_forest(&mut a, Position::default(), &LayoutOptions::default());
        layout(&mut b, Position::default(), &LayoutOptions::default());
        assert_eq!(a[0], b);
    }
}
