use crate::ast::TreeNode;
use crate::tokenizer::DEFAULT_INDENT;

/// Writes topic trees back to outline text
pub struct Serializer {
    indent: char,
    output: String,
}

impl Serializer {
    pub fn new(indent: char) -> Self {
        Self {
            indent,
            output: String::new(),
        }
    }

    /// Append a top-level topic and its subtree.
    ///
    /// Depth is taken from the tree shape, not from `level`, so a topic that
    /// skipped levels in its source is written one level below its parent.
    pub fn write_tree(&mut self, node: &TreeNode) {
        if node.is_placeholder() {
            return;
        }
        self.write_node(node, 0);
    }

    fn write_node(&mut self, node: &TreeNode, depth: usize) {
        if !self.output.is_empty() {
            self.output.push('\n');
        }
        for _ in 0..depth {
            self.output.push(self.indent);
        }
        self.output.push_str(&node.label);

        for child in &node.children {
            self.write_node(child, depth + 1);
        }
    }

    pub fn finish(self) -> String {
        self.output
    }
}

/// Serialize one tree with tab indentation
pub fn serialize(tree: &TreeNode) -> String {
    serialize_forest(std::slice::from_ref(tree))
}

/// Serialize several top-level topics with tab indentation
pub fn serialize_forest(roots: &[TreeNode]) -> String {
    let mut serializer = Serializer::new(DEFAULT_INDENT);
    for root in roots {
        serializer.write_tree(root);
    }
    serializer.finish()
}
