use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const NODE_PREFIX: &str = "node-";
const EMPTY_ID: &str = "empty";

/// Label given to the placeholder node of an empty outline
pub const PLACEHOLDER_LABEL: &str = "No content";

/// Identity of a topic node.
///
/// Ids are positional: `Line(n)` names whatever topic sits on line `n` of the
/// outline the tree was built from. They are not stable across edits that
/// insert or delete lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum NodeId {
    /// Topic built from the zero-based line index of the unfiltered outline
    Line(usize),

    /// Placeholder produced for an outline with no topics
    Empty,
}

impl NodeId {
    /// Line index this id was derived from (`None` for the placeholder)
    pub fn line(&self) -> Option<usize> {
        match self {
            NodeId::Line(index) => Some(*index),
            NodeId::Empty => None,
        }
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeId::Line(index) => write!(f, "{}{}", NODE_PREFIX, index),
            NodeId::Empty => f.write_str(EMPTY_ID),
        }
    }
}

impl FromStr for NodeId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == EMPTY_ID {
            return Ok(NodeId::Empty);
        }

        let digits = s
            .strip_prefix(NODE_PREFIX)
            .ok_or_else(|| ParseError::invalid_node_id(s))?;
        let index: usize = digits
            .parse()
            .map_err(|_| ParseError::invalid_node_id(s))?;

        // Only the canonical spelling names a node ("node-01" never appears in a tree)
        if index.to_string() != digits {
            return Err(ParseError::invalid_node_id(s));
        }

        Ok(NodeId::Line(index))
    }
}

impl From<NodeId> for String {
    fn from(id: NodeId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for NodeId {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// 2-D canvas position
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Topic node of the outline tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
    pub id: NodeId,
    pub label: String,
    /// Indent depth of the source line
    pub level: usize,
    /// Children in source order
    pub children: Vec<TreeNode>,
    /// Assigned by layout; origin until then
    pub position: Position,
}

impl TreeNode {
    pub fn new(id: NodeId, label: impl Into<String>, level: usize) -> Self {
        Self {
            id,
            label: label.into(),
            level,
            children: Vec::new(),
            position: Position::default(),
        }
    }

    /// Placeholder returned for outlines without any topic
    pub fn placeholder() -> Self {
        Self::new(NodeId::Empty, PLACEHOLDER_LABEL, 0)
    }

    pub fn is_placeholder(&self) -> bool {
        self.id == NodeId::Empty
    }

    #[cfg(test)]
    fn with_child(mut self, child: TreeNode) -> Self {
        self.children.push(child);
        self
    }

    /// Number of nodes in this subtree, including self
    pub fn count(&self) -> usize {
        self.walk().count()
    }

    /// Pre-order traversal of this subtree
    pub fn walk(&self) -> Walk<'_> {
        Walk { stack: vec![self] }
    }

    pub fn find(&self, id: NodeId) -> Option<&TreeNode> {
        self.walk().find(|node| node.id == id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.find(id).is_some()
    }
}

/// Pre-order iterator over a subtree
pub struct Walk<'a> {
    stack: Vec<&'a TreeNode>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// What to do with top-level topics after the first one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RootPolicy {
    /// Only the first top-level topic is kept; later ones are not rendered
    #[default]
    First,

    /// Every top-level topic is kept
    Forest,
}

impl FromStr for RootPolicy {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first" => Ok(RootPolicy::First),
            "forest" => Ok(RootPolicy::Forest),
            other => Err(ParseError::unknown_root_policy(other)),
        }
    }
}
