use crate::ast::{NodeId, RootPolicy, TreeNode};
use crate::error::{ParseError, ParseResult};
use crate::tokenizer::{tokenize, OutlineLine, DEFAULT_INDENT};
use tracing::debug;

/// Builds topic trees from indent-marked outline text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutlineParser {
    indent: char,
}

impl Default for OutlineParser {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT,
        }
    }
}

impl OutlineParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different indent marker (e.g. a space)
    pub fn with_indent(indent: char) -> ParseResult<Self> {
        if indent == '\n' || indent == '\r' {
            return Err(ParseError::invalid_indent(indent.to_string()));
        }
        Ok(Self { indent })
    }

    /// Parse the indent marker from a config string (exactly one character)
    pub fn from_indent_str(indent: &str) -> ParseResult<Self> {
        let mut chars = indent.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::with_indent(c),
            _ => Err(ParseError::invalid_indent(indent)),
        }
    }

    pub fn indent(&self) -> char {
        self.indent
    }

    /// Non-blank lines of `text` with their depth under this parser's indent
    pub fn lines<'a>(&self, text: &'a str) -> Vec<OutlineLine<'a>> {
        tokenize(text, self.indent)
    }

    /// Build every top-level topic of the outline.
    ///
    /// Each line is attached under the nearest preceding line whose depth is
    /// strictly smaller. Lines with no such ancestor become top-level topics,
    /// whatever their depth.
    pub fn build_forest(&self, text: &str) -> Vec<TreeNode> {
        let lines = self.lines(text);
        let mut roots = Vec::new();
        // Open ancestors, innermost last. The synthetic root is implicit.
        let mut stack: Vec<TreeNode> = Vec::new();

        for line in &lines {
            while stack.last().is_some_and(|top| top.level >= line.depth) {
                close_innermost(&mut stack, &mut roots);
            }
            stack.push(TreeNode::new(NodeId::Line(line.index), line.label, line.depth));
        }
        while !stack.is_empty() {
            close_innermost(&mut stack, &mut roots);
        }

        debug!(topics = lines.len(), roots = roots.len(), "Built outline forest");
        roots
    }

    /// Build the first top-level topic, or the placeholder for an empty outline.
    ///
    /// Top-level topics after the first are not part of the result.
    pub fn build(&self, text: &str) -> TreeNode {
        let mut roots = self.build_forest(text).into_iter();
        match roots.next() {
            Some(root) => {
                let dropped = roots.count();
                if dropped > 0 {
                    debug!(dropped, "Ignoring additional top-level topics");
                }
                root
            }
            None => TreeNode::placeholder(),
        }
    }

    /// Build according to `policy`. Never returns an empty vector.
    pub fn build_with_policy(&self, text: &str, policy: RootPolicy) -> Vec<TreeNode> {
        match policy {
            RootPolicy::First => vec![self.build(text)],
            RootPolicy::Forest => {
                let roots = self.build_forest(text);
                if roots.is_empty() {
                    vec![TreeNode::placeholder()]
                } else {
                    roots
                }
            }
        }
    }
}

fn close_innermost(stack: &mut Vec<TreeNode>, roots: &mut Vec<TreeNode>) {
    if let Some(node) = stack.pop() {
        match stack.last_mut() {
            Some(parent) => parent.children.push(node),
            None => roots.push(node),
        }
    }
}

/// Build with the default tab-indented parser
pub fn build(text: &str) -> TreeNode {
    OutlineParser::default().build(text)
}

/// Build all top-level topics with the default tab-indented parser
pub fn build_forest(text: &str) -> Vec<TreeNode> {
    OutlineParser::default().build_forest(text)
}
