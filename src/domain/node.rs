//! Tagged tree node owning its children by value.

use std::fmt;
use std::io::{self, Write};

use crate::domain::value::Value;

/// Tree node: a single-character tag, a value, and owned children.
///
/// Children are kept in insertion order. Dropping a node drops its whole
/// subtree. Tags are not required to be unique; lookups return the first
/// match in pre-order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    tag: char,
    value: Value,
    children: Vec<Node>,
}

impl Node {
    /// Create a leaf node. Has no output side effect, see [`Node::render`].
    pub fn new(tag: char, value: impl Into<Value>) -> Self {
        Self {
            tag,
            value: value.into(),
            children: Vec::new(),
        }
    }

    pub fn tag(&self) -> char {
        self.tag
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Append `child` as the last child.
    pub fn add_child(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Write this node's tag and value as one line.
    pub fn render<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self)
    }

    /// Write this node, then every descendant, in pre-order.
    pub fn render_subtree<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        for node in self.iter() {
            node.render(out)?;
        }
        Ok(())
    }

    /// First node in pre-order (self before children, children left to right)
    /// whose tag equals `tag`.
    pub fn find(&self, tag: char) -> Option<&Node> {
        self.iter().find(|node| node.tag == tag)
    }

    /// Mutable variant of [`Node::find`] with the same first-match policy.
    pub fn find_mut(&mut self, tag: char) -> Option<&mut Node> {
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            if node.tag == tag {
                return Some(node);
            }
            stack.extend(node.children.iter_mut().rev());
        }
        None
    }

    /// Pre-order iterator over this subtree.
    pub fn iter(&self) -> PreOrderIter<'_> {
        PreOrderIter { stack: vec![self] }
    }

    /// Number of nodes in this subtree, including self.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Always false: a subtree holds at least its own root.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of levels in this subtree; a leaf has depth 1.
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut stack = vec![(self, 1)];
        while let Some((node, level)) = stack.pop() {
            max_depth = max_depth.max(level);
            stack.extend(node.children.iter().map(|child| (child, level + 1)));
        }
        max_depth
    }

    /// Tags of all leaves, in pre-order.
    pub fn leaf_tags(&self) -> Vec<char> {
        self.iter()
            .filter(|node| node.is_leaf())
            .map(|node| node.tag)
            .collect()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node Name : {}\tNode Value : {}", self.tag, self.value)
    }
}

impl Drop for Node {
    // Detach descendants onto a heap stack so deep chains don't recurse.
    fn drop(&mut self) {
        let mut stack = std::mem::take(&mut self.children);
        while let Some(mut node) = stack.pop() {
            stack.append(&mut node.children);
        }
    }
}

impl<'a> IntoIterator for &'a Node {
    type Item = &'a Node;
    type IntoIter = PreOrderIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Depth-first pre-order traversal using an explicit stack.
pub struct PreOrderIter<'a> {
    stack: Vec<&'a Node>,
}

impl PreOrderIter<'_> {
    pub(crate) fn empty() -> Self {
        PreOrderIter { stack: Vec::new() }
    }
}

impl<'a> Iterator for PreOrderIter<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.stack.pop()?;
        // Push children in reverse order for left-to-right traversal
        self.stack.extend(current.children.iter().rev());
        Some(current)
    }
}
