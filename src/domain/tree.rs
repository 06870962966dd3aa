//! Driver-facing wrapper holding an optional root node.

use std::io::{self, Write};

use termtree::Tree;
use tracing::instrument;

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::node::{Node, PreOrderIter};

/// Tree with an optional root.
///
/// An empty tree answers every lookup with `None` and renders nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaggedTree {
    root: Option<Node>,
}

impl TaggedTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root(root: Node) -> Self {
        Self { root: Some(root) }
    }

    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Install `node` as root; fails if the tree already has one.
    pub fn set_root(&mut self, node: Node) -> DomainResult<()> {
        if self.root.is_some() {
            return Err(DomainError::RootAlreadySet(node.tag()));
        }
        self.root = Some(node);
        Ok(())
    }

    /// Append `child` below the first node tagged `parent`.
    #[instrument(level = "trace", skip(self, child), fields(child = %child.tag()))]
    pub fn attach(&mut self, parent: char, child: Node) -> DomainResult<()> {
        let parent_node = self
            .root
            .as_mut()
            .and_then(|root| root.find_mut(parent))
            .ok_or(DomainError::ParentNotFound(parent))?;
        parent_node.add_child(child);
        Ok(())
    }

    pub fn find(&self, tag: char) -> Option<&Node> {
        self.root.as_ref().and_then(|root| root.find(tag))
    }

    pub fn contains(&self, tag: char) -> bool {
        self.find(tag).is_some()
    }

    /// Pre-order dump of the whole tree.
    pub fn render_all<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        match &self.root {
            Some(root) => root.render_subtree(out),
            None => Ok(()),
        }
    }

    pub fn iter(&self) -> PreOrderIter<'_> {
        match &self.root {
            Some(root) => root.iter(),
            None => PreOrderIter::empty(),
        }
    }

    pub fn len(&self) -> usize {
        self.root.as_ref().map_or(0, Node::len)
    }

    pub fn depth(&self) -> usize {
        self.root.as_ref().map_or(0, Node::depth)
    }

    /// Box-drawing view of the hierarchy.
    pub fn to_display_tree(&self) -> Tree<String> {
        fn build(node: &Node) -> Tree<String> {
            let label = format!("{} ({}: {})", node.tag(), node.value().kind(), node.value());
            Tree::new(label).with_leaves(node.children().iter().map(build))
        }

        match &self.root {
            Some(root) => build(root),
            None => Tree::new("(empty tree)".to_string()),
        }
    }
}
