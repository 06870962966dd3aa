//! Tree builder: constructs a tagged tree from an ordered layout.

use std::io::Write;

use rand::Rng;
use tracing::{debug, instrument};

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::node::Node;
use crate::domain::tree::TaggedTree;
use crate::domain::value::ValueKind;

/// Default length of random text values.
pub const DEFAULT_TEXT_LEN: usize = 10;

/// One setup step: create a node of `kind` tagged `tag` below `parent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeSpec {
    /// `None` for the root
    pub parent: Option<char>,
    pub tag: char,
    pub kind: ValueKind,
}

impl NodeSpec {
    pub fn root(tag: char, kind: ValueKind) -> Self {
        Self {
            parent: None,
            tag,
            kind,
        }
    }

    pub fn child(parent: char, tag: char, kind: ValueKind) -> Self {
        Self {
            parent: Some(parent),
            tag,
            kind,
        }
    }
}

/// Ordered setup sequence; the first entry must be the root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Layout {
    specs: Vec<NodeSpec>,
}

impl Layout {
    pub fn new(specs: Vec<NodeSpec>) -> Self {
        Self { specs }
    }

    /// The fixed 13-node hierarchy, kinds alternating text/int.
    ///
    /// ```text
    ///         A
    ///       / | \
    ///      B  C  D
    ///    /|\  |  | \
    ///   E F G H  I  J
    ///           /|\
    ///          K L M
    /// ```
    pub fn standard() -> Self {
        use ValueKind::{Int, Text};
        Self::new(vec![
            NodeSpec::root('A', Text),
            NodeSpec::child('A', 'B', Int),
            NodeSpec::child('A', 'C', Text),
            NodeSpec::child('A', 'D', Int),
            NodeSpec::child('B', 'E', Text),
            NodeSpec::child('B', 'F', Int),
            NodeSpec::child('B', 'G', Text),
            NodeSpec::child('C', 'H', Int),
            NodeSpec::child('D', 'I', Text),
            NodeSpec::child('D', 'J', Int),
            NodeSpec::child('I', 'K', Text),
            NodeSpec::child('I', 'L', Int),
            NodeSpec::child('I', 'M', Text),
        ])
    }

    pub fn push(&mut self, spec: NodeSpec) {
        self.specs.push(spec);
    }

    pub fn specs(&self) -> &[NodeSpec] {
        &self.specs
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

/// Constructs a [`TaggedTree`] from a [`Layout`], drawing random values.
///
/// When an observer is set, each node's rendering is written to it right
/// after the node is created, before it is attached.
pub struct TreeBuilder<'a, R> {
    rng: R,
    text_len: usize,
    unique_tags: bool,
    observer: Option<&'a mut dyn Write>,
}

impl<'a, R: Rng> TreeBuilder<'a, R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            text_len: DEFAULT_TEXT_LEN,
            unique_tags: false,
            observer: None,
        }
    }

    pub fn text_len(mut self, text_len: usize) -> Self {
        self.text_len = text_len;
        self
    }

    /// Reject a tag already present in the tree.
    pub fn unique_tags(mut self, unique_tags: bool) -> Self {
        self.unique_tags = unique_tags;
        self
    }

    pub fn observer(mut self, sink: &'a mut dyn Write) -> Self {
        self.observer = Some(sink);
        self
    }

    #[instrument(level = "debug", skip_all, fields(nodes = layout.len()))]
    pub fn build(&mut self, layout: &Layout) -> DomainResult<TaggedTree> {
        let mut tree = TaggedTree::new();

        for spec in layout.specs() {
            if self.unique_tags && tree.contains(spec.tag) {
                return Err(DomainError::DuplicateTag(spec.tag));
            }
            // The observer only sees nodes that get attached.
            match spec.parent {
                None if !tree.is_empty() => return Err(DomainError::RootAlreadySet(spec.tag)),
                Some(_) if tree.is_empty() => return Err(DomainError::MissingRoot(spec.tag)),
                Some(parent) if !tree.contains(parent) => {
                    return Err(DomainError::ParentNotFound(parent))
                }
                _ => {}
            }

            let node = Node::new(spec.tag, spec.kind.generate(&mut self.rng, self.text_len));
            debug!("build: created {}", node);
            if let Some(sink) = self.observer.as_mut() {
                node.render(sink)?;
            }

            match spec.parent {
                None => tree.set_root(node)?,
                Some(parent) => tree.attach(parent, node)?,
            }
        }

        Ok(tree)
    }
}
