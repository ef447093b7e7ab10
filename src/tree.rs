//! The host tree that sectionizing rearranges.
//!
//! The sectionizer only ever talks to a tree through the [`Host`] trait: list a node's children,
//! ask whether a node is a heading, make a wrapper, and move a node under a new parent. Anything
//! that can answer those four questions can be sectionized. [`Document`] is the arena-backed
//! implementation used by the CLI and the markdown loader.

use std::fmt;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// Opaque handle to a node stored in a [`Document`].
pub struct NodeId(usize);

impl NodeId {
    #[must_use]
    /// Position of the node in the arena, stable for the lifetime of the document.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Discriminant deciding how a node takes part in sectionizing and rendering.
pub enum Tag {
    /// The document root; never moved.
    Root,
    /// A heading, where 1 is the most significant level.
    Heading {
        /// Heading significance (1 for `h1`, 2 for `h2`, ...).
        level: u8,
    },
    /// Any other leaf block such as a paragraph, list or code block.
    Block {
        /// Source block kind, e.g. `paragraph` or `fenced_code_block`.
        kind: String,
    },
    /// A wrapper created by sectionizing.
    Container {
        /// Class name given to the wrapper.
        class: String,
    },
}

impl Tag {
    #[must_use]
    /// The heading level, or `None` for anything that is not a heading.
    pub fn heading_level(&self) -> Option<u8> {
        match self {
            Self::Heading { level } => Some(*level),
            _ => None,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Failures raised by tree primitives.
pub enum TreeError {
    /// The handle does not belong to this document.
    #[error("node {0} does not exist in this document")]
    UnknownNode(NodeId),
    /// The move would place a node inside its own subtree.
    #[error("cannot append {child} under {parent}: {child} is an ancestor of {parent}")]
    CyclicAppend {
        /// Requested new parent.
        parent: NodeId,
        /// Node that was to be moved.
        child: NodeId,
    },
    /// The root has no parent and cannot be given one.
    #[error("the document root cannot be moved")]
    RootNotMovable,
}

/// Tree primitives the sectionizer relies on.
///
/// Implementations own node storage. The sectionizer never inspects nodes beyond these calls and
/// propagates any `Error` unchanged.
pub trait Host {
    /// Failure raised by the primitives.
    type Error;

    /// Snapshot of a node's direct children in order.
    ///
    /// # Errors
    ///
    /// Fails if `id` is not a node of this tree.
    fn children(&self, id: NodeId) -> Result<Vec<NodeId>, Self::Error>;

    /// Heading level of a node, `None` if it is not a heading.
    ///
    /// # Errors
    ///
    /// Fails if `id` is not a node of this tree.
    fn heading_level(&self, id: NodeId) -> Result<Option<u8>, Self::Error>;

    /// Create a detached wrapper node carrying `class`.
    fn create_container(&mut self, class: &str) -> NodeId;

    /// Move `child` to be the last child of `parent`, detaching it from wherever it was.
    ///
    /// # Errors
    ///
    /// Fails if either node is unknown or the move is structurally impossible.
    fn append(&mut self, parent: NodeId, child: NodeId) -> Result<(), Self::Error>;
}

#[derive(Clone, Debug)]
struct Node {
    tag: Tag,
    text: Option<String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

#[derive(Clone, Debug)]
/// Arena of nodes with a single root.
pub struct Document {
    nodes: Vec<Node>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    #[must_use]
    /// Creates a document holding only its root.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                tag: Tag::Root,
                text: None,
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    #[must_use]
    /// Handle of the root node.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    #[must_use]
    /// Total number of nodes ever created, attached or not.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Creates a detached node.
    pub fn create(&mut self, tag: Tag, text: Option<String>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            tag,
            text,
            parent: None,
            children: Vec::new(),
        });
        id
    }

    /// Creates a node and appends it as the last child of `parent`.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::UnknownNode`] if `parent` is not in this document.
    pub fn push(
        &mut self,
        parent: NodeId,
        tag: Tag,
        text: Option<String>,
    ) -> Result<NodeId, TreeError> {
        self.node(parent)?;
        let id = self.create(tag, text);
        self.append(parent, id)?;
        Ok(id)
    }

    /// Tag of a node.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::UnknownNode`] for a foreign handle.
    pub fn tag(&self, id: NodeId) -> Result<&Tag, TreeError> {
        Ok(&self.node(id)?.tag)
    }

    /// Text carried by a node, if any.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::UnknownNode`] for a foreign handle.
    pub fn text(&self, id: NodeId) -> Result<Option<&str>, TreeError> {
        Ok(self.node(id)?.text.as_deref())
    }

    /// Current parent of a node.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::UnknownNode`] for a foreign handle.
    pub fn parent(&self, id: NodeId) -> Result<Option<NodeId>, TreeError> {
        Ok(self.node(id)?.parent)
    }

    /// Borrowed view of a node's children.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::UnknownNode`] for a foreign handle.
    pub fn child_slice(&self, id: NodeId) -> Result<&[NodeId], TreeError> {
        Ok(&self.node(id)?.children)
    }

    /// Removes a node from its parent, leaving it and its subtree detached.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::UnknownNode`] for a foreign handle.
    pub fn detach(&mut self, id: NodeId) -> Result<(), TreeError> {
        if let Some(parent) = self.node(id)?.parent {
            self.nodes[parent.0].children.retain(|&c| c != id);
            self.nodes[id.0].parent = None;
        }
        Ok(())
    }

    fn node(&self, id: NodeId) -> Result<&Node, TreeError> {
        self.nodes.get(id.0).ok_or(TreeError::UnknownNode(id))
    }

    fn is_ancestor_or_self(&self, candidate: NodeId, of: NodeId) -> bool {
        let mut cursor = Some(of);
        while let Some(id) = cursor {
            if id == candidate {
                return true;
            }
            cursor = self.nodes[id.0].parent;
        }
        false
    }
}

impl Host for Document {
    type Error = TreeError;

    fn children(&self, id: NodeId) -> Result<Vec<NodeId>, TreeError> {
        Ok(self.node(id)?.children.clone())
    }

    fn heading_level(&self, id: NodeId) -> Result<Option<u8>, TreeError> {
        Ok(self.node(id)?.tag.heading_level())
    }

    fn create_container(&mut self, class: &str) -> NodeId {
        self.create(
            Tag::Container {
                class: class.to_string(),
            },
            None,
        )
    }

    fn append(&mut self, parent: NodeId, child: NodeId) -> Result<(), TreeError> {
        self.node(parent)?;
        self.node(child)?;
        if child == self.root() {
            return Err(TreeError::RootNotMovable);
        }
        if self.is_ancestor_or_self(child, parent) {
            return Err(TreeError::CyclicAppend { parent, child });
        }
        self.detach(child)?;
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/tree.rs"]
mod tests;
