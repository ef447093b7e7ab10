//! Records of the wrappers a sectionizing pass creates.
//!
//! A section is the pair of containers opened for one target-level heading: the outer wrapper
//! holding the heading, and the content wrapper collecting everything that follows it until the
//! next heading of equal or higher significance.

use crate::tree::NodeId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// One wrapper pair opened by a target-level heading.
pub struct Section {
    /// Outer container, a direct child of the pass scope.
    pub wrapper: NodeId,
    /// The heading that opened the section, first child of `wrapper`.
    pub heading: NodeId,
    /// Content container, second child of `wrapper`.
    pub content: NodeId,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Outcome of one pass over a scope.
pub struct Pass {
    /// The scope whose children were processed.
    pub scope: NodeId,
    /// Sections in the order their headings appeared.
    pub sections: Vec<Section>,
}
