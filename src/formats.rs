//! Format trait and implementations for different document types.
//!
//! A format tells the loader which tree-sitter grammar to parse with, which nodes are headings and
//! at what level, and which nodes are only grouping nodes to be flattened away so that the loaded
//! document is a flat run of sibling blocks.

pub mod markdown;

/// Grammar and node classification for one source format.
pub trait Format {
    /// Grammar used to parse the source text.
    fn language(&self) -> tree_sitter::Language;

    /// Heading level of a parsed node, or `None` if it is not a heading.
    fn heading_level(&self, node: &tree_sitter::Node) -> Option<u8>;

    /// Visible text of a heading node, without its markup.
    fn heading_text(&self, node: &tree_sitter::Node, source: &str) -> Option<String>;

    /// Whether a node kind only groups other blocks and should be flattened.
    fn is_nesting(&self, kind: &str) -> bool;

    /// Whether a node kind carries no content of its own.
    fn is_skipped(&self, _kind: &str) -> bool {
        false
    }
}
