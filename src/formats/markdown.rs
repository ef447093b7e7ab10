//! Markdown format implementation using tree-sitter-md.
//!
//! Handles ATX (`#` syntax) and setext (underlined) headings. The block grammar already nests
//! blocks under `section` nodes by heading; those are flattened here so sectionizing starts from
//! the flat sibling run the markup actually spells out.

use crate::formats::Format;

/// Tree-sitter classification of markdown block nodes.
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn language(&self) -> tree_sitter::Language {
        tree_sitter_md::LANGUAGE.into()
    }

    fn heading_level(&self, node: &tree_sitter::Node) -> Option<u8> {
        if !matches!(node.kind(), "atx_heading" | "setext_heading") {
            return None;
        }
        let mut cursor = node.walk();
        let level = node
            .children(&mut cursor)
            .find_map(|child| match child.kind() {
                "atx_h1_marker" | "setext_h1_underline" => Some(1),
                "atx_h2_marker" | "setext_h2_underline" => Some(2),
                "atx_h3_marker" => Some(3),
                "atx_h4_marker" => Some(4),
                "atx_h5_marker" => Some(5),
                "atx_h6_marker" => Some(6),
                _ => None,
            });
        level
    }

    fn heading_text(&self, node: &tree_sitter::Node, source: &str) -> Option<String> {
        let content = node.child_by_field_name("heading_content").or_else(|| {
            let mut cursor = node.walk();
            let found = node
                .named_children(&mut cursor)
                .find(|child| matches!(child.kind(), "inline" | "paragraph"));
            found
        })?;
        let text = content.utf8_text(source.as_bytes()).ok()?;
        Some(text.trim().to_string())
    }

    fn is_nesting(&self, kind: &str) -> bool {
        matches!(kind, "document" | "section")
    }

    fn is_skipped(&self, kind: &str) -> bool {
        kind == "block_continuation"
    }
}
