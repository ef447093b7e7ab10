//! Turns a (sectionized) document back into something a person or another tool can read.
//!
//! Three views are offered: HTML with `div` wrappers carrying the section classes, a box-drawn
//! outline of the node tree, and a JSON dump of the same tree.

use crate::tree::{Document, NodeId, Tag, TreeError};
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
/// Output view selectable from the command line or config.
pub enum OutputFormat {
    /// Nested `div` markup.
    Html,
    /// Box-drawing tree, one node per line.
    Outline,
    /// Pretty-printed JSON.
    Json,
}

#[derive(Debug, Error)]
/// Failures while rendering.
pub enum RenderError {
    /// A node handle could not be resolved.
    #[error(transparent)]
    Tree(#[from] TreeError),
    /// JSON serialisation failed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    /// Writing into the output buffer failed.
    #[error(transparent)]
    Fmt(#[from] std::fmt::Error),
}

/// Renders the children of `id` in the chosen view.
///
/// # Errors
///
/// Returns an error if a node cannot be resolved or serialised.
pub fn render(doc: &Document, id: NodeId, format: OutputFormat) -> Result<String, RenderError> {
    match format {
        OutputFormat::Html => render_html(doc, id),
        OutputFormat::Outline => render_outline(doc, id),
        OutputFormat::Json => to_json(doc, id),
    }
}

/// Renders the children of `id` as HTML, two spaces of indent per nesting level.
///
/// # Errors
///
/// Returns an error if a node cannot be resolved.
pub fn render_html(doc: &Document, id: NodeId) -> Result<String, RenderError> {
    let mut out = String::new();
    for &child in doc.child_slice(id)? {
        write_html(doc, child, 0, &mut out)?;
    }
    Ok(out)
}

fn write_html(
    doc: &Document,
    id: NodeId,
    depth: usize,
    out: &mut String,
) -> Result<(), RenderError> {
    let indent = "  ".repeat(depth);
    let text = escape(doc.text(id)?.unwrap_or_default());
    match doc.tag(id)? {
        Tag::Root => {
            for &child in doc.child_slice(id)? {
                write_html(doc, child, depth, out)?;
            }
        }
        Tag::Container { class } => {
            writeln!(out, "{indent}<div class=\"{}\">", escape(class))?;
            for &child in doc.child_slice(id)? {
                write_html(doc, child, depth + 1, out)?;
            }
            writeln!(out, "{indent}</div>")?;
        }
        Tag::Heading {
            level: level @ 1..=6,
        } => writeln!(out, "{indent}<h{level}>{text}</h{level}>")?,
        Tag::Heading { level } => writeln!(
            out,
            "{indent}<div role=\"heading\" aria-level=\"{level}\">{text}</div>"
        )?,
        Tag::Block { kind } => match kind.as_str() {
            "paragraph" => writeln!(out, "{indent}<p>{text}</p>")?,
            "fenced_code_block" | "indented_code_block" => {
                writeln!(out, "{indent}<pre>{text}</pre>")?;
            }
            other => writeln!(
                out,
                "{indent}<div data-kind=\"{}\">{text}</div>",
                escape(other)
            )?,
        },
    }
    Ok(())
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Generate box-drawing prefix for tree structure
fn get_tree_prefix(is_last: bool, parent_states: &[bool]) -> String {
    let mut prefix = String::new();

    // Vertical lines for ancestors that still have siblings below
    for &open in parent_states {
        if open {
            prefix.push_str("│   ");
        } else {
            prefix.push_str("    ");
        }
    }

    if is_last {
        prefix.push_str("└── ");
    } else {
        prefix.push_str("├── ");
    }

    prefix
}

fn outline_label(doc: &Document, id: NodeId) -> Result<String, TreeError> {
    let text = doc.text(id)?.unwrap_or_default();
    let first_line = text.lines().next().unwrap_or_default();
    Ok(match doc.tag(id)? {
        Tag::Root => "(root)".to_string(),
        Tag::Container { class } => format!(".{class}"),
        Tag::Heading { level } => format!("h{level} {first_line}"),
        Tag::Block { kind } => {
            let preview: String = first_line.chars().take(40).collect();
            if preview.len() < first_line.len() {
                format!("{kind}: {preview}…")
            } else {
                format!("{kind}: {preview}")
            }
        }
    })
}

/// Renders the children of `id` as a box-drawn tree.
///
/// # Errors
///
/// Returns an error if a node cannot be resolved.
pub fn render_outline(doc: &Document, id: NodeId) -> Result<String, RenderError> {
    let mut out = String::new();
    let mut parent_states = Vec::new();
    write_outline(doc, id, &mut parent_states, &mut out)?;
    Ok(out)
}

fn write_outline(
    doc: &Document,
    id: NodeId,
    parent_states: &mut Vec<bool>,
    out: &mut String,
) -> Result<(), RenderError> {
    let children = doc.child_slice(id)?;
    for (i, &child) in children.iter().enumerate() {
        let is_last = i + 1 == children.len();
        writeln!(
            out,
            "{}{}",
            get_tree_prefix(is_last, parent_states),
            outline_label(doc, child)?
        )?;
        parent_states.push(!is_last);
        write_outline(doc, child, parent_states, out)?;
        parent_states.pop();
    }
    Ok(())
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
/// Serialisable snapshot of a node and its subtree.
pub struct NodeView {
    /// One of `root`, `heading`, `block` or `container`.
    pub tag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Heading level, for headings.
    pub level: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Wrapper class, for containers.
    pub class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Source block kind, for blocks.
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Text content, if the node carries any.
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    /// Child nodes in order.
    pub children: Vec<NodeView>,
}

impl NodeView {
    /// Captures `id` and everything under it.
    ///
    /// # Errors
    ///
    /// Returns an error if a node cannot be resolved.
    pub fn build(doc: &Document, id: NodeId) -> Result<Self, TreeError> {
        let mut view = Self {
            tag: String::new(),
            level: None,
            class: None,
            kind: None,
            text: doc.text(id)?.map(str::to_string),
            children: Vec::new(),
        };
        match doc.tag(id)? {
            Tag::Root => view.tag = "root".to_string(),
            Tag::Heading { level } => {
                view.tag = "heading".to_string();
                view.level = Some(*level);
            }
            Tag::Block { kind } => {
                view.tag = "block".to_string();
                view.kind = Some(kind.clone());
            }
            Tag::Container { class } => {
                view.tag = "container".to_string();
                view.class = Some(class.clone());
            }
        }
        for &child in doc.child_slice(id)? {
            view.children.push(Self::build(doc, child)?);
        }
        Ok(view)
    }
}

/// Serialises the children of `id` as a pretty-printed JSON array.
///
/// # Errors
///
/// Returns an error if a node cannot be resolved or serialised.
pub fn to_json(doc: &Document, id: NodeId) -> Result<String, RenderError> {
    let views = doc
        .child_slice(id)?
        .iter()
        .map(|&child| NodeView::build(doc, child))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(serde_json::to_string_pretty(&views)?)
}

#[cfg(test)]
#[path = "tests/render.rs"]
mod tests;
