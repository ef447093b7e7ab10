//! Loading source documents into a flat [`Document`].
//!
//! Parsing is delegated to tree-sitter. Grouping nodes the grammar invents are flattened so every
//! block ends up a direct child of the root, in source order, ready for sectionizing.

use crate::formats::Format;
use crate::tree::{Document, NodeId, Tag, TreeError};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
/// Failures while turning source text into a document.
pub enum InputError {
    /// The grammar could not be loaded into the parser.
    #[error("incompatible grammar: {0}")]
    Language(#[from] tree_sitter::LanguageError),
    /// The parser gave up without producing a tree.
    #[error("parser produced no tree")]
    Parse,
    /// Node text was not valid UTF-8.
    #[error("invalid UTF-8 in source: {0}")]
    Utf8(#[from] std::str::Utf8Error),
    /// Building the document failed.
    #[error(transparent)]
    Tree(#[from] TreeError),
    /// Reading the source failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Parses `source` and appends each block as a child of a fresh document's root.
///
/// # Errors
///
/// Returns an error if the grammar cannot be loaded or the source cannot be parsed.
pub fn load_document<F: Format>(source: &str, format: &F) -> Result<Document, InputError> {
    let mut parser = tree_sitter::Parser::new();
    parser.set_language(&format.language())?;
    let tree = parser.parse(source, None).ok_or(InputError::Parse)?;

    let mut doc = Document::new();
    let root = doc.root();
    collect_blocks(tree.root_node(), source, format, &mut doc, root)?;
    log::debug!(
        "loaded {} blocks",
        doc.child_slice(root).map_or(0, <[NodeId]>::len)
    );
    Ok(doc)
}

/// Reads a file and loads it with [`load_document`].
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn read_document<F: Format>(path: &Path, format: &F) -> Result<Document, InputError> {
    let source = std::fs::read_to_string(path)?;
    load_document(&source, format)
}

/// Loads every input, reading `stdin` for no paths at all or for each `-`.
///
/// Stdin is read at most once; repeated `-` paths reuse the same text. Every input is loaded
/// before any is returned, so a bad path fails before output is produced.
///
/// # Errors
///
/// Returns the first input that cannot be read or parsed.
pub fn load_inputs<F: Format, R: Read>(
    paths: &[PathBuf],
    mut stdin: R,
    format: &F,
) -> Result<Vec<Document>, InputError> {
    let mut stdin_text: Option<String> = None;
    let mut read_stdin = |stdin: &mut R| -> Result<String, InputError> {
        if let Some(text) = &stdin_text {
            return Ok(text.clone());
        }
        let text = io::read_to_string(&mut *stdin)?;
        stdin_text = Some(text.clone());
        Ok(text)
    };

    if paths.is_empty() {
        return Ok(vec![load_document(&read_stdin(&mut stdin)?, format)?]);
    }
    paths
        .iter()
        .map(|path| {
            if path.as_os_str() == "-" {
                load_document(&read_stdin(&mut stdin)?, format)
            } else {
                log::info!("reading {}", path.display());
                read_document(path, format)
            }
        })
        .collect()
}

fn collect_blocks<F: Format>(
    node: tree_sitter::Node,
    source: &str,
    format: &F,
    doc: &mut Document,
    root: NodeId,
) -> Result<(), InputError> {
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        let kind = child.kind();
        if format.is_nesting(kind) {
            collect_blocks(child, source, format, doc, root)?;
            continue;
        }
        if format.is_skipped(kind) {
            continue;
        }

        let (tag, text) = if let Some(level) = format.heading_level(&child) {
            let title = format.heading_text(&child, source).unwrap_or_default();
            (Tag::Heading { level }, title)
        } else {
            let text = child.utf8_text(source.as_bytes())?;
            (
                Tag::Block {
                    kind: kind.to_string(),
                },
                text.trim_end().to_string(),
            )
        };
        doc.push(root, tag, Some(text))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/input.rs"]
mod tests;
