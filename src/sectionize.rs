//! Wraps a flat run of sibling blocks into nested sections by heading level.
//!
//! One pass looks only at the direct children of a scope. Each heading at the target level opens a
//! section wrapper (heading plus content wrapper) and everything after it flows into that content
//! wrapper. A heading more significant than the target closes whatever is open and stays put, so a
//! pass never swallows its parent's headings. Running the deepest level first and then shallower
//! levels over the same scope builds the full nesting, since wrappers from earlier passes are just
//! ordinary children to later ones.

use crate::section::{Pass, Section};
use crate::tree::{Host, NodeId};
use log::{debug, trace};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq)]
/// Settings for a single pass.
pub struct Options {
    /// Heading level this pass groups on, 1 being the most significant.
    pub target_level: u8,
    /// Accepted for configuration compatibility; passes never read it.
    pub depth: u8,
    /// Class of each section wrapper.
    pub section_class: String,
    /// Class of each content wrapper.
    pub content_class: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            target_level: 2,
            depth: 3,
            section_class: "section".to_string(),
            content_class: "section-content".to_string(),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Problems `Options::validate` reports.
pub enum OptionsError {
    /// Level 0 matches no heading.
    #[error("target level must be at least 1")]
    ZeroLevel,
    /// A wrapper would be created without a class.
    #[error("{0} class must not be empty")]
    EmptyClass(&'static str),
}

impl Options {
    #[must_use]
    /// Same options, grouping on `level` instead.
    pub fn at_level(&self, level: u8) -> Self {
        Self {
            target_level: level,
            ..self.clone()
        }
    }

    /// Checks the options would produce a meaningful pass.
    ///
    /// Passes never call this themselves: an invalid level simply matches nothing.
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.target_level == 0 {
            return Err(OptionsError::ZeroLevel);
        }
        if self.section_class.trim().is_empty() {
            return Err(OptionsError::EmptyClass("section"));
        }
        if self.content_class.trim().is_empty() {
            return Err(OptionsError::EmptyClass("content"));
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// What a pass does with one child of the scope.
pub enum Classification {
    /// A heading more significant than the target: back to the scope, closing any open section.
    Escape,
    /// A heading at the target level: opens a new section.
    Open,
    /// Anything else, including deeper headings: goes to the current destination.
    Carry,
}

#[must_use]
/// Sorts a node into one of the three cases, given its heading level if it has one.
pub fn classify(level: Option<u8>, target_level: u8) -> Classification {
    match level {
        Some(level) if level >= 1 && level < target_level => Classification::Escape,
        Some(level) if level >= 1 && level == target_level => Classification::Open,
        _ => Classification::Carry,
    }
}

/// Runs one pass over the children of `scope` and returns `scope`.
///
/// # Errors
///
/// Propagates any failure from the host tree primitives.
pub fn sectionize<H: Host>(
    host: &mut H,
    scope: NodeId,
    options: &Options,
) -> Result<NodeId, H::Error> {
    sectionize_with_report(host, scope, options).map(|pass| pass.scope)
}

/// Runs one pass and reports every section it opened.
///
/// # Errors
///
/// Propagates any failure from the host tree primitives.
pub fn sectionize_with_report<H: Host>(
    host: &mut H,
    scope: NodeId,
    options: &Options,
) -> Result<Pass, H::Error> {
    // Moves below rewrite the scope's child list, so work from a copy.
    let snapshot = host.children(scope)?;
    debug!(
        "sectionizing {} children of {scope} at level {}",
        snapshot.len(),
        options.target_level
    );

    let mut destination = scope;
    let mut sections = Vec::new();

    for item in snapshot {
        match classify(host.heading_level(item)?, options.target_level) {
            Classification::Escape => {
                destination = scope;
                host.append(scope, item)?;
            }
            Classification::Open => {
                let wrapper = host.create_container(&options.section_class);
                host.append(scope, wrapper)?;
                host.append(wrapper, item)?;
                let content = host.create_container(&options.content_class);
                host.append(wrapper, content)?;
                trace!("opened section {wrapper} for heading {item}");
                destination = content;
                sections.push(Section {
                    wrapper,
                    heading: item,
                    content,
                });
            }
            Classification::Carry => host.append(destination, item)?,
        }
    }

    Ok(Pass { scope, sections })
}

/// Runs one pass per level over the same scope, deepest level first.
///
/// Levels are deduplicated; order in `levels` does not matter. Every other setting comes from
/// `base`.
///
/// # Errors
///
/// Propagates any failure from the host tree primitives.
pub fn sectionize_levels<H: Host>(
    host: &mut H,
    scope: NodeId,
    levels: &[u8],
    base: &Options,
) -> Result<NodeId, H::Error> {
    let mut ordered = levels.to_vec();
    ordered.sort_unstable_by(|a, b| b.cmp(a));
    ordered.dedup();
    for level in ordered {
        sectionize(host, scope, &base.at_level(level))?;
    }
    Ok(scope)
}

#[cfg(test)]
#[path = "tests/sectionize.rs"]
mod tests;
