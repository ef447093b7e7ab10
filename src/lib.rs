//! enwrap: wrap flat heading-delimited markup into nested section containers.
//!
//! A run of sibling blocks such as `h2, p, p, h3, p, h2, p` implies a structure that the markup
//! never spells out. [`sectionize::sectionize`] makes it explicit, one heading level per pass,
//! by moving each target-level heading and the blocks after it into a section wrapper.
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod formats;
pub mod input;
pub mod render;
pub mod section;
pub mod sectionize;
pub mod tree;
