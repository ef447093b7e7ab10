//! Configuration to acknowledge developer preferences as well as set defaults.
//!
//! Specifically, we try to find an enwrap.toml, and if present we load settings from there.
//! This provides the heading levels to wrap on, the wrapper class names and the output view.

use crate::render::OutputFormat;
use crate::sectionize::Options;
use clap::ValueEnum;
use facet::Facet;
use std::path::Path;
use std::{fs, io};
use thiserror::Error;

#[derive(Facet, Clone, Debug, PartialEq)]
/// User preferences loaded from enwrap.toml or falling back to defaults.
pub struct Config {
    #[facet(default = 2)]
    /// Heading level wrapped by the first (or only) pass.
    pub target_level: u8,
    #[facet(default = 3)]
    /// Accepted for compatibility with older configs; not used when wrapping.
    pub depth: u8,
    #[facet(default = "section".to_string())]
    /// Class given to each section wrapper.
    pub section_class: String,
    #[facet(default = "section-content".to_string())]
    /// Class given to each content wrapper.
    pub content_class: String,
    #[facet(default = Vec::new())]
    /// Further heading levels to wrap, for nested sections.
    pub levels: Vec<u8>,
    #[facet(default = "html".to_string())]
    /// Output view: `html`, `outline` or `json`.
    pub format: String,
}

#[derive(Debug, Error)]
/// Failures reading an explicitly requested config file.
pub enum ConfigError {
    /// The file could not be read.
    #[error("cannot read config: {0}")]
    Io(#[from] io::Error),
    /// The file is not valid TOML for [`Config`].
    #[error("invalid config: {0}")]
    Parse(String),
    /// The `format` value names no known view.
    #[error("unknown output format `{0}`")]
    Format(String),
}

impl Config {
    #[must_use]
    /// Load configuration from enwrap.toml if present.
    ///
    /// # Panics
    ///
    /// Panics if the default configuration cannot be parsed.
    pub fn load() -> Self {
        if let Ok(contents) = fs::read_to_string("enwrap.toml") {
            match Self::parse(&contents) {
                Ok(config) => return config,
                Err(e) => log::warn!("ignoring enwrap.toml: {e}"),
            }
        }
        facet_toml::from_str::<Self>("").unwrap()
    }

    /// Load configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid TOML, or names an unknown
    /// output format.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    fn parse(contents: &str) -> Result<Self, ConfigError> {
        let config = facet_toml::from_str::<Self>(contents)
            .map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.output_format()?;
        Ok(config)
    }

    #[must_use]
    /// Options for a pass at `target_level`.
    pub fn options(&self) -> Options {
        Options {
            target_level: self.target_level,
            depth: self.depth,
            section_class: self.section_class.clone(),
            content_class: self.content_class.clone(),
        }
    }

    #[must_use]
    /// Every level to wrap: `target_level` followed by `levels`.
    pub fn all_levels(&self) -> Vec<u8> {
        let mut all = vec![self.target_level];
        all.extend(&self.levels);
        all
    }

    /// The configured output view.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Format`] if `format` is not a known view.
    pub fn output_format(&self) -> Result<OutputFormat, ConfigError> {
        OutputFormat::from_str(&self.format, true)
            .map_err(|_| ConfigError::Format(self.format.clone()))
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
