use super::{Config, ConfigError};
use crate::render::OutputFormat;
use crate::sectionize::Options;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

#[test]
fn test_empty_config_uses_defaults() {
    let file = write_config("");
    let config = Config::from_path(file.path()).unwrap();

    assert_eq!(config.target_level, 2);
    assert_eq!(config.depth, 3);
    assert_eq!(config.section_class, "section");
    assert_eq!(config.content_class, "section-content");
    assert!(config.levels.is_empty());
    assert_eq!(config.options(), Options::default());
    assert_eq!(config.output_format().unwrap(), OutputFormat::Html);
}

#[test]
fn test_partial_config_overrides() {
    let file = write_config(
        "target_level = 1\nlevels = [2, 3]\nsection_class = \"chapter\"\nformat = \"Outline\"\n",
    );
    let config = Config::from_path(file.path()).unwrap();

    assert_eq!(config.all_levels(), vec![1, 2, 3]);
    assert_eq!(config.options().section_class, "chapter");
    assert_eq!(config.options().content_class, "section-content");
    assert_eq!(config.output_format().unwrap(), OutputFormat::Outline);
}

#[test]
fn test_unknown_format_rejected_when_read() {
    let file = write_config("format = \"pdf\"\n");

    assert!(matches!(
        Config::from_path(file.path()),
        Err(ConfigError::Format(name)) if name == "pdf"
    ));
}

#[test]
fn test_format_overridden_after_load_is_checked() {
    let file = write_config("");
    let mut config = Config::from_path(file.path()).unwrap();
    config.format = "svg".to_string();

    assert!(matches!(
        config.output_format(),
        Err(ConfigError::Format(name)) if name == "svg"
    ));
}

#[test]
fn test_malformed_config_is_an_error() {
    let file = write_config("target_level = \"two\"\n");

    assert!(matches!(
        Config::from_path(file.path()),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn test_missing_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();

    assert!(matches!(
        Config::from_path(&dir.path().join("enwrap.toml")),
        Err(ConfigError::Io(_))
    ));
}
