//! enwrap: wrap flat heading-delimited markup into nested section containers.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use enwrap::render::OutputFormat;
use enwrap::{config, formats, input, render, sectionize};
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "enwrap")]
#[command(about = "Wrap heading-delimited markdown into nested sections", long_about = None)]
struct Args {
    /// Markdown files to wrap; reads stdin when empty or `-`
    #[arg(value_name = "PATH")]
    paths: Vec<PathBuf>,

    /// Heading level to wrap on, repeat for nested sections
    #[arg(long = "level", short = 'l', value_name = "N")]
    levels: Vec<u8>,

    /// Class of each section wrapper
    #[arg(long, value_name = "CLASS")]
    section_class: Option<String>,

    /// Class of each content wrapper
    #[arg(long, value_name = "CLASS")]
    content_class: Option<String>,

    /// Config file to use instead of ./enwrap.toml
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output view
    #[arg(long, short = 'f', value_enum)]
    format: Option<OutputFormat>,
}

fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let mut cfg = match &args.config {
        Some(path) => config::Config::from_path(path).map_err(io::Error::other)?,
        None => config::Config::load(),
    };

    // Override config with command line args
    if let Some((first, rest)) = args.levels.split_first() {
        cfg.target_level = *first;
        cfg.levels = rest.to_vec();
    }
    if let Some(class) = args.section_class {
        cfg.section_class = class;
    }
    if let Some(class) = args.content_class {
        cfg.content_class = class;
    }

    let options = cfg.options();
    let levels = cfg.all_levels();
    for &level in &levels {
        options
            .at_level(level)
            .validate()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    }
    let format = match args.format {
        Some(format) => format,
        None => cfg
            .output_format()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?,
    };

    let markdown = formats::markdown::MarkdownFormat;
    let documents = input::load_inputs(&args.paths, io::stdin().lock(), &markdown)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    let mut stdout = io::stdout().lock();
    for mut doc in documents {
        let root = doc.root();
        sectionize::sectionize_levels(&mut doc, root, &levels, &options)
            .map_err(io::Error::other)?;
        let rendered = render::render(&doc, root, format).map_err(io::Error::other)?;
        stdout.write_all(rendered.as_bytes())?;
    }

    Ok(())
}
