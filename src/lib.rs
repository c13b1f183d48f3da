//! newsbox: a news-post compiler and viewer
//!
//! This crate turns a directory of markdown-with-frontmatter files into a
//! single JSON document of news records, and renders that document as a
//! selectable card list with a detail panel. The viewer half is headless:
//! it owns the selection state and produces the markup for the two page
//! regions the host page provides containers for.

pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;
pub mod server;
pub mod viewer;

use anyhow::Result;
use std::path::Path;

/// The main newsbox application
#[derive(Clone)]
pub struct Newsbox {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Markdown source directory
    pub source_dir: std::path::PathBuf,
    /// Compiled JSON document path
    pub output_path: std::path::PathBuf,
}

impl Newsbox {
    /// Create a new Newsbox instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let source_dir = base_dir.join(&config.source_dir);
        let output_path = base_dir.join(&config.output);

        Ok(Self {
            config,
            base_dir,
            source_dir,
            output_path,
        })
    }

    /// Compile the news document
    pub fn compile(&self) -> Result<()> {
        commands::compile::run(self)
    }

    /// Delete the compiled document
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}
