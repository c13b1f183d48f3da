//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::viewer::ViewerOptions;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site title, display only
    pub title: String,

    /// Directory of markdown news sources
    pub source_dir: String,

    /// JSON document written by the compiler
    pub output: String,

    /// URL path the document is served and fetched at
    pub json_path: String,

    /// Viewer behavior
    pub viewer: ViewerOptions,

    /// Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "News".to_string(),
            source_dir: "content/news".to_string(),
            output: "content/news.json".to_string(),
            json_path: "/content/news.json".to_string(),
            viewer: ViewerOptions::default(),
            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}
