//! Catalog configuration (catalog.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main catalog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Post data file relative to the base directory; the built-in posts
    /// are used when unset
    pub source: Option<String>,

    /// Require every post date to parse
    pub strict_dates: bool,

    /// Path prefix for post permalinks
    pub permalink_root: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            source: None,
            strict_dates: false,
            permalink_root: "/blog/".to_string(),
        }
    }
}

impl CatalogConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: CatalogConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}
