//! blog-catalog: an immutable, indexed catalog of blog posts
//!
//! The catalog is built once, either from the compiled-in posts or from a
//! JSON/YAML data file, and serves read-only lookups by slug, id, category,
//! tag and featured flag. A small CLI inspects and exports it.

pub mod catalog;
pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod helpers;

pub use catalog::PostCatalog;
pub use content::BlogPost;
pub use error::CatalogError;

use anyhow::Result;
use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// The catalog application: configuration plus where to find post data
#[derive(Clone)]
pub struct Blog {
    /// Catalog configuration
    pub config: config::CatalogConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Resolved post data file, if not using the built-in posts
    pub source_path: Option<PathBuf>,
}

impl Blog {
    /// Create a new instance from a directory, reading `catalog.yml` if present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("catalog.yml");

        let config = if config_path.exists() {
            tracing::debug!("Loading config from {:?}", config_path);
            config::CatalogConfig::load(&config_path)?
        } else {
            config::CatalogConfig::default()
        };

        let source_path = config.source.as_ref().map(|s| base_dir.join(s));

        Ok(Self {
            config,
            base_dir,
            source_path,
        })
    }

    /// The configured catalog: the built-in one, or the data file loaded fresh
    pub fn catalog(&self) -> Result<Cow<'static, PostCatalog>> {
        match &self.source_path {
            Some(path) => {
                let catalog = PostCatalog::load(path, self.config.strict_dates)?;
                Ok(Cow::Owned(catalog))
            }
            None => Ok(Cow::Borrowed(PostCatalog::builtin())),
        }
    }
}
