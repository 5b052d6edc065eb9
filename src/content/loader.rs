//! Post data loader - reads and writes post records as JSON or YAML

use std::fs;
use std::io::Write;
use std::path::Path;

use super::BlogPost;
use crate::error::{CatalogError, Result};

/// On-disk format of a post data file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Json,
    Yaml,
}

impl DataFormat {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();

        match ext.as_str() {
            "json" => Ok(DataFormat::Json),
            "yml" | "yaml" => Ok(DataFormat::Yaml),
            _ => Err(CatalogError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Parse a format name as given on the command line
    pub fn from_name(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "json" => Ok(DataFormat::Json),
            "yml" | "yaml" => Ok(DataFormat::Yaml),
            _ => Err(CatalogError::UnsupportedFormat(name.to_string())),
        }
    }
}

/// Parse a sequence of posts from a string
pub fn parse_posts(content: &str, format: DataFormat) -> Result<Vec<BlogPost>> {
    let posts = match format {
        DataFormat::Json => serde_json::from_str(content)?,
        DataFormat::Yaml => serde_yaml::from_str(content)?,
    };
    Ok(posts)
}

/// Load all posts from a data file
///
/// Records are returned in file order. No integrity checks happen here;
/// building a catalog from the result does those.
pub fn load_posts<P: AsRef<Path>>(path: P) -> Result<Vec<BlogPost>> {
    let path = path.as_ref();
    let format = DataFormat::from_path(path)?;
    let content = fs::read_to_string(path)?;
    let posts = parse_posts(&content, format)?;
    tracing::debug!("Read {} posts from {:?}", posts.len(), path);
    Ok(posts)
}

/// Write posts in the loadable format
pub fn write_posts<W: Write>(mut writer: W, posts: &[BlogPost], format: DataFormat) -> Result<()> {
    match format {
        DataFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, posts)?;
            writeln!(writer)?;
        }
        DataFormat::Yaml => serde_yaml::to_writer(writer, posts)?,
    }
    Ok(())
}
