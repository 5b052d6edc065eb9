//! Error types for loading and validating post data

use thiserror::Error;

/// Errors raised while building a catalog from post records.
///
/// Lookups never produce one of these: a missing slug or id is reported as
/// `None` by the catalog accessors.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Duplicate post id: {0}")]
    DuplicateId(u32),

    #[error("Duplicate post slug: {0}")]
    DuplicateSlug(String),

    #[error("Invalid slug {slug:?} on post {id}: must be lowercase letters, digits and single hyphens")]
    InvalidSlug { id: u32, slug: String },

    #[error("Post {id} has an empty {field}")]
    EmptyField { id: u32, field: &'static str },

    #[error("Post {id} has an unparseable date: {date:?}")]
    UnparseableDate { id: u32, date: String },

    #[error("Unsupported data format: {0} (expected .json, .yml or .yaml)")]
    UnsupportedFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
