//! Content module - post records, the built-in dataset, loading and validation

mod builtin;
pub mod loader;
mod post;
mod validate;

pub use builtin::builtin_posts;
pub use loader::DataFormat;
pub use post::BlogPost;
pub use validate::{is_valid_slug, validate_posts};
