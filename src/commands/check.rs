//! Validate a post data file

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

use crate::PostCatalog;

/// Load and validate `path`, reporting what was found
pub fn run<W: Write>(out: &mut W, path: &Path, strict_dates: bool) -> Result<()> {
    let catalog = PostCatalog::load(path, strict_dates)
        .with_context(|| format!("Invalid post data in {}", path.display()))?;

    writeln!(
        out,
        "{}: {} posts, {} categories, {} tags, {} featured",
        path.display(),
        catalog.len(),
        catalog.categories().len(),
        catalog.tags().len(),
        catalog.featured().len()
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const POSTS: &str = r#"[
  {"id": 1, "slug": "one", "title": "One", "excerpt": "1", "content": "<p>1</p>",
   "date": "May 1, 2025", "category": "Misc", "image": "https://placehold.co/800x450",
   "tags": ["a"], "featured": true},
  {"id": 2, "slug": "two", "title": "Two", "excerpt": "2", "content": "<p>2</p>",
   "date": "Soon", "category": "Misc", "image": "https://placehold.co/800x450",
   "tags": ["a", "b"]}
]"#;

    #[test]
    fn test_check_valid_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("posts.json");
        fs::write(&path, POSTS).unwrap();

        let mut out = Vec::new();
        run(&mut out, &path, false).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with(": 2 posts, 1 categories, 2 tags, 1 featured\n"));
    }

    #[test]
    fn test_check_strict_dates() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("posts.json");
        fs::write(&path, POSTS).unwrap();

        let mut out = Vec::new();
        let err = run(&mut out, &path, true).unwrap_err();
        assert!(err.to_string().starts_with("Invalid post data in"));
        assert!(format!("{:#}", err).contains("unparseable date"));
    }
}
