//! Show a single post

use anyhow::{anyhow, Result};
use std::io::Write;

use crate::content::BlogPost;
use crate::helpers::iso_date;
use crate::{Blog, PostCatalog};

/// Find a post by key
///
/// With `by_id` the key must be a numeric id. Otherwise the slug is tried
/// first and a numeric key falls back to an id lookup, so a numeric slug
/// takes precedence over the id of the same value.
pub fn find<'a>(catalog: &'a PostCatalog, key: &str, by_id: bool) -> Option<&'a BlogPost> {
    let id = || key.parse::<u32>().ok().and_then(|id| catalog.get_by_id(id));
    if by_id {
        return id();
    }
    catalog.get_by_slug(key).or_else(id)
}

/// Print a post's metadata, and its HTML content when requested
pub fn run<W: Write>(
    out: &mut W,
    blog: &Blog,
    catalog: &PostCatalog,
    key: &str,
    by_id: bool,
    with_content: bool,
) -> Result<()> {
    let post = find(catalog, key, by_id).ok_or_else(|| anyhow!("Post not found: {}", key))?;

    writeln!(out, "{}", post.title)?;
    writeln!(out, "  id:       {}", post.id)?;
    writeln!(out, "  slug:     {}", post.slug)?;
    writeln!(out, "  path:     {}", post.url_path(&blog.config.permalink_root))?;
    match post.published_date() {
        Some(d) => writeln!(out, "  date:     {} ({})", post.date, iso_date(&d))?,
        None => writeln!(out, "  date:     {}", post.date)?,
    }
    writeln!(out, "  category: {}", post.category)?;
    writeln!(out, "  tags:     {}", post.tags.join(", "))?;
    writeln!(out, "  featured: {}", post.featured)?;
    writeln!(out, "  image:    {}", post.image)?;
    writeln!(out, "  excerpt:  {}", post.excerpt)?;

    if let Some(prev) = catalog.prev(&post.slug) {
        writeln!(out, "  prev:     {}", prev.slug)?;
    }
    if let Some(next) = catalog.next(&post.slug) {
        writeln!(out, "  next:     {}", next.slug)?;
    }

    if with_content {
        writeln!(out)?;
        writeln!(out, "{}", post.content.trim())?;
    }

    Ok(())
}
