//! List catalog content

use anyhow::Result;
use std::io::Write;

use crate::content::BlogPost;
use crate::helpers::iso_date;
use crate::PostCatalog;

/// Filters for the post listing
#[derive(Debug, Default, Clone)]
pub struct ListOptions {
    pub category: Option<String>,
    pub tag: Option<String>,
    pub by_date: bool,
}

/// List catalog content by type
pub fn run<W: Write>(
    out: &mut W,
    catalog: &PostCatalog,
    content_type: &str,
    options: &ListOptions,
) -> Result<()> {
    match content_type {
        "post" | "posts" => {
            let mut posts: Vec<&BlogPost> = if options.by_date {
                catalog.sorted_by_date()
            } else {
                catalog.iter().collect()
            };
            if let Some(category) = &options.category {
                posts.retain(|p| &p.category == category);
            }
            if let Some(tag) = &options.tag {
                posts.retain(|p| p.has_tag(tag));
            }
            write_posts(out, "Posts", &posts)?;
        }
        "featured" => {
            write_posts(out, "Featured", &catalog.featured())?;
        }
        "category" | "categories" => {
            let categories = catalog.categories();
            writeln!(out, "Categories ({}):", categories.len())?;
            for (name, count) in categories {
                writeln!(out, "  {} ({})", name, count)?;
            }
        }
        "tag" | "tags" => {
            let tags = catalog.tags();
            writeln!(out, "Tags ({}):", tags.len())?;
            for (name, count) in tags {
                writeln!(out, "  {} ({})", name, count)?;
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: post, featured, category, tag",
                content_type
            );
        }
    }

    Ok(())
}

fn write_posts<W: Write>(out: &mut W, heading: &str, posts: &[&BlogPost]) -> Result<()> {
    writeln!(out, "{} ({}):", heading, posts.len())?;
    for post in posts {
        let date = post
            .published_date()
            .map(|d| iso_date(&d))
            .unwrap_or_else(|| post.date.clone());
        let star = if post.featured { " *" } else { "" };
        writeln!(
            out,
            "  {:>3}  {} - {} [{}]{}",
            post.id, date, post.title, post.slug, star
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(content_type: &str, options: &ListOptions) -> String {
        let mut out = Vec::new();
        run(&mut out, PostCatalog::builtin(), content_type, options).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_list_posts() {
        let text = render("posts", &ListOptions::default());
        assert!(text.starts_with("Posts (3):"));
        assert!(text.contains(
            "    1  2025-04-01 - Getting Started with Web Development [getting-started-with-web-development]"
        ));
    }

    #[test]
    fn test_list_filtered() {
        let options = ListOptions {
            tag: Some("CSS".to_string()),
            ..Default::default()
        };
        let text = render("post", &options);
        assert!(text.starts_with("Posts (2):"));
        assert!(!text.contains("power-of-modern-frameworks"));

        let options = ListOptions {
            category: Some("Design".to_string()),
            ..Default::default()
        };
        let text = render("post", &options);
        assert!(text.starts_with("Posts (1):"));
        assert!(text.contains("responsive-design-principles"));
    }

    #[test]
    fn test_list_counts() {
        let text = render("categories", &ListOptions::default());
        assert!(text.starts_with("Categories (3):"));
        assert!(text.contains("  Design (1)"));

        let text = render("tags", &ListOptions::default());
        assert!(text.contains("  CSS (2)"));

        let text = render("featured", &ListOptions::default());
        assert_eq!(text, "Featured (0):\n");
    }

    #[test]
    fn test_unknown_type() {
        let mut out = Vec::new();
        let result = run(&mut out, PostCatalog::builtin(), "authors", &ListOptions::default());
        assert!(result.is_err());
    }
}
