//! Blog post model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::helpers::parse_display_date;

/// A blog post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BlogPost {
    /// Stable numeric identifier, unique within a catalog
    pub id: u32,

    /// URL-friendly name, unique within a catalog
    pub slug: String,

    /// Post title
    pub title: String,

    /// Short summary shown in listings
    pub excerpt: String,

    /// Pre-sanitized HTML fragment, rendered as-is by consumers
    pub content: String,

    /// Publication date as displayed (free-form)
    pub date: String,

    /// Single category name
    pub category: String,

    /// Representative image URL
    pub image: String,

    /// Post tags, in author order
    pub tags: Vec<String>,

    /// Whether the post is highlighted on list pages
    #[serde(default)]
    pub featured: bool,
}

impl BlogPost {
    /// Structured publication date, if the display string can be parsed
    pub fn published_date(&self) -> Option<NaiveDate> {
        parse_display_date(&self.date)
    }

    /// Whether the post carries `tag` (case-sensitive)
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Permalink path under `root`, e.g. `/blog/my-post/`
    pub fn url_path(&self, root: &str) -> String {
        let root = root.trim_end_matches('/');
        format!("{}/{}/", root, self.slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BlogPost {
        BlogPost {
            id: 7,
            slug: "hello-world".to_string(),
            title: "Hello World".to_string(),
            excerpt: "First post.".to_string(),
            content: "<p>Hi</p>".to_string(),
            date: "January 15, 2024".to_string(),
            category: "Notes".to_string(),
            image: "https://placehold.co/800x450".to_string(),
            tags: vec!["rust".to_string(), "Blog".to_string()],
            featured: false,
        }
    }

    #[test]
    fn test_featured_defaults_to_false() {
        let json = r#"{
            "id": 1,
            "slug": "a",
            "title": "A",
            "excerpt": "a",
            "content": "<p>a</p>",
            "date": "April 1, 2025",
            "category": "Misc",
            "image": "https://placehold.co/800x450",
            "tags": ["x"]
        }"#;

        let post: BlogPost = serde_json::from_str(json).unwrap();
        assert!(!post.featured);
        assert_eq!(post.tags, vec!["x"]);
    }

    #[test]
    fn test_tags_are_required() {
        let json = r#"{
            "id": 1,
            "slug": "a",
            "title": "A",
            "excerpt": "a",
            "content": "<p>a</p>",
            "date": "April 1, 2025",
            "category": "Misc",
            "image": "https://placehold.co/800x450"
        }"#;
        assert!(serde_json::from_str::<BlogPost>(json).is_err());

        let with_empty = json.replace("\"image\"", "\"tags\": [], \"image\"");
        let post: BlogPost = serde_json::from_str(&with_empty).unwrap();
        assert!(post.tags.is_empty());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let yaml = r#"
id: 1
slug: a
title: A
excerpt: a
content: "<p>a</p>"
date: April 1, 2025
category: Misc
image: https://placehold.co/800x450
tags: []
author: someone
"#;

        assert!(serde_yaml::from_str::<BlogPost>(yaml).is_err());
    }

    #[test]
    fn test_published_date() {
        let post = sample();
        assert_eq!(post.published_date(), NaiveDate::from_ymd_opt(2024, 1, 15));

        let undated = BlogPost {
            date: "Coming soon".to_string(),
            ..sample()
        };
        assert_eq!(undated.published_date(), None);
    }

    #[test]
    fn test_has_tag_is_case_sensitive() {
        let post = sample();
        assert!(post.has_tag("rust"));
        assert!(post.has_tag("Blog"));
        assert!(!post.has_tag("Rust"));
        assert!(!post.has_tag("blog"));
    }

    #[test]
    fn test_url_path() {
        let post = sample();
        assert_eq!(post.url_path("/blog/"), "/blog/hello-world/");
        assert_eq!(post.url_path("/posts"), "/posts/hello-world/");
        assert_eq!(post.url_path("/"), "/hello-world/");
    }
}
