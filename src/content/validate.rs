//! Data integrity checks for post records

use std::collections::HashSet;

use super::BlogPost;
use crate::error::{CatalogError, Result};

/// Check a slug is URL-safe: it must survive slugification unchanged
pub fn is_valid_slug(s: &str) -> bool {
    !s.is_empty() && slug::slugify(s) == s
}

/// Validate a sequence of posts, stopping at the first violation
///
/// When `strict_dates` is set every post's date string must also parse.
pub fn validate_posts(posts: &[BlogPost], strict_dates: bool) -> Result<()> {
    let mut ids = HashSet::new();
    let mut slugs = HashSet::new();

    for post in posts {
        if !ids.insert(post.id) {
            return Err(CatalogError::DuplicateId(post.id));
        }
        if !is_valid_slug(&post.slug) {
            return Err(CatalogError::InvalidSlug {
                id: post.id,
                slug: post.slug.clone(),
            });
        }
        if !slugs.insert(post.slug.as_str()) {
            return Err(CatalogError::DuplicateSlug(post.slug.clone()));
        }

        let required = [
            ("title", &post.title),
            ("excerpt", &post.excerpt),
            ("category", &post.category),
            ("image", &post.image),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(CatalogError::EmptyField { id: post.id, field });
            }
        }
        if post.tags.iter().any(|t| t.trim().is_empty()) {
            return Err(CatalogError::EmptyField {
                id: post.id,
                field: "tag",
            });
        }

        if strict_dates && post.published_date().is_none() {
            return Err(CatalogError::UnparseableDate {
                id: post.id,
                date: post.date.clone(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::builtin_posts;

    #[test]
    fn test_slug_rules() {
        assert!(is_valid_slug("responsive-design-principles"));
        assert!(is_valid_slug("post-2"));
        assert!(!is_valid_slug(""));
        assert!(!is_valid_slug("Has-Caps"));
        assert!(!is_valid_slug("double--hyphen"));
        assert!(!is_valid_slug("-leading"));
        assert!(!is_valid_slug("with space"));
        assert!(!is_valid_slug("query?x=1"));
    }

    #[test]
    fn test_builtin_posts_are_valid() {
        validate_posts(&builtin_posts(), true).unwrap();
    }

    #[test]
    fn test_duplicate_id() {
        let mut posts = builtin_posts();
        posts[2].id = 1;
        assert!(matches!(
            validate_posts(&posts, false),
            Err(CatalogError::DuplicateId(1))
        ));
    }

    #[test]
    fn test_duplicate_slug() {
        let mut posts = builtin_posts();
        posts[1].slug = posts[0].slug.clone();
        match validate_posts(&posts, false) {
            Err(CatalogError::DuplicateSlug(slug)) => {
                assert_eq!(slug, "getting-started-with-web-development")
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_empty_fields() {
        let mut posts = builtin_posts();
        posts[0].category = "  ".to_string();
        assert!(matches!(
            validate_posts(&posts, false),
            Err(CatalogError::EmptyField {
                id: 1,
                field: "category"
            })
        ));

        let mut posts = builtin_posts();
        posts[1].tags.push(String::new());
        assert!(matches!(
            validate_posts(&posts, false),
            Err(CatalogError::EmptyField { id: 2, field: "tag" })
        ));
    }

    #[test]
    fn test_empty_tag_list_is_allowed() {
        let mut posts = builtin_posts();
        posts[0].tags.clear();
        validate_posts(&posts, true).unwrap();
    }

    #[test]
    fn test_strict_dates() {
        let mut posts = builtin_posts();
        posts[2].date = "Late winter".to_string();
        validate_posts(&posts, false).unwrap();
        assert!(matches!(
            validate_posts(&posts, true),
            Err(CatalogError::UnparseableDate { id: 3, .. })
        ));
    }
}
