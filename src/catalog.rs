//! Post catalog - an immutable, indexed collection of blog posts

use std::cmp::Reverse;
use std::collections::HashMap;
use std::path::Path;

use indexmap::IndexMap;
use lazy_static::lazy_static;

use crate::content::{builtin_posts, loader, validate_posts, BlogPost};
use crate::error::Result;

lazy_static! {
    static ref BUILTIN: PostCatalog =
        PostCatalog::new(builtin_posts()).expect("built-in posts are valid");
}

/// All posts in authored order, with slug and id indexes
///
/// A catalog is built once and never changes. Accessors hand out shared
/// references; cloning a returned post yields an independent copy.
#[derive(Debug, Clone)]
pub struct PostCatalog {
    posts: Vec<BlogPost>,
    by_slug: HashMap<String, usize>,
    by_id: HashMap<u32, usize>,
}

impl PostCatalog {
    /// Build a catalog, rejecting duplicate ids or slugs and malformed records
    pub fn new(posts: Vec<BlogPost>) -> Result<Self> {
        Self::with_options(posts, false)
    }

    /// Build a catalog, optionally requiring every date to parse
    pub fn with_options(posts: Vec<BlogPost>, strict_dates: bool) -> Result<Self> {
        validate_posts(&posts, strict_dates)?;

        let by_slug = posts
            .iter()
            .enumerate()
            .map(|(i, p)| (p.slug.clone(), i))
            .collect();
        let by_id = posts.iter().enumerate().map(|(i, p)| (p.id, i)).collect();

        Ok(Self {
            posts,
            by_slug,
            by_id,
        })
    }

    /// Load and validate a catalog from a JSON or YAML data file
    pub fn load<P: AsRef<Path>>(path: P, strict_dates: bool) -> Result<Self> {
        let path = path.as_ref();
        let catalog = Self::with_options(loader::load_posts(path)?, strict_dates)?;
        tracing::info!("Loaded {} posts from {:?}", catalog.len(), path);
        Ok(catalog)
    }

    /// The compiled-in catalog, shared for the life of the process
    pub fn builtin() -> &'static PostCatalog {
        &BUILTIN
    }

    /// Every post, in catalog order
    pub fn all(&self) -> &[BlogPost] {
        &self.posts
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BlogPost> {
        self.posts.iter()
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Look up a post by slug; `None` means not found
    pub fn get_by_slug(&self, slug: &str) -> Option<&BlogPost> {
        self.by_slug.get(slug).map(|&i| &self.posts[i])
    }

    /// Look up a post by id; `None` means not found
    pub fn get_by_id(&self, id: u32) -> Option<&BlogPost> {
        self.by_id.get(&id).map(|&i| &self.posts[i])
    }

    /// Posts whose category matches exactly (case-sensitive), in catalog order
    pub fn by_category(&self, category: &str) -> Vec<&BlogPost> {
        self.posts.iter().filter(|p| p.category == category).collect()
    }

    /// Posts carrying `tag`, in catalog order
    pub fn by_tag(&self, tag: &str) -> Vec<&BlogPost> {
        self.posts.iter().filter(|p| p.has_tag(tag)).collect()
    }

    /// Featured posts, in catalog order
    pub fn featured(&self) -> Vec<&BlogPost> {
        self.posts.iter().filter(|p| p.featured).collect()
    }

    /// Category names with post counts, in order of first appearance
    pub fn categories(&self) -> Vec<(&str, usize)> {
        let mut counts: IndexMap<&str, usize> = IndexMap::new();
        for post in &self.posts {
            *counts.entry(post.category.as_str()).or_insert(0) += 1;
        }
        counts.into_iter().collect()
    }

    /// Tag names with post counts, in order of first appearance
    pub fn tags(&self) -> Vec<(&str, usize)> {
        let mut counts: IndexMap<&str, usize> = IndexMap::new();
        for tag in self.posts.iter().flat_map(|p| &p.tags) {
            *counts.entry(tag.as_str()).or_insert(0) += 1;
        }
        counts.into_iter().collect()
    }

    /// The post before `slug` in catalog order
    pub fn prev(&self, slug: &str) -> Option<&BlogPost> {
        let pos = *self.by_slug.get(slug)?;
        pos.checked_sub(1).map(|i| &self.posts[i])
    }

    /// The post after `slug` in catalog order
    pub fn next(&self, slug: &str) -> Option<&BlogPost> {
        let pos = *self.by_slug.get(slug)?;
        self.posts.get(pos + 1)
    }

    /// Posts newest first by parsed date
    ///
    /// Posts whose date cannot be parsed come last. Ties keep catalog order.
    pub fn sorted_by_date(&self) -> Vec<&BlogPost> {
        let mut posts: Vec<&BlogPost> = self.posts.iter().collect();
        // Option orders None before Some, so reversing puts undated posts last
        posts.sort_by_key(|p| Reverse(p.published_date()));
        posts
    }
}

impl<'a> IntoIterator for &'a PostCatalog {
    type Item = &'a BlogPost;
    type IntoIter = std::slice::Iter<'a, BlogPost>;

    fn into_iter(self) -> Self::IntoIter {
        self.posts.iter()
    }
}
