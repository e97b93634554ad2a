use chrono::NaiveDate;
use once_cell::sync::Lazy;

/// A published blog post. Bodies are compiled in from `content/blog/`.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub slug: &'static str,
    pub title: &'static str,
    pub date: NaiveDate,
    pub summary: &'static str,
    pub body: &'static str,
}

/// All posts, newest first.
static POSTS: Lazy<Vec<Post>> = Lazy::new(|| {
    let mut posts = vec![
        Post {
            slug: "introducing-ferrodocs",
            title: "Introducing FerroDocs",
            date: NaiveDate::from_ymd_opt(2025, 5, 20).expect("valid publish date"),
            summary: "A documentation site that treats its navigation as data: \
                      one section tree drives the navbar, the sidebar and the pager.",
            body: include_str!("../../content/blog/introducing-ferrodocs.md"),
        },
        Post {
            slug: "instant-search-for-your-docs",
            title: "Instant Search for Your Docs",
            date: NaiveDate::from_ymd_opt(2025, 7, 8).expect("valid publish date"),
            summary: "The new search widget queries a hosted index straight from \
                      the browser and owns every failure mode itself.",
            body: include_str!("../../content/blog/instant-search-for-your-docs.md"),
        },
    ];
    posts.sort_by(|a, b| b.date.cmp(&a.date));
    posts
});

pub fn posts() -> &'static [Post] {
    &POSTS
}

pub fn post_by_slug(slug: &str) -> Option<&'static Post> {
    POSTS.iter().find(|p| p.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_posts_are_newest_first() {
        let dates: Vec<NaiveDate> = posts().iter().map(|p| p.date).collect();
        let mut sorted = dates.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(dates, sorted);
    }

    #[test]
    fn test_slugs_are_unique() {
        let slugs: HashSet<&str> = posts().iter().map(|p| p.slug).collect();
        assert_eq!(slugs.len(), posts().len());
    }

    #[test]
    fn test_lookup_by_slug() {
        let post = post_by_slug("introducing-ferrodocs").unwrap();
        assert_eq!(post.title, "Introducing FerroDocs");
        assert!(post_by_slug("missing-post").is_none());
    }

    #[test]
    fn test_bodies_are_not_empty() {
        for post in posts() {
            assert!(!post.body.trim().is_empty(), "empty body for {}", post.slug);
        }
    }
}
