use once_cell::sync::Lazy;

use crate::domain::sections::{page_routes, PageRoute};
use crate::shared::errors::{AppError, Result};

/// A single entry in the site header.
#[derive(Debug, Clone, PartialEq)]
pub struct NavLink {
    pub title: String,
    pub href: String,
}

impl NavLink {
    /// Rendering identity for keyed lists: stable across re-renders and
    /// unique as long as no two links share both title and href.
    pub fn key(&self) -> String {
        format!("{}{}", self.title, self.href)
    }
}

/// Builds the header links from the documentation route source.
///
/// The Documentation entry points at the first page of the flattened tree, so
/// reordering sections in [`crate::domain::sections::SECTIONS`] retargets the
/// navbar without touching this module.
pub fn nav_links(pages: &[PageRoute]) -> Result<Vec<NavLink>> {
    let first = pages.first().ok_or(AppError::EmptyRouteSource)?;
    Ok(vec![
        NavLink {
            title: "Documentation".to_string(),
            href: format!("/docs{}", first.href),
        },
        NavLink {
            title: "Blog".to_string(),
            href: "/blog".to_string(),
        },
    ])
}

/// Header links, built once at first access. An empty route tree is a build
/// configuration error and must not produce a half-working header.
pub static NAV_LINKS: Lazy<Vec<NavLink>> = Lazy::new(|| {
    nav_links(page_routes()).expect("documentation tree has no pages, navbar cannot be built")
});

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(hrefs: &[(&str, &str)]) -> Vec<PageRoute> {
        hrefs
            .iter()
            .map(|(title, href)| PageRoute {
                title: title.to_string(),
                href: href.to_string(),
            })
            .collect()
    }

    #[test]
    fn test_documentation_entry_targets_first_page() {
        let links = nav_links(&pages(&[
            ("Intro", "/start/intro"),
            ("Setup", "/start/setup"),
        ]))
        .unwrap();

        assert_eq!(links[0].title, "Documentation");
        assert_eq!(links[0].href, "/docs/start/intro");
    }

    #[test]
    fn test_exactly_one_blog_entry() {
        let links = nav_links(&pages(&[("Intro", "/intro")])).unwrap();
        let blogs: Vec<&NavLink> = links.iter().filter(|l| l.href == "/blog").collect();
        assert_eq!(blogs.len(), 1);
        assert_eq!(blogs[0].title, "Blog");
    }

    #[test]
    fn test_documentation_precedes_blog() {
        let links = nav_links(&pages(&[("Intro", "/intro")])).unwrap();
        let titles: Vec<&str> = links.iter().map(|l| l.title.as_str()).collect();
        assert_eq!(titles, vec!["Documentation", "Blog"]);
    }

    #[test]
    fn test_empty_route_source_is_an_error() {
        let result = nav_links(&[]);
        assert!(matches!(result, Err(AppError::EmptyRouteSource)));
    }

    #[test]
    fn test_keys_are_pairwise_distinct() {
        let links = nav_links(&pages(&[("Intro", "/intro")])).unwrap();
        for (i, a) in links.iter().enumerate() {
            for b in links.iter().skip(i + 1) {
                assert_ne!(a.key(), b.key());
            }
        }
    }

    #[test]
    fn test_key_concatenates_title_and_href() {
        let link = NavLink {
            title: "Blog".to_string(),
            href: "/blog".to_string(),
        };
        assert_eq!(link.key(), "Blog/blog");
    }

    #[test]
    fn test_static_links_follow_the_real_tree() {
        assert_eq!(NAV_LINKS[0].href, "/docs/getting-started/introduction");
        assert_eq!(NAV_LINKS[1].href, "/blog");
    }
}
