use once_cell::sync::Lazy;

/// One node in the documentation tree.
///
/// Sections with `no_link` are grouping headings: they have no page of their
/// own, but their children inherit their path segment.
#[derive(Debug, Clone, PartialEq)]
pub struct DocSection {
    pub title: &'static str,
    pub path: &'static str,
    pub no_link: bool,
    pub children: &'static [DocSection],
}

/// A flattened leaf page. `href` is the section paths joined root-to-leaf,
/// without the `/docs` mount point.
#[derive(Debug, Clone, PartialEq)]
pub struct PageRoute {
    pub title: String,
    pub href: String,
}

/// The documentation tree, in display order. This is static configuration:
/// adding a page means adding a node here and a markdown body in `content/`.
pub static SECTIONS: &[DocSection] = &[
    DocSection {
        title: "Getting Started",
        path: "/getting-started",
        no_link: true,
        children: &[
            DocSection {
                title: "Introduction",
                path: "/introduction",
                no_link: false,
                children: &[],
            },
            DocSection {
                title: "Installation",
                path: "/installation",
                no_link: false,
                children: &[],
            },
            DocSection {
                title: "Quick Start",
                path: "/quick-start",
                no_link: false,
                children: &[],
            },
        ],
    },
    DocSection {
        title: "Customization",
        path: "/customization",
        no_link: true,
        children: &[
            DocSection {
                title: "Theming",
                path: "/theming",
                no_link: false,
                children: &[],
            },
            DocSection {
                title: "Navigation",
                path: "/navigation",
                no_link: false,
                children: &[],
            },
            DocSection {
                title: "Search",
                path: "/search",
                no_link: false,
                children: &[],
            },
        ],
    },
];

static PAGE_ROUTES: Lazy<Vec<PageRoute>> = Lazy::new(|| {
    let mut pages = Vec::new();
    for section in SECTIONS {
        collect_pages(section, "", &mut pages);
    }
    pages
});

/// All leaf pages in pre-order. The order drives the navbar's first entry and
/// the prev/next pager on docs pages.
pub fn page_routes() -> &'static [PageRoute] {
    &PAGE_ROUTES
}

fn collect_pages(section: &DocSection, prefix: &str, out: &mut Vec<PageRoute>) {
    let href = format!("{}{}", prefix, section.path);
    if !section.no_link {
        out.push(PageRoute {
            title: section.title.to_string(),
            href: href.clone(),
        });
    }
    for child in section.children {
        collect_pages(child, &href, out);
    }
}

/// Previous and next page around `href` in flatten order. Unknown hrefs get
/// no neighbors.
pub fn neighbors(href: &str) -> (Option<&'static PageRoute>, Option<&'static PageRoute>) {
    let pages = page_routes();
    let Some(index) = pages.iter().position(|p| p.href == href) else {
        return (None, None);
    };
    let prev = index.checked_sub(1).map(|i| &pages[i]);
    let next = pages.get(index + 1);
    (prev, next)
}

/// Markdown body for a documentation page, by flattened href.
pub fn content_for(href: &str) -> Option<&'static str> {
    match href {
        "/getting-started/introduction" => {
            Some(include_str!("../../content/docs/introduction.md"))
        }
        "/getting-started/installation" => {
            Some(include_str!("../../content/docs/installation.md"))
        }
        "/getting-started/quick-start" => Some(include_str!("../../content/docs/quick-start.md")),
        "/customization/theming" => Some(include_str!("../../content/docs/theming.md")),
        "/customization/navigation" => Some(include_str!("../../content/docs/navigation.md")),
        "/customization/search" => Some(include_str!("../../content/docs/search.md")),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_first_page_is_first_leaf_of_first_section() {
        let pages = page_routes();
        assert_eq!(pages[0].title, "Introduction");
        assert_eq!(pages[0].href, "/getting-started/introduction");
    }

    #[test]
    fn test_flatten_preserves_tree_order() {
        let hrefs: Vec<&str> = page_routes().iter().map(|p| p.href.as_str()).collect();
        assert_eq!(
            hrefs,
            vec![
                "/getting-started/introduction",
                "/getting-started/installation",
                "/getting-started/quick-start",
                "/customization/theming",
                "/customization/navigation",
                "/customization/search",
            ]
        );
    }

    #[test]
    fn test_hrefs_are_unique_and_rooted() {
        let pages = page_routes();
        let unique: HashSet<&str> = pages.iter().map(|p| p.href.as_str()).collect();
        assert_eq!(unique.len(), pages.len());
        assert!(pages.iter().all(|p| p.href.starts_with('/')));
    }

    #[test]
    fn test_no_link_sections_are_not_pages() {
        assert!(page_routes().iter().all(|p| p.title != "Getting Started"));
        assert!(page_routes().iter().all(|p| p.title != "Customization"));
    }

    #[test]
    fn test_every_page_has_content() {
        for page in page_routes() {
            let body = content_for(&page.href);
            assert!(body.is_some(), "missing markdown for {}", page.href);
            assert!(!body.unwrap().trim().is_empty());
        }
    }

    #[test]
    fn test_neighbors_walk_the_flatten_order() {
        let (prev, next) = neighbors("/getting-started/installation");
        assert_eq!(prev.unwrap().href, "/getting-started/introduction");
        assert_eq!(next.unwrap().href, "/getting-started/quick-start");

        let (prev, _) = neighbors("/getting-started/introduction");
        assert!(prev.is_none());

        let (_, next) = neighbors("/customization/search");
        assert!(next.is_none());
    }

    #[test]
    fn test_neighbors_of_unknown_href_are_empty() {
        assert_eq!(neighbors("/nope"), (None, None));
    }

    #[test]
    fn test_nested_child_inherits_parent_path() {
        // Synthetic tree: a linked section with a child page
        static TREE: &[DocSection] = &[DocSection {
            title: "Guide",
            path: "/guide",
            no_link: false,
            children: &[DocSection {
                title: "Advanced",
                path: "/advanced",
                no_link: false,
                children: &[],
            }],
        }];

        let mut pages = Vec::new();
        for section in TREE {
            collect_pages(section, "", &mut pages);
        }

        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].href, "/guide");
        assert_eq!(pages[1].href, "/guide/advanced");
    }
}
