use dioxus::prelude::*;

use crate::app::pages::site_routes::Route;

/// How a link decides it is the active one.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum MatchPolicy {
    /// Active on the exact page only.
    #[default]
    Exact,
    /// Active anywhere inside the link's top-level section. A link to one
    /// docs page stays highlighted while the visitor reads a sibling page.
    Section,
}

impl MatchPolicy {
    pub fn is_active(&self, current: &str, candidate: &str) -> bool {
        let current = normalize(current);
        let candidate = normalize(candidate);
        match self {
            MatchPolicy::Exact => current == candidate,
            MatchPolicy::Section => top_segment(current) == top_segment(candidate),
        }
    }
}

/// Trailing slashes carry no routing meaning here.
fn normalize(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

fn top_segment(path: &str) -> &str {
    path.trim_start_matches('/').split('/').next().unwrap_or("")
}

/// Styled link that appends `active_class` when its target matches the
/// current location under the given policy.
///
/// Internal hrefs go through the router; anything the route table cannot
/// parse falls back to a plain anchor.
#[component]
pub fn Anchor(
    href: String,
    #[props(default)] policy: MatchPolicy,
    #[props(default)] class: String,
    #[props(default)] active_class: String,
    children: Element,
) -> Element {
    let current = use_route::<Route>().to_string();
    let class = if policy.is_active(&current, &href) {
        format!("{class} {active_class}")
    } else {
        class
    };

    // External URLs leave the router entirely
    if href.starts_with("http://") || href.starts_with("https://") {
        return rsx! {
            a {
                href: "{href}",
                class: "{class}",
                target: "_blank",
                rel: "noreferrer",
                {children}
            }
        };
    }

    match href.parse::<Route>() {
        Ok(route) => rsx! {
            Link { to: route, class: "{class}", {children} }
        },
        Err(_) => rsx! {
            a { href: "{href}", class: "{class}", {children} }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_matches_identical_path() {
        assert!(MatchPolicy::Exact.is_active("/blog", "/blog"));
        assert!(MatchPolicy::Exact.is_active("/", "/"));
    }

    #[test]
    fn test_exact_rejects_sibling_and_nested_paths() {
        assert!(!MatchPolicy::Exact.is_active("/docs/intro", "/docs/setup"));
        assert!(!MatchPolicy::Exact.is_active("/blog/post", "/blog"));
    }

    #[test]
    fn test_section_matches_across_a_docs_tree() {
        // The navbar entry targets one page but stays lit on all of them
        assert!(MatchPolicy::Section.is_active("/docs/customization/theming", "/docs/getting-started/introduction"));
        assert!(MatchPolicy::Section.is_active("/docs", "/docs/getting-started/introduction"));
    }

    #[test]
    fn test_section_does_not_bleed_into_lookalike_prefixes() {
        assert!(!MatchPolicy::Section.is_active("/blog-archive", "/blog"));
        assert!(!MatchPolicy::Section.is_active("/docsify", "/docs/intro"));
    }

    #[test]
    fn test_section_separates_top_level_areas() {
        assert!(!MatchPolicy::Section.is_active("/blog", "/docs/intro"));
        assert!(!MatchPolicy::Section.is_active("/", "/blog"));
    }

    #[test]
    fn test_trailing_slashes_are_ignored() {
        assert!(MatchPolicy::Exact.is_active("/blog/", "/blog"));
        assert!(MatchPolicy::Exact.is_active("/blog", "/blog/"));
        assert!(MatchPolicy::Section.is_active("/docs/", "/docs/intro"));
    }

    #[test]
    fn test_disjoint_links_yield_at_most_one_active() {
        // Links with disjoint top-level sections: no location lights up two
        let hrefs = ["/docs/getting-started/introduction", "/blog"];
        for current in ["/", "/docs/customization/search", "/blog", "/blog/some-post"] {
            let active = hrefs
                .iter()
                .filter(|href| MatchPolicy::Section.is_active(current, href))
                .count();
            assert!(active <= 1, "{current} lit {active} links");
        }

        // Standing on a link's own target lights exactly that link
        for href in hrefs {
            let active = hrefs
                .iter()
                .filter(|candidate| MatchPolicy::Section.is_active(href, candidate))
                .count();
            assert_eq!(active, 1, "{href} lit {active} links");
        }
    }
}
