use dioxus::document;
use dioxus::prelude::*;

use crate::app::components::{Anchor, Prose};
use crate::app::layouts::leftbar::Leftbar;
use crate::app::pages::site_routes::Route;
use crate::domain::sections::{content_for, neighbors, page_routes, PageRoute};
use crate::shared::errors::{AppError, Result};

struct ResolvedPage {
    page: &'static PageRoute,
    body: &'static str,
    prev: Option<&'static PageRoute>,
    next: Option<&'static PageRoute>,
}

/// Looks the path segments after `/docs` up in the flattened tree. A bare
/// `/docs` lands on the first page.
fn resolve_page(pages: &'static [PageRoute], segments: &[String]) -> Result<ResolvedPage> {
    let href = if segments.is_empty() {
        pages
            .first()
            .ok_or(AppError::EmptyRouteSource)?
            .href
            .clone()
    } else {
        format!("/{}", segments.join("/"))
    };

    let page = pages
        .iter()
        .find(|p| p.href == href)
        .ok_or_else(|| AppError::PageNotFound(href.clone()))?;
    let body = content_for(&page.href).ok_or_else(|| AppError::PageNotFound(href))?;
    let (prev, next) = neighbors(&page.href);

    Ok(ResolvedPage {
        page,
        body,
        prev,
        next,
    })
}

/// A documentation page: sidebar, rendered markdown and the prev/next pager.
#[component]
pub fn Docs(segments: Vec<String>) -> Element {
    match resolve_page(page_routes(), &segments) {
        Ok(resolved) => rsx! {
            document::Title { "{resolved.page.title} - FerroDocs" }
            div { class: "c-docs",
                Leftbar {}
                article { class: "c-docs__article",
                    Prose { source: resolved.body }
                    nav { class: "c-docs__pager",
                        if let Some(prev) = resolved.prev {
                            Anchor {
                                href: format!("/docs{}", prev.href),
                                class: "c-docs__pager-link c-docs__pager-link--prev",
                                "← {prev.title}"
                            }
                        }
                        if let Some(next) = resolved.next {
                            Anchor {
                                href: format!("/docs{}", next.href),
                                class: "c-docs__pager-link c-docs__pager-link--next",
                                "{next.title} →"
                            }
                        }
                    }
                }
            }
        },
        Err(e) => {
            tracing::warn!("Docs lookup failed: {}", e);
            rsx! {
                div { class: "c-docs",
                    Leftbar {}
                    section { class: "c-not-found",
                        h1 { class: "c-not-found__title", "Page not found" }
                        p { class: "c-not-found__text",
                            "This documentation page does not exist. Pick a page from the sidebar."
                        }
                        Link { to: Route::Home {}, class: "c-link", "← Back home" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segments(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_resolves_a_known_page() {
        let resolved =
            resolve_page(page_routes(), &segments(&["getting-started", "installation"])).unwrap();
        assert_eq!(resolved.page.title, "Installation");
        assert!(resolved.body.contains("#"));
        assert_eq!(resolved.prev.unwrap().title, "Introduction");
        assert_eq!(resolved.next.unwrap().title, "Quick Start");
    }

    #[test]
    fn test_bare_docs_path_lands_on_first_page() {
        let resolved = resolve_page(page_routes(), &[]).unwrap();
        assert_eq!(resolved.page.href, "/getting-started/introduction");
        assert!(resolved.prev.is_none());
    }

    #[test]
    fn test_unknown_page_is_an_error() {
        let result = resolve_page(page_routes(), &segments(&["getting-started", "missing"]));
        assert!(matches!(result, Err(AppError::PageNotFound(_))));
    }

    #[test]
    fn test_empty_page_list_is_an_error() {
        let result = resolve_page(&[], &[]);
        assert!(matches!(result, Err(AppError::EmptyRouteSource)));
    }

    #[test]
    fn test_last_page_has_no_next() {
        let resolved = resolve_page(page_routes(), &segments(&["customization", "search"])).unwrap();
        assert!(resolved.next.is_none());
        assert_eq!(resolved.prev.unwrap().title, "Navigation");
    }
}
