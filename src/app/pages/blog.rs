use dioxus::document;
use dioxus::prelude::*;

use crate::app::components::Prose;
use crate::app::pages::site_routes::Route;
use crate::domain::blog::{post_by_slug, posts, Post};
use crate::shared::errors::{AppError, Result};

fn resolve_post(slug: &str) -> Result<&'static Post> {
    post_by_slug(slug).ok_or_else(|| AppError::PostNotFound(slug.to_string()))
}

/// Blog index, newest post first.
#[component]
pub fn Blog() -> Element {
    rsx! {
        document::Title { "Blog - FerroDocs" }
        section { class: "c-blog",
            header { class: "c-blog__header",
                h1 { class: "c-blog__title", "Blog" }
                p { class: "c-blog__tagline", "Release notes and notes from building FerroDocs." }
            }
            ul { class: "c-blog__list",
                for post in posts().iter() {
                    li { key: "{post.slug}", class: "c-blog__item",
                        Link {
                            to: Route::BlogPost { slug: post.slug.to_string() },
                            class: "c-blog__item-link",
                            span { class: "c-blog__item-title", "{post.title}" }
                            span { class: "c-blog__item-date",
                                {post.date.format("%B %e, %Y").to_string()}
                            }
                            span { class: "c-blog__item-summary", "{post.summary}" }
                        }
                    }
                }
            }
        }
    }
}

/// A single post, or the not-found state for stale links.
#[component]
pub fn BlogPost(slug: String) -> Element {
    match resolve_post(&slug) {
        Ok(post) => rsx! {
            document::Title { "{post.title} - FerroDocs" }
            article { class: "c-blog-post",
                header { class: "c-blog-post__header",
                    h1 { class: "c-blog-post__title", "{post.title}" }
                    p { class: "c-blog-post__date",
                        {post.date.format("%B %e, %Y").to_string()}
                    }
                }
                Prose { source: post.body }
                nav { class: "c-blog-post__footer",
                    Link { to: Route::Blog {}, class: "c-link", "← All posts" }
                }
            }
        },
        Err(e) => {
            tracing::warn!("Blog lookup failed: {}", e);
            rsx! {
                section { class: "c-not-found",
                    h1 { class: "c-not-found__title", "Post not found" }
                    p { class: "c-not-found__text", "No post is published at this address." }
                    Link { to: Route::Blog {}, class: "c-link", "← All posts" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolves_published_posts() {
        let post = resolve_post("instant-search-for-your-docs").unwrap();
        assert_eq!(post.title, "Instant Search for Your Docs");
    }

    #[test]
    fn test_unknown_slug_is_an_error() {
        assert!(matches!(
            resolve_post("unpublished"),
            Err(AppError::PostNotFound(_))
        ));
    }
}
