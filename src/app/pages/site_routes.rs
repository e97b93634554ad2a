use dioxus::document;
use dioxus::prelude::*;

use crate::app::components::Anchor;
use crate::app::layouts::navbar::Navbar;
use crate::app::pages::blog::{Blog, BlogPost};
use crate::app::pages::docs::Docs;
use crate::domain::nav::NAV_LINKS;

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    // Landing page
    #[route("/")]
    Home {},

    // Documentation pages, addressed by their position in the section tree
    #[route("/docs/:..segments")]
    Docs { segments: Vec<String> },

    // Blog index and posts
    #[route("/blog")]
    Blog {},
    #[route("/blog/:slug")]
    BlogPost { slug: String },

    // Everything else
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    use_effect(|| {
        tracing::info!("FerroDocs app initialized");
    });

    rsx! {
        Router::<Route> {}
    }
}

#[component]
fn Layout() -> Element {
    // Use asset!() macro to ensure CSS is bundled and served correctly
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    rsx! {
        document::Link {
            rel: "stylesheet",
            href: BUNDLE_CSS
        }
        div { class: "c-layout",
            Navbar {}
            main { class: "c-layout__main",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Home() -> Element {
    rsx! {
        document::Title { "FerroDocs - Documentation that ships with your code" }
        section { class: "c-hero",
            h1 { class: "c-hero__title", "Documentation that ships with your code" }
            p { class: "c-hero__tagline",
                "FerroDocs turns one section tree into a full documentation site: "
                "navigation, sidebar, search and a blog, rendered server-side and "
                "hydrated in the browser."
            }
            div { class: "c-hero__actions",
                // The first nav entry doubles as the call-to-action target
                Anchor {
                    href: NAV_LINKS[0].href.clone(),
                    class: "c-button c-button--primary",
                    "Get started"
                }
                Link { to: Route::Blog {}, class: "c-button c-button--ghost", "Read the blog" }
            }
        }
    }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        document::Title { "Page not found - FerroDocs" }
        section { class: "c-not-found",
            h1 { class: "c-not-found__title", "Page not found" }
            p { class: "c-not-found__text", "Nothing lives at {path}." }
            Link { to: Route::Home {}, class: "c-link", "← Back home" }
        }
    }
}
