use dioxus::prelude::*;

use crate::app::components::icons::BookIcon;
use crate::app::components::{Anchor, DocsSearch, MatchPolicy, SheetClose, ThemeToggle};
use crate::app::layouts::leftbar::SheetLeftbar;
use crate::app::pages::site_routes::Route;
use crate::config::SearchConfig;
use crate::domain::nav::{NavLink, NAV_LINKS};
use crate::server_fns::search_credentials;

/// Site header: mobile menu trigger, logo, link menu, search and the theme
/// toggle. Search credentials are fetched once from the server and handed to
/// the widget verbatim.
#[component]
pub fn Navbar() -> Element {
    let credentials = use_server_future(move || async move { search_credentials().await })?;

    let search = match &*credentials.read() {
        Some(Ok(config)) => rsx! {
            DocsSearch { config: config.clone() }
        },
        Some(Err(e)) => {
            // The widget reports missing credentials in its own UI
            tracing::warn!("Search credentials unavailable: {}", e);
            rsx! {
                DocsSearch { config: SearchConfig::default() }
            }
        }
        None => rsx! {},
    };

    rsx! {
        nav { class: "c-navbar",
            div { class: "c-navbar__inner",
                div { class: "c-navbar__start",
                    SheetLeftbar {}
                    div { class: "c-navbar__brand", Logo {} }
                    div { class: "c-navbar__links", NavMenu {} }
                }
                div { class: "c-navbar__end",
                    {search}
                    ThemeToggle {}
                }
            }
        }
    }
}

/// The top-level link menu.
///
/// In sheet mode every link is wrapped in a dismiss-on-select container, so
/// picking a destination also closes the panel around the menu.
#[component]
pub fn NavMenu(
    #[props(default = false)] is_sheet: bool,
    #[props(default)] on_select: Option<EventHandler<()>>,
) -> Element {
    rsx! {
        for link in NAV_LINKS.iter() {
            NavMenuEntry {
                key: "{link.key()}",
                link: link.clone(),
                is_sheet,
                on_select,
            }
        }
    }
}

#[component]
fn NavMenuEntry(
    link: NavLink,
    is_sheet: bool,
    on_select: Option<EventHandler<()>>,
) -> Element {
    wrap_for_sheet(
        is_sheet,
        on_select,
        rsx! {
            Anchor {
                href: link.href.clone(),
                policy: MatchPolicy::Section,
                class: "c-navbar__link",
                active_class: "c-navbar__link--active",
                "{link.title}"
            }
        },
    )
}

/// Sheet mode puts the entry inside the dismiss container; otherwise the
/// entry renders bare.
fn wrap_for_sheet(
    is_sheet: bool,
    on_select: Option<EventHandler<()>>,
    entry: Element,
) -> Element {
    if !is_sheet {
        return entry;
    }

    rsx! {
        SheetClose {
            on_select: move |_| {
                if let Some(handler) = &on_select {
                    handler.call(());
                }
            },
            {entry}
        }
    }
}

/// Wordmark linking back to the landing page.
#[component]
pub fn Logo() -> Element {
    rsx! {
        Link {
            to: Route::Home {},
            class: "c-navbar__logo",
            aria_label: "FerroDocs home",
            BookIcon {}
            span { class: "c-navbar__wordmark", "FerroDocs" }
        }
    }
}
