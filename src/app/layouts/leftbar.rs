use dioxus::prelude::*;

use crate::app::components::icons::MenuIcon;
use crate::app::components::{Anchor, MatchPolicy, Sheet, SheetClose};
use crate::app::layouts::navbar::{Logo, NavMenu};
use crate::domain::sections::{DocSection, SECTIONS};

/// Mobile navigation entry point: the burger trigger and the sheet it opens.
/// Every destination inside dismisses the panel when picked.
#[component]
pub fn SheetLeftbar() -> Element {
    let mut open = use_signal(|| false);

    rsx! {
        button {
            class: "c-navbar__menu-trigger",
            aria_label: "Open navigation menu",
            onclick: move |_| open.set(true),
            MenuIcon {}
        }
        Sheet { open,
            SheetClose { on_select: move |_| open.set(false), Logo {} }
            nav { class: "c-sheet__links",
                NavMenu { is_sheet: true, on_select: move |_| open.set(false) }
            }
            div { class: "c-sheet__docs",
                DocsMenu { on_select: move |_| open.set(false) }
            }
        }
    }
}

/// Desktop documentation sidebar.
#[component]
pub fn Leftbar() -> Element {
    rsx! {
        aside { class: "c-leftbar",
            DocsMenu {}
        }
    }
}

/// The documentation tree as a nested menu. Leaf links highlight exactly
/// their own page; with an `on_select` handler each pick also dismisses the
/// sheet the menu sits in.
#[component]
pub fn DocsMenu(#[props(default)] on_select: Option<EventHandler<()>>) -> Element {
    rsx! {
        nav { class: "c-docs-menu",
            for section in SECTIONS.iter() {
                DocsMenuSection {
                    key: "{section.title}{section.path}",
                    section: section.clone(),
                    prefix: String::new(),
                    on_select,
                }
            }
        }
    }
}

#[component]
fn DocsMenuSection(
    section: DocSection,
    prefix: String,
    on_select: Option<EventHandler<()>>,
) -> Element {
    let href = format!("{}{}", prefix, section.path);

    let entry = if section.no_link {
        rsx! {
            span { class: "c-docs-menu__heading", "{section.title}" }
        }
    } else {
        let anchor = rsx! {
            Anchor {
                href: format!("/docs{href}"),
                policy: MatchPolicy::Exact,
                class: "c-docs-menu__link",
                active_class: "c-docs-menu__link--active",
                "{section.title}"
            }
        };
        match on_select {
            Some(handler) => rsx! {
                SheetClose { on_select: move |_| handler.call(()), {anchor} }
            },
            None => anchor,
        }
    };

    rsx! {
        div { class: "c-docs-menu__section",
            {entry}
            if !section.children.is_empty() {
                div { class: "c-docs-menu__items",
                    for child in section.children.iter() {
                        DocsMenuSection {
                            key: "{child.title}{child.path}",
                            section: child.clone(),
                            prefix: href.clone(),
                            on_select,
                        }
                    }
                }
            }
        }
    }
}
