use dioxus::prelude::*;

use crate::app::components::icons::CloseIcon;

/// Slide-out panel for small screens. Renders nothing while closed; the
/// backdrop and the close button both clear `open`.
#[component]
pub fn Sheet(open: Signal<bool>, children: Element) -> Element {
    if !open() {
        return rsx! {};
    }

    rsx! {
        // Backdrop
        div {
            class: "c-sheet__backdrop",
            onclick: move |_| open.set(false),
        }

        // Panel
        aside {
            class: "c-sheet",
            role: "dialog",
            aria_label: "Navigation menu",
            button {
                class: "c-sheet__close",
                aria_label: "Close navigation menu",
                onclick: move |_| open.set(false),
                CloseIcon {}
            }
            div { class: "c-sheet__content", {children} }
        }
    }
}

/// Wrapper that reports any click inside it, so the owner of the sheet can
/// dismiss it when a destination is picked. The capability travels as an
/// explicit handler, not through context.
#[component]
pub fn SheetClose(on_select: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "c-sheet__dismiss",
            onclick: move |_| on_select.call(()),
            {children}
        }
    }
}
