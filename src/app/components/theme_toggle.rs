use dioxus::prelude::*;

use crate::app::components::icons::{MoonIcon, SunIcon};
use crate::shared::hooks::{save_theme, use_theme};

/// Light/dark switch for the header. Flips the current theme, swaps the
/// class on the document root and persists the choice.
#[component]
pub fn ThemeToggle() -> Element {
    let mut current_theme = use_theme();

    let toggle_theme = move |_| {
        let new_theme = current_theme().toggle();
        current_theme.set(new_theme.clone());

        spawn(async move {
            #[cfg(target_arch = "wasm32")]
            {
                let script = format!(
                    r#"
                    (function() {{
                        const root = document.documentElement;
                        root.classList.remove('dark', 'light');
                        root.classList.add('{}');
                    }})()
                "#,
                    new_theme.as_str()
                );

                let _ = document::eval(&script).await;
            }

            // Save to localStorage
            save_theme(new_theme).await;
        });
    };

    // Label announces the target state, not the current one
    let label = if current_theme().is_dark() {
        "Switch to light theme"
    } else {
        "Switch to dark theme"
    };

    rsx! {
        button {
            class: "c-theme-toggle",
            "data-tooltip": "{label}",
            aria_label: "{label}",
            onclick: toggle_theme,
            if current_theme().is_dark() {
                MoonIcon {}
            } else {
                SunIcon {}
            }
        }
    }
}
