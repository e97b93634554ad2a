use dioxus::prelude::*;
use std::str::FromStr;

#[cfg(target_arch = "wasm32")]
const THEME_STORAGE_KEY: &str = "theme";

/// Color schemes the site renders in.
#[derive(Clone, Debug, PartialEq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn toggle(&self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Get the appropriate default theme based on system preference
    pub fn system_default(is_dark_preferred: bool) -> Theme {
        if is_dark_preferred {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

impl FromStr for Theme {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Ok(Theme::Dark), // Default to dark
        }
    }
}

/// Theme hook that manages theme state and persistence.
///
/// Restores a stored choice from localStorage on mount; with nothing stored,
/// follows the system color-scheme preference.
#[cfg(target_arch = "wasm32")]
pub fn use_theme() -> Signal<Theme> {
    let mut current_theme = use_signal(|| Theme::Dark);

    // Initialize theme from localStorage on mount
    use_effect(move || {
        spawn(async move {
            let mut restored = false;

            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    if let Ok(Some(saved)) = storage.get_item(THEME_STORAGE_KEY) {
                        if let Ok(theme) = saved.parse::<Theme>() {
                            let theme_clone = theme.clone();
                            current_theme.set(theme);
                            apply_theme_css(theme_clone).await;
                            restored = true;
                        }
                    }
                }
            }

            // No stored choice yet: detect system preference
            if !restored {
                let script = r#"
                    window.matchMedia('(prefers-color-scheme: dark)').matches
                "#;
                if let Ok(result) = document::eval(script).await {
                    if let Some(is_dark) = result.as_bool() {
                        let system_theme = Theme::system_default(is_dark);
                        let theme_clone = system_theme.clone();
                        current_theme.set(system_theme);
                        apply_theme_css(theme_clone).await;
                    }
                }
            }
        });
    });

    current_theme
}

/// Server renders start from the default; the client corrects it on mount.
#[cfg(not(target_arch = "wasm32"))]
pub fn use_theme() -> Signal<Theme> {
    use_signal(|| Theme::Dark)
}

/// Apply theme CSS classes to document element
#[cfg(target_arch = "wasm32")]
async fn apply_theme_css(theme: Theme) {
    let script = format!(
        r#"
        (function() {{
            const root = document.documentElement;
            root.classList.remove('dark', 'light');
            root.classList.add('{}');
        }})()
    "#,
        theme.as_str()
    );

    let _ = document::eval(&script).await;
}

/// Save theme to localStorage
#[cfg(target_arch = "wasm32")]
pub async fn save_theme(theme: Theme) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(THEME_STORAGE_KEY, theme.as_str());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn save_theme(_theme: Theme) {
    // No-op on server
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trips_through_storage_string() {
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
        assert_eq!(Theme::Dark.as_str(), "dark");
        assert_eq!(Theme::Light.as_str(), "light");
    }

    #[test]
    fn test_unknown_storage_value_falls_back_to_dark() {
        assert_eq!("solarized".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!("".parse::<Theme>(), Ok(Theme::Dark));
    }

    #[test]
    fn test_toggle_is_an_involution() {
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::Dark.toggle().toggle(), Theme::Dark);
    }

    #[test]
    fn test_system_default_follows_preference() {
        assert_eq!(Theme::system_default(true), Theme::Dark);
        assert_eq!(Theme::system_default(false), Theme::Light);
    }
}
