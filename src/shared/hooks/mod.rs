// Custom Dioxus hooks

pub mod use_theme;

pub use use_theme::{save_theme, use_theme, Theme};
