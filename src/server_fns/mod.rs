//! Server functions for Dioxus Fullstack
//! These functions run on the server and are callable from the client

use dioxus::prelude::*;

use crate::config::SearchConfig;

/// Search-index credentials for the browser-side widget.
///
/// Read from the process environment on every call and passed through as-is.
/// Incomplete credentials are reported, not rejected: the widget decides how
/// to surface them.
#[server]
pub async fn search_credentials() -> Result<SearchConfig, ServerFnError> {
    let config = SearchConfig::from_env();
    if !config.is_complete() {
        tracing::warn!("search credentials incomplete, widget will run unconfigured");
    }
    Ok(config)
}
