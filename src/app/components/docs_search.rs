//! Documentation search widget
//!
//! Self-contained: owns its modal, its index round-trips and every failure
//! mode. The navbar only hands credentials through.

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

use crate::app::components::icons::SearchIcon;
use crate::app::pages::site_routes::Route;
use crate::config::SearchConfig;
use crate::shared::errors::Result;

/// Delay after the last keystroke before a query leaves the browser.
const DEBOUNCE_MS: u32 = 250;
/// Result cap per query.
const PAGE_SIZE: u8 = 8;

/// Query payload in the shape the hosted index expects.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchRequest {
    pub query: String,
    #[serde(rename = "hitsPerPage")]
    pub hits_per_page: u8,
}

/// One hit as the index returns it. Extra fields are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchHit {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub excerpt: String,
}

#[cfg(any(target_arch = "wasm32", test))]
#[derive(Debug, Clone, PartialEq, Deserialize)]
struct SearchResponse {
    hits: Vec<SearchHit>,
}

#[derive(Clone, PartialEq)]
enum SearchState {
    Idle,
    Loading,
    Results(Vec<SearchHit>),
    Failed(String),
}

/// Endpoint for one index on the standard DSN host layout.
pub fn query_url(config: &SearchConfig) -> String {
    format!(
        "https://{}-dsn.algolia.net/1/indexes/{}/query",
        config.app_id, config.index_name
    )
}

pub fn request_body(query: &str) -> SearchRequest {
    SearchRequest {
        query: query.to_string(),
        hits_per_page: PAGE_SIZE,
    }
}

/// Search trigger plus the modal it opens.
///
/// Credentials arrive through props exactly as configured; when they are
/// incomplete the modal says so instead of querying.
#[component]
pub fn DocsSearch(config: SearchConfig) -> Element {
    let mut open = use_signal(|| false);
    let mut query = use_signal(String::new);
    let mut state = use_signal(|| SearchState::Idle);
    // Bumped per keystroke so stale debounced queries drop themselves
    let mut generation = use_signal(|| 0u32);

    let misconfigured = !config.is_complete();
    let search_config = config.clone();

    let on_input = move |evt: FormEvent| {
        let text = evt.value();
        query.set(text.clone());

        let id = generation() + 1;
        generation.set(id);

        if text.trim().is_empty() {
            state.set(SearchState::Idle);
            return;
        }

        state.set(SearchState::Loading);
        let config = search_config.clone();

        spawn(async move {
            debounce(DEBOUNCE_MS).await;
            if generation() != id {
                // Superseded by a newer keystroke
                return;
            }

            match query_index(&config, text.trim()).await {
                Ok(hits) => state.set(SearchState::Results(hits)),
                Err(e) => {
                    tracing::error!("Documentation search failed: {}", e);
                    state.set(SearchState::Failed(e.to_string()));
                }
            }
        });
    };

    let results = if misconfigured {
        rsx! {
            p { class: "c-search__status",
                "Search is not configured. Set the index credentials to enable it."
            }
        }
    } else {
        match state() {
            SearchState::Idle => rsx! {
                p { class: "c-search__status", "Type to search the documentation." }
            },
            SearchState::Loading => rsx! {
                p { class: "c-search__status", "Searching..." }
            },
            SearchState::Failed(message) => rsx! {
                p { class: "c-search__status c-search__status--error",
                    "Search failed: {message}"
                }
            },
            SearchState::Results(hits) => {
                if hits.is_empty() {
                    rsx! {
                        p { class: "c-search__status", "No results for that query." }
                    }
                } else {
                    rsx! {
                        ul { class: "c-search__hits",
                            for hit in hits {
                                SearchHitRow {
                                    key: "{hit.url}",
                                    hit: hit.clone(),
                                    on_select: move |_| open.set(false),
                                }
                            }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        button {
            class: "c-search__trigger",
            aria_label: "Search documentation",
            onclick: move |_| open.set(true),
            SearchIcon {}
            span { class: "c-search__trigger-label", "Search documentation..." }
        }

        if open() {
            div {
                class: "c-search__backdrop",
                onclick: move |_| open.set(false),
            }
            div {
                class: "c-search__modal",
                role: "dialog",
                aria_label: "Search documentation",
                input {
                    r#type: "search",
                    class: "c-search__input",
                    placeholder: "Search documentation...",
                    autofocus: true,
                    value: "{query}",
                    oninput: on_input,
                    onkeydown: move |evt| {
                        if evt.key() == Key::Escape {
                            open.set(false);
                        }
                    },
                }
                div { class: "c-search__results", {results} }
            }
        }
    }
}

/// Single hit row. Internal URLs go through the router and report the pick
/// so the modal can close behind them.
#[component]
fn SearchHitRow(hit: SearchHit, on_select: EventHandler<()>) -> Element {
    let target = hit.url.parse::<Route>();

    match target {
        Ok(route) => rsx! {
            li { class: "c-search__hit",
                Link {
                    to: route,
                    class: "c-search__hit-link",
                    onclick: move |_| on_select.call(()),
                    span { class: "c-search__hit-title", "{hit.title}" }
                    if !hit.excerpt.is_empty() {
                        span { class: "c-search__hit-excerpt", "{hit.excerpt}" }
                    }
                }
            }
        },
        Err(_) => rsx! {
            li { class: "c-search__hit",
                a {
                    href: "{hit.url}",
                    class: "c-search__hit-link",
                    span { class: "c-search__hit-title", "{hit.title}" }
                }
            }
        },
    }
}

#[cfg(target_arch = "wasm32")]
async fn debounce(ms: u32) {
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn debounce(_ms: u32) {}

#[cfg(target_arch = "wasm32")]
async fn query_index(config: &SearchConfig, query: &str) -> Result<Vec<SearchHit>> {
    use crate::shared::errors::AppError;
    use gloo_net::http::Request;

    let body = serde_json::to_string(&request_body(query))?;

    let response = Request::post(&query_url(config))
        .header("X-Algolia-Application-Id", &config.app_id)
        .header("X-Algolia-API-Key", &config.api_key)
        .header("content-type", "application/json")
        .body(body)
        .map_err(|e| AppError::SearchError(e.to_string()))?
        .send()
        .await
        .map_err(|e| AppError::SearchError(e.to_string()))?;

    if !response.ok() {
        return Err(AppError::SearchError(format!(
            "index returned HTTP {}",
            response.status()
        )));
    }

    let parsed: SearchResponse = response
        .json()
        .await
        .map_err(|e| AppError::SearchError(e.to_string()))?;
    Ok(parsed.hits)
}

// Queries only ever run in the browser
#[cfg(not(target_arch = "wasm32"))]
async fn query_index(_config: &SearchConfig, _query: &str) -> Result<Vec<SearchHit>> {
    Ok(Vec::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SearchConfig {
        SearchConfig {
            app_id: "APP123".to_string(),
            index_name: "ferrodocs".to_string(),
            api_key: "key".to_string(),
        }
    }

    #[test]
    fn test_query_url_follows_dsn_host_layout() {
        assert_eq!(
            query_url(&config()),
            "https://APP123-dsn.algolia.net/1/indexes/ferrodocs/query"
        );
    }

    #[test]
    fn test_request_body_uses_index_field_names() {
        let body = serde_json::to_value(request_body("state machines")).unwrap();
        assert_eq!(body["query"], "state machines");
        assert_eq!(body["hitsPerPage"], 8);
    }

    #[test]
    fn test_hit_parsing_ignores_extra_fields() {
        let raw = r#"{
            "hits": [
                {
                    "title": "Theming",
                    "url": "/docs/customization/theming",
                    "excerpt": "Design tokens and dark mode",
                    "objectID": "abc",
                    "_highlightResult": {}
                },
                {
                    "title": "Search",
                    "url": "/docs/customization/search"
                }
            ],
            "nbHits": 2
        }"#;

        let parsed: SearchResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.hits.len(), 2);
        assert_eq!(parsed.hits[0].title, "Theming");
        assert_eq!(parsed.hits[1].excerpt, "");
    }
}
