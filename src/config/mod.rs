use serde::{Deserialize, Serialize};

pub const SEARCH_APP_ID_VAR: &str = "ALGOLIA_APP_ID";
pub const SEARCH_INDEX_VAR: &str = "ALGOLIA_INDEX";
pub const SEARCH_API_KEY_VAR: &str = "ALGOLIA_SEARCH_API_KEY";

/// Credentials for the hosted search index.
///
/// Values pass through exactly as the environment provides them. Missing
/// variables become empty strings rather than errors here; the search widget
/// owns that failure mode and reports it in its own UI.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    pub app_id: String,
    pub index_name: String,
    pub api_key: String,
}

impl SearchConfig {
    /// Reads the three search variables from the process environment.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Lookup-injected constructor. `from_env` is this over `std::env::var`.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        SearchConfig {
            app_id: get(SEARCH_APP_ID_VAR).unwrap_or_default(),
            index_name: get(SEARCH_INDEX_VAR).unwrap_or_default(),
            api_key: get(SEARCH_API_KEY_VAR).unwrap_or_default(),
        }
    }

    /// True when every credential is present.
    pub fn is_complete(&self) -> bool {
        !self.app_id.is_empty() && !self.index_name.is_empty() && !self.api_key.is_empty()
    }
}
