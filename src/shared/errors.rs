use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Documentation tree has no pages")]
    EmptyRouteSource,

    #[error("Documentation page not found: {0}")]
    PageNotFound(String),

    #[error("Blog post not found: {0}")]
    PostNotFound(String),

    #[error("Search request failed: {0}")]
    SearchError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
