//! Error types for fetching and rendering the learn page

use axum::http::StatusCode;
use thiserror::Error;

/// Failure while retrieving posts from the content API
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Content API returned {0}")]
    Status(StatusCode),

    #[error("Malformed content response: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl FetchError {
    /// Whether another attempt could plausibly succeed
    pub fn is_transient(&self) -> bool {
        match self {
            FetchError::Network(_) => true,
            FetchError::Status(status) => status.is_server_error(),
            FetchError::Malformed(_) => false,
        }
    }
}

/// Failure while producing a page
#[derive(Error, Debug)]
pub enum PageError {
    #[error("Content unavailable: {0}")]
    Fetch(#[from] FetchError),

    #[error("Render error: {0}")]
    Render(#[from] tera::Error),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl PageError {
    /// HTTP status this error maps to
    pub fn status(&self) -> StatusCode {
        match self {
            PageError::Fetch(_) => StatusCode::BAD_GATEWAY,
            PageError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
            PageError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}
