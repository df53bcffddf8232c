use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Mock server error variants. The simulated faults (`rate_limit`,
/// `server_error`, ...) are fixed responses rather than errors; this enum
/// covers genuine lookup failures only.
#[derive(Debug, thiserror::Error)]
pub enum GithubMockError {
    /// Requested payload is missing or unreadable in the data directory.
    #[error("asset not found")]
    AssetNotFound,
}

impl IntoResponse for GithubMockError {
    fn into_response(self) -> Response {
        // The installer contract wants a bare 404 with no body, unlike a
        // regular API error envelope.
        match self {
            Self::AssetNotFound => StatusCode::NOT_FOUND.into_response(),
        }
    }
}
