use axum::http::StatusCode;
use thiserror::Error;

/// Ways a search can fail once the request has been accepted.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The engine answered but refused the query (e.g. a syntax error).
    #[error("Search query failed: {diagnostic}")]
    EngineInvalidQuery { diagnostic: String },

    /// Transport, decoding or any other fault outside the engine's verdict.
    #[error("unexpected search failure: {cause:#}")]
    UnexpectedFailure { cause: anyhow::Error },
}

impl SearchError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            SearchError::EngineInvalidQuery { .. } | SearchError::UnexpectedFailure { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message shown to API clients. Only the engine diagnostic is ever exposed;
    /// unexpected failures stay opaque and are detailed in the server logs.
    pub fn client_message(&self) -> String {
        match self {
            SearchError::EngineInvalidQuery { diagnostic } => {
                format!("Search query failed: {}", diagnostic)
            }
            SearchError::UnexpectedFailure { .. } => {
                "An unexpected error occurred. Please check logs.".to_string()
            }
        }
    }
}

impl From<anyhow::Error> for SearchError {
    fn from(cause: anyhow::Error) -> Self {
        SearchError::UnexpectedFailure { cause }
    }
}
