use axum::http::StatusCode;
use thiserror::Error;

/// Failures of a single deck-import request. Every variant is terminal:
/// the request is answered with the variant's message and status, never retried.
#[derive(Debug, Error)]
pub enum DeckImportError {
    #[error("Missing deckLink")]
    MissingDeckLink,

    #[error("Invalid deckLink format")]
    InvalidDeckLink,

    #[error("{0}")]
    UpstreamDeckError(String),

    #[error("{0}")]
    UnexpectedImportError(String),
}

impl DeckImportError {
    /// Caller-input faults map to 400, upstream and internal faults to 500.
    pub fn status_code(&self) -> StatusCode {
        match self {
            DeckImportError::MissingDeckLink | DeckImportError::InvalidDeckLink => {
                StatusCode::BAD_REQUEST
            }
            DeckImportError::UpstreamDeckError(_) | DeckImportError::UnexpectedImportError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}
