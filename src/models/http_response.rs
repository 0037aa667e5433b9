use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};

use crate::utils::errors::DeckImportError;

/// The reply of one import: a status code and a JSON body, built without any
/// web framework involved. Converted into a real HTTP response at the edge.
#[derive(Debug)]
pub struct ProxyReply {
    pub status: StatusCode,
    pub body: Value,
}

impl ProxyReply {
    /// A successful relay carries the upstream deck JSON untouched.
    pub fn relayed(deck: Value) -> ProxyReply {
        ProxyReply {
            status: StatusCode::OK,
            body: deck,
        }
    }

    pub fn rejected(error: &DeckImportError) -> ProxyReply {
        ProxyReply {
            status: error.status_code(),
            body: json!({ "error": error.to_string() }),
        }
    }
}

impl IntoResponse for ProxyReply {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
