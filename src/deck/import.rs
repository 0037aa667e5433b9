use serde_json::Value;
use uuid::Uuid;

use crate::deck::link::parse_deck_id;
use crate::logger;
use crate::models::client_requests::DeckImportRequest;
use crate::models::http_response::ProxyReply;
use crate::utils::errors::DeckImportError;
use crate::utils::logger::Logger;

/// Runs one deck import and folds the outcome into the reply for the caller.
///
/// Works on plain request/reply structs so it stays independent of the web
/// framework wrapping it. Failures are logged here, before the reply exists.
pub async fn handle_import(
    request: &DeckImportRequest,
    deck_site: &str,
    request_id: &Uuid,
) -> ProxyReply {
    match fetch_deck(request.deck_link.as_deref(), deck_site).await {
        Ok(deck) => {
            logger!(INFO, "[{request_id}] Relayed upstream deck JSON");
            ProxyReply::relayed(deck)
        }
        Err(error) => {
            logger!(ERROR, "[{request_id}] Deck import failed: {error}");
            ProxyReply::rejected(&error)
        }
    }
}

/// Fetches a deck's JSON export from the upstream deck site.
///
/// The link must contain `/deck/{id}` or `/deck/view/{id}`. The deck is
/// requested from `{deck_site}/deck/view/{id}?handler=JsonFile` with a single
/// GET, and the body is relayed as-is, with no shape validation.
pub async fn fetch_deck(
    deck_link: Option<&str>,
    deck_site: &str,
) -> Result<Value, DeckImportError> {
    let deck_link = match deck_link {
        Some(link) if !link.is_empty() => link,
        _ => return Err(DeckImportError::MissingDeckLink),
    };

    let deck_id = parse_deck_id(deck_link).ok_or(DeckImportError::InvalidDeckLink)?;
    let api_url = format!("{deck_site}/deck/view/{deck_id}?handler=JsonFile");

    match reqwest::get(&api_url).await {
        Err(error) => Err(DeckImportError::UnexpectedImportError(error.to_string())),
        Ok(response) => match response.status() {
            status if status.is_success() => response
                .json::<Value>()
                .await
                .map_err(|error| DeckImportError::UnexpectedImportError(error.to_string())),
            status => {
                let reason = status.canonical_reason().unwrap_or("Unknown upstream status");
                Err(DeckImportError::UpstreamDeckError(reason.to_string()))
            }
        },
    }
}
