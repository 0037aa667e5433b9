use axum::extract::Query;
use uuid::Uuid;

use crate::deck::import;
use crate::logger;
use crate::models::client_requests::DeckImportRequest;
use crate::models::http_response::ProxyReply;
use crate::utils::logger::Logger;
use crate::SETTINGS;

/// `GET /api/swudbdeck` — proxies a deck export from the upstream deck site.
pub async fn import_deck(Query(request): Query<DeckImportRequest>) -> ProxyReply {
    let settings = SETTINGS.get().expect("Settings not initialized");
    let request_id = Uuid::new_v4();
    logger!(DEBUG, "[{request_id}] Deck import requested");

    import::handle_import(&request, &settings.deck_site, &request_id).await
}
