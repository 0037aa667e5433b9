use serde::{Deserialize, Serialize};

/// Query parameters of an inbound deck-import request.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct DeckImportRequest {
    #[serde(rename = "deckLink")]
    pub deck_link: Option<String>,
}
