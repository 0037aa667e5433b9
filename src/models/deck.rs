use serde::{Deserialize, Serialize};

/// Shape of the deck JSON exported by the upstream deck site.
///
/// The relay path never builds or checks this type; the payload travels as an
/// opaque `serde_json::Value`. It documents what the upstream actually sends
/// and backs the test fixtures.
#[derive(Debug, Deserialize, Serialize)]
pub struct DeckData {
    pub metadata: DeckMetadata,
    pub leader: DeckCard,
    pub secondleader: Option<DeckCard>,
    pub base: DeckCard,
    pub deck: Vec<DeckCard>,
    pub sideboard: Vec<DeckCard>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct DeckMetadata {
    pub name: String,
    pub author: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DeckCard {
    pub id: String,
    pub count: u32,
}
