const DECK_SEGMENT: &str = "/deck/";
const VIEW_SEGMENT: &str = "view/";

/// Extracts the deck identifier from a deck link.
///
/// Accepts `.../deck/{id}` and `.../deck/view/{id}`, where the identifier is
/// a non-empty run of characters excluding `/` and `?`. Every occurrence of
/// `/deck/` in the link is considered; the first one followed by a readable
/// identifier wins.
pub fn parse_deck_id(link: &str) -> Option<&str> {
    for (index, _) in link.match_indices(DECK_SEGMENT) {
        let rest = &link[index + DECK_SEGMENT.len()..];
        if let Some(deck_id) = identifier_at(rest) {
            return Some(deck_id);
        }
    }
    None
}

/// Reads one identifier at the head of `rest`, preferring the `view/`-prefixed
/// form. When `view/` is followed by nothing readable, `view` itself is the
/// identifier (a link ending in `/deck/view/` addresses the deck `view`).
fn identifier_at(rest: &str) -> Option<&str> {
    if let Some(tail) = rest.strip_prefix(VIEW_SEGMENT) {
        let deck_id = leading_identifier(tail);
        if !deck_id.is_empty() {
            return Some(deck_id);
        }
    }

    let deck_id = leading_identifier(rest);
    if deck_id.is_empty() {
        None
    } else {
        Some(deck_id)
    }
}

/// The longest prefix of `rest` containing neither `/` nor `?`.
fn leading_identifier(rest: &str) -> &str {
    let end = rest.find(['/', '?']).unwrap_or(rest.len());
    &rest[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_link() {
        // Bare form: the identifier follows /deck/ directly
        assert_eq!(parse_deck_id("https://swudb.com/deck/ABC123"), Some("ABC123"));
    }

    #[test]
    fn test_parse_view_link() {
        assert_eq!(
            parse_deck_id("https://swudb.com/deck/view/ABC123"),
            Some("ABC123")
        );
    }

    #[test]
    fn test_parse_relative_link() {
        // The link does not have to be a full URL
        assert_eq!(parse_deck_id("/deck/view/xYz-09"), Some("xYz-09"));
    }

    #[test]
    fn test_identifier_stops_at_query() {
        assert_eq!(
            parse_deck_id("https://swudb.com/deck/view/ABC123?source=share"),
            Some("ABC123")
        );
    }

    #[test]
    fn test_identifier_stops_at_slash() {
        assert_eq!(
            parse_deck_id("https://swudb.com/deck/ABC123/details"),
            Some("ABC123")
        );
    }

    #[test]
    fn test_view_without_identifier_reads_as_view() {
        // `view/` with nothing after it falls back to `view` as the identifier
        assert_eq!(parse_deck_id("https://swudb.com/deck/view/"), Some("view"));
    }

    #[test]
    fn test_scans_past_unreadable_occurrence() {
        // The first /deck/ is followed by `?`, so the later one supplies the id
        assert_eq!(
            parse_deck_id("https://swudb.com/deck/?ref=https://swudb.com/deck/ABC123"),
            Some("ABC123")
        );
    }

    #[test]
    fn test_rejects_link_without_deck_segment() {
        assert_eq!(parse_deck_id("https://swudb.com/decks/ABC123"), None);
    }

    #[test]
    fn test_rejects_empty_identifier() {
        assert_eq!(parse_deck_id("https://swudb.com/deck/"), None);
        assert_eq!(parse_deck_id("https://swudb.com/deck/?x=1"), None);
    }

    #[test]
    fn test_rejects_empty_link() {
        assert_eq!(parse_deck_id(""), None);
    }
}
