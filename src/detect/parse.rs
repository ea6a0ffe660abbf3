//! Strict validation of the model's card list.
//!
//! The model is asked for `{"cards": [{"initials", "description"}, ...]}`.
//! Anything that does not match that shape exactly is rejected rather than
//! coerced; the raw payload is kept so the UI can show what came back.

use serde::Deserialize;

use super::DetectError;
use crate::cards::{Card, HAND_SIZE, Hand, is_valid_code};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct WireHand {
    cards: Vec<WireCard>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct WireCard {
    initials: String,
    description: String,
}

/// Parses the assistant message content into a validated five-card hand.
///
/// Failure modes, in the order they are checked:
/// - not the expected JSON shape, or a card code outside the rank/suit
///   alphabet → [`DetectError::InvalidResponse`]
/// - a parseable list without exactly five entries →
///   [`DetectError::WrongCardCount`]
pub fn parse_hand(content: &str) -> Result<Hand, DetectError> {
    let wire: WireHand =
        serde_json::from_str(content).map_err(|_| DetectError::InvalidResponse {
            raw: content.to_string(),
        })?;

    for card in &wire.cards {
        if !is_valid_code(&card.initials) {
            return Err(DetectError::InvalidResponse {
                raw: content.to_string(),
            });
        }
    }

    if wire.cards.len() != HAND_SIZE {
        return Err(DetectError::WrongCardCount {
            found: wire.cards.len(),
            raw: content.to_string(),
        });
    }

    let cards = wire
        .cards
        .into_iter()
        .map(|c| Card::new(c.initials, c.description))
        .collect();

    // Count was checked above, so this cannot fail
    Hand::from_cards(cards).map_err(|found| DetectError::WrongCardCount {
        found,
        raw: content.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIVE_CARDS: &str = r#"{"cards":[
        {"initials":"AC","description":"Ace of Clubs"},
        {"initials":"5H","description":"Five of Hearts"},
        {"initials":"KD","description":"King of Diamonds"},
        {"initials":"10H","description":"Ten of Hearts"},
        {"initials":"4S","description":"Four of Spades"}
    ]}"#;

    #[test]
    fn test_parses_five_cards_in_order() {
        let hand = parse_hand(FIVE_CARDS).unwrap();
        let codes: Vec<&str> = hand.cards().iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, ["AC", "5H", "KD", "10H", "4S"]);
        assert_eq!(hand.cards()[1].description, "Five of Hearts");
    }

    #[test]
    fn test_unparseable_content_keeps_raw_payload() {
        let raw = "I see five lovely cards!";
        match parse_hand(raw) {
            Err(DetectError::InvalidResponse { raw: kept }) => assert_eq!(kept, raw),
            other => panic!("expected InvalidResponse, got {:?}", other),
        }
    }

    #[test]
    fn test_unexpected_fields_rejected() {
        let raw = r#"{"cards":[],"confidence":0.9}"#;
        assert!(matches!(
            parse_hand(raw),
            Err(DetectError::InvalidResponse { .. })
        ));
    }

    #[test]
    fn test_invalid_card_code_rejected() {
        let raw = r#"{"cards":[
            {"initials":"AC","description":"Ace of Clubs"},
            {"initials":"ZZ","description":"mystery card"},
            {"initials":"KD","description":"King of Diamonds"},
            {"initials":"10H","description":"Ten of Hearts"},
            {"initials":"4S","description":"Four of Spades"}
        ]}"#;
        assert!(matches!(
            parse_hand(raw),
            Err(DetectError::InvalidResponse { .. })
        ));
    }

    #[test]
    fn test_four_cards_is_wrong_count() {
        let raw = r#"{"cards":[
            {"initials":"AC","description":"Ace of Clubs"},
            {"initials":"5H","description":"Five of Hearts"},
            {"initials":"KD","description":"King of Diamonds"},
            {"initials":"10H","description":"Ten of Hearts"}
        ]}"#;
        match parse_hand(raw) {
            Err(DetectError::WrongCardCount { found, .. }) => assert_eq!(found, 4),
            other => panic!("expected WrongCardCount, got {:?}", other),
        }
    }

    #[test]
    fn test_six_cards_is_wrong_count() {
        let raw = r#"{"cards":[
            {"initials":"AC","description":"Ace of Clubs"},
            {"initials":"5H","description":"Five of Hearts"},
            {"initials":"KD","description":"King of Diamonds"},
            {"initials":"10H","description":"Ten of Hearts"},
            {"initials":"4S","description":"Four of Spades"},
            {"initials":"6D","description":"Six of Diamonds"}
        ]}"#;
        match parse_hand(raw) {
            Err(DetectError::WrongCardCount { found, .. }) => assert_eq!(found, 6),
            other => panic!("expected WrongCardCount, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_cards_do_not_fail_parsing() {
        let raw = r#"{"cards":[
            {"initials":"AC","description":"Ace of Clubs"},
            {"initials":"AC","description":"Ace of Clubs"},
            {"initials":"KD","description":"King of Diamonds"},
            {"initials":"10H","description":"Ten of Hearts"},
            {"initials":"4S","description":"Four of Spades"}
        ]}"#;
        let hand = parse_hand(raw).unwrap();
        assert_eq!(hand.cards().len(), 5);
    }
}
