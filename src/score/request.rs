//! Hand/starter reconciliation.
//!
//! Takes a validated five-card hand plus the user's starter choice and
//! builds the request body the scoring service consumes: the starter code
//! and the four remaining codes.

use serde::Serialize;

use crate::cards::Hand;

/// JSON body for the scoring service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ScoreRequest {
    pub starter: String,
    pub hand: Vec<String>,
    /// Crib hands score under different rules; this flow never produces one.
    #[serde(rename = "isCrib")]
    pub is_crib: bool,
}

impl ScoreRequest {
    /// Builds the request from the hand, excluding the starter.
    ///
    /// Exactly one occurrence of the starter code is removed, in detection
    /// order. If the detector reported the same code twice, the other
    /// occurrence stays in `hand`; if the code is absent (caller bug), the
    /// removal is a no-op rather than a panic.
    pub fn build(hand: &Hand, starter_code: &str) -> Self {
        let mut codes: Vec<String> = hand.cards().iter().map(|c| c.code.clone()).collect();
        if let Some(pos) = codes.iter().position(|c| c == starter_code) {
            codes.remove(pos);
        }
        Self {
            starter: starter_code.to_string(),
            hand: codes,
            is_crib: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;

    fn hand(codes: [&str; 5]) -> Hand {
        let cards = codes
            .iter()
            .map(|c| Card::new(*c, format!("the {} card", c)))
            .collect();
        Hand::from_cards(cards).unwrap()
    }

    #[test]
    fn test_starter_excluded_from_hand() {
        let hand = hand(["AC", "5H", "KD", "10H", "4S"]);
        for starter in ["AC", "5H", "KD", "10H", "4S"] {
            let request = ScoreRequest::build(&hand, starter);
            assert_eq!(request.starter, starter);
            assert_eq!(request.hand.len(), 4);
            assert!(!request.hand.contains(&starter.to_string()));
            assert!(!request.is_crib);
        }
    }

    #[test]
    fn test_remaining_codes_keep_detection_order() {
        let hand = hand(["AC", "5H", "KD", "10H", "4S"]);
        let request = ScoreRequest::build(&hand, "5H");
        assert_eq!(request.hand, ["AC", "KD", "10H", "4S"]);
    }

    #[test]
    fn test_duplicate_starter_code_removes_one_occurrence() {
        let hand = hand(["AC", "AC", "KD", "10H", "4S"]);
        let request = ScoreRequest::build(&hand, "AC");
        assert_eq!(request.hand, ["AC", "KD", "10H", "4S"]);
    }

    #[test]
    fn test_absent_starter_code_is_a_noop() {
        let hand = hand(["AC", "5H", "KD", "10H", "4S"]);
        let request = ScoreRequest::build(&hand, "9C");
        assert_eq!(request.hand.len(), 5);
    }

    #[test]
    fn test_wire_shape() {
        let hand = hand(["AC", "5H", "KD", "10H", "4S"]);
        let request = ScoreRequest::build(&hand, "5H");
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({
                "starter": "5H",
                "hand": ["AC", "KD", "10H", "4S"],
                "isCrib": false
            })
        );
    }
}
