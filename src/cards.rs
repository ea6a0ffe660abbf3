//! Playing card types shared by the detector and the scorer.
//!
//! Cards are identified by a short rank+suit code ("AC", "10H", "KD") plus a
//! free-text description produced by the vision model. A scorable hand is
//! exactly five cards.

/// Number of cards the detector must find for a scorable hand.
pub const HAND_SIZE: usize = 5;

/// Valid suit letters for a card code.
const SUITS: [char; 4] = ['C', 'D', 'H', 'S'];

/// Valid rank prefixes for a card code.
const RANKS: [&str; 13] = [
    "A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K",
];

/// A single detected playing card. Immutable once produced by the detector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    /// Rank+suit code, e.g. "10H" = Ten of Hearts.
    pub code: String,
    /// Model-generated human label, e.g. "Ten of Hearts". Not guaranteed
    /// unique or canonical.
    pub description: String,
}

impl Card {
    pub fn new(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
        }
    }
}

/// Returns true if `code` is a syntactically valid rank+suit code.
pub fn is_valid_code(code: &str) -> bool {
    let Some(suit) = code.chars().last() else {
        return false;
    };
    if !SUITS.contains(&suit) {
        return false;
    }
    let rank = &code[..code.len() - suit.len_utf8()];
    RANKS.contains(&rank)
}

/// The five cards detected in one submitted image, in detection order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Builds a hand from detected cards. Returns the offending count if the
    /// list does not hold exactly five cards; the caller decides how to
    /// report that, this type never coerces.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, usize> {
        if cards.len() != HAND_SIZE {
            return Err(cards.len());
        }
        Ok(Self { cards })
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Builds the description-keyed and code-keyed lookup maps for this hand.
    pub fn lookup(&self) -> HandLookup {
        HandLookup::from_cards(&self.cards)
    }
}

/// Insertion-ordered description→code and code→description mappings.
///
/// The UI presents descriptions for starter selection while the scoring
/// service consumes codes. Duplicate detections collapse here (last wins),
/// which keeps duplicates visible to the user instead of crashing anything
/// downstream.
#[derive(Clone, Debug, Default)]
pub struct HandLookup {
    by_description: Vec<(String, String)>,
    by_code: Vec<(String, String)>,
}

impl HandLookup {
    fn from_cards(cards: &[Card]) -> Self {
        let mut lookup = Self::default();
        for card in cards {
            insert(&mut lookup.by_description, &card.description, &card.code);
            insert(&mut lookup.by_code, &card.code, &card.description);
        }
        lookup
    }

    /// Card descriptions in detection order, de-duplicated.
    pub fn descriptions(&self) -> impl Iterator<Item = &str> {
        self.by_description.iter().map(|(d, _)| d.as_str())
    }

    /// Card codes in detection order, de-duplicated.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.by_code.iter().map(|(c, _)| c.as_str())
    }

    pub fn code_for(&self, description: &str) -> Option<&str> {
        self.by_description
            .iter()
            .find(|(d, _)| d == description)
            .map(|(_, c)| c.as_str())
    }

    pub fn description_for(&self, code: &str) -> Option<&str> {
        self.by_code
            .iter()
            .find(|(c, _)| c == code)
            .map(|(_, d)| d.as_str())
    }
}

/// Ordered-map insert: replaces the value in place if the key exists,
/// otherwise appends. Matches how the lookup dictionaries behave in the UI.
fn insert(entries: &mut Vec<(String, String)>, key: &str, value: &str) {
    match entries.iter_mut().find(|(k, _)| k == key) {
        Some((_, v)) => *v = value.to_string(),
        None => entries.push((key.to_string(), value.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn five_cards() -> Vec<Card> {
        vec![
            Card::new("AC", "Ace of Clubs"),
            Card::new("5H", "Five of Hearts"),
            Card::new("KD", "King of Diamonds"),
            Card::new("10H", "Ten of Hearts"),
            Card::new("4S", "Four of Spades"),
        ]
    }

    #[test]
    fn test_valid_codes() {
        for code in ["AC", "10H", "KD", "2S", "9C", "JD", "QH"] {
            assert!(is_valid_code(code), "{} should be valid", code);
        }
    }

    #[test]
    fn test_invalid_codes() {
        for code in ["", "A", "C", "1H", "11H", "AX", "10", "ace of clubs"] {
            assert!(!is_valid_code(code), "{} should be invalid", code);
        }
    }

    #[test]
    fn test_hand_requires_five_cards() {
        let mut cards = five_cards();
        cards.pop();
        assert_eq!(Hand::from_cards(cards.clone()), Err(4));
        cards.push(Card::new("4S", "Four of Spades"));
        cards.push(Card::new("6D", "Six of Diamonds"));
        assert_eq!(Hand::from_cards(cards), Err(6));
        assert!(Hand::from_cards(five_cards()).is_ok());
    }

    #[test]
    fn test_lookup_preserves_detection_order() {
        let hand = Hand::from_cards(five_cards()).unwrap();
        let lookup = hand.lookup();
        let descs: Vec<&str> = lookup.descriptions().collect();
        assert_eq!(
            descs,
            [
                "Ace of Clubs",
                "Five of Hearts",
                "King of Diamonds",
                "Ten of Hearts",
                "Four of Spades"
            ]
        );
        assert_eq!(lookup.code_for("Ten of Hearts"), Some("10H"));
        assert_eq!(lookup.description_for("5H"), Some("Five of Hearts"));
    }

    #[test]
    fn test_duplicate_detection_collapses_by_description() {
        let cards = vec![
            Card::new("AC", "Ace of Clubs"),
            Card::new("AC", "Ace of Clubs"),
            Card::new("KD", "King of Diamonds"),
            Card::new("10H", "Ten of Hearts"),
            Card::new("4S", "Four of Spades"),
        ];
        let hand = Hand::from_cards(cards).unwrap();
        let lookup = hand.lookup();
        assert_eq!(lookup.descriptions().count(), 4);
        assert_eq!(lookup.codes().count(), 4);
    }
}
