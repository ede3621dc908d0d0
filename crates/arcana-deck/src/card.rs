//! Card types: suits, meanings, and the canonical card record.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Display name of the sentinel card used when identity resolution fails.
pub const UNKNOWN_CARD_NAME: &str = "Unknown Card";

/// One of the five suit groups of the 78-card deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    /// The 22 major arcana (The Fool through The World).
    Major,
    /// Minor arcana: cups.
    Cups,
    /// Minor arcana: wands.
    Wands,
    /// Minor arcana: swords.
    Swords,
    /// Minor arcana: pentacles.
    Pentacles,
}

impl Suit {
    /// All suits in catalog order (majors first, then the four minor suits).
    pub fn all() -> &'static [Self] {
        &[
            Self::Major,
            Self::Cups,
            Self::Wands,
            Self::Swords,
            Self::Pentacles,
        ]
    }

    /// Parse a suit from its lowercase tag.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().trim() {
            "major" => Some(Self::Major),
            "cups" => Some(Self::Cups),
            "wands" => Some(Self::Wands),
            "swords" => Some(Self::Swords),
            "pentacles" => Some(Self::Pentacles),
            _ => None,
        }
    }

    /// The dotted-path group key used by the localized text provider.
    pub fn key(self) -> &'static str {
        match self {
            Self::Major => "major",
            Self::Cups => "cups",
            Self::Wands => "wands",
            Self::Swords => "swords",
            Self::Pentacles => "pentacles",
        }
    }

    /// Number of cards in this suit (22 majors, 14 per minor suit).
    pub fn len(self) -> usize {
        match self {
            Self::Major => 22,
            _ => 14,
        }
    }

    /// Suits are never empty; present for the usual `len`/`is_empty` pairing.
    pub fn is_empty(self) -> bool {
        false
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Major => write!(f, "Major Arcana"),
            Self::Cups => write!(f, "Cups"),
            Self::Wands => write!(f, "Wands"),
            Self::Swords => write!(f, "Swords"),
            Self::Pentacles => write!(f, "Pentacles"),
        }
    }
}

/// Upright and reversed interpretive text for one card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meaning {
    /// Text that applies when the card lands upright.
    pub upright: String,
    /// Text that applies when the card lands reversed.
    pub reversed: String,
}

impl Meaning {
    /// Pick the branch matching an orientation flag.
    pub fn for_orientation(&self, is_reversed: bool) -> &str {
        if is_reversed {
            &self.reversed
        } else {
            &self.upright
        }
    }

    /// True when both branches are blank.
    pub fn is_empty(&self) -> bool {
        self.upright.is_empty() && self.reversed.is_empty()
    }
}

/// One canonical card of the fixed 78-entry catalog.
///
/// Catalog cards are built once by [`crate::Deck`] and never mutated. Ids are
/// stable: 0..=21 majors, 22..=35 cups, 36..=49 wands, 50..=63 swords,
/// 64..=77 pentacles. Sentinel cards built by [`Card::unknown`] carry
/// negative ids so they can never collide with a catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Stable catalog identifier (negative for sentinels).
    pub id: i32,
    /// Primary (English) name.
    pub name: String,
    /// Localized name, from the text provider; equals `name` when no
    /// translation is available.
    pub localized_name: String,
    /// Suit group.
    pub suit: Suit,
    /// Rank within the suit: majors 0..=21, minor pips 1..=10, courts 0.
    pub number: u8,
    /// Primary upright/reversed meaning.
    pub meaning: Meaning,
    /// Localized upright/reversed meaning.
    pub localized_meaning: Meaning,
    /// Primary keyword list.
    pub keywords: Vec<String>,
    /// Localized keyword list.
    pub localized_keywords: Vec<String>,
    /// Relative image path for the card's artwork.
    pub image: String,
}

impl Card {
    /// Build the Unknown sentinel with a caller-supplied (negative) id.
    ///
    /// Used whenever identity resolution fails or a draw slot was never
    /// filled. Meanings and keywords are empty; the display name can be
    /// overridden by the caller when a better label is known.
    pub fn unknown(id: i32) -> Self {
        Self {
            id,
            name: UNKNOWN_CARD_NAME.to_string(),
            localized_name: UNKNOWN_CARD_NAME.to_string(),
            suit: Suit::Major,
            number: 0,
            meaning: Meaning::default(),
            localized_meaning: Meaning::default(),
            keywords: Vec::new(),
            localized_keywords: Vec::new(),
            image: String::new(),
        }
    }

    /// True for sentinel cards (negative id, not part of the catalog).
    pub fn is_unknown(&self) -> bool {
        self.id < 0
    }

    /// The name to show a reader: the localized name when present, else the
    /// primary name.
    pub fn display_name(&self) -> &str {
        if self.localized_name.is_empty() {
            &self.name
        } else {
            &self.localized_name
        }
    }

    /// The meaning branch to fall back on when no interpretation table has
    /// an entry: localized when present, else primary.
    pub fn base_meaning(&self, is_reversed: bool) -> &str {
        let localized = self.localized_meaning.for_orientation(is_reversed);
        if localized.is_empty() {
            self.meaning.for_orientation(is_reversed)
        } else {
            localized
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suit_parse_roundtrip() {
        for suit in Suit::all() {
            assert_eq!(Suit::parse(suit.key()), Some(*suit));
        }
        assert_eq!(Suit::parse("coins"), None);
    }

    #[test]
    fn suit_lengths_sum_to_deck_size() {
        let total: usize = Suit::all().iter().map(|s| s.len()).sum();
        assert_eq!(total, 78);
    }

    #[test]
    fn meaning_orientation_branch() {
        let meaning = Meaning {
            upright: "up".to_string(),
            reversed: "down".to_string(),
        };
        assert_eq!(meaning.for_orientation(false), "up");
        assert_eq!(meaning.for_orientation(true), "down");
    }

    #[test]
    fn unknown_card_is_sentinel() {
        let card = Card::unknown(-3);
        assert!(card.is_unknown());
        assert_eq!(card.id, -3);
        assert!(card.meaning.is_empty());
        assert_eq!(card.display_name(), UNKNOWN_CARD_NAME);
    }

    #[test]
    fn base_meaning_prefers_localized() {
        let mut card = Card::unknown(-1);
        card.meaning.upright = "primary".to_string();
        assert_eq!(card.base_meaning(false), "primary");
        card.localized_meaning.upright = "localized".to_string();
        assert_eq!(card.base_meaning(false), "localized");
    }

    #[test]
    fn card_serializes_camel_case() {
        let json = serde_json::to_value(Card::unknown(-1)).unwrap();
        assert!(json.get("localizedName").is_some());
        assert!(json.get("localized_name").is_none());
    }
}
