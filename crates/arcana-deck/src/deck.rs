//! The fixed 78-card reference catalog and its lookup indices.
//!
//! A [`Deck`] is built once from a [`TextSource`] and never mutated. Card
//! ids are stable across builds: 0..=21 majors, then cups, wands, swords,
//! pentacles in blocks of 14. When the text source has no entry for a card
//! the canonical English name is used and the meaning fields stay blank;
//! the catalog size and ids never vary with text availability.

use std::collections::HashMap;

use crate::card::{Card, Meaning, Suit, UNKNOWN_CARD_NAME};
use crate::text::TextSource;

/// Total number of cards in the catalog.
pub const DECK_SIZE: usize = 78;

/// Display name of the sentinel used for draw slots never filled in.
pub const NOT_SELECTED_NAME: &str = "Card not selected";

/// Canonical names of the 22 major arcana, in id order.
pub const MAJOR_NAMES: &[&str] = &[
    "The Fool",
    "The Magician",
    "The High Priestess",
    "The Empress",
    "The Emperor",
    "The Hierophant",
    "The Lovers",
    "The Chariot",
    "Strength",
    "The Hermit",
    "Wheel of Fortune",
    "Justice",
    "The Hanged Man",
    "Death",
    "Temperance",
    "The Devil",
    "The Tower",
    "The Star",
    "The Moon",
    "The Sun",
    "Judgement",
    "The World",
];

/// Artwork file stems of the major arcana, in id order.
const MAJOR_IMAGES: &[&str] = &[
    "0-Fool",
    "I-Magician",
    "II-HighPriestess",
    "III-Empress",
    "IV-Emperor",
    "V-Hierophant",
    "VI-Lovers",
    "VII-Chariot",
    "VIII-Strength",
    "IX-Hermit",
    "X-WheelOfFortune",
    "XI-Justice",
    "XII-HangedMan",
    "XIII-Death",
    "XIV-Temperance",
    "XV-Devil",
    "XVI-Tower",
    "XVII-Star",
    "XVIII-Moon",
    "XIX-Sun",
    "XX-Judgement",
    "XXI-World",
];

/// Rank names of one minor suit, in id order within the suit.
const RANK_NAMES: &[&str] = &[
    "Ace", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Page",
    "Knight", "Queen", "King",
];

/// Artwork file stems of one minor suit's ranks, in id order.
const RANK_IMAGES: &[&str] = &[
    "Ace", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X", "Page", "Knight", "Queen",
    "King",
];

/// The immutable 78-card catalog with by-id and by-name indices.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    by_id: HashMap<i32, usize>,
    by_name: HashMap<String, usize>,
    unknown_name: String,
    not_selected_name: String,
}

impl Deck {
    /// Build the catalog, populating names, meanings, and keywords from the
    /// given text source. Construction cannot fail; missing text degrades
    /// to canonical names and blank meanings.
    pub fn new(text: &dyn TextSource) -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for (idx, name) in MAJOR_NAMES.iter().copied().enumerate() {
            cards.push(build_card(
                text,
                idx as i32,
                Suit::Major,
                idx,
                idx as u8,
                name,
                &format!("/cards/rws/{}.jpg", MAJOR_IMAGES[idx]),
            ));
        }

        let mut next_id = MAJOR_NAMES.len() as i32;
        for suit in [Suit::Cups, Suit::Wands, Suit::Swords, Suit::Pentacles] {
            for (idx, rank) in RANK_NAMES.iter().enumerate() {
                // Pips are numbered 1..=10; court cards carry 0.
                let number = if idx < 10 { idx as u8 + 1 } else { 0 };
                cards.push(build_card(
                    text,
                    next_id,
                    suit,
                    idx,
                    number,
                    &format!("{rank} of {suit}"),
                    &format!("/cards/rws/{}-{suit}.jpg", RANK_IMAGES[idx]),
                ));
                next_id += 1;
            }
        }

        let mut by_id = HashMap::with_capacity(cards.len());
        let mut by_name = HashMap::with_capacity(cards.len() * 2);
        for (slot, card) in cards.iter().enumerate() {
            by_id.insert(card.id, slot);
            by_name.insert(card.name.to_lowercase(), slot);
            by_name.insert(card.localized_name.to_lowercase(), slot);
        }

        Self {
            cards,
            by_id,
            by_name,
            unknown_name: text.get("common.unknownCard", UNKNOWN_CARD_NAME),
            not_selected_name: text.get("common.cardNotSelected", NOT_SELECTED_NAME),
        }
    }

    /// All 78 cards in id order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards in the catalog (always 78).
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// The catalog is never empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Look up a card by its stable numeric id.
    pub fn by_id(&self, id: i32) -> Option<&Card> {
        self.by_id.get(&id).map(|&slot| &self.cards[slot])
    }

    /// Look up a card by primary or localized name, case-insensitively.
    pub fn by_name(&self, name: &str) -> Option<&Card> {
        self.by_name
            .get(&name.to_lowercase())
            .map(|&slot| &self.cards[slot])
    }

    /// Localized label for a card whose identity could not be resolved.
    pub fn unknown_name(&self) -> &str {
        &self.unknown_name
    }

    /// Localized label for a draw slot that was never filled in.
    pub fn not_selected_name(&self) -> &str {
        &self.not_selected_name
    }

    /// Build an Unknown sentinel carrying this deck's localized label.
    pub fn unknown_card(&self, id: i32) -> Card {
        let mut card = Card::unknown(id);
        card.name = self.unknown_name.clone();
        card.localized_name = self.unknown_name.clone();
        card
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new(&crate::text::EmptyText)
    }
}

fn build_card(
    text: &dyn TextSource,
    id: i32,
    suit: Suit,
    idx: usize,
    number: u8,
    name: &str,
    image: &str,
) -> Card {
    let group = suit.key();
    let name = text.get(&format!("{group}.{idx}.name"), name);
    let localized_name = text.get(&format!("{group}.{idx}.localizedName"), &name);
    Card {
        id,
        suit,
        number,
        meaning: Meaning {
            upright: text.get(&format!("{group}.{idx}.meaning.upright"), ""),
            reversed: text.get(&format!("{group}.{idx}.meaning.reversed"), ""),
        },
        localized_meaning: Meaning {
            upright: text.get(&format!("{group}.{idx}.localizedMeaning.upright"), ""),
            reversed: text.get(&format!("{group}.{idx}.localizedMeaning.reversed"), ""),
        },
        keywords: text.get_list(&format!("{group}.{idx}.keywords")),
        localized_keywords: text.get_list(&format!("{group}.{idx}.localizedKeywords")),
        image: image.to_string(),
        name,
        localized_name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::StaticText;

    #[test]
    fn deck_has_78_cards_with_dense_ids() {
        let deck = Deck::default();
        assert_eq!(deck.len(), DECK_SIZE);
        for (expected, card) in deck.cards().iter().enumerate() {
            assert_eq!(card.id, expected as i32);
        }
    }

    #[test]
    fn suit_blocks_start_at_expected_ids() {
        let deck = Deck::default();
        assert_eq!(deck.by_id(21).unwrap().name, "The World");
        assert_eq!(deck.by_id(22).unwrap().name, "Ace of Cups");
        assert_eq!(deck.by_id(36).unwrap().name, "Ace of Wands");
        assert_eq!(deck.by_id(50).unwrap().name, "Ace of Swords");
        assert_eq!(deck.by_id(64).unwrap().name, "Ace of Pentacles");
        assert_eq!(deck.by_id(77).unwrap().name, "King of Pentacles");
    }

    #[test]
    fn court_cards_carry_number_zero() {
        let deck = Deck::default();
        assert_eq!(deck.by_id(31).unwrap().number, 10); // Ten of Cups
        assert_eq!(deck.by_id(32).unwrap().number, 0); // Page of Cups
        assert_eq!(deck.by_id(35).unwrap().number, 0); // King of Cups
    }

    #[test]
    fn by_name_is_case_insensitive() {
        let deck = Deck::default();
        assert_eq!(deck.by_name("the fool").unwrap().id, 0);
        assert_eq!(deck.by_name("THE FOOL").unwrap().id, 0);
        assert_eq!(deck.by_name("Queen of Swords").unwrap().id, 62);
        assert!(deck.by_name("The Joker").is_none());
    }

    #[test]
    fn localized_names_are_indexed_too() {
        let text = StaticText::new().with("major.0.localizedName", "Der Narr");
        let deck = Deck::new(&text);
        assert_eq!(deck.by_name("der narr").unwrap().id, 0);
        assert_eq!(deck.by_name("the fool").unwrap().id, 0);
        assert_eq!(deck.by_id(0).unwrap().display_name(), "Der Narr");
    }

    #[test]
    fn missing_text_degrades_but_keeps_shape() {
        let deck = Deck::default();
        assert_eq!(deck.len(), DECK_SIZE);
        let fool = deck.by_id(0).unwrap();
        assert_eq!(fool.name, "The Fool");
        assert!(fool.meaning.is_empty());
        assert_eq!(deck.unknown_name(), UNKNOWN_CARD_NAME);
        assert_eq!(deck.not_selected_name(), NOT_SELECTED_NAME);
    }

    #[test]
    fn image_paths_follow_rws_layout() {
        let deck = Deck::default();
        assert_eq!(deck.by_id(0).unwrap().image, "/cards/rws/0-Fool.jpg");
        assert_eq!(deck.by_id(23).unwrap().image, "/cards/rws/II-Cups.jpg");
        assert_eq!(deck.by_id(46).unwrap().image, "/cards/rws/Page-Wands.jpg");
    }

    #[test]
    fn unknown_card_uses_localized_label() {
        let text = StaticText::new().with("common.unknownCard", "Unbekannte Karte");
        let deck = Deck::new(&text);
        let card = deck.unknown_card(-1);
        assert!(card.is_unknown());
        assert_eq!(card.display_name(), "Unbekannte Karte");
    }
}
