//! The interpretation adapter: table hits normalized to one shape, misses
//! falling back to the card's own base meaning.

use arcana_deck::Card;

use crate::table::MeaningTable;

/// Normalized interpretive text for one resolved entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Interpretation {
    /// The interpretation text for the card's orientation.
    pub text: String,
    /// Keywords, possibly empty.
    pub keywords: Vec<String>,
    /// Contextual note, possibly empty.
    pub context: String,
}

/// Interpret one card at one position against a table.
///
/// A table hit contributes the orientation-matching branch plus its
/// keywords and context. A miss falls back to the card's base meaning with
/// empty keywords and context; for sentinel cards that base meaning is
/// itself empty, which is the documented degraded output.
pub fn interpret(
    card: &Card,
    position: u32,
    is_reversed: bool,
    table: &dyn MeaningTable,
) -> Interpretation {
    match table.lookup(card, position, is_reversed) {
        Some(entry) => Interpretation {
            text: if is_reversed {
                entry.reversed
            } else {
                entry.upright
            },
            keywords: entry.keywords,
            context: entry.context,
        },
        None => Interpretation {
            text: card.base_meaning(is_reversed).to_string(),
            keywords: Vec::new(),
            context: String::new(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{EmptyTable, StaticTable, TableEntry, TableRow};
    use arcana_deck::{Deck, Meaning, StaticText};

    fn love_table() -> StaticTable {
        StaticTable::new(vec![TableRow {
            card: "The Fool".to_string(),
            position: 1,
            entry: TableEntry {
                upright: "a fresh start in love".to_string(),
                reversed: "hesitation holds you back".to_string(),
                keywords: vec!["beginnings".to_string()],
                context: "first position".to_string(),
            },
        }])
    }

    #[test]
    fn hit_takes_orientation_branch() {
        let deck = Deck::default();
        let fool = deck.by_id(0).unwrap();
        let table = love_table();
        let upright = interpret(fool, 1, false, &table);
        assert_eq!(upright.text, "a fresh start in love");
        assert_eq!(upright.keywords, vec!["beginnings".to_string()]);
        let reversed = interpret(fool, 1, true, &table);
        assert_eq!(reversed.text, "hesitation holds you back");
        assert_eq!(reversed.context, "first position");
    }

    #[test]
    fn miss_falls_back_to_base_meaning() {
        let text = StaticText::new()
            .with("major.0.localizedMeaning.upright", "take the leap")
            .with("major.0.localizedMeaning.reversed", "look before leaping");
        let deck = Deck::new(&text);
        let fool = deck.by_id(0).unwrap();
        let result = interpret(fool, 3, true, &love_table());
        assert_eq!(result.text, "look before leaping");
        assert!(result.keywords.is_empty());
        assert!(result.context.is_empty());
    }

    #[test]
    fn fallback_prefers_localized_then_primary() {
        let mut card = Deck::default().by_id(0).unwrap().clone();
        card.meaning = Meaning {
            upright: "primary upright".to_string(),
            reversed: String::new(),
        };
        let result = interpret(&card, 1, false, &EmptyTable);
        assert_eq!(result.text, "primary upright");
    }

    #[test]
    fn sentinel_miss_is_empty() {
        let deck = Deck::default();
        let sentinel = deck.unknown_card(-1);
        let result = interpret(&sentinel, 1, false, &EmptyTable);
        assert!(result.text.is_empty());
        assert!(result.keywords.is_empty());
    }
}
