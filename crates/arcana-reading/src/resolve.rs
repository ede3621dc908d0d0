//! Identity resolution: mapping raw draws to catalog cards.

use arcana_deck::{Card, Deck};

use crate::raw::RawDraw;

/// A draw with its identity settled: a catalog card or a sentinel.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedCard {
    /// The catalog card, or an Unknown sentinel with a negative id.
    pub card: Card,
    /// The name to present for this draw.
    pub display_name: String,
    /// Orientation flag, taken from the draw regardless of how identity
    /// resolved.
    pub is_reversed: bool,
}

/// Resolve one draw against the catalog. Total: every input produces a
/// result, degrading to the Unknown sentinel with `fallback_id`.
///
/// Tiers, in strict order: the placeholder marker short-circuits to a
/// "not selected" sentinel; a numeric id present in the catalog wins next;
/// then each candidate name is probed case-insensitively; finally a
/// sentinel is synthesized carrying the best available name.
pub fn resolve_card(draw: Option<&RawDraw>, deck: &Deck, fallback_id: i32) -> ResolvedCard {
    let Some(draw) = draw else {
        return ResolvedCard {
            card: deck.unknown_card(fallback_id),
            display_name: deck.unknown_name().to_string(),
            is_reversed: false,
        };
    };

    if draw.is_placeholder() {
        return ResolvedCard {
            card: deck.unknown_card(fallback_id),
            display_name: deck.not_selected_name().to_string(),
            is_reversed: false,
        };
    }

    if let Some(id) = draw
        .card_ref
        .as_ref()
        .and_then(crate::raw::CardRef::as_numeric)
        && let Ok(id) = i32::try_from(id)
        && let Some(card) = deck.by_id(id)
    {
        return ResolvedCard {
            card: card.clone(),
            display_name: card.display_name().to_string(),
            is_reversed: draw.is_reversed,
        };
    }

    for name in draw.candidate_names() {
        if let Some(card) = deck.by_name(name) {
            return ResolvedCard {
                card: card.clone(),
                display_name: card.display_name().to_string(),
                is_reversed: draw.is_reversed,
            };
        }
    }

    let display_name = draw
        .localized_name
        .as_deref()
        .or(draw.name.as_deref())
        .or(draw.title.as_deref())
        .unwrap_or(deck.unknown_name())
        .to_string();
    let mut card = deck.unknown_card(fallback_id);
    card.name = display_name.clone();
    card.localized_name = display_name.clone();
    ResolvedCard {
        card,
        display_name,
        is_reversed: draw.is_reversed,
    }
}
