//! Shuffling and drawing cards from the catalog.
//!
//! Drawing is the only randomized operation in the crate. Callers supply
//! their own seeded RNG so draws are reproducible in tests and replays.

use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::card::Card;
use crate::deck::Deck;

/// Probability that a drawn card lands reversed.
pub const REVERSAL_ODDS: f64 = 0.3;

/// One card pulled from a shuffled deck, with its orientation.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawnCard<'a> {
    /// The catalog card that was drawn.
    pub card: &'a Card,
    /// Whether the card landed reversed.
    pub is_reversed: bool,
}

/// Draw `count` distinct cards from a shuffled copy of the deck.
///
/// Each card lands reversed with [`REVERSAL_ODDS`] probability. Asking for
/// more cards than the deck holds yields the whole deck.
pub fn draw<'a>(deck: &'a Deck, count: usize, rng: &mut StdRng) -> Vec<DrawnCard<'a>> {
    let mut slots: Vec<usize> = (0..deck.len()).collect();
    slots.shuffle(rng);
    slots
        .into_iter()
        .take(count)
        .map(|slot| DrawnCard {
            card: &deck.cards()[slot],
            is_reversed: rng.random_bool(REVERSAL_ODDS),
        })
        .collect()
}
