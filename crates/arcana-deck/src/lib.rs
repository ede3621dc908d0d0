//! The fixed 78-card tarot reference catalog.
//!
//! This crate defines the canonical card data that reading resolution is
//! performed against: the five suits, the 78 [`Card`] records with stable
//! ids, case-insensitive name indices, and the [`TextSource`] boundary
//! through which localized names and meanings are supplied. It holds no
//! mutable state — a [`Deck`] is built once and shared freely.

/// Card types: suits, meanings, and the canonical card record.
pub mod card;
/// The 78-card catalog and its lookup indices.
pub mod deck;
/// Shuffling and drawing cards.
pub mod draw;
/// Localized text lookup used during catalog construction.
pub mod text;

/// Re-export card types.
pub use card::{Card, Meaning, Suit, UNKNOWN_CARD_NAME};
/// Re-export the catalog.
pub use deck::{DECK_SIZE, Deck, NOT_SELECTED_NAME};
/// Re-export drawing.
pub use draw::{DrawnCard, draw};
/// Re-export text sources.
pub use text::{EmptyText, StaticText, TextSource};
