//! The orchestrator: persisted payload in, hydrated reading out.

use serde_json::Value;

use arcana_deck::{Card, Deck};

use crate::config::SpreadConfig;
use crate::interpret::interpret;
use crate::position::{Position, resolve_positions};
use crate::raw::normalize_draws;
use crate::record::ReadingRecord;
use crate::resolve::resolve_card;
use crate::spread::SpreadKind;
use crate::table::TableSet;

/// One fully-hydrated entry of a resolved reading.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadingEntry {
    /// The resolved catalog card, or an Unknown sentinel.
    pub card: Card,
    /// The name to present for this entry.
    pub display_name: String,
    /// Whether the reversed meaning applies.
    pub is_reversed: bool,
    /// The position this card occupies in the spread.
    pub position: Position,
    /// Interpretation text; `None` when the reading type was absent or
    /// unrecognized and no table could be dispatched.
    pub interpretation: Option<String>,
    /// Keywords from the interpretation table, possibly empty.
    pub keywords: Vec<String>,
    /// Contextual note from the interpretation table, possibly empty.
    pub context: String,
}

/// Resolves persisted readings against a card catalog and a set of
/// interpretation tables.
///
/// The resolver borrows everything it needs; each [`resolve`] call is an
/// independent, synchronous fold producing a freshly allocated list.
///
/// [`resolve`]: ReadingResolver::resolve
#[derive(Debug, Clone, Copy)]
pub struct ReadingResolver<'a> {
    deck: &'a Deck,
    tables: TableSet<'a>,
}

impl<'a> ReadingResolver<'a> {
    /// Create a resolver over a catalog and table set.
    pub fn new(deck: &'a Deck, tables: TableSet<'a>) -> Self {
        Self { deck, tables }
    }

    /// Resolve a raw draw payload into presentation-ready entries.
    ///
    /// The authoritative entry count is the explicit config count, else the
    /// spread kind's static default, else the normalized draw count; draws
    /// beyond it are discarded and the output never exceeds the draws that
    /// actually exist. Entries come back in draw order.
    pub fn resolve(
        &self,
        payload: &Value,
        config: Option<&SpreadConfig>,
        kind: Option<SpreadKind>,
    ) -> Vec<ReadingEntry> {
        let draws = normalize_draws(payload);
        let count = config
            .and_then(|c| c.card_count)
            .or_else(|| kind.and_then(SpreadKind::default_card_count))
            .unwrap_or(draws.len())
            .min(draws.len());
        let positions = resolve_positions(payload, config);
        let table = kind.map(|kind| self.tables.for_spread(kind));

        draws
            .iter()
            .take(count)
            .enumerate()
            .map(|(index, draw)| {
                // Negative, per-index fallback ids keep sentinels distinct
                // from each other and from every catalog card.
                let resolved = resolve_card(Some(draw), self.deck, -(index as i32) - 1);
                let position = positions
                    .get(index)
                    .cloned()
                    .unwrap_or_else(|| Position::fallback(index));
                let (interpretation, keywords, context) = match table {
                    Some(table) => {
                        let meaning =
                            interpret(&resolved.card, position.id, resolved.is_reversed, table);
                        (Some(meaning.text), meaning.keywords, meaning.context)
                    }
                    None => (None, Vec::new(), String::new()),
                };
                ReadingEntry {
                    card: resolved.card,
                    display_name: resolved.display_name,
                    is_reversed: resolved.is_reversed,
                    position,
                    interpretation,
                    keywords,
                    context,
                }
            })
            .collect()
    }

    /// Resolve a persisted record, taking the spread kind from its tag.
    pub fn resolve_record(
        &self,
        record: &ReadingRecord,
        config: Option<&SpreadConfig>,
    ) -> Vec<ReadingEntry> {
        self.resolve(&record.cards, config, record.spread_kind())
    }
}
