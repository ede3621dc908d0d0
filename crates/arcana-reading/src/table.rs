//! The interpretation-table boundary.
//!
//! Each of the nine spreads has its own position-indexed meaning table,
//! maintained outside this crate as data. Tables plug in through
//! [`MeaningTable`]; [`TableSet`] carries one table per spread so the
//! dispatcher can bind spread kind to table statically.

use serde::{Deserialize, Serialize};

use arcana_deck::Card;

use crate::spread::SpreadKind;

/// One table hit for a (card, position) pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableEntry {
    /// Upright interpretation text.
    pub upright: String,
    /// Reversed interpretation text.
    pub reversed: String,
    /// Keywords for the pair, possibly empty.
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Contextual note for the pair, possibly empty.
    #[serde(default)]
    pub context: String,
}

/// A position-indexed interpretation table for one spread.
pub trait MeaningTable {
    /// Look up the entry for a card at a 1-based position. `None` means the
    /// table has nothing for the pair and the card's base meaning applies.
    fn lookup(&self, card: &Card, position: u32, is_reversed: bool) -> Option<TableEntry>;
}

/// A table with no entries; every lookup misses.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyTable;

impl MeaningTable for EmptyTable {
    fn lookup(&self, _card: &Card, _position: u32, _is_reversed: bool) -> Option<TableEntry> {
        None
    }
}

/// One row of a [`StaticTable`], keyed by card name and position id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRow {
    /// Card name the row applies to, matched case-insensitively against
    /// both the primary and localized names.
    pub card: String,
    /// 1-based position id the row applies to.
    pub position: u32,
    /// The row's interpretation texts.
    #[serde(flatten)]
    pub entry: TableEntry,
}

/// An in-memory meaning table, the shape the surrounding app ships its nine
/// per-spread tables in.
#[derive(Debug, Clone, Default)]
pub struct StaticTable {
    rows: Vec<TableRow>,
}

impl StaticTable {
    /// Build a table from its rows.
    pub fn new(rows: Vec<TableRow>) -> Self {
        Self { rows }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl MeaningTable for StaticTable {
    fn lookup(&self, card: &Card, position: u32, _is_reversed: bool) -> Option<TableEntry> {
        self.rows
            .iter()
            .find(|row| {
                row.position == position
                    && (row.card.eq_ignore_ascii_case(&card.name)
                        || row.card.eq_ignore_ascii_case(&card.localized_name))
            })
            .map(|row| row.entry.clone())
    }
}

static EMPTY_TABLE: EmptyTable = EmptyTable;

/// The nine interpretation tables, one per spread kind.
#[derive(Clone, Copy)]
pub struct TableSet<'a> {
    /// Love spread table.
    pub love: &'a dyn MeaningTable,
    /// New-lover spread table.
    pub new_lover: &'a dyn MeaningTable,
    /// Career spread table.
    pub career: &'a dyn MeaningTable,
    /// Money spread table.
    pub money: &'a dyn MeaningTable,
    /// Problem-solving spread table.
    pub problem_solving: &'a dyn MeaningTable,
    /// Marriage spread table.
    pub marriage: &'a dyn MeaningTable,
    /// Situation-analysis spread table.
    pub situation_analysis: &'a dyn MeaningTable,
    /// Relationship-analysis spread table.
    pub relationship_analysis: &'a dyn MeaningTable,
    /// Relationship-problems spread table.
    pub relationship_problems: &'a dyn MeaningTable,
}

impl<'a> TableSet<'a> {
    /// A set where every table is empty; interpretation falls back to the
    /// cards' base meanings.
    pub fn empty() -> TableSet<'static> {
        TableSet {
            love: &EMPTY_TABLE,
            new_lover: &EMPTY_TABLE,
            career: &EMPTY_TABLE,
            money: &EMPTY_TABLE,
            problem_solving: &EMPTY_TABLE,
            marriage: &EMPTY_TABLE,
            situation_analysis: &EMPTY_TABLE,
            relationship_analysis: &EMPTY_TABLE,
            relationship_problems: &EMPTY_TABLE,
        }
    }

    /// The table bound to a spread kind. A closed match: adding a tenth
    /// spread will not compile until it is given a table here.
    pub fn for_spread(&self, kind: SpreadKind) -> &'a dyn MeaningTable {
        match kind {
            SpreadKind::Love => self.love,
            SpreadKind::NewLover => self.new_lover,
            SpreadKind::Career => self.career,
            SpreadKind::Money => self.money,
            SpreadKind::ProblemSolving => self.problem_solving,
            SpreadKind::Marriage => self.marriage,
            SpreadKind::SituationAnalysis => self.situation_analysis,
            SpreadKind::RelationshipAnalysis => self.relationship_analysis,
            SpreadKind::RelationshipProblems => self.relationship_problems,
        }
    }
}

impl std::fmt::Debug for TableSet<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("TableSet { .. }")
    }
}
