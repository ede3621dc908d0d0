//! Explicit spread configuration supplied by the embedding app.

use serde::{Deserialize, Serialize};

use crate::position::Position;

/// Optional per-spread configuration.
///
/// Either field may be absent: a missing card count falls back to the
/// spread kind's static default, a missing position list to descriptors
/// embedded in the payload or synthesized per index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpreadConfig {
    /// Authoritative number of cards in the spread.
    pub card_count: Option<usize>,
    /// Ordered position descriptors (`positionsInfo` in legacy configs).
    #[serde(alias = "positionsInfo")]
    pub positions: Vec<Position>,
}

impl SpreadConfig {
    /// An empty configuration; everything falls back to defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the authoritative card count.
    pub fn with_card_count(mut self, count: usize) -> Self {
        self.card_count = Some(count);
        self
    }

    /// Set the explicit position list.
    pub fn with_positions(mut self, positions: Vec<Position>) -> Self {
        self.positions = positions;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        let config = SpreadConfig::new();
        assert!(config.card_count.is_none());
        assert!(config.positions.is_empty());
    }

    #[test]
    fn builder_methods() {
        let config = SpreadConfig::new()
            .with_card_count(7)
            .with_positions(vec![Position::fallback(0)]);
        assert_eq!(config.card_count, Some(7));
        assert_eq!(config.positions.len(), 1);
    }

    #[test]
    fn legacy_positions_info_alias() {
        let config: SpreadConfig = serde_json::from_str(
            r#"{"cardCount": 4, "positionsInfo": [{"id": 1, "title": "t", "description": "d"}]}"#,
        )
        .unwrap();
        assert_eq!(config.card_count, Some(4));
        assert_eq!(config.positions.len(), 1);
    }
}
