//! The persisted reading record, as stored by the surrounding app.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::error::ReadingResult;
use crate::spread::SpreadKind;

/// One persisted divination session.
///
/// The row shape is tolerated rather than trusted: `cards` stays an
/// untyped JSON value (it may be a string, an array, or a wrapper object;
/// see [`crate::raw::normalize_draws`]) and the reading-type tag stays a
/// free string until [`ReadingRecord::spread_kind`] normalizes it. Both
/// camelCase and the legacy snake_case column names deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingRecord {
    /// Record identifier.
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    /// Raw reading-type tag, in whatever spelling was written.
    #[serde(default, alias = "reading_type")]
    pub reading_type: Option<String>,
    /// The symbol-draw payload, shape unknown until normalized.
    #[serde(default)]
    pub cards: Value,
    /// The question the reading was asked about.
    #[serde(default)]
    pub question: Option<String>,
    /// When the reading was persisted.
    #[serde(default, alias = "created_at")]
    pub created_at: Option<DateTime<Utc>>,
}

impl ReadingRecord {
    /// Deserialize a record from its persisted JSON form.
    pub fn from_json(json: &str) -> ReadingResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The spread kind this record's tag normalizes to, if any.
    pub fn spread_kind(&self) -> Option<SpreadKind> {
        self.reading_type.as_deref().and_then(SpreadKind::parse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_snake_case_row() {
        let record = ReadingRecord::from_json(
            r#"{
                "id": "8c2f3a44-9d30-4b5e-b0c7-2f6a37c7a111",
                "reading_type": "love-spread",
                "cards": "[{\"id\":0}]",
                "question": "what now?",
                "created_at": "2024-03-01T12:00:00Z"
            }"#,
        )
        .unwrap();
        assert_eq!(record.spread_kind(), Some(SpreadKind::Love));
        assert_eq!(record.question.as_deref(), Some("what now?"));
        assert!(record.created_at.is_some());
    }

    #[test]
    fn missing_fields_default() {
        let record = ReadingRecord::from_json("{}").unwrap();
        assert!(record.reading_type.is_none());
        assert!(record.cards.is_null());
        assert!(record.spread_kind().is_none());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(ReadingRecord::from_json("not a record").is_err());
    }

    #[test]
    fn unrecognized_tag_normalizes_to_none() {
        let record = ReadingRecord::from_json(r#"{"readingType": "coffee-grounds"}"#).unwrap();
        assert!(record.spread_kind().is_none());
    }
}
