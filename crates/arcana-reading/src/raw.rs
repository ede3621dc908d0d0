//! Normalization of persisted draw payloads.
//!
//! Readings have been persisted in several shapes over time: a JSON-encoded
//! string, a bare array of draw objects, or an object wrapping that array
//! under `selectedCards`. All of that shape-guessing lives here; the rest of
//! the pipeline only ever sees [`RawDraw`] values. Normalization is total:
//! unrecognizable input yields an empty list, never an error.

use serde_json::Value;
use tracing::warn;

/// A card identifier as persisted: historically either a number or a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardRef {
    /// A numeric catalog id.
    Id(i64),
    /// A textual id, e.g. a placeholder marker or a stringified number.
    Text(String),
}

impl CardRef {
    /// Extract a card reference from a JSON value, if it holds one.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_i64().map(Self::Id),
            Value::String(s) => Some(Self::Text(s.clone())),
            _ => None,
        }
    }

    /// The reference as a catalog id, parsing textual ids numerically.
    pub fn as_numeric(&self) -> Option<i64> {
        match self {
            Self::Id(n) => Some(*n),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }
}

/// One draw entry as found in a persisted payload, before identity
/// resolution. All fields are optional; legacy key synonyms are already
/// collapsed (`cardId` into the id, `reversed` into the orientation flag).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawDraw {
    /// The persisted card identifier (`id`, falling back to `cardId`).
    pub card_ref: Option<CardRef>,
    /// Primary card name.
    pub name: Option<String>,
    /// Localized card name (`nameTr` in legacy records).
    pub localized_name: Option<String>,
    /// Title field some writers used instead of a name.
    pub title: Option<String>,
    /// Display-name field some writers used instead of a name.
    pub display_name: Option<String>,
    /// Orientation flag (`isReversed`, falling back to `reversed`).
    pub is_reversed: bool,
    /// Explicit position index, when the writer recorded one
    /// (`position`, falling back to `positionId`).
    pub position: Option<u32>,
}

impl RawDraw {
    /// Extract a draw from one payload element. Total: anything that is not
    /// an object produces an empty draw, which later resolves to the
    /// Unknown sentinel.
    pub fn from_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Self::default();
        };
        let field = |key: &str| obj.get(key).and_then(Value::as_str).map(str::to_string);
        Self {
            card_ref: obj
                .get("id")
                .or_else(|| obj.get("cardId"))
                .and_then(CardRef::from_value),
            name: field("name"),
            localized_name: field("nameTr"),
            title: field("title"),
            display_name: field("displayName"),
            is_reversed: obj
                .get("isReversed")
                .or_else(|| obj.get("reversed"))
                .and_then(Value::as_bool)
                .unwrap_or(false),
            position: obj
                .get("position")
                .or_else(|| obj.get("positionId"))
                .and_then(Value::as_u64)
                .and_then(|n| u32::try_from(n).ok()),
        }
    }

    /// True when the persisted id is a reserved "no card selected" marker.
    pub fn is_placeholder(&self) -> bool {
        matches!(&self.card_ref, Some(CardRef::Text(s)) if s.starts_with("placeholder-"))
    }

    /// Candidate names for the by-name identity tier, in match priority
    /// order.
    pub fn candidate_names(&self) -> impl Iterator<Item = &str> {
        [
            self.name.as_deref(),
            self.localized_name.as_deref(),
            self.title.as_deref(),
            self.display_name.as_deref(),
        ]
        .into_iter()
        .flatten()
    }
}

/// Normalize a persisted draw payload into an ordered draw list.
///
/// Accepted shapes, tried in order: a JSON-encoded string of either of the
/// other two shapes, a bare array, or an object with a `selectedCards`
/// array. Anything else yields an empty list; an unparseable string logs a
/// warning first.
pub fn normalize_draws(payload: &Value) -> Vec<RawDraw> {
    match payload {
        Value::String(text) => match serde_json::from_str::<Value>(text) {
            Ok(parsed) => draws_from_shape(&parsed),
            Err(err) => {
                warn!(%err, "failed to parse persisted draw payload");
                Vec::new()
            }
        },
        other => draws_from_shape(other),
    }
}

fn draws_from_shape(value: &Value) -> Vec<RawDraw> {
    let items = match value {
        Value::Array(items) => items.as_slice(),
        Value::Object(obj) => match obj.get("selectedCards").and_then(Value::as_array) {
            Some(items) => items.as_slice(),
            None => return Vec::new(),
        },
        _ => return Vec::new(),
    };
    items.iter().map(RawDraw::from_value).collect()
}
