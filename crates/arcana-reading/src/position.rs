//! Spread position descriptors and their resolution.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::SpreadConfig;

/// The semantic role one card occupies within a spread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    /// 1-based position id, unique within a reading.
    pub id: u32,
    /// Short role title ("past", "obstacle", ...).
    pub title: String,
    /// Longer role description.
    pub description: String,
}

impl Position {
    /// Synthesize the generic descriptor for a 0-based draw index.
    pub fn fallback(index: usize) -> Self {
        let label = format!("position {}", index + 1);
        Self {
            id: index as u32 + 1,
            title: label.clone(),
            description: label,
        }
    }
}

/// Resolve the ordered position list for a reading.
///
/// Priority: a non-empty list on the explicit config wins; otherwise a
/// `positions` array embedded in the draw payload (string or object shape)
/// is mapped into shape, accepting `desc` as a `description` synonym and
/// defaulting ids to the 1-based index; otherwise the list is empty and the
/// orchestrator synthesizes per-index fallbacks.
pub fn resolve_positions(payload: &Value, config: Option<&SpreadConfig>) -> Vec<Position> {
    if let Some(config) = config
        && !config.positions.is_empty()
    {
        return config.positions.clone();
    }

    let parsed;
    let shape = match payload {
        Value::String(text) => match serde_json::from_str::<Value>(text) {
            Ok(value) => {
                parsed = value;
                &parsed
            }
            // The normalizer already warned about this payload.
            Err(_) => return Vec::new(),
        },
        other => other,
    };

    let Some(items) = shape.get("positions").and_then(Value::as_array) else {
        return Vec::new();
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let field = |key: &str| item.get(key).and_then(Value::as_str).map(str::to_string);
            let fallback = Position::fallback(index);
            Position {
                id: item
                    .get("id")
                    .and_then(Value::as_u64)
                    .and_then(|n| u32::try_from(n).ok())
                    .unwrap_or(fallback.id),
                title: field("title").unwrap_or_else(|| fallback.title.clone()),
                description: field("description")
                    .or_else(|| field("desc"))
                    .unwrap_or(fallback.description),
            }
        })
        .collect()
}
