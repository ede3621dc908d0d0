//! Reading-interpretation resolution for persisted tarot readings.
//!
//! Takes a loosely-structured persisted reading (draw payload in any of its
//! historical shapes, an optional spread config, a free-form reading-type
//! tag) and produces an ordered list of fully-hydrated [`ReadingEntry`]
//! values: catalog identity, position role, orientation, and interpretive
//! text. The whole pipeline is synchronous and total — bad data degrades to
//! sentinels and fallbacks, it never errors and never panics.

/// The orchestrator tying normalization, resolution, and interpretation
/// together.
pub mod assemble;
/// Explicit spread configuration.
pub mod config;
/// Error types for the crate's fallible edges.
pub mod error;
/// Normalization of table hits to one interpretation shape.
pub mod interpret;
/// Position descriptors and their resolution.
pub mod position;
/// Normalization of persisted draw payloads.
pub mod raw;
/// The persisted reading record.
pub mod record;
/// Identity resolution against the catalog.
pub mod resolve;
/// The nine spread kinds.
pub mod spread;
/// The interpretation-table boundary.
pub mod table;

/// Re-export the orchestrator types.
pub use assemble::{ReadingEntry, ReadingResolver};
/// Re-export the config type.
pub use config::SpreadConfig;
/// Re-export error types.
pub use error::{ReadingError, ReadingResult};
/// Re-export the interpretation shape.
pub use interpret::Interpretation;
/// Re-export position types.
pub use position::Position;
/// Re-export the record type.
pub use record::ReadingRecord;
/// Re-export spread kinds.
pub use spread::SpreadKind;
/// Re-export table boundary types.
pub use table::{MeaningTable, StaticTable, TableEntry, TableRow, TableSet};
