//! The nine spread kinds and their static card counts.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ReadingError, ReadingResult};

/// The nine reading types, each bound to one interpretation table and a
/// default card count.
///
/// This is a closed enumeration on purpose: dispatching by spread kind can
/// never silently miss a variant the way a string-keyed lookup could.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SpreadKind {
    /// Four-card love spread.
    Love,
    /// Six-card new-lover spread.
    NewLover,
    /// Seven-card career spread.
    Career,
    /// Four-card money spread.
    Money,
    /// Ten-card problem-solving spread.
    ProblemSolving,
    /// Ten-card marriage spread.
    Marriage,
    /// Seven-card situation-analysis spread.
    SituationAnalysis,
    /// Relationship-analysis spread; card count follows the persisted draws.
    RelationshipAnalysis,
    /// Nine-card relationship-problems spread.
    RelationshipProblems,
}

impl SpreadKind {
    /// All spread kinds.
    pub fn all() -> &'static [Self] {
        &[
            Self::Love,
            Self::NewLover,
            Self::Career,
            Self::Money,
            Self::ProblemSolving,
            Self::Marriage,
            Self::SituationAnalysis,
            Self::RelationshipAnalysis,
            Self::RelationshipProblems,
        ]
    }

    /// Parse a reading-type tag, tolerating the legacy spellings found in
    /// persisted records (`new-lover`, `SITUATION_ANALYSIS_SPREAD`,
    /// `relationshipProblems.data.spreadName`, ...).
    ///
    /// Matching is most-specific-first over the lowercased tag with
    /// separators stripped, so `relationshipproblems` never lands on a
    /// shorter match.
    pub fn parse(s: &str) -> Option<Self> {
        let tag: String = s
            .to_lowercase()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' ' | '.'))
            .collect();
        if tag.is_empty() {
            return None;
        }
        let exact: Option<Self> = match tag.as_str() {
            "love" => Some(Self::Love),
            "newlover" => Some(Self::NewLover),
            "career" => Some(Self::Career),
            "money" => Some(Self::Money),
            "problemsolving" => Some(Self::ProblemSolving),
            "marriage" => Some(Self::Marriage),
            "situationanalysis" => Some(Self::SituationAnalysis),
            "relationshipanalysis" => Some(Self::RelationshipAnalysis),
            "relationshipproblems" => Some(Self::RelationshipProblems),
            _ => None,
        };
        if let Some(kind) = exact {
            return Some(kind);
        }
        // Legacy tags embed the kind in longer strings; check the most
        // specific names first.
        for kind in [
            Self::RelationshipAnalysis,
            Self::RelationshipProblems,
            Self::SituationAnalysis,
            Self::ProblemSolving,
            Self::NewLover,
            Self::Marriage,
            Self::Money,
            Self::Career,
            Self::Love,
        ] {
            if tag.contains(kind.tag()) {
                return Some(kind);
            }
        }
        None
    }

    /// Parse strictly, surfacing an error for unrecognized tags.
    pub fn from_tag(s: &str) -> ReadingResult<Self> {
        Self::parse(s).ok_or_else(|| ReadingError::UnknownReadingType(s.to_string()))
    }

    /// The canonical lowercase tag with separators stripped.
    fn tag(self) -> &'static str {
        match self {
            Self::Love => "love",
            Self::NewLover => "newlover",
            Self::Career => "career",
            Self::Money => "money",
            Self::ProblemSolving => "problemsolving",
            Self::Marriage => "marriage",
            Self::SituationAnalysis => "situationanalysis",
            Self::RelationshipAnalysis => "relationshipanalysis",
            Self::RelationshipProblems => "relationshipproblems",
        }
    }

    /// The static card count for this spread, or `None` when the persisted
    /// draw count is authoritative (relationship analysis has no fixed
    /// layout).
    pub fn default_card_count(self) -> Option<usize> {
        match self {
            Self::Love | Self::Money => Some(4),
            Self::NewLover => Some(6),
            Self::Career | Self::SituationAnalysis => Some(7),
            Self::RelationshipProblems => Some(9),
            Self::ProblemSolving | Self::Marriage => Some(10),
            Self::RelationshipAnalysis => None,
        }
    }
}

impl fmt::Display for SpreadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Love => write!(f, "love"),
            Self::NewLover => write!(f, "newLover"),
            Self::Career => write!(f, "career"),
            Self::Money => write!(f, "money"),
            Self::ProblemSolving => write!(f, "problemSolving"),
            Self::Marriage => write!(f, "marriage"),
            Self::SituationAnalysis => write!(f, "situationAnalysis"),
            Self::RelationshipAnalysis => write!(f, "relationshipAnalysis"),
            Self::RelationshipProblems => write!(f, "relationshipProblems"),
        }
    }
}
