// SoccerRank - core/model.rs
//
// Core data model types. Pure data definitions with no I/O and no
// platform dependencies.
//
// These types are the shared vocabulary across all layers.

use serde::Serialize;

// =============================================================================
// Match results (normalised output of parsing)
// =============================================================================

/// One side of a result line: a team and the goals it scored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamScore {
    /// Team name, may contain interior spaces. Case-sensitive.
    pub name: String,

    /// Goals scored.
    pub score: u32,
}

/// A single parsed result line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    /// The team written first on the line.
    pub first: TeamScore,

    /// The team written after the `", "` separator.
    pub second: TeamScore,

    /// 1-based line number in the source text.
    pub line_number: u64,
}

impl MatchResult {
    /// Points earned by (first, second) under the league points rule.
    pub fn points(&self) -> (u32, u32) {
        crate::core::points::award(self.first.score, self.second.score)
    }
}

// =============================================================================
// Standings
// =============================================================================

/// One row of the final league table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Standing {
    /// Competition rank: equal points share a rank, the next distinct
    /// total resumes at its 1-based position.
    pub rank: usize,

    pub team: String,

    pub points: u32,
}

// =============================================================================
// Output format
// =============================================================================

/// How the standings are written to the output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `"<rank>. <team>, <points> pt[s]"` lines.
    #[default]
    Text,
    Csv,
    Json,
}

impl OutputFormat {
    /// Parse a case-insensitive format name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Some(Self::Text),
            "csv" => Some(Self::Csv),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}
