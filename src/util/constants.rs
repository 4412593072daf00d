// SoccerRank - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "SoccerRank";

/// Application identifier used for config directories.
pub const APP_ID: &str = "SoccerRank";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Executable name shown in usage messages.
pub const BIN_NAME: &str = "soccerrank";

// =============================================================================
// Points rule
// =============================================================================

/// Points awarded to the winner of a game.
pub const WIN_POINTS: u32 = 3;

/// Points awarded to each side of a drawn game.
pub const DRAW_POINTS: u32 = 1;

/// Points awarded to the loser of a game.
pub const LOSS_POINTS: u32 = 0;

// =============================================================================
// Result line format
// =============================================================================

/// Separator between the two team records of a result line.
pub const RECORD_SEPARATOR: &str = ", ";

/// Separator between a team name and its score within one record.
pub const SCORE_SEPARATOR: char = ' ';

// =============================================================================
// Parsing limits
// =============================================================================

/// Maximum number of malformed-line errors retained in a parse result.
/// Further malformed lines are still counted and skipped, just not stored.
pub const MAX_PARSE_ERRORS: usize = 1_000;

/// Maximum length of an input line echoed back in diagnostics.
pub const DEBUG_MAX_LINE_PREVIEW: usize = 200;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Log levels accepted in `[logging] level`.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Column headers of the CSV standings export.
pub const CSV_HEADER: [&str; 3] = ["rank", "team", "points"];
