// SoccerRank - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation; every variant keeps its cause so the
// full chain can be logged.

use std::fmt;
use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;

use super::constants::{BIN_NAME, DEBUG_MAX_LINE_PREVIEW};

/// Top-level error type for all SoccerRank operations.
/// Errors are categorised by the stage that produced them.
#[derive(Debug)]
pub enum SoccerRankError {
    /// A required command-line path was not supplied.
    Usage(UsageError),

    /// The input results file does not exist.
    InputNotFound { path: PathBuf },

    /// A results line could not be decomposed (strict mode only).
    Parse(ParseError),

    /// Writing the standings in the requested format failed.
    Export(ExportError),

    /// Configuration loading failed.
    Config(ConfigError),

    /// I/O error with path context.
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },
}

impl fmt::Display for SoccerRankError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Usage(e) => write!(f, "{e}"),
            Self::InputNotFound { path } => write!(
                f,
                "Input file specified does not exist: '{}'",
                path.display()
            ),
            Self::Parse(e) => write!(f, "Parse error: {e}"),
            Self::Export(e) => write!(f, "Export error: {e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for SoccerRankError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Usage(e) => Some(e),
            Self::InputNotFound { .. } => None,
            Self::Parse(e) => Some(e),
            Self::Export(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::Io { source, .. } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Usage errors
// ---------------------------------------------------------------------------

/// A mandatory positional argument is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageError {
    MissingOutputPath,
    MissingInputPath,
}

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let which = match self {
            Self::MissingOutputPath => "Output",
            Self::MissingInputPath => "Input",
        };
        write!(
            f,
            "- Usage: {BIN_NAME} <inputfile> <outputfile>\n{which} file path must be specified."
        )
    }
}

impl std::error::Error for UsageError {}

impl From<UsageError> for SoccerRankError {
    fn from(e: UsageError) -> Self {
        Self::Usage(e)
    }
}

// ---------------------------------------------------------------------------
// Parse errors
// ---------------------------------------------------------------------------

/// Why a single result line could not be decomposed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineFault {
    /// No `", "` between the two team records.
    MissingSeparator,

    /// More than one `", "` on the line.
    ExtraSeparator,

    /// A team record has no space before its score token.
    MissingScore { record: String },

    /// A team record has a score but nothing in front of it.
    EmptyTeamName { record: String },

    /// The score token is not a non-negative integer.
    InvalidScore {
        token: String,
        source: ParseIntError,
    },

    /// The score token parses but carries a sign (`+3`).
    SignedScore { token: String },
}

impl fmt::Display for LineFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSeparator => write!(f, "expected two team records separated by ', '"),
            Self::ExtraSeparator => write!(f, "more than two team records on one line"),
            Self::MissingScore { record } => {
                write!(f, "team record '{record}' has no score")
            }
            Self::EmptyTeamName { record } => {
                write!(f, "team record '{record}' has no team name")
            }
            Self::InvalidScore { token, source } => {
                write!(f, "score '{token}' is not a goal count: {source}")
            }
            Self::SignedScore { token } => {
                write!(f, "score '{token}' must be plain digits")
            }
        }
    }
}

/// Errors related to results parsing.
#[derive(Debug)]
pub enum ParseError {
    /// A results line does not have the `<team> <score>, <team> <score>` shape.
    MalformedLine {
        line_number: u64,
        line: String,
        fault: LineFault,
    },
}

impl ParseError {
    /// 1-based line number the error refers to.
    pub fn line_number(&self) -> u64 {
        match self {
            Self::MalformedLine { line_number, .. } => *line_number,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedLine {
                line_number,
                line,
                fault,
            } => {
                let preview: String = line.chars().take(DEBUG_MAX_LINE_PREVIEW).collect();
                write!(f, "line {line_number} ('{preview}'): {fault}")
            }
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MalformedLine {
                fault: LineFault::InvalidScore { source, .. },
                ..
            } => Some(source),
            _ => None,
        }
    }
}

impl From<ParseError> for SoccerRankError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

// ---------------------------------------------------------------------------
// Export errors
// ---------------------------------------------------------------------------

/// Errors related to writing the standings.
#[derive(Debug)]
pub enum ExportError {
    /// I/O error writing the standings.
    Io { path: PathBuf, source: io::Error },

    /// CSV serialisation error.
    Csv { path: PathBuf, source: csv::Error },

    /// JSON serialisation error.
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Export I/O error '{}': {source}", path.display())
            }
            Self::Csv { path, source } => {
                write!(f, "CSV export error '{}': {source}", path.display())
            }
            Self::Json { path, source } => {
                write!(f, "JSON export error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Csv { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
        }
    }
}

impl From<ExportError> for SoccerRankError {
    fn from(e: ExportError) -> Self {
        Self::Export(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
        }
    }
}

impl From<ConfigError> for SoccerRankError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Convenience type alias for SoccerRank results.
pub type Result<T> = std::result::Result<T, SoccerRankError>;
