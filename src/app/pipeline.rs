// SoccerRank - app/pipeline.rs
//
// Orchestration of one batch run:
//   read -> parse -> aggregate -> rank -> format -> write
//
// Single-threaded and synchronous. Nothing is written until the whole
// table has been computed, so a strict-mode abort leaves the output alone.

use crate::app::args::RunPaths;
use crate::core::model::{OutputFormat, Standing};
use crate::core::parser::parse_content;
use crate::core::ranker::rank;
use crate::core::report::{export, standings};
use crate::core::table::LeagueTable;
use crate::platform::fs::{create_output, read_input};
use crate::util::error::Result;

/// What to do with a line that is not `<team> <score>, <team> <score>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedLinePolicy {
    /// Log a warning, leave the line out of the table, keep going.
    #[default]
    Skip,
    /// Fail the run with the first malformed line.
    Abort,
}

impl MalformedLinePolicy {
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            Self::Abort
        } else {
            Self::Skip
        }
    }
}

/// Output of the in-memory part of the pipeline.
#[derive(Debug, Clone)]
pub struct Computed {
    pub table: LeagueTable,
    pub rows: Vec<Standing>,
    /// Games that contributed to the table.
    pub games: usize,
    /// Lines skipped as malformed.
    pub malformed_lines: u64,
}

/// Counters reported after a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub teams: usize,
    pub games: usize,
    pub malformed_lines: u64,
}

/// Turn the text of a results file into ranked standings.
pub fn compute_standings(content: &str, policy: MalformedLinePolicy) -> Result<Computed> {
    let mut parsed = parse_content(content);

    if !parsed.errors.is_empty() {
        match policy {
            MalformedLinePolicy::Abort => {
                let first = parsed.errors.remove(0);
                return Err(first.into());
            }
            MalformedLinePolicy::Skip => {
                for err in &parsed.errors {
                    tracing::warn!(error = %err, "Skipping malformed line");
                }
                let unreported = parsed.malformed_lines - parsed.errors.len() as u64;
                if unreported > 0 {
                    tracing::warn!(count = unreported, "Further malformed lines skipped");
                }
            }
        }
    }

    let table = LeagueTable::from_results(&parsed.results);
    let rows = standings(&rank(&table), &table);

    Ok(Computed {
        table,
        rows,
        games: parsed.results.len(),
        malformed_lines: parsed.malformed_lines,
    })
}

/// Run the whole batch: read input, compute standings, write output.
pub fn run(
    paths: &RunPaths,
    format: OutputFormat,
    policy: MalformedLinePolicy,
) -> Result<RunSummary> {
    tracing::info!("Processing games rankings...");

    let content = read_input(&paths.input)?;
    let computed = compute_standings(&content, policy)?;

    let writer = create_output(&paths.output)?;
    export(format, &computed.rows, writer, &paths.output)?;

    let summary = RunSummary {
        teams: computed.table.len(),
        games: computed.games,
        malformed_lines: computed.malformed_lines,
    };

    tracing::info!(
        output = %paths.output.display(),
        format = format.name(),
        teams = summary.teams,
        games = summary.games,
        skipped = summary.malformed_lines,
        "Done."
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::report::render_text;
    use crate::util::error::{LineFault, ParseError, SoccerRankError};

    const MIXED: &str = "Lions 3, Snakes 3\nnot a result\nLions 4, Grouches 0\n";

    #[test]
    fn test_skip_policy_drops_bad_line() {
        let computed = compute_standings(MIXED, MalformedLinePolicy::Skip).unwrap();
        assert_eq!(computed.games, 2);
        assert_eq!(computed.malformed_lines, 1);
        assert_eq!(
            render_text(&computed.rows),
            "1. Lions, 4 pts\n2. Snakes, 1 pt\n3. Grouches, 0 pts\n"
        );
    }

    #[test]
    fn test_abort_policy_fails_on_first_bad_line() {
        let err = compute_standings(MIXED, MalformedLinePolicy::Abort).unwrap_err();
        match err {
            SoccerRankError::Parse(ParseError::MalformedLine {
                line_number, fault, ..
            }) => {
                assert_eq!(line_number, 2);
                assert_eq!(fault, LineFault::MissingSeparator);
            }
            other => panic!("expected malformed line error, got {other:?}"),
        }
    }

    #[test]
    fn test_abort_policy_accepts_clean_input() {
        let computed =
            compute_standings("A 1, B 0\n\nB 2, C 2\n", MalformedLinePolicy::Abort).unwrap();
        assert_eq!(computed.games, 2);
        assert_eq!(computed.table.len(), 3);
    }

    #[test]
    fn test_empty_input_gives_empty_table() {
        let computed = compute_standings("", MalformedLinePolicy::Abort).unwrap();
        assert!(computed.table.is_empty());
        assert!(computed.rows.is_empty());
    }

    #[test]
    fn test_policy_from_strict() {
        assert_eq!(MalformedLinePolicy::from_strict(true), MalformedLinePolicy::Abort);
        assert_eq!(MalformedLinePolicy::from_strict(false), MalformedLinePolicy::Skip);
    }

    #[test]
    fn test_run_writes_report() {
        let dir = tempfile::tempdir().unwrap();
        let paths = RunPaths {
            input: dir.path().join("in.txt"),
            output: dir.path().join("out.txt"),
            overwrites_output: false,
        };
        std::fs::write(&paths.input, "A 2, B 2\nA 1, C 0").unwrap();

        let summary = run(&paths, OutputFormat::Text, MalformedLinePolicy::Skip).unwrap();
        assert_eq!(
            summary,
            RunSummary {
                teams: 3,
                games: 2,
                malformed_lines: 0
            }
        );
        assert_eq!(
            std::fs::read_to_string(&paths.output).unwrap(),
            "1. A, 4 pts\n2. B, 1 pt\n3. C, 0 pts\n"
        );
    }

    #[test]
    fn test_strict_abort_leaves_output_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let paths = RunPaths {
            input: dir.path().join("in.txt"),
            output: dir.path().join("out.txt"),
            overwrites_output: true,
        };
        std::fs::write(&paths.input, "A 2, B 2\nbroken").unwrap();
        std::fs::write(&paths.output, "previous").unwrap();

        assert!(run(&paths, OutputFormat::Text, MalformedLinePolicy::Abort).is_err());
        assert_eq!(std::fs::read_to_string(&paths.output).unwrap(), "previous");
    }
}
