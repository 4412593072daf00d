// SoccerRank - core/parser.rs
//
// Result-line parsing.
// Core layer: accepts the full text of a results file, never touches the
// filesystem directly.
//
// Line shape: "<team> <score>, <team> <score>". Team names may contain
// spaces, so each record is split at its LAST space: the final token is the
// score, everything before it is the name.

use crate::core::model::{MatchResult, TeamScore};
use crate::util::constants::{MAX_PARSE_ERRORS, RECORD_SEPARATOR, SCORE_SEPARATOR};
use crate::util::error::{LineFault, ParseError};

/// Result of parsing a whole results file.
#[derive(Debug, Default)]
pub struct ParseResult {
    /// Successfully parsed games, in input order.
    pub results: Vec<MatchResult>,
    /// Malformed lines (capped at `MAX_PARSE_ERRORS`).
    pub errors: Vec<ParseError>,
    /// Number of malformed lines, including any beyond the error cap.
    pub malformed_lines: u64,
    /// Total lines seen, blank ones included.
    pub lines_processed: u64,
}

/// Split one team record into name and score.
fn parse_record(record: &str) -> Result<TeamScore, LineFault> {
    let Some((name, token)) = record.rsplit_once(SCORE_SEPARATOR) else {
        // A lone number is a score with no team; anything else lacks a score.
        return Err(if record.parse::<u32>().is_ok() {
            LineFault::EmptyTeamName {
                record: record.to_string(),
            }
        } else {
            LineFault::MissingScore {
                record: record.to_string(),
            }
        });
    };

    let score = token.parse::<u32>().map_err(|source| LineFault::InvalidScore {
        token: token.to_string(),
        source,
    })?;

    // `u32::from_str` accepts a leading '+'; a goal count is digits only.
    if !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(LineFault::SignedScore {
            token: token.to_string(),
        });
    }

    if name.trim().is_empty() {
        return Err(LineFault::EmptyTeamName {
            record: record.to_string(),
        });
    }

    Ok(TeamScore {
        name: name.to_string(),
        score,
    })
}

/// Decompose one result line into its two team records.
///
/// Fails with a [`LineFault`] when the line lacks the `", "` separator,
/// carries more than one, or either record is not `<name> <score>`.
/// A trailing `\r` is ignored.
pub fn parse_line(line: &str) -> Result<(TeamScore, TeamScore), LineFault> {
    let line = line.strip_suffix('\r').unwrap_or(line);

    let (first, second) = line
        .split_once(RECORD_SEPARATOR)
        .ok_or(LineFault::MissingSeparator)?;

    if second.contains(RECORD_SEPARATOR) {
        return Err(LineFault::ExtraSeparator);
    }

    Ok((parse_record(first)?, parse_record(second)?))
}

/// Parse every line of a results file.
///
/// Blank lines are ignored. Malformed lines are skipped and recorded in
/// [`ParseResult::errors`]; whether that aborts the run is the caller's
/// decision.
pub fn parse_content(content: &str) -> ParseResult {
    let mut parsed = ParseResult::default();

    for (line_idx, line) in content.split('\n').enumerate() {
        parsed.lines_processed += 1;
        let line_number = (line_idx as u64) + 1;

        if line.trim().is_empty() {
            continue;
        }

        match parse_line(line) {
            Ok((first, second)) => {
                tracing::trace!(
                    line = line_number,
                    first = %first.name,
                    second = %second.name,
                    "Parsed result"
                );
                parsed.results.push(MatchResult {
                    first,
                    second,
                    line_number,
                });
            }
            Err(fault) => {
                parsed.malformed_lines += 1;
                if parsed.errors.len() < MAX_PARSE_ERRORS {
                    parsed.errors.push(ParseError::MalformedLine {
                        line_number,
                        line: line.trim_end_matches('\r').to_string(),
                        fault,
                    });
                }
            }
        }
    }

    tracing::debug!(
        lines = parsed.lines_processed,
        games = parsed.results.len(),
        malformed = parsed.malformed_lines,
        "Results parsed"
    );

    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(name: &str, score: u32) -> TeamScore {
        TeamScore {
            name: name.to_string(),
            score,
        }
    }

    #[test]
    fn test_names_with_spaces() {
        let (a, b) = parse_line("Team A 4, TeamB 2").unwrap();
        assert_eq!(a, team("Team A", 4));
        assert_eq!(b, team("TeamB", 2));
    }

    #[test]
    fn test_points_for_parsed_lines() {
        let cases = [
            ("Team A 4, TeamB 2", (3, 0)),
            ("Team A 0, TeamB 5", (0, 3)),
            ("Team A 2, TeamB 2", (1, 1)),
        ];
        for (line, expected) in cases {
            let parsed = parse_content(line);
            assert_eq!(parsed.results.len(), 1);
            let result = &parsed.results[0];
            assert_eq!(result.first.name, "Team A");
            assert_eq!(result.second.name, "TeamB");
            assert_eq!(result.points(), expected, "line: {line}");
        }
    }

    #[test]
    fn test_multi_digit_scores() {
        let (a, b) = parse_line("FC Awesome 10, Grouches 9").unwrap();
        assert_eq!(a.score, 10);
        assert_eq!(b.score, 9);
    }

    #[test]
    fn test_crlf_line_ending_is_stripped() {
        let (_, b) = parse_line("Lions 1, Snakes 3\r").unwrap();
        assert_eq!(b, team("Snakes", 3));
    }

    #[test]
    fn test_missing_separator() {
        assert_eq!(
            parse_line("Lions 1 Snakes 3"),
            Err(LineFault::MissingSeparator)
        );
    }

    #[test]
    fn test_extra_separator() {
        assert_eq!(
            parse_line("Lions 1, Snakes 3, Grouches 0"),
            Err(LineFault::ExtraSeparator)
        );
    }

    #[test]
    fn test_record_without_space() {
        assert_eq!(
            parse_line("Lions, Snakes 3"),
            Err(LineFault::MissingScore {
                record: "Lions".to_string()
            })
        );
        assert_eq!(
            parse_line("3, Snakes 3"),
            Err(LineFault::EmptyTeamName {
                record: "3".to_string()
            })
        );
    }

    #[test]
    fn test_score_without_name() {
        assert!(matches!(
            parse_line("Lions 1,  3"),
            Err(LineFault::EmptyTeamName { .. })
        ));
    }

    #[test]
    fn test_non_numeric_and_negative_scores() {
        assert!(matches!(
            parse_line("Lions one, Snakes 3"),
            Err(LineFault::InvalidScore { ref token, .. }) if token == "one"
        ));
        assert!(matches!(
            parse_line("Lions 1, Snakes -3"),
            Err(LineFault::InvalidScore { .. })
        ));
    }

    #[test]
    fn test_plus_signed_score_rejected() {
        assert_eq!(
            parse_line("Lions +3, Snakes 1"),
            Err(LineFault::SignedScore {
                token: "+3".to_string()
            })
        );
        assert!(parse_content("Lions 3, Snakes +1").results.is_empty());
    }

    #[test]
    fn test_blank_lines_ignored() {
        let parsed = parse_content("Lions 3, Snakes 3\n\n   \nLions 1, FC Awesome 1\n");
        assert_eq!(parsed.results.len(), 2);
        assert!(parsed.errors.is_empty());
        assert_eq!(parsed.lines_processed, 5);
        assert_eq!(parsed.results[1].line_number, 4);
    }

    #[test]
    fn test_malformed_line_does_not_affect_others() {
        let parsed = parse_content("Lions 3, Snakes 3\ngarbage\nTarantulas 1, FC Awesome 0");
        assert_eq!(parsed.results.len(), 2);
        assert_eq!(parsed.malformed_lines, 1);
        assert_eq!(parsed.errors.len(), 1);
        assert_eq!(parsed.errors[0].line_number(), 2);
    }

    #[test]
    fn test_error_list_is_capped() {
        let content = "bad\n".repeat(MAX_PARSE_ERRORS + 5);
        let parsed = parse_content(&content);
        assert_eq!(parsed.errors.len(), MAX_PARSE_ERRORS);
        assert_eq!(parsed.malformed_lines, (MAX_PARSE_ERRORS + 5) as u64);
    }
}
