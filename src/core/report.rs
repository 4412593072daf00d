// SoccerRank - core/report.rs
//
// Standings rendering: competition ranking plus text, CSV and JSON output.
// Core layer: writes to any Write trait object.

use crate::core::model::{OutputFormat, Standing};
use crate::core::table::LeagueTable;
use crate::util::constants::CSV_HEADER;
use crate::util::error::ExportError;
use std::fmt::Write as _;
use std::io::Write;
use std::path::Path;

/// Assign competition ("1224") ranks to an ordered list of teams.
///
/// A team level on points with the team before it shares that team's rank;
/// otherwise its rank is its 1-based position. Teams missing from `table`
/// are skipped.
pub fn standings(order: &[&str], table: &LeagueTable) -> Vec<Standing> {
    let mut rows: Vec<Standing> = Vec::with_capacity(order.len());

    for &team in order {
        let Some(points) = table.points(team) else {
            tracing::warn!(team, "Ranked team missing from table; skipped");
            continue;
        };

        let rank = match rows.last() {
            Some(prev) if prev.points == points => prev.rank,
            _ => rows.len() + 1,
        };

        rows.push(Standing {
            rank,
            team: team.to_string(),
            points,
        });
    }

    rows
}

/// "pt" for exactly one point, "pts" otherwise.
pub fn points_label(points: u32) -> &'static str {
    if points == 1 {
        "pt"
    } else {
        "pts"
    }
}

/// Render one `"<rank>. <team>, <points> pt[s]"` line per row, each
/// terminated by `\n`.
pub fn render_text(rows: &[Standing]) -> String {
    let mut out = String::new();
    for row in rows {
        // Writing to a String cannot fail.
        let _ = writeln!(
            out,
            "{}. {}, {} {}",
            row.rank,
            row.team,
            row.points,
            points_label(row.points)
        );
    }
    out
}

/// Format the league table report for an already-ranked team order.
pub fn format_report(order: &[&str], table: &LeagueTable) -> String {
    render_text(&standings(order, table))
}

/// Write the text report.
pub fn export_text<W: Write>(
    rows: &[Standing],
    mut writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    let io_err = |source| ExportError::Io {
        path: export_path.to_path_buf(),
        source,
    };
    writer
        .write_all(render_text(rows).as_bytes())
        .map_err(io_err)?;
    writer.flush().map_err(io_err)?;
    Ok(rows.len())
}

/// Export standings to CSV: `rank,team,points`.
pub fn export_csv<W: Write>(
    rows: &[Standing],
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    let csv_err = |source| ExportError::Csv {
        path: export_path.to_path_buf(),
        source,
    };
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(CSV_HEADER).map_err(csv_err)?;

    for row in rows {
        csv_writer
            .write_record([
                row.rank.to_string().as_str(),
                row.team.as_str(),
                row.points.to_string().as_str(),
            ])
            .map_err(csv_err)?;
    }

    csv_writer.flush().map_err(|e| ExportError::Io {
        path: export_path.to_path_buf(),
        source: e,
    })?;

    Ok(rows.len())
}

/// Export standings to JSON (array of `{rank, team, points}` objects).
pub fn export_json<W: Write>(
    rows: &[Standing],
    mut writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    serde_json::to_writer_pretty(&mut writer, rows).map_err(|e| ExportError::Json {
        path: export_path.to_path_buf(),
        source: e,
    })?;
    writeln!(writer).map_err(|e| ExportError::Io {
        path: export_path.to_path_buf(),
        source: e,
    })?;
    Ok(rows.len())
}

/// Dispatch to the exporter for `format`.
pub fn export<W: Write>(
    format: OutputFormat,
    rows: &[Standing],
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    match format {
        OutputFormat::Text => export_text(rows, writer, export_path),
        OutputFormat::Csv => export_csv(rows, writer, export_path),
        OutputFormat::Json => export_json(rows, writer, export_path),
    }
}
