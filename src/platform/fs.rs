// SoccerRank - platform/fs.rs
//
// Filesystem helpers for the input results file and the output report.

use crate::util::error::SoccerRankError;
use std::io::{self, BufWriter};
use std::path::Path;

/// Read the full content of a file as a string.
///
/// For files with invalid UTF-8, uses lossy conversion.
pub fn read_file_lossy(path: &Path) -> io::Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Read the results file, attaching the path to any failure.
pub fn read_input(path: &Path) -> Result<String, SoccerRankError> {
    read_file_lossy(path).map_err(|source| SoccerRankError::Io {
        path: path.to_path_buf(),
        operation: "read",
        source,
    })
}

/// Create (or truncate) the output file for buffered writing.
pub fn create_output(path: &Path) -> Result<BufWriter<std::fs::File>, SoccerRankError> {
    std::fs::File::create(path)
        .map(BufWriter::new)
        .map_err(|source| SoccerRankError::Io {
            path: path.to_path_buf(),
            operation: "create",
            source,
        })
}
