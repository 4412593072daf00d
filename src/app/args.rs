// SoccerRank - app/args.rs
//
// Validation of the two positional paths before any processing starts.

use crate::util::error::{Result, SoccerRankError, UsageError};
use std::path::{Path, PathBuf};

/// Input and output paths that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunPaths {
    pub input: PathBuf,
    pub output: PathBuf,
    /// The output file already existed and will be overwritten.
    pub overwrites_output: bool,
}

fn non_empty(path: Option<&Path>) -> Option<&Path> {
    path.filter(|p| !p.as_os_str().is_empty())
}

/// Check the command-line paths.
///
/// Order matters: a missing output path is reported before a missing input
/// path, and a missing input file is fatal. An existing output file only
/// produces a warning.
pub fn validate_arguments(input: Option<&Path>, output: Option<&Path>) -> Result<RunPaths> {
    let output = non_empty(output).ok_or(UsageError::MissingOutputPath)?;
    let input = non_empty(input).ok_or(UsageError::MissingInputPath)?;

    if !input.exists() {
        return Err(SoccerRankError::InputNotFound {
            path: input.to_path_buf(),
        });
    }

    let overwrites_output = output.exists();
    if overwrites_output {
        tracing::warn!(
            path = %output.display(),
            "Output file already exists - it will be overwritten."
        );
    }

    Ok(RunPaths {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        overwrites_output,
    })
}
