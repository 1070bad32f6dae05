//! Application service: obtain the identifier list for a session.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::application::ports::{OperatorInput, ProgressReporter, VmListSource};
use crate::domain::ResourceId;

/// Identifiers loaded for a session, with the file they came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedList {
    pub path: PathBuf,
    pub ids: Vec<ResourceId>,
}

/// Load `path` directly.
///
/// A missing file is reported to the operator and yields `Ok(None)` so the
/// caller can ask again.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read. That ends the run.
pub fn try_load(
    source: &impl VmListSource,
    path: &Path,
    reporter: &impl ProgressReporter,
) -> Result<Option<LoadedList>> {
    if !source.exists(path) {
        reporter.error(&format!(
            "Error: File '{}' not found. Please try again.",
            path.display()
        ));
        return Ok(None);
    }
    let ids = source.load(path).context("reading VM list")?;
    tracing::debug!(path = %path.display(), count = ids.len(), "loaded VM list");
    Ok(Some(LoadedList {
        path: path.to_path_buf(),
        ids,
    }))
}

/// Prompt for a filename until an existing one is given.
///
/// An empty answer selects `default`. Missing files are reported and the
/// operator is asked again.
///
/// # Errors
///
/// Returns an error if operator input cannot be read or an existing file
/// cannot be read.
pub fn prompt_for_list(
    source: &impl VmListSource,
    input: &impl OperatorInput,
    reporter: &impl ProgressReporter,
    default: &str,
) -> Result<LoadedList> {
    let prompt =
        format!("Enter the file name containing the VM resource IDs (default: '{default}')");
    loop {
        let answer = input.read_line(&prompt)?;
        let answer = answer.trim();
        let name = if answer.is_empty() { default } else { answer };
        if let Some(list) = try_load(source, Path::new(name), reporter)? {
            return Ok(list);
        }
    }
}
