use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{Result, SummaryError};
use crate::selector::Summary;

/// Appended to the source file stem to name the summary file.
pub const SUMMARY_SUFFIX: &str = "_Summary";

/// Name of the summary file for `source`: its stem plus `_Summary`.
pub fn summary_file_name(source: &Path) -> String {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!("{}{}", stem, SUMMARY_SUFFIX)
}

/// Writes one sentence per line into `dir`, replacing any previous summary.
///
/// Returns the path of the written file.
pub fn write_summary(summary: &Summary, source: &Path, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(summary_file_name(source));
    let write_error = |source: std::io::Error| SummaryError::SummaryWrite {
        path: path.clone(),
        source,
    };

    let mut writer = BufWriter::new(File::create(&path).map_err(write_error)?);
    for line in summary.lines() {
        writeln!(writer, "{}", line).map_err(write_error)?;
    }
    writer.flush().map_err(write_error)?;

    tracing::debug!(path = %path.display(), lines = summary.len(), "Wrote summary");
    Ok(path)
}
