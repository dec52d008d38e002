//! Saving reports to timestamped files.
//!
//! With `--out <DIR>` the report is written verbatim to
//! `<DIR>/<timestamp>.fcc` instead of being printed. The timestamp is the
//! universal sortable form (`2024-03-14 09:26:53Z`) with `:` and `.` replaced
//! by `_` so the name is valid on every platform.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

/// Extension of saved report files.
pub const OUTPUT_EXTENSION: &str = "fcc";

/// File name for a report saved at `timestamp`.
///
/// # Examples
///
/// ```
/// # use chrono::{TimeZone, Utc};
/// # use fcc::output::output_file_name;
/// let at = Utc.with_ymd_and_hms(2024, 3, 14, 9, 26, 53).unwrap();
/// assert_eq!(output_file_name(at), "2024-03-14 09_26_53Z.fcc");
/// ```
#[must_use]
pub fn output_file_name(timestamp: DateTime<Utc>) -> String {
    let stamp = timestamp
        .format("%Y-%m-%d %H:%M:%SZ")
        .to_string()
        .replace(['.', ':'], "_");

    format!("{stamp}.{OUTPUT_EXTENSION}")
}

/// Write `text` into `dir` under a name derived from the current time.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_report(dir: &Path, text: &str) -> Result<PathBuf> {
    write_report_at(dir, text, Utc::now())
}

/// Write `text` into `dir` under a name derived from `timestamp`.
///
/// An existing file with the same name is overwritten.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_report_at(dir: &Path, text: &str, timestamp: DateTime<Utc>) -> Result<PathBuf> {
    let path = dir.join(output_file_name(timestamp));

    fs::write(&path, text)
        .with_context(|| format!("Failed to write report to {}", path.display()))?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    #[test]
    fn test_output_file_name() {
        let at = Utc.with_ymd_and_hms(2024, 3, 14, 9, 26, 53).unwrap();
        assert_eq!(output_file_name(at), "2024-03-14 09_26_53Z.fcc");
    }

    #[test]
    fn test_output_file_name_has_no_separators() {
        let name = output_file_name(Utc::now());
        assert!(!name.contains(':'));
        assert!(name.ends_with(".fcc"));
        assert_eq!(name.matches('.').count(), 1);
    }

    #[test]
    fn test_write_report_at() {
        let temp = TempDir::new().unwrap();
        let at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();

        let path = write_report_at(temp.path(), "\"a.txt\" x1\n", at).unwrap();

        assert_eq!(path, temp.path().join("2024-01-02 03_04_05Z.fcc"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "\"a.txt\" x1\n");
    }

    #[test]
    fn test_write_report_missing_dir_errors() {
        let temp = TempDir::new().unwrap();
        let result = write_report(&temp.path().join("missing"), "text");
        assert!(result.is_err());
    }
}
