use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::document::ReportDocument;
use crate::error::ReportError;

/// Writes `document` as pretty-printed JSON under `reports_dir`, creating
/// the directory if it does not exist, and returns the path of the file.
///
/// The filename embeds the generation instant to second precision:
/// `course_report_<YYYYMMDD>_<HHMMSS>.json`. Two runs finishing within the
/// same second collide on the same name; that is accepted.
pub fn write_report(
    document: &ReportDocument,
    reports_dir: &Path,
    now: DateTime<Local>,
) -> Result<PathBuf, ReportError> {
    fs::create_dir_all(reports_dir)?;

    let filename = format!("course_report_{}.json", now.format("%Y%m%d_%H%M%S"));
    let path = reports_dir.join(filename);

    let json = serde_json::to_string_pretty(document)?;
    fs::write(&path, json)?;

    Ok(path)
}
