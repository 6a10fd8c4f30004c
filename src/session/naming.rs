//! Per-session document names.

use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};

/// `<dir>/<prefix>_<YYYYmmdd-HHMMSS>.json` for `started_at`.
///
/// If that file already exists a `-1`, `-2`, ... suffix is appended so a new
/// session never reopens an earlier document.
pub fn session_document_path(dir: &Path, prefix: &str, started_at: DateTime<Local>) -> PathBuf {
    let stem = format!("{}_{}", prefix, started_at.format("%Y%m%d-%H%M%S"));
    let mut candidate = dir.join(format!("{}.json", stem));
    let mut n = 1;
    while candidate.exists() {
        candidate = dir.join(format!("{}-{}.json", stem, n));
        n += 1;
    }
    candidate
}
