//! SessionConfig and resolution of the results directory.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

fn default_results_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_file_prefix() -> String {
    "result".to_string()
}

/// Where session documents are written
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Directory for session documents (relative to workspace root)
    #[serde(default = "default_results_dir")]
    pub results_dir: PathBuf,

    /// Document name prefix: `<prefix>_<YYYYmmdd-HHMMSS>.json`
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,
}

impl SessionConfig {
    /// Resolve the results directory against the workspace root.
    pub fn resolve_results_dir(&self, workspace_root: &Path) -> PathBuf {
        if self.results_dir.is_absolute() {
            self.results_dir.clone()
        } else {
            workspace_root.join(&self.results_dir)
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            results_dir: default_results_dir(),
            file_prefix: default_file_prefix(),
        }
    }
}
