//! Configuration
//!
//! Layered configuration for generation, sessions and logging. Sources are
//! merged by [`merge::service::MergeService`]; see [`ConfigLoader`] for the
//! entry points.

pub mod facade;
pub mod merge;
pub mod paths;
pub mod session;
pub mod sources;

pub use facade::ConfigLoader;
pub use paths::xdg_root as xdg;
pub use session::SessionConfig;

use crate::generator::{PairConfig, SamplingMode};
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level configuration document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RaterConfig {
    /// Number of tasks to generate
    #[serde(default)]
    pub total_pairs: usize,

    /// Group directories, at least two
    #[serde(default)]
    pub img_dirs: Vec<PathBuf>,

    /// Suffix an item's file name must end with
    #[serde(default)]
    pub img_postfix: String,

    /// Seed for reproducible sampling
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rand_seed: Option<u64>,

    /// Pair the same file name across groups instead of sampling independently
    #[serde(default)]
    pub parallel_sample: bool,

    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl RaterConfig {
    /// Generation inputs described by this configuration, with relative
    /// `img_dirs` resolved against `workspace_root`.
    pub fn pair_config(&self, workspace_root: &Path) -> PairConfig {
        PairConfig {
            total: self.total_pairs,
            groups: self
                .img_dirs
                .iter()
                .map(|dir| resolve_group_dir(workspace_root, dir))
                .collect(),
            suffix: self.img_postfix.clone(),
            seed: self.rand_seed,
            mode: SamplingMode::from_parallel_sample(self.parallel_sample),
        }
    }
}

/// `.` and an empty root mean the working directory; paths stay as written.
fn resolve_group_dir(workspace_root: &Path, dir: &Path) -> PathBuf {
    let is_cwd = workspace_root.as_os_str().is_empty() || workspace_root == Path::new(".");
    if dir.is_absolute() || is_cwd {
        dir.to_path_buf()
    } else {
        workspace_root.join(dir)
    }
}
