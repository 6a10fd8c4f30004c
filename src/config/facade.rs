//! ConfigLoader: entry point for resolving a `RaterConfig`.

use super::merge::service::MergeService;
use super::RaterConfig;
use config::ConfigError;
use std::path::Path;

pub struct ConfigLoader;

impl ConfigLoader {
    /// Layered load: defaults, global file, `<workspace>/config.json`, env.
    pub fn load(workspace_root: &Path) -> Result<RaterConfig, ConfigError> {
        MergeService::load(workspace_root)
    }

    /// One required file plus the env overlay.
    pub fn load_from_file(path: &Path) -> Result<RaterConfig, ConfigError> {
        MergeService::load_from_file(path)
    }

    /// An explicit `--config` file replaces both file layers.
    pub fn resolve(
        workspace_root: &Path,
        explicit: Option<&Path>,
    ) -> Result<RaterConfig, ConfigError> {
        match explicit {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path.display());
                Self::load_from_file(path)
            }
            None => Self::load(workspace_root),
        }
    }
}
