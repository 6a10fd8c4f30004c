//! Pair Generator
//!
//! Produces the ordered list of comparison tasks for a session. Given a seed
//! the whole sequence (items, groups, order) is reproducible.

pub mod discovery;
mod sampling;
pub mod task;

pub use discovery::{DirectorySource, ItemSource};
pub use task::{Task, TaskMetadata};

use crate::error::ApiError;
use crate::types::TaskId;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// How the two items of a task are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SamplingMode {
    /// Any item of group A against any item of group B
    Independent,
    /// The same file name under two different groups
    PairedByName,
}

impl SamplingMode {
    pub fn from_parallel_sample(parallel_sample: bool) -> Self {
        if parallel_sample {
            SamplingMode::PairedByName
        } else {
            SamplingMode::Independent
        }
    }
}

/// Inputs of a generation run.
#[derive(Debug, Clone)]
pub struct PairConfig {
    pub total: usize,
    pub groups: Vec<PathBuf>,
    pub suffix: String,
    pub seed: Option<u64>,
    pub mode: SamplingMode,
}

/// Generates tasks from groups discovered through an [`ItemSource`].
pub struct PairGenerator<S: ItemSource = DirectorySource> {
    config: PairConfig,
    source: S,
}

impl PairGenerator<DirectorySource> {
    pub fn new(config: PairConfig) -> Self {
        Self::with_source(config, DirectorySource)
    }
}

impl<S: ItemSource> PairGenerator<S> {
    pub fn with_source(config: PairConfig, source: S) -> Self {
        Self { config, source }
    }

    pub fn config(&self) -> &PairConfig {
        &self.config
    }

    /// Generate `total` tasks with ids `0..total`.
    pub fn generate(&self) -> Result<Vec<Task>, ApiError> {
        validate_groups(&self.config.groups)?;

        let mut rng = sampling::session_rng(self.config.seed);
        let tasks = match self.config.mode {
            SamplingMode::Independent => self.generate_independent(&mut rng)?,
            SamplingMode::PairedByName => self.generate_paired(&mut rng)?,
        };

        info!(
            total = tasks.len(),
            mode = ?self.config.mode,
            seeded = self.config.seed.is_some(),
            "Generated comparison tasks"
        );
        Ok(tasks)
    }

    fn discover(&self, group: &Path) -> Vec<PathBuf> {
        let items = self.source.discover(group, &self.config.suffix);
        debug!(group = %group.display(), items = items.len(), "Discovered group items");
        items
    }

    fn generate_independent<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<Task>, ApiError> {
        let groups = &self.config.groups;
        let catalogs: Vec<Vec<PathBuf>> = groups.iter().map(|g| self.discover(g)).collect();

        let mut tasks = Vec::with_capacity(self.config.total);
        for position in 0..self.config.total {
            let (a, b) = sampling::pick_two_groups(rng, groups.len());
            let item_a = catalogs[a]
                .choose(rng)
                .ok_or_else(|| self.empty_group(&groups[a]))?
                .clone();
            let item_b = catalogs[b]
                .choose(rng)
                .ok_or_else(|| self.empty_group(&groups[b]))?
                .clone();
            tasks.push(Task::new(
                position as TaskId,
                item_a,
                item_b,
                &groups[a],
                &groups[b],
            ));
        }
        Ok(tasks)
    }

    fn generate_paired<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<Task>, ApiError> {
        let groups = &self.config.groups;
        if self.config.total == 0 {
            return Ok(Vec::new());
        }

        // Names come from the first group only; the others are assumed to mirror it.
        let names: Vec<OsString> = self
            .discover(&groups[0])
            .iter()
            .filter_map(|item| item.file_name().map(|n| n.to_os_string()))
            .collect();

        let mut tasks = Vec::with_capacity(self.config.total);
        for position in 0..self.config.total {
            let name = names.choose(rng).ok_or_else(|| self.empty_group(&groups[0]))?;
            let (a, b) = sampling::pick_two_groups(rng, groups.len());
            tasks.push(Task::new(
                position as TaskId,
                groups[a].join(name),
                groups[b].join(name),
                &groups[a],
                &groups[b],
            ));
        }
        Ok(tasks)
    }

    fn empty_group(&self, group: &Path) -> ApiError {
        ApiError::ConfigError(format!(
            "No items matching '*{}' in {}",
            self.config.suffix,
            group.display()
        ))
    }
}

/// Generate tasks for `config` from directories on disk.
pub fn generate(config: &PairConfig) -> Result<Vec<Task>, ApiError> {
    PairGenerator::new(config.clone()).generate()
}

fn validate_groups(groups: &[PathBuf]) -> Result<(), ApiError> {
    if groups.len() < 2 {
        return Err(ApiError::ConfigError(format!(
            "At least 2 image directories are required, got {}",
            groups.len()
        )));
    }

    let mut seen = HashSet::new();
    for group in groups {
        if !seen.insert(group) {
            return Err(ApiError::ConfigError(format!(
                "Image directory listed more than once: {}",
                group.display()
            )));
        }
    }
    Ok(())
}
