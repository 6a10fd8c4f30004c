//! Item discovery: which files in a group are candidates for sampling.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Lists the matching items of a group.
pub trait ItemSource {
    /// Items directly under `group` whose names end with `suffix`, sorted by name.
    ///
    /// A group that cannot be read yields no items.
    fn discover(&self, group: &Path, suffix: &str) -> Vec<PathBuf>;
}

/// Reads groups as directories on the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectorySource;

impl ItemSource for DirectorySource {
    fn discover(&self, group: &Path, suffix: &str) -> Vec<PathBuf> {
        let walker = WalkDir::new(group)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name();

        let mut items = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    tracing::warn!("Failed to read group {}: {}", group.display(), e);
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let matches = match entry.file_name().to_str() {
                Some(name) => !name.starts_with('.') && name.ends_with(suffix),
                None => {
                    tracing::warn!("Skipping non UTF8 file name: {:?}", entry.path());
                    false
                }
            };
            if matches {
                items.push(entry.into_path());
            }
        }
        items
    }
}
