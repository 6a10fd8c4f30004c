use prefpair::config::RaterConfig;
use std::fs;
use std::path::{Path, PathBuf};

/// Create one directory per group under `root` holding the given file names.
pub fn make_groups(root: &Path, groups: &[(&str, &[&str])]) -> Vec<PathBuf> {
    groups
        .iter()
        .map(|(group, names)| {
            let dir = root.join(group);
            fs::create_dir_all(&dir).unwrap();
            for name in names.iter() {
                fs::write(dir.join(name), b"media").unwrap();
            }
            dir
        })
        .collect()
}

pub fn rater_config(groups: Vec<PathBuf>, total: usize, seed: Option<u64>) -> RaterConfig {
    RaterConfig {
        total_pairs: total,
        img_dirs: groups,
        img_postfix: ".mp4".to_string(),
        rand_seed: seed,
        ..RaterConfig::default()
    }
}
