//! Built-in defaults every builder starts from.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};

/// Builder seeded with defaults for every optional field.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("total_pairs", 0)?
        .set_default("img_dirs", Vec::<String>::new())?
        .set_default("img_postfix", "")?
        .set_default("parallel_sample", false)?
        .set_default("session.results_dir", ".")?
        .set_default("session.file_prefix", "result")
}
