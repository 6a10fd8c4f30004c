//! Environment variable source: PREFPAIR_ prefix with __ separator

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;

/// Add environment variable overlay to builder.
/// `PREFPAIR_TOTAL_PAIRS=10`, `PREFPAIR_SESSION__FILE_PREFIX=run`,
/// `PREFPAIR_IMG_DIRS=a,b` (comma separated).
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let builder = builder.add_source(
        Environment::with_prefix("PREFPAIR")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("img_dirs"),
    );
    Ok(builder)
}
