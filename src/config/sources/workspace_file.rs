//! Workspace config file source: `<root>/combine.toml`

use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, File, FileFormat};
use std::path::Path;

/// File name looked up in the traversal root
pub const WORKSPACE_CONFIG_FILE: &str = "combine.toml";

/// Add the workspace config file to builder when present.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    workspace_root: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let config_path = workspace_root.join(WORKSPACE_CONFIG_FILE);
    if !config_path.is_file() {
        return Ok(builder);
    }

    Ok(builder.add_source(
        File::from(config_path.as_path())
            .format(FileFormat::Toml)
            .required(false),
    ))
}
