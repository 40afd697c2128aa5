//! Config loader facade: assembles the layered sources into a `CombineConfig`.

use super::sources::{environment, global_file, workspace_file};
use super::CombineConfig;
use config::{Config, ConfigError, File, FileFormat};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Loads configuration from the standard locations or an explicit file
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a run rooted at `workspace_root`.
    ///
    /// Precedence (lowest to highest): defaults, global config file,
    /// `<workspace_root>/combine.toml`, `COMBINE_*` environment variables.
    pub fn load(workspace_root: &Path) -> Result<CombineConfig, ConfigError> {
        let builder = Config::builder();
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, workspace_root)?;
        let builder = builder.add_source(environment::source());

        let config: CombineConfig = builder.build()?.try_deserialize()?;
        debug!(workspace = %workspace_root.display(), "Configuration loaded");
        Ok(config)
    }

    /// Root configured by the global file or the environment, ignoring any workspace file.
    ///
    /// Used to locate `<root>/combine.toml` when no root is given on the command line.
    pub fn configured_root() -> Result<PathBuf, ConfigError> {
        let builder = global_file::add_to_builder(Config::builder())?;
        let builder = builder.add_source(environment::source());
        let config: CombineConfig = builder.build()?.try_deserialize()?;
        Ok(config.collect.root)
    }

    /// Load configuration from a single TOML file, skipping every other source
    pub fn load_from_file(path: &Path) -> Result<CombineConfig, ConfigError> {
        let config: CombineConfig = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(true))
            .build()?
            .try_deserialize()?;
        debug!(config_path = %path.display(), "Configuration loaded from explicit file");
        Ok(config)
    }
}
