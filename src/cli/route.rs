//! CLI route: resolves configuration for a run and dispatches to the collector.

use super::parse::Cli;
use crate::collect::{confirmation_message, Collector};
use crate::config::{CombineConfig, ConfigLoader};
use crate::error::CombineError;
use tracing::{debug, info};

/// What a single invocation does once configuration is resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Collect,
    List,
    PrintConfig,
}

/// Fully resolved configuration plus the selected mode
pub struct RunContext {
    config: CombineConfig,
    mode: Mode,
}

impl RunContext {
    /// Load configuration and apply CLI overrides.
    ///
    /// With `--config` only that file is read; otherwise the global file,
    /// `<root>/combine.toml` and the environment are layered. CLI flags win.
    /// The workspace file is looked up under `--root`, or else under the root
    /// the global file and environment resolve to.
    pub fn new(cli: &Cli) -> Result<Self, CombineError> {
        let mut config = match &cli.config {
            Some(config_path) => ConfigLoader::load_from_file(config_path)?,
            None => {
                let workspace_root = match &cli.root {
                    Some(root) => root.clone(),
                    None => ConfigLoader::configured_root()?,
                };
                ConfigLoader::load(&workspace_root)?
            }
        };

        apply_overrides(&mut config, cli);
        config.ensure_valid()?;

        let mode = if cli.print_config {
            Mode::PrintConfig
        } else if cli.list {
            Mode::List
        } else {
            Mode::Collect
        };

        Ok(Self { config, mode })
    }

    pub fn config(&self) -> &CombineConfig {
        &self.config
    }

    /// Run the selected mode; the returned text goes to stdout
    pub fn execute(&self) -> Result<String, CombineError> {
        let settings = &self.config.collect;
        let collector = Collector::with_options(settings.to_options()?);
        debug!(mode = ?self.mode, "Executing");

        match self.mode {
            Mode::PrintConfig => self.config.to_toml_string(),
            Mode::List => {
                let candidates = collector.candidates(&settings.root)?;
                let lines: Vec<String> = candidates.iter().map(|c| c.display_path()).collect();
                Ok(lines.join("\n"))
            }
            Mode::Collect => {
                let summary = collector.collect(&settings.root, &settings.output)?;
                info!(
                    entries = summary.entries(),
                    read_failures = summary.read_failures.len(),
                    "Run finished"
                );
                Ok(confirmation_message(
                    &collector.options().extensions,
                    &settings.output,
                ))
            }
        }
    }
}

/// Apply CLI flags on top of the loaded configuration.
/// Precedence: CLI flags override config file and environment values.
fn apply_overrides(config: &mut CombineConfig, cli: &Cli) {
    let collect = &mut config.collect;
    if let Some(ref root) = cli.root {
        collect.root = root.clone();
    }
    if let Some(ref output) = cli.output {
        collect.output = output.clone();
    }
    if !cli.extensions.is_empty() {
        collect.extensions = cli.extensions.clone();
    }
    collect
        .ignore_patterns
        .extend(cli.ignore_patterns.iter().cloned());
    if cli.follow_symlinks {
        collect.follow_symlinks = true;
    }
    if cli.max_depth.is_some() {
        collect.max_depth = cli.max_depth;
    }

    let logging = &mut config.logging;
    if cli.verbose {
        logging.enabled = true;
        logging.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        logging.enabled = true;
        logging.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        logging.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        logging.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        logging.file = Some(file.clone());
    }
    if cli.quiet {
        logging.enabled = false;
    }
}
