//! CLI parse: clap types for combine-code. No behavior; definitions only.

use clap::Parser;
use std::path::PathBuf;

/// Concatenate matching source files under a directory into one text file
#[derive(Parser, Debug)]
#[command(name = "combine-code", version)]
#[command(about = "Concatenate source files from a directory tree into a single annotated text file")]
pub struct Cli {
    /// Directory to walk (default: current directory)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Output file (default: combined_code.txt)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Extension to include; repeat to match several (replaces configured extensions)
    #[arg(short = 'e', long = "ext", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// File or directory name to skip; repeatable, added to configured patterns
    #[arg(long = "ignore", value_name = "NAME")]
    pub ignore_patterns: Vec<String>,

    /// Follow symbolic links while walking
    #[arg(long)]
    pub follow_symlinks: bool,

    /// Maximum directory depth to walk
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Print matching relative paths instead of writing the output file
    #[arg(long, conflicts_with = "print_config")]
    pub list: bool,

    /// Print the resolved configuration as TOML and exit
    #[arg(long)]
    pub print_config: bool,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(short, long)]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
