//! Source Collection
//!
//! Enumerates the files under a root whose names end with one of the
//! configured extensions and concatenates them into a single text output,
//! each entry introduced by a header carrying its root-relative path.
//!
//! Entries are written in sorted relative-path order so that repeated runs
//! over an unchanged tree produce byte-identical output. A file that cannot be
//! read (I/O failure, invalid UTF-8) keeps its header and gets a placeholder
//! line instead of content; every other failure aborts the run.

pub mod matcher;
pub mod walker;
pub mod writer;

pub use matcher::{ExtensionSet, DEFAULT_EXTENSIONS};
pub use walker::{Candidate, Walker, WalkerConfig};
pub use writer::{EntryWriter, READ_ERROR_PREFIX, SEPARATOR_WIDTH};

use crate::error::CombineError;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, info, warn};

/// Default output file name, resolved against the current directory
pub const DEFAULT_OUTPUT: &str = "combined_code.txt";

/// Options controlling which files a collection picks up
#[derive(Debug, Clone, Default)]
pub struct CollectOptions {
    pub extensions: ExtensionSet,
    pub follow_symlinks: bool,
    pub ignore_patterns: Vec<String>,
    pub max_depth: Option<usize>,
}

impl CollectOptions {
    fn walker_config(&self) -> WalkerConfig {
        WalkerConfig {
            follow_symlinks: self.follow_symlinks,
            ignore_patterns: self.ignore_patterns.clone(),
            max_depth: self.max_depth,
        }
    }
}

/// Outcome of one collection run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectSummary {
    /// Relative paths of every entry written, in output order
    pub files: Vec<String>,
    /// Relative paths whose content was replaced by a read-error placeholder
    pub read_failures: Vec<String>,
}

impl CollectSummary {
    pub fn entries(&self) -> usize {
        self.files.len()
    }
}

/// Walks a root and concatenates matching files
#[derive(Debug, Clone, Default)]
pub struct Collector {
    options: CollectOptions,
}

impl Collector {
    /// Collector matching the given extensions with default walk settings
    pub fn new(extensions: ExtensionSet) -> Self {
        Self {
            options: CollectOptions {
                extensions,
                ..CollectOptions::default()
            },
        }
    }

    pub fn with_options(options: CollectOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CollectOptions {
        &self.options
    }

    /// Sorted candidate files under `root`, without writing anything
    pub fn candidates(&self, root: &Path) -> Result<Vec<Candidate>, CombineError> {
        Walker::with_config(root.to_path_buf(), self.options.walker_config())
            .walk(&self.options.extensions)
    }

    /// Concatenate every candidate under `root` into the file at `output`.
    ///
    /// The output is created (or truncated) before the walk starts, so a run
    /// with no candidates still leaves an empty file behind. If the output
    /// itself lives under `root` with a matching extension it is skipped.
    pub fn collect(&self, root: &Path, output: &Path) -> Result<CollectSummary, CombineError> {
        info!(
            root = %root.display(),
            output = %output.display(),
            extensions = %self.options.extensions,
            "Collecting source files"
        );

        let file = File::create(output).map_err(|source| CombineError::OutputOpen {
            path: output.to_path_buf(),
            source,
        })?;
        let exclude = dunce::canonicalize(output).ok();

        let (_, summary) = self.write_entries(root, BufWriter::new(file), exclude.as_deref())?;

        info!(
            output = %output.display(),
            entries = summary.entries(),
            read_failures = summary.read_failures.len(),
            "Collection complete"
        );
        Ok(summary)
    }

    /// Concatenate every candidate under `root` into an arbitrary sink.
    ///
    /// The sink is flushed and handed back alongside the summary.
    pub fn collect_into<W: Write>(
        &self,
        root: &Path,
        sink: W,
    ) -> Result<(W, CollectSummary), CombineError> {
        self.write_entries(root, sink, None)
    }

    fn write_entries<W: Write>(
        &self,
        root: &Path,
        sink: W,
        exclude: Option<&Path>,
    ) -> Result<(W, CollectSummary), CombineError> {
        let candidates = self.candidates(root)?;
        let mut writer = EntryWriter::new(sink);
        let mut summary = CollectSummary::default();

        for candidate in candidates {
            if exclude.is_some_and(|exclude| is_same_file(&candidate.path, exclude)) {
                debug!(path = %candidate.path.display(), "Skipping output file");
                continue;
            }

            let relative = candidate.display_path();
            writer.write_header(&relative).map_err(CombineError::Write)?;

            match fs::read_to_string(&candidate.path) {
                Ok(content) => {
                    debug!(path = %relative, bytes = content.len(), "Wrote entry");
                    writer.write_content(&content).map_err(CombineError::Write)?;
                }
                Err(err) => {
                    warn!(path = %relative, error = %err, "Failed to read file");
                    writer.write_read_error(&err).map_err(CombineError::Write)?;
                    summary.read_failures.push(relative.clone());
                }
            }
            summary.files.push(relative);
        }

        let sink = writer.finish().map_err(CombineError::Write)?;
        Ok((sink, summary))
    }
}

/// Whether `candidate` resolves to the already-canonical `target`
fn is_same_file(candidate: &Path, target: &Path) -> bool {
    if candidate.file_name() != target.file_name() {
        return false;
    }
    dunce::canonicalize(candidate)
        .map(|resolved| resolved == target)
        .unwrap_or(false)
}

/// Collect `extensions` files under `root` into `output` with default walk settings
pub fn collect<I, S>(root: &Path, output: &Path, extensions: I) -> Result<CollectSummary, CombineError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let extensions = ExtensionSet::new(extensions)?;
    Collector::new(extensions).collect(root, output)
}

/// Human-readable completion message naming the output file
pub fn confirmation_message(extensions: &ExtensionSet, output: &Path) -> String {
    format!(
        "All {} files have been combined into {}",
        extensions,
        output.display()
    )
}
