//! Filesystem walker for enumerating candidate files

use super::matcher::ExtensionSet;
use crate::error::CombineError;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

/// A file selected for concatenation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Path as reached from the walk root (absolute when the root is)
    pub path: PathBuf,
    /// Path relative to the walk root
    pub relative: PathBuf,
}

impl Candidate {
    /// Relative path with `/` separators, as written in entry headers
    pub fn display_path(&self) -> String {
        self.relative
            .components()
            .filter_map(|component| match component {
                Component::Normal(name) => Some(name.to_string_lossy()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("/")
    }
}

/// Filesystem walker configuration
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Whether to follow symbolic links (default: false)
    pub follow_symlinks: bool,
    /// File or directory names to prune (e.g. ".git", "build")
    pub ignore_patterns: Vec<String>,
    /// Maximum depth to traverse (None = unlimited)
    pub max_depth: Option<usize>,
}

/// Filesystem walker
pub struct Walker {
    root: PathBuf,
    config: WalkerConfig,
}

impl Walker {
    /// Create a new walker for the given root path
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            config: WalkerConfig::default(),
        }
    }

    /// Create a walker with custom configuration
    pub fn with_config(root: PathBuf, config: WalkerConfig) -> Self {
        Self { root, config }
    }

    /// Walk the filesystem and collect every file matching `extensions`
    ///
    /// Returns candidates sorted by relative path for determinism. A root
    /// that does not exist, or is not a directory, yields no candidates.
    pub fn walk(&self, extensions: &ExtensionSet) -> Result<Vec<Candidate>, CombineError> {
        if !self.root.is_dir() {
            warn!(root = %self.root.display(), "Root is not a directory, nothing to collect");
            return Ok(Vec::new());
        }

        let walker = WalkDir::new(&self.root)
            .follow_links(self.config.follow_symlinks)
            .max_depth(self.config.max_depth.unwrap_or(usize::MAX))
            .into_iter()
            .filter_entry(|entry| !self.should_ignore(entry));

        let mut candidates = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    let Some(path) = vanished_leaf(&err) else {
                        return Err(CombineError::Walk {
                            root: self.root.clone(),
                            source: err,
                        });
                    };
                    // Reading it later yields the placeholder entry
                    if extensions.matches(&path) && !self.is_ignored(&path) {
                        warn!(path = %path.display(), "Entry vanished or dangling link");
                        candidates.extend(self.candidate(path));
                    }
                    continue;
                }
            };

            if !self.is_file_like(&entry) || !extensions.matches(entry.path()) {
                continue;
            }
            candidates.extend(self.candidate(entry.into_path()));
        }

        candidates.sort_by(|a, b| a.relative.cmp(&b.relative));

        Ok(candidates)
    }

    fn candidate(&self, path: PathBuf) -> Option<Candidate> {
        let relative = path.strip_prefix(&self.root).ok()?.to_path_buf();
        debug!(path = %relative.display(), "Matched candidate");
        Some(Candidate { path, relative })
    }

    /// Regular files, plus unfollowed symlinks that do not point at a directory.
    ///
    /// A dangling link counts as file-like; reading through it fails later.
    fn is_file_like(&self, entry: &DirEntry) -> bool {
        if entry.file_type().is_file() {
            return true;
        }
        if self.config.follow_symlinks || !entry.path_is_symlink() {
            return false;
        }
        !fs::metadata(entry.path())
            .map(|metadata| metadata.is_dir())
            .unwrap_or(false)
    }

    /// Check if an entry should be pruned based on ignore patterns
    fn should_ignore(&self, entry: &DirEntry) -> bool {
        entry.depth() > 0 && self.is_ignored(entry.path())
    }

    fn is_ignored(&self, path: &Path) -> bool {
        if self.config.ignore_patterns.is_empty() {
            return false;
        }

        let Ok(relative) = path.strip_prefix(&self.root) else {
            return false;
        };

        relative.components().any(|component| match component {
            Component::Normal(name) => {
                let name = name.to_string_lossy();
                self.config
                    .ignore_patterns
                    .iter()
                    .any(|pattern| pattern.as_str() == name)
            }
            _ => false,
        })
    }
}

/// Path of a non-root entry that disappeared before it could be inspected.
///
/// Covers dangling symlinks when links are followed and files deleted during
/// the walk. Loops and other failures stay fatal.
fn vanished_leaf(err: &walkdir::Error) -> Option<PathBuf> {
    if err.depth() == 0 || err.loop_ancestor().is_some() {
        return None;
    }
    let not_found = err
        .io_error()
        .is_some_and(|io| io.kind() == io::ErrorKind::NotFound);
    if !not_found {
        return None;
    }
    err.path().map(Path::to_path_buf)
}
