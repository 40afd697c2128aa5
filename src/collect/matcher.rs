//! Extension matching for candidate files

use crate::error::CombineError;
use std::fmt;
use std::path::Path;

/// Extensions matched when none are configured.
pub const DEFAULT_EXTENSIONS: &[&str] = &[".cpp", ".h"];

/// Normalized, ordered set of file-name suffixes.
///
/// Every suffix starts with `.`, so `h` and `.h` both match `kernel.h` but
/// neither matches `graph`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionSet {
    suffixes: Vec<String>,
}

impl ExtensionSet {
    /// Build a set from user-supplied suffixes.
    ///
    /// Duplicates collapse onto their first occurrence. Empty values (or a
    /// lone `.`) are rejected.
    pub fn new<I, S>(extensions: I) -> Result<Self, CombineError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut suffixes: Vec<String> = Vec::new();
        for raw in extensions {
            let trimmed = raw.as_ref().trim();
            let suffix = if trimmed.starts_with('.') {
                trimmed.to_string()
            } else {
                format!(".{}", trimmed)
            };
            if suffix.len() < 2 {
                return Err(CombineError::InvalidExtension(raw.as_ref().to_string()));
            }
            if !suffixes.contains(&suffix) {
                suffixes.push(suffix);
            }
        }
        Ok(Self { suffixes })
    }

    /// Whether the file name of `path` ends with one of the suffixes
    pub fn matches(&self, path: &Path) -> bool {
        let Some(name) = path.file_name() else {
            return false;
        };
        let name = name.to_string_lossy();
        self.suffixes.iter().any(|suffix| name.ends_with(suffix.as_str()))
    }

    pub fn as_slice(&self) -> &[String] {
        &self.suffixes
    }
}

impl Default for ExtensionSet {
    fn default() -> Self {
        Self {
            suffixes: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Renders as an English list: `.cpp and .h`, `.c, .cpp and .h`.
impl fmt::Display for ExtensionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.suffixes.as_slice() {
            [] => Ok(()),
            [only] => write!(f, "{}", only),
            [init @ .., last] => write!(f, "{} and {}", init.join(", "), last),
        }
    }
}
