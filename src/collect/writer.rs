//! Entry writer: renders one header block plus content per candidate file.
//!
//! Layout of a single entry:
//!
//! ```text
//! ================================================================================
//! FILE: sub/d.cpp
//! ================================================================================
//!
//! <file content>
//!
//!
//! ```
//!
//! When the content cannot be read, the content and its two trailing newlines
//! are replaced by `Error reading file: <error>` and one blank line.

use std::io::{self, Write};

/// Width of the `=` separator lines
pub const SEPARATOR_WIDTH: usize = 80;

/// Prefix of the placeholder written in place of unreadable content
pub const READ_ERROR_PREFIX: &str = "Error reading file:";

/// Streams entries into any `Write` sink
pub struct EntryWriter<W: Write> {
    inner: W,
    separator: String,
}

impl<W: Write> EntryWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            separator: "=".repeat(SEPARATOR_WIDTH),
        }
    }

    /// Write the separator, `FILE:` line, separator and blank line
    pub fn write_header(&mut self, relative_path: &str) -> io::Result<()> {
        writeln!(self.inner, "{}", self.separator)?;
        writeln!(self.inner, "FILE: {}", relative_path)?;
        writeln!(self.inner, "{}", self.separator)?;
        writeln!(self.inner)
    }

    /// Write file content verbatim followed by two newlines
    pub fn write_content(&mut self, content: &str) -> io::Result<()> {
        self.inner.write_all(content.as_bytes())?;
        self.inner.write_all(b"\n\n")
    }

    /// Write the placeholder line for a file that could not be read
    pub fn write_read_error(&mut self, error: &io::Error) -> io::Result<()> {
        writeln!(self.inner, "{} {}", READ_ERROR_PREFIX, error)?;
        writeln!(self.inner)
    }

    /// Flush and hand back the underlying sink
    pub fn finish(mut self) -> io::Result<W> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}
