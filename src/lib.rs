//! Combine Code: Source Concatenation
//!
//! Walks a directory tree, picks out files by extension, and writes their
//! contents into one text file, each preceded by a header naming its path
//! relative to the root.

pub mod cli;
pub mod collect;
pub mod config;
pub mod error;
pub mod logging;

pub use collect::{collect, CollectOptions, CollectSummary, Collector, ExtensionSet};
pub use error::CombineError;
