//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::CombineError;

/// Map a fatal error to the line printed on stderr.
pub fn map_error(e: &CombineError) -> String {
    format!("Error: {}", e)
}
