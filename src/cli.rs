//! CLI domain: argument parsing, config overrides, and error mapping.

mod output;
mod parse;
mod route;

pub use output::map_error;
pub use parse::Cli;
pub use route::RunContext;
