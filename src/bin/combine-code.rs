//! combine-code CLI Binary
//!
//! Concatenates matching source files under a directory into one text file.

use clap::Parser;
use combine_code::cli::{map_error, Cli, RunContext};
use combine_code::logging::init_logging;
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    // Configuration drives logging, so it has to resolve first
    let context = match RunContext::new(&cli) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    };

    if let Err(e) = init_logging(&context.config().logging) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("combine-code starting");

    match context.execute() {
        Ok(output) => {
            info!("Command completed successfully");
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    }
}
