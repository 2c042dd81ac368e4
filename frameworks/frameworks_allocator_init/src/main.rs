//! Allocator Shell Entry Point
//!
//! Usage: `allocator <total-size> [--script FILE] [--prompt TEXT] [--quiet-prompt]`

use std::io;
use std::process;

use clap::Parser;
use frameworks_allocator_init::logging::init_logging;
use frameworks_allocator_init::{open_input, run_session, AllocatorArgs};

fn main() {
    init_logging();

    let config = AllocatorArgs::parse().into_config();
    if let Err(e) = config.validate() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    let input = match open_input(&config) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    match run_session(&config, input, io::stdout().lock()) {
        Ok(_) => process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
