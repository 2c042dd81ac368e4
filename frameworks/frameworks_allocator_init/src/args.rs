//! Command-Line Argument Parsing Module
//!
//! Uses clap for type-safe argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{AllocatorConfig, DEFAULT_PROMPT};

/// Contiguous memory allocation simulator
#[derive(Parser, Debug)]
#[command(name = "allocator")]
#[command(about = "Simulates contiguous memory allocation with first-, best- and worst-fit placement")]
pub struct AllocatorArgs {
    /// Total size of the simulated address space, in bytes
    pub total_size: usize,

    /// Read commands from this file instead of standard input
    #[arg(long)]
    pub script: Option<PathBuf>,

    /// Prompt printed before each command
    #[arg(long, default_value = DEFAULT_PROMPT)]
    pub prompt: String,

    /// Do not print a prompt
    #[arg(long)]
    pub quiet_prompt: bool,
}

impl AllocatorArgs {
    /// Build the startup configuration
    ///
    /// Scripts run without a prompt, as does `--quiet-prompt`.
    pub fn into_config(self) -> AllocatorConfig {
        let prompt = if self.quiet_prompt || self.script.is_some() {
            None
        } else {
            Some(self.prompt)
        };
        AllocatorConfig {
            total_size: self.total_size,
            prompt,
            script: self.script,
        }
    }
}
