//! Frameworks Layer: Allocator Initialization
//!
//! Starts the contiguous-allocation shell: parses the command line, sets up
//! logging, builds the partition and drives the read loop.
//!
//! ## Modules
//!
//! - **[`args`](args/index.html)**: Command-line arguments (clap)
//! - **[`config`](config/index.html)**: Validated startup configuration
//! - **[`logging`](logging/index.html)**: Logger installation
//! - **[`session`](session/index.html)**: Input selection, read loop and teardown
//!
//! ## Startup Sequence
//!
//! 1. Parse arguments into an [`AllocatorConfig`]
//! 2. Validate it (positive size, readable script)
//! 3. Create the partition with one hole over the whole space
//! 4. Read commands from stdin or the script until `X` or end of input
//! 5. Release everything that is still allocated

pub mod args;
pub mod config;
pub mod logging;
pub mod session;

pub use args::AllocatorArgs;
pub use config::{AllocatorConfig, ConfigError, DEFAULT_PROMPT};
pub use session::{open_input, run_session, SessionError, SessionOutcome};
