//! Session Module
//!
//! Wires a validated configuration to the command dispatcher: picks the
//! input, runs the read loop, and releases every allocation at the end.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use adapters_allocator_commands::{Dispatcher, SessionSummary};
use log::info;
use usecases_memory_management::Partition;

use crate::config::{AllocatorConfig, ConfigError};

/// Result of a complete session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOutcome {
    /// Counters from the read loop
    pub summary: SessionSummary,
    /// Allocations still held when the session ended
    pub released_at_exit: usize,
}

/// Errors that end a session
#[derive(Debug)]
pub enum SessionError {
    /// The configuration was rejected
    Config(ConfigError),
    /// The script could not be opened
    OpenScript { path: PathBuf, source: io::Error },
    /// Reading commands or writing output failed
    Io(io::Error),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Config(err) => write!(f, "{}", err),
            SessionError::OpenScript { path, source } => {
                write!(f, "Failed to open script {}: {}", path.display(), source)
            }
            SessionError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Config(err) => Some(err),
            SessionError::OpenScript { source, .. } => Some(source),
            SessionError::Io(err) => Some(err),
        }
    }
}

impl From<ConfigError> for SessionError {
    fn from(err: ConfigError) -> Self {
        SessionError::Config(err)
    }
}

impl From<io::Error> for SessionError {
    fn from(err: io::Error) -> Self {
        SessionError::Io(err)
    }
}

/// Open the command source named by the configuration
///
/// # Returns
/// A buffered reader over the script file, or over stdin when no script is set.
pub fn open_input(config: &AllocatorConfig) -> Result<Box<dyn BufRead>, SessionError> {
    match &config.script {
        Some(path) => {
            let file = File::open(path).map_err(|source| SessionError::OpenScript {
                path: path.clone(),
                source,
            })?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(io::stdin().lock())),
    }
}

/// Run a whole session
///
/// # Arguments
/// * `config` - Startup configuration (validated here)
/// * `input` - Command source
/// * `out` - Where command output goes
///
/// # Errors
/// Returns `SessionError` if the configuration is invalid or I/O fails.
pub fn run_session<R: BufRead, W: Write>(
    config: &AllocatorConfig,
    input: R,
    out: W,
) -> Result<SessionOutcome, SessionError> {
    config.validate()?;
    // validate() already rejected a zero size
    let partition = Partition::new(config.total_size)
        .map_err(|_| SessionError::Config(ConfigError::ZeroSize))?;
    info!("managing {} bytes", config.total_size);

    let mut dispatcher = Dispatcher::new(partition, out);
    let summary = dispatcher.run(input, config.prompt.as_deref())?;

    let (mut partition, _) = dispatcher.into_parts();
    let released_at_exit = partition.reset();
    info!(
        "session over: {} command(s), {} rejected, {} allocation(s) released",
        summary.commands, summary.rejected, released_at_exit
    );

    Ok(SessionOutcome {
        summary,
        released_at_exit,
    })
}
