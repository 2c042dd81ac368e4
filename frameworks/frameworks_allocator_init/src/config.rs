//! Startup Configuration
//!
//! Everything the shell needs to start, gathered from the command line and
//! checked before the partition is created.

use std::fmt;
use std::path::PathBuf;

/// Prompt printed before each interactive command
pub const DEFAULT_PROMPT: &str = "allocator>";

/// Allocator shell configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocatorConfig {
    /// Size of the simulated address space
    pub total_size: usize,
    /// Prompt printed before each read, if any
    pub prompt: Option<String>,
    /// Command file to read instead of standard input
    pub script: Option<PathBuf>,
}

impl Default for AllocatorConfig {
    fn default() -> Self {
        Self {
            total_size: 0, // must be set before use
            prompt: Some(DEFAULT_PROMPT.to_string()),
            script: None,
        }
    }
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The address space would be empty
    ZeroSize,
    /// The script path does not name a file
    ScriptNotFound(PathBuf),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroSize => write!(f, "Total memory size must be a positive integer"),
            ConfigError::ScriptNotFound(path) => {
                write!(f, "Script file not found: {}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl AllocatorConfig {
    /// Configuration for an interactive shell over `total_size` addresses
    pub fn with_total_size(total_size: usize) -> Self {
        Self {
            total_size,
            ..Default::default()
        }
    }

    /// Check the configuration before startup
    ///
    /// # Errors
    /// * `ConfigError::ZeroSize` - `total_size` is 0
    /// * `ConfigError::ScriptNotFound` - `script` is set but is not a file
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.total_size == 0 {
            return Err(ConfigError::ZeroSize);
        }
        if let Some(script) = &self.script {
            if !script.is_file() {
                return Err(ConfigError::ScriptNotFound(script.clone()));
            }
        }
        Ok(())
    }
}
