//! Command Grammar
//!
//! Parses one input line into a [`Command`]. Verbs are case-sensitive and
//! arguments are separated by whitespace. Arguments beyond those a verb
//! needs are ignored.

use std::fmt;

use entities_memory_layout::{Address, ProcessName};
use usecases_memory_management::PlacementStrategy;

use crate::messages;

/// Longest process name accepted at the command line
pub const MAX_OWNER_LEN: usize = 32;

/// A parsed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `RQ <process> <size> <strategy>`
    Request {
        owner: ProcessName,
        size: Address,
        strategy: PlacementStrategy,
    },
    /// `RL <process>`
    Release { owner: ProcessName },
    /// `C`
    Compact,
    /// `STAT`
    Status,
    /// `X`
    Exit,
    /// Blank line
    Empty,
}

/// Reasons a line could not be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The verb is not part of the language
    Unrecognized(String),
    /// The verb is known but its arguments are missing or malformed
    Usage(&'static str),
    /// `RQ` with a strategy code other than F, B or W
    InvalidStrategy { owner: ProcessName, code: String },
    /// Process name longer than [`MAX_OWNER_LEN`]
    OwnerTooLong(String),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Unrecognized(_) => f.write_str(messages::UNRECOGNIZED_COMMAND),
            CommandError::Usage(usage) => write!(f, "Usage: {}", usage),
            CommandError::InvalidStrategy { .. } => f.write_str(messages::STRATEGY_USAGE),
            CommandError::OwnerTooLong(_) => write!(
                f,
                "Process names are limited to {} characters",
                MAX_OWNER_LEN
            ),
        }
    }
}

impl std::error::Error for CommandError {}

const RQ_USAGE: &str = "RQ <process> <size> <F|B|W>";
const RL_USAGE: &str = "RL <process>";

/// Parse one line of input
///
/// # Arguments
/// * `line` - Raw line, with or without its trailing newline
///
/// # Errors
/// Returns a `CommandError` describing what is wrong with the line.
///
/// # Examples
/// ```
/// use adapters_allocator_commands::{parse_command, Command};
///
/// assert_eq!(parse_command("STAT\n"), Ok(Command::Status));
/// assert!(parse_command("RQ P1 ten F").is_err());
/// ```
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(Command::Empty);
    };

    match verb {
        "RQ" => {
            let owner = words.next().ok_or(CommandError::Usage(RQ_USAGE))?;
            let size = words
                .next()
                .and_then(|word| word.parse::<Address>().ok())
                .ok_or(CommandError::Usage(RQ_USAGE))?;
            let code = words.next().ok_or(CommandError::Usage(RQ_USAGE))?;
            let owner = owner_name(owner)?;
            let Ok(strategy) = code.parse::<PlacementStrategy>() else {
                return Err(CommandError::InvalidStrategy {
                    owner,
                    code: code.to_string(),
                });
            };
            Ok(Command::Request {
                owner,
                size,
                strategy,
            })
        }
        "RL" => {
            let owner = words.next().ok_or(CommandError::Usage(RL_USAGE))?;
            Ok(Command::Release {
                owner: owner_name(owner)?,
            })
        }
        "C" => Ok(Command::Compact),
        "STAT" => Ok(Command::Status),
        "X" => Ok(Command::Exit),
        other => Err(CommandError::Unrecognized(other.to_string())),
    }
}

fn owner_name(word: &str) -> Result<ProcessName, CommandError> {
    if word.chars().count() > MAX_OWNER_LEN {
        return Err(CommandError::OwnerTooLong(word.to_string()));
    }
    Ok(ProcessName::new(word))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_request() {
        assert_eq!(
            parse_command("RQ P0 40000 W"),
            Ok(Command::Request {
                owner: ProcessName::new("P0"),
                size: 40000,
                strategy: PlacementStrategy::WorstFit,
            })
        );
    }

    #[test]
    fn test_parse_tolerates_spacing_and_newline() {
        assert_eq!(
            parse_command("  RQ   P1\t10  B \r\n"),
            Ok(Command::Request {
                owner: ProcessName::new("P1"),
                size: 10,
                strategy: PlacementStrategy::BestFit,
            })
        );
    }

    #[test]
    fn test_parse_release() {
        assert_eq!(
            parse_command("RL P3"),
            Ok(Command::Release {
                owner: ProcessName::new("P3")
            })
        );
    }

    #[test]
    fn test_parse_simple_verbs() {
        assert_eq!(parse_command("C"), Ok(Command::Compact));
        assert_eq!(parse_command("STAT"), Ok(Command::Status));
        assert_eq!(parse_command("X"), Ok(Command::Exit));
        assert_eq!(parse_command("STAT extra"), Ok(Command::Status));
    }

    #[test]
    fn test_parse_blank_line() {
        assert_eq!(parse_command(""), Ok(Command::Empty));
        assert_eq!(parse_command("   \n"), Ok(Command::Empty));
    }

    #[test]
    fn test_verbs_are_case_sensitive() {
        assert_eq!(
            parse_command("stat"),
            Err(CommandError::Unrecognized("stat".to_string()))
        );
    }

    #[test]
    fn test_request_usage_errors() {
        for line in ["RQ", "RQ P1", "RQ P1 10", "RQ P1 -5 F", "RQ P1 ten F"] {
            assert_eq!(parse_command(line), Err(CommandError::Usage(RQ_USAGE)), "{}", line);
        }
    }

    #[test]
    fn test_request_invalid_strategy() {
        assert_eq!(
            parse_command("RQ P1 10 Z"),
            Err(CommandError::InvalidStrategy {
                owner: ProcessName::new("P1"),
                code: "Z".to_string()
            })
        );
    }

    #[test]
    fn test_release_usage_error() {
        assert_eq!(parse_command("RL"), Err(CommandError::Usage(RL_USAGE)));
    }

    #[test]
    fn test_owner_length_limit() {
        let ok = "P".repeat(MAX_OWNER_LEN);
        assert!(parse_command(&format!("RL {}", ok)).is_ok());
        let long = "P".repeat(MAX_OWNER_LEN + 1);
        assert_eq!(
            parse_command(&format!("RQ {} 1 F", long)),
            Err(CommandError::OwnerTooLong(long))
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CommandError::Unrecognized("FOO".into()).to_string(),
            "This command is not recognized, try again"
        );
        assert_eq!(
            CommandError::InvalidStrategy {
                owner: "P1".into(),
                code: "Z".into()
            }
            .to_string(),
            "Choose between best_fit, worst_fit, and first_fit. Try again"
        );
        assert_eq!(
            CommandError::Usage(RL_USAGE).to_string(),
            "Usage: RL <process>"
        );
    }
}
