//! Adapters Layer: Allocator Commands
//!
//! Turns lines of text into calls on a
//! [`Partition`](usecases_memory_management::Partition) and turns the
//! results back into text.
//!
//! ## Command Language
//!
//! | Command | Effect |
//! |---|---|
//! | `RQ <process> <size> <F\|B\|W>` | allocate with first-, best- or worst-fit |
//! | `RL <process>` | release the process's segment |
//! | `C` | compact |
//! | `STAT` | report every segment and the free total |
//! | `X` | stop |
//!
//! ## Modules
//!
//! - **[`command`](command/index.html)**: Command grammar and parse errors
//! - **[`messages`](messages/index.html)**: Every user-facing string
//! - **[`dispatcher`](dispatcher/index.html)**: Runs commands against a partition

pub mod command;
pub mod dispatcher;
pub mod messages;

pub use command::{parse_command, Command, CommandError, MAX_OWNER_LEN};
pub use dispatcher::{Dispatcher, Flow, SessionSummary};
