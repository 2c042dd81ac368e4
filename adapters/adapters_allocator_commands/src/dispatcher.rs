//! Command Dispatcher
//!
//! Runs parsed commands against a partition and writes whatever they report
//! to an output sink. Each command makes exactly one call into the
//! partition.

use std::io::{self, BufRead, Write};

use log::{debug, warn};
use usecases_memory_management::{AllocationError, Partition};

use crate::command::{parse_command, Command, CommandError};
use crate::messages;

/// What the read loop should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// The command ran; keep reading
    Continue,
    /// The command was refused and a message was written; keep reading
    Rejected,
    /// Stop reading
    Exit,
}

/// Counters for one run of the read loop
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Non-blank lines processed
    pub commands: usize,
    /// Lines that produced an error message
    pub rejected: usize,
    /// True if the loop ended on `X` rather than end of input
    pub exited: bool,
}

/// Owns a partition and the sink its output goes to
pub struct Dispatcher<W: Write> {
    partition: Partition,
    out: W,
}

impl<W: Write> Dispatcher<W> {
    pub fn new(partition: Partition, out: W) -> Self {
        Self { partition, out }
    }

    pub fn partition(&self) -> &Partition {
        &self.partition
    }

    /// Take the partition and the sink back
    pub fn into_parts(self) -> (Partition, W) {
        (self.partition, self.out)
    }

    /// Run one command
    ///
    /// Allocation and release failures are written as messages, not returned.
    ///
    /// # Returns
    /// * `Ok(Flow)` - Whether to keep reading
    /// * `Err(io::Error)` - Writing to the sink failed
    pub fn execute(&mut self, command: Command) -> io::Result<Flow> {
        let outcome = match command {
            Command::Request {
                owner,
                size,
                strategy,
            } => self.partition.allocate(owner, size, strategy).map(|_| ()),
            Command::Release { owner } => self.partition.release(owner.as_str()).map(|_| ()),
            Command::Compact => {
                self.partition.compact();
                Ok(())
            }
            Command::Status => {
                messages::write_report(&mut self.out, &self.partition.report())?;
                Ok(())
            }
            Command::Exit => return Ok(Flow::Exit),
            Command::Empty => Ok(()),
        };

        match outcome {
            Ok(()) => Ok(Flow::Continue),
            Err(err) => {
                debug!("command failed: {}", err);
                writeln!(self.out, "{}", messages::allocation_error(&err))?;
                Ok(Flow::Rejected)
            }
        }
    }

    /// Parse and run one line, reporting parse errors to the sink
    ///
    /// A request naming a process that is already loaded reports the
    /// duplicate, even when its strategy code is also invalid.
    pub fn execute_line(&mut self, line: &str) -> io::Result<Flow> {
        match parse_command(line) {
            Ok(command) => self.execute(command),
            Err(CommandError::InvalidStrategy { owner, .. })
                if self.partition.contains(owner.as_str()) =>
            {
                let err = AllocationError::DuplicateOwner(owner);
                debug!("command failed: {}", err);
                writeln!(self.out, "{}", messages::allocation_error(&err))?;
                Ok(Flow::Rejected)
            }
            Err(err) => {
                warn!("rejected input {:?}: {:?}", line.trim_end(), err);
                writeln!(self.out, "{}", err)?;
                Ok(Flow::Rejected)
            }
        }
    }

    /// Read and run lines until `X` or end of input
    ///
    /// Bytes that are not valid UTF-8 are replaced, so a garbled line is
    /// rejected on its own instead of ending the session.
    ///
    /// # Arguments
    /// * `input` - Line source
    /// * `prompt` - Written (and flushed) before each read, if given
    pub fn run<R: BufRead>(
        &mut self,
        mut input: R,
        prompt: Option<&str>,
    ) -> io::Result<SessionSummary> {
        let mut summary = SessionSummary::default();
        let mut buf = Vec::new();
        loop {
            if let Some(prompt) = prompt {
                write!(self.out, "{}", prompt)?;
                self.out.flush()?;
            }

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                // keep the shell's next prompt off our last line
                if prompt.is_some() {
                    writeln!(self.out)?;
                }
                break;
            }
            let line = String::from_utf8_lossy(&buf);
            if line.trim().is_empty() {
                continue;
            }

            summary.commands += 1;
            match self.execute_line(&line)? {
                Flow::Continue => {}
                Flow::Rejected => summary.rejected += 1,
                Flow::Exit => {
                    summary.exited = true;
                    break;
                }
            }
        }
        self.out.flush()?;
        Ok(summary)
    }
}
