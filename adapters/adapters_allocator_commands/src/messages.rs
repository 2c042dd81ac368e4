//! User-Facing Messages
//!
//! Every string the allocator shell prints lives here, so the core crates
//! never format text for people.

use std::io::{self, Write};

use usecases_memory_management::{AllocationError, PartitionReport};

pub const UNRECOGNIZED_COMMAND: &str = "This command is not recognized, try again";
pub const STRATEGY_USAGE: &str = "Choose between best_fit, worst_fit, and first_fit. Try again";
pub const ZERO_SIZE: &str = "Requested size must be greater than zero";

/// Message for a failed allocation or release
pub fn allocation_error(err: &AllocationError) -> String {
    match err {
        AllocationError::OutOfSpace { owner, size } => format!(
            "There is no space to place process {}, of {} bytes",
            owner, size
        ),
        AllocationError::DuplicateOwner(owner) => {
            format!("Process {} already in memory. Try again", owner)
        }
        AllocationError::UnknownOwner(owner) => {
            format!("There is no process {} in memory", owner)
        }
        AllocationError::InvalidStrategy(_) => STRATEGY_USAGE.to_string(),
        AllocationError::InvalidSize => ZERO_SIZE.to_string(),
    }
}

/// Write the `STAT` listing
///
/// One header line with the free total, then one line per segment in
/// address order.
pub fn write_report<W: Write>(out: &mut W, report: &PartitionReport) -> io::Result<()> {
    writeln!(out, "available space left: {}", report.free_total)?;
    for seg in &report.segments {
        writeln!(
            out,
            "Addresses [{} : {}] Process {}",
            seg.start,
            seg.end,
            seg.owner.label()
        )?;
    }
    Ok(())
}
