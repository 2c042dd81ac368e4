//! Partition Invariants
//!
//! Recomputes, from scratch, every property a [`Partition`] promises to
//! keep. Mutating operations assert these in debug builds; tests call
//! [`Partition::check_invariants`] directly.

use std::collections::HashSet;
use std::fmt;

use entities_memory_layout::{Address, ProcessName};

use crate::partition::Partition;

/// A broken partition invariant
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    /// The partition holds no segments at all
    NoSegments,
    /// The first segment does not start at address 0
    BadFirstStart { found: Address },
    /// A segment does not start right after its predecessor
    Discontinuity {
        index: usize,
        expected: Address,
        found: Address,
    },
    /// A segment ends before it starts
    InvertedRange { index: usize },
    /// The last segment does not end at `total_size - 1`
    BadLastEnd { expected: Address, found: Address },
    /// Segments `index` and `index + 1` are both free
    AdjacentHoles { index: usize },
    /// A process owns more than one segment
    DuplicateOwner(ProcessName),
    /// The recorded free total disagrees with the holes
    FreeTotalMismatch { recorded: Address, actual: Address },
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantViolation::NoSegments => write!(f, "partition has no segments"),
            InvariantViolation::BadFirstStart { found } => {
                write!(f, "first segment starts at {} instead of 0", found)
            }
            InvariantViolation::Discontinuity {
                index,
                expected,
                found,
            } => write!(
                f,
                "segment {} starts at {}, expected {}",
                index, found, expected
            ),
            InvariantViolation::InvertedRange { index } => {
                write!(f, "segment {} ends before it starts", index)
            }
            InvariantViolation::BadLastEnd { expected, found } => {
                write!(f, "last segment ends at {}, expected {}", found, expected)
            }
            InvariantViolation::AdjacentHoles { index } => {
                write!(f, "segments {} and {} are both free", index, index + 1)
            }
            InvariantViolation::DuplicateOwner(owner) => {
                write!(f, "{} owns more than one segment", owner)
            }
            InvariantViolation::FreeTotalMismatch { recorded, actual } => write!(
                f,
                "free total is {} but holes add up to {}",
                recorded, actual
            ),
        }
    }
}

impl std::error::Error for InvariantViolation {}

impl Partition {
    /// Verify coverage, hole separation, owner uniqueness and the free total
    ///
    /// # Errors
    /// Returns the first violation found, scanning in address order.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let first = self.segments.first().ok_or(InvariantViolation::NoSegments)?;
        if first.start() != 0 {
            return Err(InvariantViolation::BadFirstStart {
                found: first.start(),
            });
        }

        let mut owners = HashSet::new();
        let mut holes: Address = 0;
        for (index, seg) in self.segments.iter().enumerate() {
            if seg.end() < seg.start() {
                return Err(InvariantViolation::InvertedRange { index });
            }
            if let Some(next) = self.segments.get(index + 1) {
                if next.start() != seg.end() + 1 {
                    return Err(InvariantViolation::Discontinuity {
                        index: index + 1,
                        expected: seg.end() + 1,
                        found: next.start(),
                    });
                }
                if seg.is_free() && next.is_free() {
                    return Err(InvariantViolation::AdjacentHoles { index });
                }
            }
            match seg.owner().process() {
                None => holes += seg.size(),
                Some(name) => {
                    if !owners.insert(name) {
                        return Err(InvariantViolation::DuplicateOwner(name.clone()));
                    }
                }
            }
        }

        if let Some(last) = self.segments.last() {
            if last.end() + 1 != self.total_size {
                return Err(InvariantViolation::BadLastEnd {
                    expected: self.total_size - 1,
                    found: last.end(),
                });
            }
        }
        if holes != self.free_total {
            return Err(InvariantViolation::FreeTotalMismatch {
                recorded: self.free_total,
                actual: holes,
            });
        }
        Ok(())
    }
}
