//! Placement Strategy Types
//!
//! Defines the placement strategies and the errors shared by every
//! operation on a [`Partition`](crate::partition::Partition).
//!
//! ## Overview
//!
//! A placement strategy looks at the holes of a partition and chooses the
//! one that receives a new allocation. Every strategy only considers holes
//! whose capacity is at least the requested size; they differ in which of
//! those candidates wins:
//!
//! - **FirstFit**: the candidate with the lowest start address
//! - **BestFit**: the smallest candidate, lowest address on ties
//! - **WorstFit**: the largest candidate, lowest address on ties
//!
//! ## Examples
//!
//! ```rust
//! use usecases_memory_management::{Partition, PlacementStrategy};
//!
//! let mut partition = Partition::new(100).unwrap();
//! let strategy: PlacementStrategy = "B".parse().unwrap();
//! let placed = partition.allocate("P1", 30, strategy).unwrap();
//! assert_eq!((placed.start, placed.end), (0, 29));
//! ```
//!
//! ## See Also
//!
//! - [`firstfit`](super::firstfit/index.html): First-fit selection
//! - [`bestfit`](super::bestfit/index.html): Best-fit selection
//! - [`worstfit`](super::worstfit/index.html): Worst-fit selection

use std::fmt;
use std::str::FromStr;

use entities_memory_layout::{Address, ProcessName, Segment};

use crate::bestfit::BestFit;
use crate::firstfit::FirstFit;
use crate::worstfit::WorstFit;

/// Placement strategy types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlacementStrategy {
    /// First-fit placement (code `F`)
    FirstFit,
    /// Best-fit placement (code `B`)
    BestFit,
    /// Worst-fit placement (code `W`)
    WorstFit,
}

impl PlacementStrategy {
    /// Every strategy, in code order F, B, W
    pub const ALL: [PlacementStrategy; 3] = [
        PlacementStrategy::FirstFit,
        PlacementStrategy::BestFit,
        PlacementStrategy::WorstFit,
    ];

    /// Single-letter code used on the command line
    pub fn code(&self) -> &'static str {
        match self {
            PlacementStrategy::FirstFit => "F",
            PlacementStrategy::BestFit => "B",
            PlacementStrategy::WorstFit => "W",
        }
    }

    /// Choose the hole that receives `size` addresses
    ///
    /// # Returns
    /// Index into `segments` of the chosen hole, or `None` if no hole is
    /// large enough.
    pub fn select(&self, segments: &[Segment], size: Address) -> Option<usize> {
        match self {
            PlacementStrategy::FirstFit => FirstFit.select(segments, size),
            PlacementStrategy::BestFit => BestFit.select(segments, size),
            PlacementStrategy::WorstFit => WorstFit.select(segments, size),
        }
    }
}

impl FromStr for PlacementStrategy {
    type Err = AllocationError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code {
            "F" => Ok(PlacementStrategy::FirstFit),
            "B" => Ok(PlacementStrategy::BestFit),
            "W" => Ok(PlacementStrategy::WorstFit),
            other => Err(AllocationError::InvalidStrategy(other.to_string())),
        }
    }
}

/// Selection rule behind a placement strategy
///
/// Implementations must only return indices of free segments whose size is
/// at least `size`.
pub trait FitStrategy {
    /// Pick one hole for a request of `size` addresses
    ///
    /// # Arguments
    /// * `segments` - The partition's segments in address order
    /// * `size` - Requested size (> 0)
    ///
    /// # Returns
    /// Index of the chosen hole, or `None` if no hole fits
    fn select(&self, segments: &[Segment], size: Address) -> Option<usize>;
}

/// Holes able to take `size` addresses, in address order, with their index
pub(crate) fn candidates(
    segments: &[Segment],
    size: Address,
) -> impl Iterator<Item = (usize, &Segment)> {
    segments
        .iter()
        .enumerate()
        .filter(move |(_, seg)| seg.is_free() && seg.size() >= size)
}

/// Allocation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllocationError {
    /// Requested size or total size is zero
    InvalidSize,
    /// No hole is large enough for the request
    OutOfSpace {
        /// Process that asked for memory
        owner: ProcessName,
        /// Requested size
        size: Address,
    },
    /// The process already owns a segment
    DuplicateOwner(ProcessName),
    /// The process owns no segment
    UnknownOwner(ProcessName),
    /// Unrecognized strategy code
    InvalidStrategy(String),
}

impl fmt::Display for AllocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AllocationError::InvalidSize => write!(f, "Size must be greater than zero"),
            AllocationError::OutOfSpace { owner, size } => {
                write!(f, "No hole can hold {} bytes for {}", size, owner)
            }
            AllocationError::DuplicateOwner(owner) => write!(f, "{} already owns a segment", owner),
            AllocationError::UnknownOwner(owner) => write!(f, "{} owns no segment", owner),
            AllocationError::InvalidStrategy(code) => {
                write!(f, "Unknown placement strategy '{}'", code)
            }
        }
    }
}

impl std::error::Error for AllocationError {}
