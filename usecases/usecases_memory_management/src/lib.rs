//! Use Cases Layer: Memory Management
//!
//! Simulates contiguous memory allocation the way early operating systems
//! managed physical memory: one linear address space split into contiguous
//! segments, each either free or allocated to a named process.
//!
//! ## Overview
//!
//! The `usecases_memory_management` crate is part of the use cases layer. It
//! owns the [`Partition`] (the segment list) and every operation on it. Only
//! address ranges and owner labels are tracked; no bytes are ever stored.
//!
//! ## Placement Strategies
//!
//! - **[`firstfit`](firstfit/index.html)**: First-fit - the lowest-addressed
//!   hole that is large enough
//!
//! - **[`bestfit`](bestfit/index.html)**: Best-fit - the smallest hole that is
//!   large enough, minimizing wasted space
//!
//! - **[`worstfit`](worstfit/index.html)**: Worst-fit - the largest hole,
//!   leaving the largest leftover
//!
//! - **[`allocator`](allocator/index.html)**: Strategy selection and error types
//!
//! ## Operations
//!
//! - **[`partition`](partition/index.html)**: Allocation, release with
//!   coalescing, reporting
//! - **[`compaction`](compaction/index.html)**: Sliding allocations down to
//!   gather free space
//! - **[`invariants`](invariants/index.html)**: Full consistency check
//!
//! ## See Also
//!
//! - [`entities_memory_layout`](../entities_memory_layout/index.html): Segments and owners

pub mod allocator;
pub mod firstfit;
pub mod bestfit;
pub mod worstfit;
pub mod partition;
pub mod compaction;
pub mod invariants;
pub mod report;

pub use allocator::{AllocationError, FitStrategy, PlacementStrategy};
pub use compaction::CompactionSummary;
pub use invariants::InvariantViolation;
pub use partition::Partition;
pub use report::PartitionReport;
