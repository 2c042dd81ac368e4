//! Partition Module
//!
//! Provides the segment list that partitions a simulated address space
//! `[0, total_size)` into contiguous free and allocated segments.
//!
//! ## Overview
//!
//! A [`Partition`] starts as a single hole covering every address. Requests
//! carve allocations out of holes chosen by a
//! [`PlacementStrategy`](crate::allocator::PlacementStrategy); releases turn
//! allocations back into holes and fold them into any neighbouring hole.
//!
//! The segments live in a `Vec` ordered by address. Positions in that vector
//! are the only links between segments: merging removes an entry and widens
//! its neighbour, and compaction swaps adjacent entries.
//!
//! ## Invariants
//!
//! Before and after every public operation:
//! 1. Segments cover `[0, total_size)` in order, with no gaps or overlaps
//! 2. No two adjacent segments are both free
//! 3. No process owns more than one segment
//! 4. `free_total` equals the sum of the hole sizes
//!
//! Failed operations leave the partition untouched.

use entities_memory_layout::{Address, ProcessName, Segment, SegmentView};
use log::debug;

use crate::allocator::{AllocationError, PlacementStrategy};
use crate::report::PartitionReport;

/// Ordered list of segments covering the whole simulated address space
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    /// Segments in increasing address order
    pub(crate) segments: Vec<Segment>,
    /// Number of addresses in the space
    pub(crate) total_size: Address,
    /// Sum of all hole sizes, kept up to date by every operation
    pub(crate) free_total: Address,
}

impl Partition {
    /// Create a partition with one hole spanning `total_size` addresses
    ///
    /// # Arguments
    /// * `total_size` - Number of addresses in the space (must be > 0)
    ///
    /// # Errors
    /// Returns `AllocationError::InvalidSize` if `total_size` is 0.
    ///
    /// # Examples
    /// ```
    /// use usecases_memory_management::Partition;
    ///
    /// let partition = Partition::new(1024).unwrap();
    /// assert_eq!(partition.free_total(), 1024);
    /// assert_eq!(partition.len(), 1);
    /// ```
    pub fn new(total_size: Address) -> Result<Self, AllocationError> {
        if total_size == 0 {
            return Err(AllocationError::InvalidSize);
        }
        Ok(Self {
            segments: vec![Segment::free(0, total_size)],
            total_size,
            free_total: total_size,
        })
    }

    /// Number of addresses in the space
    pub fn total_size(&self) -> Address {
        self.total_size
    }

    /// Number of free addresses
    pub fn free_total(&self) -> Address {
        self.free_total
    }

    /// Number of allocated addresses
    pub fn used_total(&self) -> Address {
        self.total_size - self.free_total
    }

    /// Number of segments, free and allocated
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false: a partition holds at least one segment
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Iterate over the segments in address order
    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter()
    }

    /// Find the segment allocated to `owner`
    pub fn find(&self, owner: &str) -> Option<&Segment> {
        self.position(owner).map(|index| &self.segments[index])
    }

    /// Check if `owner` currently holds a segment
    pub fn contains(&self, owner: &str) -> bool {
        self.position(owner).is_some()
    }

    /// Number of holes
    pub fn hole_count(&self) -> usize {
        self.segments.iter().filter(|seg| seg.is_free()).count()
    }

    /// The largest hole, lowest address on ties
    pub fn largest_hole(&self) -> Option<&Segment> {
        PlacementStrategy::WorstFit
            .select(&self.segments, 1)
            .map(|index| &self.segments[index])
    }

    fn position(&self, owner: &str) -> Option<usize> {
        self.segments.iter().position(|seg| seg.is_owned_by(owner))
    }

    /// Allocate `size` addresses to `owner`
    ///
    /// The hole picked by `strategy` is split: its first `size` addresses go
    /// to `owner` and whatever remains stays behind as a hole directly after
    /// the new allocation.
    ///
    /// # Arguments
    /// * `owner` - Process receiving the memory; must not already own a segment
    /// * `size` - Number of addresses (must be > 0)
    /// * `strategy` - Rule for choosing among the holes that fit
    ///
    /// # Returns
    /// The newly allocated segment.
    ///
    /// # Errors
    /// Checked in this order, with nothing changed on failure:
    /// * `AllocationError::InvalidSize` if `size` is 0
    /// * `AllocationError::DuplicateOwner` if `owner` already holds a segment
    /// * `AllocationError::OutOfSpace` if no hole is large enough
    ///
    /// # Examples
    /// ```
    /// use usecases_memory_management::{Partition, PlacementStrategy};
    ///
    /// let mut partition = Partition::new(100).unwrap();
    /// partition.allocate("P1", 30, PlacementStrategy::FirstFit).unwrap();
    /// assert_eq!(partition.free_total(), 70);
    /// assert!(partition.allocate("P1", 5, PlacementStrategy::FirstFit).is_err());
    /// ```
    pub fn allocate(
        &mut self,
        owner: impl Into<ProcessName>,
        size: Address,
        strategy: PlacementStrategy,
    ) -> Result<SegmentView, AllocationError> {
        let owner = owner.into();
        if size == 0 {
            return Err(AllocationError::InvalidSize);
        }
        if self.contains(owner.as_str()) {
            return Err(AllocationError::DuplicateOwner(owner));
        }
        let Some(index) = strategy.select(&self.segments, size) else {
            debug!("no hole for {} ({} bytes, {:?})", owner, size, strategy);
            return Err(AllocationError::OutOfSpace { owner, size });
        };

        let hole = &mut self.segments[index];
        let leftover = hole.split_front(size);
        hole.assign(owner);
        let placed = hole.view();
        if let Some(rest) = leftover {
            self.segments.insert(index + 1, rest);
        }
        self.free_total -= size;

        debug!(
            "{:?} placed {} at [{} : {}]",
            strategy,
            placed.owner.label(),
            placed.start,
            placed.end
        );
        debug_assert_eq!(self.check_invariants(), Ok(()));
        Ok(placed)
    }

    /// Release the segment held by `owner`
    ///
    /// The segment becomes a hole and is merged with a free neighbour on
    /// either side, so a segment sandwiched between two holes ends up as one
    /// hole spanning all three ranges.
    ///
    /// # Returns
    /// The released segment as it was before being freed.
    ///
    /// # Errors
    /// Returns `AllocationError::UnknownOwner` if `owner` holds no segment.
    pub fn release(&mut self, owner: &str) -> Result<SegmentView, AllocationError> {
        let index = self
            .position(owner)
            .ok_or_else(|| AllocationError::UnknownOwner(ProcessName::new(owner)))?;

        let released = self.segments[index].view();
        self.segments[index].release();
        self.free_total += released.size();

        let (hole, merges) = self.coalesce(index);
        debug!(
            "released {} [{} : {}], {} merge(s), hole now [{} : {}]",
            owner,
            released.start,
            released.end,
            merges,
            self.segments[hole].start(),
            self.segments[hole].end()
        );
        debug_assert_eq!(self.check_invariants(), Ok(()));
        Ok(released)
    }

    /// Merge the hole at `index` with free neighbours
    ///
    /// # Returns
    /// The index of the resulting hole and the number of merges performed.
    pub(crate) fn coalesce(&mut self, index: usize) -> (usize, usize) {
        debug_assert!(self.segments[index].is_free());
        let mut index = index;
        let mut merges = 0;

        if index + 1 < self.segments.len() && self.segments[index + 1].is_free() {
            let next = self.segments.remove(index + 1);
            self.segments[index].absorb(next);
            merges += 1;
        }
        if index > 0 && self.segments[index - 1].is_free() {
            let current = self.segments.remove(index);
            self.segments[index - 1].absorb(current);
            index -= 1;
            merges += 1;
        }
        (index, merges)
    }

    /// Snapshot of every segment plus the free total
    ///
    /// Read-only; safe to call at any time.
    pub fn report(&self) -> PartitionReport {
        PartitionReport {
            total_size: self.total_size,
            free_total: self.free_total,
            segments: self.segments.iter().map(Segment::view).collect(),
        }
    }

    /// Release every allocation, leaving one hole over the whole space
    ///
    /// # Returns
    /// The number of allocations that were dropped.
    pub fn reset(&mut self) -> usize {
        let dropped = self.segments.iter().filter(|seg| !seg.is_free()).count();
        self.segments = vec![Segment::free(0, self.total_size)];
        self.free_total = self.total_size;
        debug!("reset partition, dropped {} allocation(s)", dropped);
        dropped
    }
}
