//! Partition Report
//!
//! Plain snapshot of a partition for display. Rendering it as text is left
//! to the caller.

use entities_memory_layout::{Address, SegmentView};

/// Every segment in address order, plus the totals
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionReport {
    /// Number of addresses in the space
    pub total_size: Address,
    /// Sum of all hole sizes
    pub free_total: Address,
    /// Segments in increasing address order
    pub segments: Vec<SegmentView>,
}

impl PartitionReport {
    /// Holes only
    pub fn holes(&self) -> impl Iterator<Item = &SegmentView> {
        self.segments.iter().filter(|seg| seg.owner.is_free())
    }

    /// Allocated segments only
    pub fn allocations(&self) -> impl Iterator<Item = &SegmentView> {
        self.segments.iter().filter(|seg| !seg.owner.is_free())
    }

    /// Free space outside the largest hole, as a fraction of all free space
    ///
    /// 0.0 means all free space is in one hole (or there is none).
    pub fn external_fragmentation(&self) -> f64 {
        if self.free_total == 0 {
            return 0.0;
        }
        let largest = self.holes().map(SegmentView::size).max().unwrap_or(0);
        (self.free_total - largest) as f64 / self.free_total as f64
    }
}
