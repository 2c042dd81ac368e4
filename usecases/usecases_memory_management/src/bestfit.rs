//! Best-Fit Placement
//!
//! Best-fit finds the smallest hole that is large enough to satisfy the
//! request. This minimizes wasted space but can lead to many small
//! fragments. When several holes share the smallest capacity the one with
//! the lowest address wins.

use entities_memory_layout::{Address, Segment};
use log::trace;

use super::allocator::{candidates, FitStrategy};

/// Best-fit selection rule
#[derive(Debug, Clone, Copy, Default)]
pub struct BestFit;

impl FitStrategy for BestFit {
    fn select(&self, segments: &[Segment], size: Address) -> Option<usize> {
        // Key includes the index so ties resolve to the lowest address
        let chosen = candidates(segments, size)
            .min_by_key(|(index, seg)| (seg.size(), *index))
            .map(|(index, _)| index);
        trace!("best-fit for {} bytes -> {:?}", size, chosen);
        chosen
    }
}
