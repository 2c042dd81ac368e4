//! Worst-Fit Placement
//!
//! Worst-fit carves every request out of the largest hole, leaving the
//! biggest possible leftover behind. Ties go to the lowest address.

use std::cmp::Reverse;

use entities_memory_layout::{Address, Segment};
use log::trace;

use super::allocator::{candidates, FitStrategy};

/// Worst-fit selection rule
#[derive(Debug, Clone, Copy, Default)]
pub struct WorstFit;

impl FitStrategy for WorstFit {
    fn select(&self, segments: &[Segment], size: Address) -> Option<usize> {
        // max_by_key keeps the last maximum, so reverse the index to keep the first
        let chosen = candidates(segments, size)
            .max_by_key(|(index, seg)| (seg.size(), Reverse(*index)))
            .map(|(index, _)| index);
        trace!("worst-fit for {} bytes -> {:?}", size, chosen);
        chosen
    }
}
