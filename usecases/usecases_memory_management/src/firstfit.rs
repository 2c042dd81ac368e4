//! First-Fit Placement
//!
//! First-fit takes the first hole, scanning in address order, that is large
//! enough to satisfy the request. It is the cheapest rule to evaluate but
//! tends to leave small fragments near the low end of the address space.

use entities_memory_layout::{Address, Segment};
use log::trace;

use super::allocator::{candidates, FitStrategy};

/// First-fit selection rule
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstFit;

impl FitStrategy for FirstFit {
    fn select(&self, segments: &[Segment], size: Address) -> Option<usize> {
        let chosen = candidates(segments, size).map(|(index, _)| index).next();
        trace!("first-fit for {} bytes -> {:?}", size, chosen);
        chosen
    }
}
