//! Segment Module
//!
//! A segment is a contiguous, non-empty, inclusive range of addresses with a
//! single owner. Segments know nothing about their neighbours; keeping them
//! ordered and gapless is the partition's job.

use crate::owner::{Owner, ProcessName};

/// Simulated address (also used for sizes)
pub type Address = usize;

/// Contiguous run of addresses `[start : end]` owned by one process or free
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    start: Address,
    end: Address,
    owner: Owner,
}

/// Read-only snapshot of a segment, as handed out by reports
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentView {
    /// First address of the range
    pub start: Address,
    /// Last address of the range (inclusive)
    pub end: Address,
    /// Owner of the range
    pub owner: Owner,
}

impl SegmentView {
    /// Number of addresses covered
    pub fn size(&self) -> Address {
        self.end - self.start + 1
    }
}

impl Segment {
    /// Create a segment of `size` addresses starting at `start`
    ///
    /// # Arguments
    /// * `start` - First address
    /// * `size` - Number of addresses (must be > 0)
    /// * `owner` - Owner of the range
    pub fn new(start: Address, size: Address, owner: Owner) -> Self {
        debug_assert!(size > 0, "segments are never empty");
        Self {
            start,
            end: start + size - 1,
            owner,
        }
    }

    /// Create a free segment
    pub fn free(start: Address, size: Address) -> Self {
        Self::new(start, size, Owner::Free)
    }

    /// First address
    pub fn start(&self) -> Address {
        self.start
    }

    /// Last address (inclusive)
    pub fn end(&self) -> Address {
        self.end
    }

    /// Number of addresses covered
    pub fn size(&self) -> Address {
        self.end - self.start + 1
    }

    pub fn owner(&self) -> &Owner {
        &self.owner
    }

    pub fn is_free(&self) -> bool {
        self.owner.is_free()
    }

    /// Check if this segment is allocated to `name`
    pub fn is_owned_by(&self, name: &str) -> bool {
        self.owner.is_process(name)
    }

    /// Hand the segment to a process
    pub fn assign(&mut self, name: ProcessName) {
        self.owner = Owner::Process(name);
    }

    /// Mark the segment free, returning the previous owner
    pub fn release(&mut self) -> Owner {
        std::mem::replace(&mut self.owner, Owner::Free)
    }

    /// Shrink the segment to its first `size` addresses
    ///
    /// Returns the cut-off tail as a new free segment, or `None` when `size`
    /// already equals the segment's size.
    ///
    /// # Panics
    /// Debug builds assert `0 < size <= self.size()`.
    pub fn split_front(&mut self, size: Address) -> Option<Segment> {
        debug_assert!(size > 0 && size <= self.size());
        let leftover = self.size() - size;
        self.end = self.start + size - 1;
        if leftover > 0 {
            Some(Segment::free(self.end + 1, leftover))
        } else {
            None
        }
    }

    /// Extend this segment over the segment that directly follows it
    ///
    /// The owner of `next` is discarded; callers only do this for holes.
    pub fn absorb(&mut self, next: Segment) {
        debug_assert_eq!(self.end + 1, next.start, "absorbed segment must be adjacent");
        self.end = next.end;
    }

    /// Move the segment so it begins at `start`, keeping its size
    pub fn move_to(&mut self, start: Address) {
        let size = self.size();
        self.start = start;
        self.end = start + size - 1;
    }

    /// Snapshot for reporting
    pub fn view(&self) -> SegmentView {
        SegmentView {
            start: self.start,
            end: self.end,
            owner: self.owner.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inclusive_size() {
        let seg = Segment::free(0, 100);
        assert_eq!(seg.start(), 0);
        assert_eq!(seg.end(), 99);
        assert_eq!(seg.size(), 100);
    }

    #[test]
    fn test_single_address_segment() {
        let seg = Segment::free(41, 1);
        assert_eq!(seg.start(), 41);
        assert_eq!(seg.end(), 41);
        assert_eq!(seg.size(), 1);
    }

    #[test]
    fn test_split_front_with_leftover() {
        let mut seg = Segment::free(10, 20);
        let rest = seg.split_front(5).unwrap();
        assert_eq!((seg.start(), seg.end()), (10, 14));
        assert_eq!((rest.start(), rest.end()), (15, 29));
        assert!(rest.is_free());
    }

    #[test]
    fn test_split_front_exact() {
        let mut seg = Segment::free(10, 20);
        assert!(seg.split_front(20).is_none());
        assert_eq!(seg.end(), 29);
    }

    #[test]
    fn test_assign_and_release() {
        let mut seg = Segment::free(0, 8);
        seg.assign(ProcessName::new("P1"));
        assert!(seg.is_owned_by("P1"));
        let previous = seg.release();
        assert_eq!(previous, Owner::Process(ProcessName::new("P1")));
        assert!(seg.is_free());
    }

    #[test]
    fn test_absorb() {
        let mut a = Segment::free(0, 10);
        let b = Segment::free(10, 5);
        a.absorb(b);
        assert_eq!((a.start(), a.end(), a.size()), (0, 14, 15));
    }

    #[test]
    fn test_move_to_keeps_size() {
        let mut seg = Segment::new(30, 7, Owner::Process(ProcessName::new("P2")));
        seg.move_to(3);
        assert_eq!((seg.start(), seg.end(), seg.size()), (3, 9, 7));
        assert!(seg.is_owned_by("P2"));
    }

    #[test]
    fn test_view_matches_segment() {
        let seg = Segment::new(5, 5, Owner::Process(ProcessName::new("A")));
        let view = seg.view();
        assert_eq!(view.start, 5);
        assert_eq!(view.end, 9);
        assert_eq!(view.size(), 5);
        assert_eq!(view.owner.label(), "A");
    }
}
