//! Compaction Module
//!
//! Slides allocated segments toward address 0 so that free space gathers in
//! one hole at the top of the address space.
//!
//! ## Algorithm
//!
//! A single left-to-right pass with a cursor. Whenever the segment after the
//! cursor is a hole that is not the last segment, the hole and the allocated
//! segment behind it trade places: the allocation moves down to where the
//! hole started and the hole moves up to just past the allocation, both
//! keeping their sizes. The hole is then merged with whatever free segment
//! it now touches, and the cursor steps onto the relocated allocation. A
//! hole therefore keeps travelling right, swallowing other holes on the way,
//! until it reaches the end of the list.
//!
//! Relative order of the allocated segments never changes, and no
//! allocation is created or released.

use entities_memory_layout::Address;
use log::debug;

use crate::partition::Partition;

/// What a call to [`Partition::compact`] did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompactionSummary {
    /// Number of hole/allocation swaps (each one relocates one allocation)
    pub moves: usize,
    /// Number of hole merges
    pub merges: usize,
}

impl CompactionSummary {
    /// True when the pass found nothing to move
    pub fn is_noop(&self) -> bool {
        self.moves == 0 && self.merges == 0
    }
}

impl Partition {
    /// Compact the partition in one forward pass
    ///
    /// # Returns
    /// A summary of the swaps and merges performed.
    ///
    /// # Examples
    /// ```
    /// use usecases_memory_management::{Partition, PlacementStrategy};
    ///
    /// let mut partition = Partition::new(40).unwrap();
    /// partition.allocate("P1", 10, PlacementStrategy::FirstFit).unwrap();
    /// partition.allocate("P2", 10, PlacementStrategy::FirstFit).unwrap();
    /// partition.release("P1").unwrap();
    ///
    /// partition.compact();
    /// assert_eq!(partition.find("P2").unwrap().start(), 0);
    /// assert_eq!(partition.hole_count(), 1);
    /// ```
    pub fn compact(&mut self) -> CompactionSummary {
        let mut summary = CompactionSummary::default();

        let mut next = 0;
        while next < self.segments.len() {
            next = self.compaction_step(next, &mut summary);
        }

        debug!(
            "compaction: {} move(s), {} merge(s), {} hole(s) left",
            summary.moves,
            summary.merges,
            self.hole_count()
        );
        debug_assert_eq!(self.check_invariants(), Ok(()));
        summary
    }

    /// One step of the compaction pass, returning where the pass resumes
    ///
    /// `next` is the segment right after the cursor; the cursor itself is
    /// `next - 1`, or a virtual head (never free) when `next == 0`.
    fn compaction_step(&mut self, next: usize, summary: &mut CompactionSummary) -> usize {
        let next_free = self.segments[next].is_free();
        let has_successor = next + 1 < self.segments.len();
        let cursor_free = next > 0 && self.segments[next - 1].is_free();

        if next_free && has_successor {
            self.swap_hole_forward(next);
            summary.moves += 1;
            let (_, merges) = self.coalesce(next + 1);
            summary.merges += merges;
            next + 1
        } else if !next_free && cursor_free {
            // the cursor rests on a hole: push it past `next` and look again
            self.swap_hole_forward(next - 1);
            summary.moves += 1;
            let (_, merges) = self.coalesce(next);
            summary.merges += merges;
            next
        } else {
            next + 1
        }
    }

    /// Swap the hole at `index` with the allocation right after it
    ///
    /// The allocation takes the hole's start address; the hole follows
    /// immediately after the allocation. Sizes are unchanged.
    fn swap_hole_forward(&mut self, index: usize) {
        debug_assert!(self.segments[index].is_free());
        debug_assert!(!self.segments[index + 1].is_free());

        let hole_start: Address = self.segments[index].start();
        self.segments.swap(index, index + 1);
        self.segments[index].move_to(hole_start);
        let after = self.segments[index].end() + 1;
        self.segments[index + 1].move_to(after);

        debug!(
            "moved {} down to [{} : {}]",
            self.segments[index].owner().label(),
            self.segments[index].start(),
            self.segments[index].end()
        );
    }
}
