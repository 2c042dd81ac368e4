//! Integration tests for entities_memory_layout crate
//!
//! Exercises segments the way the partition uses them: carve a hole into an
//! allocation plus a leftover, then fold holes back together.

use entities_memory_layout::{Owner, ProcessName, Segment, FREE_LABEL};

#[test]
fn test_carve_and_refold() {
    let mut hole = Segment::free(0, 64);
    let leftover = hole.split_front(16).unwrap();
    hole.assign(ProcessName::new("P1"));

    assert_eq!(hole.view().size() + leftover.size(), 64);
    assert_eq!(hole.end() + 1, leftover.start());

    hole.release();
    hole.absorb(leftover);
    assert!(hole.is_free());
    assert_eq!((hole.start(), hole.end()), (0, 63));
}

#[test]
fn test_last_address_boundary() {
    // A partition of 100 addresses ends at 99; the leftover of a split must too
    let mut hole = Segment::free(0, 100);
    let leftover = hole.split_front(99).unwrap();
    assert_eq!(leftover.start(), 99);
    assert_eq!(leftover.end(), 99);
    assert_eq!(leftover.size(), 1);
}

#[test]
fn test_labels() {
    assert_eq!(Segment::free(0, 1).owner().label(), FREE_LABEL);
    let seg = Segment::new(0, 1, Owner::from(ProcessName::new("P9")));
    assert_eq!(seg.owner().label(), "P9");
}
