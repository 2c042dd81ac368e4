//! Entities Layer: Memory Layout
//!
//! Provides the building blocks of a simulated contiguous address space:
//! address ranges, the owner label carried by each range, and the segment
//! record that ties the two together.
//!
//! ## Overview
//!
//! The `entities_memory_layout` crate is part of the entities layer. It holds
//! no policy: placement strategies, coalescing and compaction live in
//! `usecases_memory_management`, which arranges these segments into a
//! partition of the whole address space.
//!
//! ## Modules
//!
//! - **[`owner`](owner/index.html)**: Process names and the free/allocated owner label
//! - **[`segment`](segment/index.html)**: Inclusive address ranges with an owner
//!
//! ## Size Convention
//!
//! All ranges are inclusive: a segment `[start : end]` covers
//! `end - start + 1` addresses. A segment is never empty.

pub mod owner;
pub mod segment;

pub use owner::{Owner, ProcessName, FREE_LABEL};
pub use segment::{Address, Segment, SegmentView};
