//! Integration tests for adapters_allocator_commands crate
//!
//! Feeds whole sessions through the dispatcher and compares the transcript
//! with what the allocator shell is expected to print.

use adapters_allocator_commands::{Dispatcher, SessionSummary};
use usecases_memory_management::Partition;

fn session(total: usize, script: &str) -> (String, SessionSummary, Partition) {
    let mut dispatcher = Dispatcher::new(Partition::new(total).unwrap(), Vec::new());
    let summary = dispatcher.run(script.as_bytes(), None).unwrap();
    let (partition, out) = dispatcher.into_parts();
    (String::from_utf8(out).unwrap(), summary, partition)
}

#[test]
fn test_end_to_end_transcript() {
    let (out, summary, partition) = session(100, "RQ P1 30 F\nRQ P2 20 B\nRL P1\nSTAT\nX\n");
    assert_eq!(
        out,
        "available space left: 80\n\
         Addresses [0 : 29] Process Unused\n\
         Addresses [30 : 49] Process P2\n\
         Addresses [50 : 99] Process Unused\n"
    );
    assert!(summary.exited);
    assert_eq!(summary.rejected, 0);
    assert_eq!(partition.check_invariants(), Ok(()));
}

#[test]
fn test_compaction_transcript() {
    let script = "RQ P1 10 F\nRQ P2 10 F\nRQ P3 10 F\nRL P2\nC\nSTAT\n";
    let (out, summary, _) = session(40, script);
    assert_eq!(
        out,
        "available space left: 20\n\
         Addresses [0 : 9] Process P1\n\
         Addresses [10 : 19] Process P3\n\
         Addresses [20 : 39] Process Unused\n"
    );
    assert!(!summary.exited);
}

#[test]
fn test_strategies_through_commands() {
    // Holes of 10, 4 and 20 at increasing addresses
    let setup = "RQ h1 10 F\nRQ A 1 F\nRQ h2 4 F\nRQ B 1 F\nRQ h3 20 F\nRL h1\nRL h2\nRL h3\n";
    for (code, start) in [("F", 0), ("B", 11), ("W", 16)] {
        let script = format!("{}RQ P1 4 {}\n", setup, code);
        let (_, _, partition) = session(36, &script);
        assert_eq!(
            partition.find("P1").map(|seg| seg.start()),
            Some(start),
            "strategy {}",
            code
        );
    }
}

#[test]
fn test_error_transcript() {
    let script = "RQ P1 60 F\nRQ P1 5 F\nRQ P2 60 W\nRL P9\nRQ P3 5 X\nHELLO\nRQ P3\n";
    let (out, summary, partition) = session(100, script);
    assert_eq!(
        out,
        "Process P1 already in memory. Try again\n\
         There is no space to place process P2, of 60 bytes\n\
         There is no process P9 in memory\n\
         Choose between best_fit, worst_fit, and first_fit. Try again\n\
         This command is not recognized, try again\n\
         Usage: RQ <process> <size> <F|B|W>\n"
    );
    assert_eq!(summary.commands, 7);
    assert_eq!(summary.rejected, 6);
    assert_eq!(partition.free_total(), 40);
}

#[test]
fn test_duplicate_owner_wins_over_bad_strategy() {
    let (out, summary, partition) = session(100, "RQ P1 10 F\nRQ P1 10 Z\n");
    assert_eq!(out, "Process P1 already in memory. Try again\n");
    assert_eq!(summary.rejected, 1);
    assert_eq!(partition.free_total(), 90);
}

#[test]
fn test_invalid_utf8_line_is_rejected_alone() {
    let mut dispatcher = Dispatcher::new(Partition::new(100).unwrap(), Vec::new());
    let input: &[u8] = b"RQ P1 10 F\n\xff\nSTAT\n";
    let summary = dispatcher.run(input, None).unwrap();
    let (_, out) = dispatcher.into_parts();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "This command is not recognized, try again\n\
         available space left: 90\n\
         Addresses [0 : 9] Process P1\n\
         Addresses [10 : 99] Process Unused\n"
    );
    assert_eq!(summary.commands, 3);
    assert_eq!(summary.rejected, 1);
}

#[test]
fn test_stat_on_fresh_partition() {
    let (out, _, _) = session(1, "STAT\n");
    assert_eq!(out, "available space left: 1\nAddresses [0 : 0] Process Unused\n");
}

#[test]
fn test_exit_stops_reading() {
    let (out, summary, partition) = session(10, "X\nRQ P1 5 F\nSTAT\n");
    assert_eq!(out, "");
    assert_eq!(summary.commands, 1);
    assert!(summary.exited);
    assert_eq!(partition.free_total(), 10);
}
