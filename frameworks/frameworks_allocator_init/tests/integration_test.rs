//! Integration tests for frameworks_allocator_init
//!
//! Runs complete sessions from argument parsing through teardown, with
//! commands coming from script files on disk.

use std::io::Write;

use clap::Parser;
use frameworks_allocator_init::{open_input, run_session, AllocatorArgs, ConfigError, SessionError};
use tempfile::NamedTempFile;

fn script(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_script_session() {
    let file = script("RQ P1 30 F\nRQ P2 20 B\nRL P1\nSTAT\nX\n");
    let path = file.path().to_str().unwrap();
    let config = AllocatorArgs::parse_from(["allocator", "100", "--script", path]).into_config();
    config.validate().unwrap();

    let mut out = Vec::new();
    let outcome = run_session(&config, open_input(&config).unwrap(), &mut out).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "available space left: 80\n\
         Addresses [0 : 29] Process Unused\n\
         Addresses [30 : 49] Process P2\n\
         Addresses [50 : 99] Process Unused\n"
    );
    assert!(outcome.summary.exited);
    assert_eq!(outcome.released_at_exit, 1);
}

#[test]
fn test_script_without_exit_ends_at_eof() {
    let file = script("RQ A 10 W\nRQ B 10 W\nC\n");
    let path = file.path().to_str().unwrap();
    let config = AllocatorArgs::parse_from(["allocator", "64", "--script", path]).into_config();

    let mut out = Vec::new();
    let outcome = run_session(&config, open_input(&config).unwrap(), &mut out).unwrap();
    assert!(!outcome.summary.exited);
    assert_eq!(outcome.summary.commands, 3);
    assert_eq!(outcome.released_at_exit, 2);
}

#[test]
fn test_interactive_prompt() {
    let config = AllocatorArgs::parse_from(["allocator", "10"]).into_config();
    let mut out = Vec::new();
    run_session(&config, "STAT\nX\n".as_bytes(), &mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "allocator>available space left: 10\n\
         Addresses [0 : 9] Process Unused\n\
         allocator>"
    );
}

#[test]
fn test_zero_size_rejected() {
    let config = AllocatorArgs::parse_from(["allocator", "0", "--quiet-prompt"]).into_config();
    assert_eq!(config.validate(), Err(ConfigError::ZeroSize));
    let err = run_session(&config, "X\n".as_bytes(), Vec::new()).unwrap_err();
    assert!(matches!(err, SessionError::Config(ConfigError::ZeroSize)));
}

#[test]
fn test_deleted_script_rejected() {
    let file = script("STAT\n");
    let path = file.path().to_path_buf();
    drop(file);

    let config = AllocatorArgs::parse_from(["allocator", "10", "--script", path.to_str().unwrap()])
        .into_config();
    assert_eq!(config.validate(), Err(ConfigError::ScriptNotFound(path)));
    assert!(matches!(open_input(&config), Err(SessionError::OpenScript { .. })));
}
