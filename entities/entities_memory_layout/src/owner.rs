//! Owner Labels
//!
//! Every segment of the address space is either free or owned by exactly one
//! named process. Process names are opaque tokens chosen by the caller; the
//! only thing the partition cares about is equality.

use std::borrow::Borrow;
use std::fmt;

/// Label reported for segments that belong to no process
pub const FREE_LABEL: &str = "Unused";

/// Name of a process that owns memory
///
/// Names are compared exactly (case-sensitive). Length and character checks
/// are the caller's business; this type accepts any string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProcessName(String);

impl ProcessName {
    /// Create a process name from anything string-like
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Borrow the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProcessName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProcessName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ProcessName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl AsRef<str> for ProcessName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ProcessName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Who a segment belongs to
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Owner {
    /// The segment is a hole
    Free,
    /// The segment is allocated to a process
    Process(ProcessName),
}

impl Owner {
    /// Check if this owner marks a hole
    pub fn is_free(&self) -> bool {
        matches!(self, Owner::Free)
    }

    /// Get the owning process, if any
    pub fn process(&self) -> Option<&ProcessName> {
        match self {
            Owner::Free => None,
            Owner::Process(name) => Some(name),
        }
    }

    /// Check if this owner is the process with the given name
    pub fn is_process(&self, name: &str) -> bool {
        self.process().is_some_and(|p| p.as_str() == name)
    }

    /// Label used when listing segments: the process name, or
    /// [`FREE_LABEL`] for holes
    pub fn label(&self) -> &str {
        match self {
            Owner::Free => FREE_LABEL,
            Owner::Process(name) => name.as_str(),
        }
    }
}

impl From<ProcessName> for Owner {
    fn from(name: ProcessName) -> Self {
        Owner::Process(name)
    }
}
