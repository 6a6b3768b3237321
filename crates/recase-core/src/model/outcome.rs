/// Per-entry outcomes and the aggregated report for a run.
///
/// Every entry the walker visits produces exactly one [`EntryOutcome`].
/// Failures are values here, never panics or early returns, so one bad file
/// cannot hide the results of its siblings.
use crate::error::EntryError;
use std::path::PathBuf;
use std::time::Duration;

/// Why an entry was left alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Filename does not start with `[A-Za-z0-9_]`.
    Ineligible,
    /// Filename is not valid UTF-8 and cannot be case-converted.
    NonUtf8Name,
    /// A directory encountered without `--recursive`.
    Directory,
    /// A symbolic link pointing at a directory. Never followed.
    SymlinkedDirectory,
    /// Neither a regular file nor a directory (socket, FIFO, device).
    Special,
}

/// The result of processing one directory entry.
#[derive(Debug)]
pub enum EntryOutcome {
    Renamed { from: PathBuf, to: PathBuf },
    /// The converted name equals the current one; no syscall was issued.
    Unchanged { path: PathBuf },
    Skipped { path: PathBuf, reason: SkipReason },
    Failed(EntryError),
}

impl EntryOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Fan-in of every entry outcome in a run.
#[derive(Debug, Default)]
pub struct WalkReport {
    pub outcomes: Vec<EntryOutcome>,
    pub duration: Duration,
}

impl WalkReport {
    pub fn new(outcomes: Vec<EntryOutcome>, duration: Duration) -> Self {
        Self { outcomes, duration }
    }

    pub fn renamed_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, EntryOutcome::Renamed { .. }))
            .count()
    }

    pub fn unchanged_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, EntryOutcome::Unchanged { .. }))
            .count()
    }

    pub fn skipped_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, EntryOutcome::Skipped { .. }))
            .count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &EntryError> {
        self.outcomes.iter().filter_map(|o| match o {
            EntryOutcome::Failed(err) => Some(err),
            _ => None,
        })
    }

    pub fn error_count(&self) -> usize {
        self.failures().count()
    }

    pub fn has_failures(&self) -> bool {
        self.outcomes.iter().any(EntryOutcome::is_failure)
    }
}
