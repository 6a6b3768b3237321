/// Run progress reporting — lightweight messages sent from the walker
/// to the frontend via a crossbeam channel.
use crate::error::RecaseError;
use crate::model::WalkReport;
use std::path::PathBuf;

/// Progress updates sent from the walker thread to the frontend.
#[derive(Debug)]
pub enum RecaseProgress {
    /// One file was renamed.
    Renamed { from: PathBuf, to: PathBuf },
    /// A non-fatal error (e.g. permission denied on one file).
    Error { path: PathBuf, message: String },
    /// The walk finished. Carries every entry outcome.
    Complete(WalkReport),
    /// The walk could not start (root directory unreadable).
    Failed(RecaseError),
}
