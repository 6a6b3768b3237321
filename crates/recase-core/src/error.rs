/// Error types for the recase engine.
///
/// Two tiers, matching how failures are handled:
/// - [`RecaseError`] — fatal, raised before any rename happens (or when the
///   root directory itself cannot be listed).
/// - [`EntryError`] — one entry failed during the walk. Collected as an
///   outcome and never propagated to siblings or parents.
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// A fatal error that stops the run.
#[derive(Debug, Error)]
pub enum RecaseError {
    #[error("try specifying the parameters: recase <case> <path>")]
    MissingCase,

    #[error("cannot use case \"{name}\", try one of the following: {}", .valid.join(", "))]
    UnknownCase { name: String, valid: Vec<String> },

    #[error("try specifying the <path> parameter: recase <case> <path>")]
    MissingPath,

    #[error("cannot find path \"{}\"", .path.display())]
    PathNotFound { path: PathBuf },

    #[error("\"{}\" is not a directory", .path.display())]
    NotADirectory { path: PathBuf },

    #[error("cannot access directory \"{}\"", .path.display())]
    AccessDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read directory \"{}\"", .path.display())]
    ReadRoot {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// What went wrong for a single entry.
#[derive(Debug, Error)]
pub enum EntryError {
    #[error("cannot stat \"{}\": {source}", .path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read directory \"{}\": {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot rename \"{}\" to \"{}\": {source}", .from.display(), .to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl EntryError {
    /// The path of the entry that failed.
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::Metadata { path, .. } | Self::ReadDir { path, .. } => path,
            Self::Rename { from, .. } => from,
        }
    }
}
