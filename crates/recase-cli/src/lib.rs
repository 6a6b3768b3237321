/// recase command-line frontend.
///
/// Parses arguments and drives a run through `recase-core`. The binary in
/// the workspace root is a thin wrapper around [`app::run`].
pub mod app;
pub mod args;

pub use app::{run, RunOutcome};
pub use args::RecaseArgs;
