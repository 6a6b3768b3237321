/// Walker module — orchestrates a recase run.
///
/// The walk runs on a background thread inside a dedicated rayon pool.
/// Renames and per-entry errors stream back over a bounded channel while the
/// walk is in progress; the last message is either `Complete` with the full
/// report or `Failed` when the root could not be listed.
pub mod parallel;
pub mod progress;

pub use parallel::{WalkOptions, Walker};
use progress::RecaseProgress;

use crossbeam_channel::Receiver;
use std::path::PathBuf;
use std::thread;
use tracing::{info, warn};

/// Maximum number of progress messages that may queue up in the channel.
///
/// Workers block on `send` once the frontend falls this far behind, which
/// keeps memory bounded on trees with millions of files.
pub const PROGRESS_CHANNEL_CAPACITY: usize = 4_096;

/// Default worker count: one per logical CPU.
pub fn default_jobs() -> usize {
    num_cpus::get()
}

/// Handle to a running or completed walk.
pub struct RecaseHandle {
    /// Receiver for progress updates from the walker thread.
    ///
    /// Disconnects once the walker thread has exited, so iterating it
    /// terminates after the final `Complete` or `Failed` message.
    pub progress_rx: Receiver<RecaseProgress>,
    /// Join handle for the walker thread.
    _thread: Option<thread::JoinHandle<()>>,
}

/// Start a walk of `root` on a background thread using `jobs` workers.
pub fn start_recase(root: PathBuf, walker: Walker, jobs: usize) -> RecaseHandle {
    let (progress_tx, progress_rx) =
        crossbeam_channel::bounded::<RecaseProgress>(PROGRESS_CHANNEL_CAPACITY);
    let walker = walker.with_progress(progress_tx.clone());

    let thread = thread::Builder::new()
        .name("recase-walker".into())
        .spawn(move || {
            let options = walker.options();
            info!(
                "Starting recase of {} (recursive: {}, extension rule: {}, jobs: {})",
                root.display(),
                options.recursive,
                options.extension_rule,
                jobs
            );

            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(jobs.max(1))
                .thread_name(|i| format!("recase-worker-{i}"))
                .build();
            let result = match pool {
                Ok(pool) => pool.install(|| walker.walk(&root)),
                Err(err) => {
                    warn!("Could not build worker pool ({err}), using the global pool");
                    walker.walk(&root)
                }
            };

            let msg = match result {
                Ok(report) => {
                    info!(
                        "Recase complete: {} renamed, {} errors in {:?}",
                        report.renamed_count(),
                        report.error_count(),
                        report.duration
                    );
                    RecaseProgress::Complete(report)
                }
                Err(err) => RecaseProgress::Failed(err),
            };
            let _ = progress_tx.send(msg);
        })
        .expect("failed to spawn walker thread");

    RecaseHandle {
        progress_rx,
        _thread: Some(thread),
    }
}
