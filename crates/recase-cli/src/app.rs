/// Run orchestration — validate, start the walk, report.
///
/// All user-facing messages go to the supplied error writer (stderr in the
/// binary). Nothing is written to stdout on a successful run.
use crate::args::RecaseArgs;
use recase_core::preflight;
use recase_core::walker::progress::RecaseProgress;
use recase_core::{start_recase, CaseRegistry, RecaseError, WalkReport, Walker};
use std::io::Write;

/// How a run ended.
#[derive(Debug)]
pub enum RunOutcome {
    /// The walk ran to completion. Per-entry failures may be inside.
    Completed(WalkReport),
    /// Validation failed or the root could not be listed; nothing was renamed.
    Aborted(RecaseError),
}

impl RunOutcome {
    /// `0` for a clean run, `1` for a fatal error or any per-entry failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Completed(report) if !report.has_failures() => 0,
            _ => 1,
        }
    }
}

/// Run one recase invocation end to end.
///
/// Per-entry errors are written as they arrive. The returned error is only
/// for failures writing to `err_out` itself.
pub fn run<W: Write>(
    args: &RecaseArgs,
    registry: &CaseRegistry,
    err_out: &mut W,
) -> anyhow::Result<RunOutcome> {
    let target = match preflight::validate(registry, args.case.as_deref(), args.path.as_deref()) {
        Ok(target) => target,
        Err(err) => {
            writeln!(err_out, "recase: {err}")?;
            return Ok(RunOutcome::Aborted(err));
        }
    };

    let walker = Walker::new(target.case_fn, args.walk_options());
    let handle = start_recase(target.root, walker, args.jobs());

    let mut outcome = None;
    for msg in handle.progress_rx.iter() {
        match msg {
            // Logged by the renamer itself under --verbose.
            RecaseProgress::Renamed { .. } => {}
            RecaseProgress::Error { message, .. } => {
                writeln!(err_out, "recase: {message}")?;
            }
            RecaseProgress::Complete(report) => {
                if report.has_failures() {
                    writeln!(
                        err_out,
                        "recase: {} of {} entries failed",
                        report.error_count(),
                        report.outcomes.len()
                    )?;
                }
                outcome = Some(RunOutcome::Completed(report));
            }
            RecaseProgress::Failed(err) => {
                writeln!(err_out, "recase: {err}")?;
                outcome = Some(RunOutcome::Aborted(err));
            }
        }
    }

    outcome.ok_or_else(|| anyhow::anyhow!("walker thread exited without a result"))
}
