//! recase — bulk-rename files to match a case.
//!
//! Thin binary entry point. All logic lives in the `recase-core`
//! and `recase-cli` crates.

use recase_cli::RecaseArgs;
use recase_core::CaseRegistry;
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    let args = match RecaseArgs::try_parse_env() {
        Ok(args) => args,
        Err(err) => {
            // Help and version go to stdout and succeed; usage errors fail.
            err.print()?;
            return Ok(if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            });
        }
    };

    // Initialise structured logging on stderr, quiet unless asked.
    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let registry = CaseRegistry::builtin();
    let outcome = recase_cli::run(&args, &registry, &mut std::io::stderr())?;

    Ok(ExitCode::from(outcome.exit_code()))
}
