/// Command-line arguments.
///
/// `case` and `path` are optional at the clap level so that missing or
/// unknown values are reported by pre-flight validation with recase's own
/// messages (which list the valid case names).
use clap::{Arg, ArgAction, Command, CommandFactory, FromArgMatches, Parser};
use recase_core::walker::default_jobs;
use recase_core::{ExtensionRule, WalkOptions};
use std::ffi::OsString;
use std::path::PathBuf;

/// Bulk-rename files to match a case, keeping their extensions.
#[derive(Parser, Debug, Clone)]
#[command(name = "recase")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(disable_version_flag = true)]
#[command(after_help = "Cases: lower, upper, camel, pascal, kebab, snake, train")]
pub struct RecaseArgs {
    /// Target case
    #[arg(value_name = "CASE")]
    pub case: Option<String>,

    /// Directory whose files are renamed
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Descend into subdirectories
    #[arg(short, long)]
    pub recursive: bool,

    /// Where the extension starts in multi-dot names: "last" (archive.tar + .gz)
    /// or "first" (archive + .tar.gz)
    #[arg(long = "extension", value_name = "RULE", default_value = "last")]
    pub extension_rule: ExtensionRule,

    /// Number of worker threads [default: one per CPU]
    #[arg(short, long, value_name = "N", value_parser = parse_jobs)]
    pub jobs: Option<usize>,

    /// Log every rename and other diagnostics to stderr
    #[arg(long)]
    pub verbose: bool,
}

/// The derived command plus `-v/--version` in place of clap's `-V`.
pub fn build_command() -> Command {
    RecaseArgs::command().arg(
        Arg::new("version")
            .short('v')
            .long("version")
            .help("Print version")
            .action(ArgAction::Version),
    )
}

fn parse_jobs(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

impl RecaseArgs {
    /// Parse from an explicit argument list (first item is the binary name).
    pub fn try_parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = build_command().try_get_matches_from(args)?;
        Self::from_arg_matches(&matches)
    }

    /// Parse from the process arguments.
    pub fn try_parse_env() -> Result<Self, clap::Error> {
        Self::try_parse_args(std::env::args_os())
    }

    pub fn walk_options(&self) -> WalkOptions {
        WalkOptions {
            recursive: self.recursive,
            extension_rule: self.extension_rule,
        }
    }

    pub fn jobs(&self) -> usize {
        self.jobs.unwrap_or_else(default_jobs)
    }
}
