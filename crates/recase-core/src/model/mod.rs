/// Data model for a recase run.
///
/// Re-exports the filename splitting types and the per-entry outcome types.
pub mod outcome;
pub mod parsed_path;

pub use outcome::{EntryOutcome, SkipReason, WalkReport};
pub use parsed_path::{is_eligible, split_name, ExtensionRule, ParsedPath};
