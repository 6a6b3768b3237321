/// recase core — case registry, filename splitting, walking and renaming.
///
/// This crate contains all business logic with zero CLI dependencies.
/// It is designed to be reusable across different frontends.
///
/// # Modules
///
/// - [`case`] — Registry of named case conversion functions.
/// - [`model`] — Filename eligibility and splitting, per-entry outcomes.
/// - [`renamer`] — Applies a case function to one file and renames it.
/// - [`walker`] — Parallel directory walk with progress reporting.
/// - [`preflight`] — Validation that runs before any rename.
/// - [`platform`] — Directory access checks.
/// - [`error`] — Fatal and per-entry error types.
pub mod case;
pub mod error;
pub mod model;
pub mod platform;
pub mod preflight;
pub mod renamer;
pub mod walker;

pub use case::{CaseFunction, CaseRegistry, CASE_NAMES};
pub use error::{EntryError, RecaseError};
pub use model::{EntryOutcome, ExtensionRule, ParsedPath, SkipReason, WalkReport};
pub use walker::{start_recase, RecaseHandle, WalkOptions, Walker};
