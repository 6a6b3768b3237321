/// The renamer — applies a case function to a stem and renames the file.
///
/// Collisions are not guarded: if the converted name already exists, the
/// platform's `rename` semantics decide (replace on Unix, error on Windows).
use crate::case::CaseFunction;
use crate::error::EntryError;
use crate::model::{EntryOutcome, ParsedPath};
use std::fs;
use tracing::debug;

/// Compute the converted filename without touching the filesystem.
pub fn converted_name(parsed: &ParsedPath, case_fn: &CaseFunction) -> String {
    format!("{}{}", case_fn(&parsed.stem), parsed.extension)
}

/// Rename one file into its converted name.
pub fn rename(parsed: &ParsedPath, case_fn: &CaseFunction) -> EntryOutcome {
    let from = parsed.full_path();
    let new_name = converted_name(parsed, case_fn);

    if new_name == parsed.file_name() {
        return EntryOutcome::Unchanged { path: from };
    }

    let to = parsed.directory.join(&new_name);
    match fs::rename(&from, &to) {
        Ok(()) => {
            debug!("Renamed {} -> {}", from.display(), to.display());
            EntryOutcome::Renamed { from, to }
        }
        Err(source) => EntryOutcome::Failed(EntryError::Rename { from, to, source }),
    }
}
