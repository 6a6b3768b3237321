/// Pre-flight validation — every check that must pass before the first
/// rename, in the order users see the failures.
use crate::case::{CaseFunction, CaseRegistry};
use crate::error::RecaseError;
use crate::platform;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A case function and an absolute, accessible root directory.
pub struct ValidatedTarget {
    pub case_fn: CaseFunction,
    pub root: PathBuf,
}

/// Validate the raw case name and path.
///
/// 1. case supplied and registered
/// 2. path supplied
/// 3. path exists
/// 4. path is a directory
/// 5. path is readable and writable by the current user
pub fn validate(
    registry: &CaseRegistry,
    case_name: Option<&str>,
    path: Option<&Path>,
) -> Result<ValidatedTarget, RecaseError> {
    let case_name = case_name.ok_or(RecaseError::MissingCase)?;
    let case_fn = registry.resolve(case_name)?;
    let path = path.ok_or(RecaseError::MissingPath)?;

    let meta = fs::metadata(path).map_err(|_| RecaseError::PathNotFound {
        path: path.to_path_buf(),
    })?;
    if !meta.is_dir() {
        return Err(RecaseError::NotADirectory {
            path: path.to_path_buf(),
        });
    }

    platform::check_access(path).map_err(|source| RecaseError::AccessDenied {
        path: path.to_path_buf(),
        source,
    })?;

    let root = fs::canonicalize(path).map_err(|source| RecaseError::AccessDenied {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Validated target {} with case {case_name}", root.display());

    Ok(ValidatedTarget { case_fn, root })
}
