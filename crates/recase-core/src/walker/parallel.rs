/// Parallel directory walker.
///
/// Each directory level is one rayon parallel iterator over its entries.
/// A subdirectory branch recurses from inside that iterator, so a level is
/// only finished once every descendant level has finished. Branches never
/// cancel each other: every entry yields an [`EntryOutcome`] and the
/// outcomes are concatenated on the way back up.
///
/// Only three kinds of filesystem call are used: `read_dir` for names,
/// `symlink_metadata`/`metadata` to classify, and `rename`. A link to a file
/// is renamed like a file; a link to a directory is never descended into, so
/// every directory under the root is listed by exactly one task.
use crate::case::CaseFunction;
use crate::error::{EntryError, RecaseError};
use crate::model::{EntryOutcome, ExtensionRule, ParsedPath, SkipReason, WalkReport};
use crate::renamer;
use crate::walker::progress::RecaseProgress;
use crossbeam_channel::Sender;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::debug;

/// Behaviour switches for a walk.
#[derive(Debug, Clone, Copy, Default)]
pub struct WalkOptions {
    /// Descend into subdirectories.
    pub recursive: bool,
    /// How filenames are split into stem and extension.
    pub extension_rule: ExtensionRule,
}

/// Walks a directory tree and renames eligible files with one case function.
pub struct Walker {
    case_fn: CaseFunction,
    options: WalkOptions,
    progress_tx: Option<Sender<RecaseProgress>>,
}

impl Walker {
    pub fn new(case_fn: CaseFunction, options: WalkOptions) -> Self {
        Self {
            case_fn,
            options,
            progress_tx: None,
        }
    }

    /// Stream renames and per-entry errors to `tx` as they happen.
    pub fn with_progress(mut self, tx: Sender<RecaseProgress>) -> Self {
        self.progress_tx = Some(tx);
        self
    }

    pub fn options(&self) -> WalkOptions {
        self.options
    }

    /// Walk `root` and return every entry outcome.
    ///
    /// Only a failure to list `root` itself is an error here; everything
    /// below it is reported per entry.
    pub fn walk(&self, root: &Path) -> Result<WalkReport, RecaseError> {
        let start = Instant::now();
        let listing = fs::read_dir(root).map_err(|source| RecaseError::ReadRoot {
            path: root.to_path_buf(),
            source,
        })?;
        let outcomes = self.process_listing(root, listing);

        let report = WalkReport::new(outcomes, start.elapsed());
        debug!(
            "Walk of {} complete: {} renamed, {} unchanged, {} skipped, {} errors in {:?}",
            root.display(),
            report.renamed_count(),
            report.unchanged_count(),
            report.skipped_count(),
            report.error_count(),
            report.duration
        );
        Ok(report)
    }

    fn walk_directory(&self, dir: &Path) -> Vec<EntryOutcome> {
        match fs::read_dir(dir) {
            Ok(listing) => self.process_listing(dir, listing),
            Err(source) => vec![self.record(EntryOutcome::Failed(EntryError::ReadDir {
                path: dir.to_path_buf(),
                source,
            }))],
        }
    }

    /// Fan out over one directory level and fan the outcomes back in.
    fn process_listing(&self, dir: &Path, listing: fs::ReadDir) -> Vec<EntryOutcome> {
        debug!("Entering {}", dir.display());

        let mut outcomes = Vec::new();
        let mut paths: Vec<PathBuf> = Vec::new();
        for entry in listing {
            match entry {
                Ok(entry) => paths.push(entry.path()),
                Err(source) => {
                    outcomes.push(self.record(EntryOutcome::Failed(EntryError::ReadDir {
                        path: dir.to_path_buf(),
                        source,
                    })))
                }
            }
        }

        let branches: Vec<EntryOutcome> = paths
            .par_iter()
            .flat_map_iter(|path| self.process_entry(path))
            .collect();
        outcomes.extend(branches);
        outcomes
    }

    fn process_entry(&self, path: &Path) -> Vec<EntryOutcome> {
        let metadata_failure = |source| {
            vec![self.record(EntryOutcome::Failed(EntryError::Metadata {
                path: path.to_path_buf(),
                source,
            }))]
        };

        // Links are followed to classify, never to recurse.
        let meta = match fs::symlink_metadata(path) {
            Ok(meta) => meta,
            Err(source) => return metadata_failure(source),
        };
        let is_link = meta.file_type().is_symlink();
        let meta = if is_link {
            match fs::metadata(path) {
                Ok(target) => target,
                Err(source) => return metadata_failure(source),
            }
        } else {
            meta
        };

        let skipped = |reason| {
            vec![EntryOutcome::Skipped {
                path: path.to_path_buf(),
                reason,
            }]
        };

        if meta.is_file() {
            vec![self.record(self.process_file(path))]
        } else if meta.is_dir() {
            if is_link {
                debug!("Not following directory link {}", path.display());
                skipped(SkipReason::SymlinkedDirectory)
            } else if self.options.recursive {
                self.walk_directory(path)
            } else {
                skipped(SkipReason::Directory)
            }
        } else {
            skipped(SkipReason::Special)
        }
    }

    fn process_file(&self, path: &Path) -> EntryOutcome {
        match ParsedPath::parse(path, self.options.extension_rule) {
            Some(parsed) => renamer::rename(&parsed, &self.case_fn),
            None => {
                let reason = match path.file_name().map(|n| n.to_str().is_some()) {
                    Some(false) => SkipReason::NonUtf8Name,
                    _ => SkipReason::Ineligible,
                };
                debug!("Skipping {} ({reason:?})", path.display());
                EntryOutcome::Skipped {
                    path: path.to_path_buf(),
                    reason,
                }
            }
        }
    }

    /// Forward renames and failures to the progress channel, if any.
    fn record(&self, outcome: EntryOutcome) -> EntryOutcome {
        if let Some(tx) = &self.progress_tx {
            let msg = match &outcome {
                EntryOutcome::Renamed { from, to } => Some(RecaseProgress::Renamed {
                    from: from.clone(),
                    to: to.clone(),
                }),
                EntryOutcome::Failed(err) => Some(RecaseProgress::Error {
                    path: err.path().clone(),
                    message: err.to_string(),
                }),
                _ => None,
            };
            if let Some(msg) = msg {
                let _ = tx.send(msg);
            }
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::case::CaseRegistry;
    use tempfile::TempDir;

    fn walker(case: &str, recursive: bool) -> Walker {
        let case_fn = CaseRegistry::builtin().resolve(case).unwrap();
        Walker::new(
            case_fn,
            WalkOptions {
                recursive,
                ..Default::default()
            },
        )
    }

    #[test]
    fn directories_are_skipped_without_recursion() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("SubDir")).unwrap();
        fs::write(tmp.path().join("SubDir").join("InnerFile.txt"), b"").unwrap();

        let report = walker("snake", false).walk(tmp.path()).unwrap();
        assert_eq!(report.renamed_count(), 0);
        assert!(tmp.path().join("SubDir").join("InnerFile.txt").exists());
        assert!(report.outcomes.iter().any(|o| matches!(
            o,
            EntryOutcome::Skipped {
                reason: SkipReason::Directory,
                ..
            }
        )));
    }

    #[test]
    fn directory_names_are_never_renamed() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("SubDir")).unwrap();
        fs::write(tmp.path().join("SubDir").join("InnerFile.txt"), b"").unwrap();

        let report = walker("snake", true).walk(tmp.path()).unwrap();
        assert_eq!(report.renamed_count(), 1);
        assert!(tmp.path().join("SubDir").join("inner_file.txt").exists());
    }

    #[test]
    fn unreadable_root_is_fatal() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("nope");
        assert!(matches!(
            walker("kebab", false).walk(&missing),
            Err(RecaseError::ReadRoot { .. })
        ));
    }

    #[test]
    fn progress_channel_receives_renames() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("FirstFile.md"), b"").unwrap();
        fs::write(tmp.path().join("second-file.md"), b"").unwrap();

        let (tx, rx) = crossbeam_channel::unbounded();
        let report = walker("kebab", false)
            .with_progress(tx)
            .walk(tmp.path())
            .unwrap();

        assert_eq!(report.renamed_count(), 1);
        assert_eq!(report.unchanged_count(), 1);
        let msgs: Vec<RecaseProgress> = rx.try_iter().collect();
        assert_eq!(msgs.len(), 1);
        assert!(matches!(
            &msgs[0],
            RecaseProgress::Renamed { to, .. } if to.ends_with("first-file.md")
        ));
    }
}
