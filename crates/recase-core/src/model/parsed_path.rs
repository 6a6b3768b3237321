/// Filename eligibility and stem/extension splitting.
///
/// Only names that start like an identifier (`[A-Za-z0-9_]`) are renamed.
/// That rules out dotfiles such as `.gitignore` as well as scratch names
/// like `-tmp` or `#notes#`.
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Where the extension starts in a multi-dot filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExtensionRule {
    /// `archive.tar.gz` → `archive.tar` + `.gz`.
    #[default]
    LastDot,
    /// `archive.tar.gz` → `archive` + `.tar.gz`.
    FirstDot,
}

impl ExtensionRule {
    pub fn label(self) -> &'static str {
        match self {
            Self::LastDot => "last",
            Self::FirstDot => "first",
        }
    }
}

impl fmt::Display for ExtensionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ExtensionRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "last" => Ok(Self::LastDot),
            "first" => Ok(Self::FirstDot),
            other => Err(format!(
                "unknown extension rule \"{other}\", expected \"last\" or \"first\""
            )),
        }
    }
}

/// Whether a filename should be considered for renaming at all.
pub fn is_eligible(file_name: &str) -> bool {
    file_name
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Split a filename into `(stem, extension)` under `rule`.
///
/// The extension keeps its leading dot. No dot means an empty extension.
pub fn split_name(file_name: &str, rule: ExtensionRule) -> (&str, &str) {
    let dot = match rule {
        ExtensionRule::LastDot => file_name.rfind('.'),
        ExtensionRule::FirstDot => file_name.find('.'),
    };
    match dot {
        Some(i) => file_name.split_at(i),
        None => (file_name, ""),
    }
}

/// An eligible file, decomposed for renaming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPath {
    pub directory: PathBuf,
    pub stem: String,
    pub extension: String,
}

impl ParsedPath {
    /// Parse `path` if its filename is eligible.
    ///
    /// Returns `None` for ineligible names, names that are not valid UTF-8,
    /// and paths without a filename component.
    pub fn parse(path: &Path, rule: ExtensionRule) -> Option<Self> {
        let file_name = path.file_name()?.to_str()?;
        if !is_eligible(file_name) {
            return None;
        }
        let directory = path.parent()?.to_path_buf();
        let (stem, extension) = split_name(file_name, rule);
        Some(Self {
            directory,
            stem: stem.to_string(),
            extension: extension.to_string(),
        })
    }

    pub fn file_name(&self) -> String {
        format!("{}{}", self.stem, self.extension)
    }

    pub fn full_path(&self) -> PathBuf {
        self.directory.join(self.file_name())
    }
}
