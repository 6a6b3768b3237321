/// Case conversion — the registry of named case functions.
///
/// The registry is built once at startup and handed to the walker, so tests
/// can substitute their own functions and assert on exact inputs.
use crate::error::RecaseError;
use heck::{ToKebabCase, ToLowerCamelCase, ToSnakeCase, ToTrainCase, ToUpperCamelCase};
use std::fmt;
use std::sync::Arc;

/// A pure, total `&str -> String` transformation.
///
/// `Arc` so one registry entry can be shared by every worker thread.
pub type CaseFunction = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Built-in case names, in the order they are listed to users.
pub const CASE_NAMES: [&str; 7] = ["lower", "upper", "camel", "pascal", "kebab", "snake", "train"];

fn to_lower(s: &str) -> String {
    s.to_lowercase()
}

fn to_upper(s: &str) -> String {
    s.to_uppercase()
}

fn to_camel(s: &str) -> String {
    s.to_lower_camel_case()
}

fn to_pascal(s: &str) -> String {
    s.to_upper_camel_case()
}

fn to_kebab(s: &str) -> String {
    s.to_kebab_case()
}

fn to_snake(s: &str) -> String {
    s.to_snake_case()
}

fn to_train(s: &str) -> String {
    s.to_train_case()
}

/// Immutable mapping from case-name token to [`CaseFunction`].
///
/// Lookups are linear; there are seven entries.
#[derive(Clone)]
pub struct CaseRegistry {
    entries: Vec<(String, CaseFunction)>,
}

impl CaseRegistry {
    /// The seven built-in conversions.
    pub fn builtin() -> Self {
        let fns: [fn(&str) -> String; 7] = [
            to_lower, to_upper, to_camel, to_pascal, to_kebab, to_snake, to_train,
        ];
        let entries = CASE_NAMES
            .iter()
            .zip(fns)
            .map(|(name, f)| (name.to_string(), Arc::new(f) as CaseFunction))
            .collect();
        Self { entries }
    }

    /// An empty registry, for tests that register fakes.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add or replace an entry.
    pub fn with<F>(mut self, name: &str, f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        let f: CaseFunction = Arc::new(f);
        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => entry.1 = f,
            None => self.entries.push((name.to_string(), f)),
        }
        self
    }

    /// Registered names in insertion order.
    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|(n, _)| n.clone()).collect()
    }

    pub fn get(&self, name: &str) -> Option<CaseFunction> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, f)| f.clone())
    }

    /// Resolve a case name, failing with the list of valid names.
    pub fn resolve(&self, name: &str) -> Result<CaseFunction, RecaseError> {
        self.get(name).ok_or_else(|| RecaseError::UnknownCase {
            name: name.to_string(),
            valid: self.names(),
        })
    }
}

impl Default for CaseRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl fmt::Debug for CaseRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CaseRegistry")
            .field("names", &self.names())
            .finish()
    }
}
