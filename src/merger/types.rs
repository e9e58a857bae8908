//! Merge policies and results.

use serde::{
    Deserialize,
    Serialize,
};

use super::error::MergeError;
use crate::types::LocaleCode;

/// Order of top-level keys when a document is written back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum KeyOrder {
    /// Sort all keys lexicographically.
    #[default]
    Sorted,
    /// Keep the order read from disk; new keys are appended in table order.
    Preserve,
}

/// What to do when a locale document does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MissingFilePolicy {
    /// Report [`MergeError::NotFound`] for that locale.
    #[default]
    Fail,
    /// Start from an empty document and create the file.
    Create,
}

/// Outcome of one merge pass over a single locale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeResult {
    /// Keys inserted by this pass, in table order.
    pub added: Vec<String>,
    /// Keys already present; their values were left untouched.
    pub skipped: Vec<String>,
    /// Keys the table has no value for in this locale.
    pub untranslated: Vec<String>,
    /// Whether the document was written back to disk.
    pub written: bool,
}

impl MergeResult {
    #[must_use]
    pub fn added_count(&self) -> usize {
        self.added.len()
    }

    #[must_use]
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}

/// Result of merging a table into one locale, as recorded by `merge_all`.
#[derive(Debug)]
pub struct LocaleOutcome {
    pub locale: LocaleCode,
    pub result: Result<MergeResult, MergeError>,
}

/// Aggregate of a `merge_all` run, one outcome per locale in processing order.
#[derive(Debug, Default)]
pub struct Summary {
    pub outcomes: Vec<LocaleOutcome>,
}

impl Summary {
    /// Total number of keys added across all locales.
    #[must_use]
    pub fn added_count(&self) -> usize {
        self.successes().map(|(_, result)| result.added_count()).sum()
    }

    /// Keys newly added to `locale`, or `None` if the locale was not processed
    /// or failed.
    #[must_use]
    pub fn added_keys(&self, locale: &LocaleCode) -> Option<&[String]> {
        self.successes()
            .find(|(code, _)| *code == locale)
            .map(|(_, result)| result.added.as_slice())
    }

    pub fn successes(&self) -> impl Iterator<Item = (&LocaleCode, &MergeResult)> {
        self.outcomes
            .iter()
            .filter_map(|outcome| outcome.result.as_ref().ok().map(|r| (&outcome.locale, r)))
    }

    pub fn failures(&self) -> impl Iterator<Item = (&LocaleCode, &MergeError)> {
        self.outcomes
            .iter()
            .filter_map(|outcome| outcome.result.as_ref().err().map(|e| (&outcome.locale, e)))
    }

    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failure_count() == 0
    }
}
