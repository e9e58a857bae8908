//! Translation table input definitions

use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;
use thiserror::Error;

use crate::types::LocaleCode;

/// Errors raised while loading a translation table file.
#[derive(Error, Debug)]
pub enum TableError {
    #[error("Failed to read table file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse table '{name}': {source}")]
    Parse {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Table '{name}' does not define any keys")]
    EmptyTable { name: String },

    #[error("Table '{name}' contains an empty translation key")]
    EmptyKey { name: String },
}

/// Layout of a table file.
///
/// Tables are written either key-major or locale-major; both are normalized
/// to key-major.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
enum TableLayout {
    /// `{ "<key>": { "<locale>": "<value>" } }`
    ByKey(IndexMap<String, IndexMap<String, String>>),
    /// `{ "<locale>": { "<key>": "<value>" } }`
    ByLocale(IndexMap<String, IndexMap<String, String>>),
}

/// On-disk representation of a table file.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TableFile {
    #[serde(default)]
    description: Option<String>,

    #[serde(flatten)]
    layout: TableLayout,
}

/// Immutable mapping of translation keys to per-locale values.
///
/// Iteration follows declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationTable {
    name: String,
    description: Option<String>,
    entries: IndexMap<String, IndexMap<String, String>>,
}

impl TranslationTable {
    /// Builds a table from key-major entries.
    ///
    /// # Errors
    /// Fails when there are no entries or a key is empty.
    pub fn new(
        name: impl Into<String>,
        entries: IndexMap<String, IndexMap<String, String>>,
    ) -> Result<Self, TableError> {
        let name = name.into();
        if entries.is_empty() {
            return Err(TableError::EmptyTable { name });
        }
        if entries.keys().any(String::is_empty) {
            return Err(TableError::EmptyKey { name });
        }
        Ok(Self { name, description: None, entries })
    }

    /// Builds a table from locale-major entries.
    ///
    /// Keys keep the order in which they first appear across locale blocks.
    ///
    /// # Errors
    /// Same as [`TranslationTable::new`].
    pub fn from_by_locale(
        name: impl Into<String>,
        by_locale: IndexMap<String, IndexMap<String, String>>,
    ) -> Result<Self, TableError> {
        let mut entries: IndexMap<String, IndexMap<String, String>> = IndexMap::new();
        for (locale, keys) in by_locale {
            for (key, value) in keys {
                entries.entry(key).or_default().insert(locale.clone(), value);
            }
        }
        Self::new(name, entries)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(key, per-locale values)` in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &IndexMap<String, String>)> {
        self.entries.iter().map(|(key, values)| (key.as_str(), values))
    }

    /// Value of `key` for `locale`, if the table provides one.
    #[must_use]
    pub fn value(&self, key: &str, locale: &LocaleCode) -> Option<&str> {
        self.entries.get(key)?.get(locale.as_str()).map(String::as_str)
    }

    /// Locales mentioned anywhere in the table, in first-seen order.
    #[must_use]
    pub fn locales(&self) -> Vec<&str> {
        let mut seen: IndexMap<&str, ()> = IndexMap::new();
        for values in self.entries.values() {
            for locale in values.keys() {
                seen.insert(locale.as_str(), ());
            }
        }
        seen.into_keys().collect()
    }
}

/// Parses a table from JSON text.
///
/// # Errors
/// Returns [`TableError::Parse`] for malformed JSON or an unknown layout, and
/// the validation errors of [`TranslationTable::new`].
pub fn parse_table(name: &str, json_text: &str) -> Result<TranslationTable, TableError> {
    let file: TableFile = serde_json::from_str(json_text)
        .map_err(|source| TableError::Parse { name: name.to_string(), source })?;

    let mut table = match file.layout {
        TableLayout::ByKey(entries) => TranslationTable::new(name, entries)?,
        TableLayout::ByLocale(by_locale) => TranslationTable::from_by_locale(name, by_locale)?,
    };
    table.description = file.description;
    Ok(table)
}

/// Loads a table file. The table is named after the file stem.
///
/// # Errors
/// Returns [`TableError::Io`] if the file cannot be read, otherwise the errors
/// of [`parse_table`].
pub fn load_table_file(file_path: &Path) -> Result<TranslationTable, TableError> {
    let content = std::fs::read_to_string(file_path).map_err(|source| TableError::Io {
        path: file_path.display().to_string(),
        source,
    })?;

    let name = file_path
        .file_stem()
        .map_or_else(|| file_path.display().to_string(), |s| s.to_string_lossy().to_string());

    tracing::debug!(name = %name, path = %file_path.display(), "Loading translation table");
    parse_table(&name, &content)
}
