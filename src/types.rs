//! Core types used throughout the project.

use std::fmt;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

/// Locales the front-end ships dictionaries for.
pub const DEFAULT_LOCALES: [&str; 6] = ["en", "de", "es", "fr", "it", "pt"];

/// A short code identifying a target language (e.g. `en`, `pt-BR`).
///
/// Only ASCII alphanumerics, `-` and `_` are accepted so the code can be used
/// verbatim as a file stem.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LocaleCode(String);

/// Rejected locale code.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidLocaleCode {
    #[error("locale code cannot be empty")]
    Empty,
    #[error("locale code '{0}' may only contain ASCII letters, digits, '-' and '_'")]
    InvalidCharacters(String),
}

impl LocaleCode {
    /// Parses and validates a locale code.
    ///
    /// # Errors
    /// Returns [`InvalidLocaleCode`] if the code is empty or contains
    /// characters outside `[A-Za-z0-9_-]`.
    pub fn parse(code: impl Into<String>) -> Result<Self, InvalidLocaleCode> {
        let code = code.into();
        if code.is_empty() {
            return Err(InvalidLocaleCode::Empty);
        }
        if !code.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
            return Err(InvalidLocaleCode::InvalidCharacters(code));
        }
        Ok(Self(code))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name of this locale's dictionary (`en` -> `en.json`).
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.json", self.0)
    }
}

impl TryFrom<String> for LocaleCode {
    type Error = InvalidLocaleCode;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<LocaleCode> for String {
    fn from(code: LocaleCode) -> Self {
        code.0
    }
}

impl AsRef<str> for LocaleCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocaleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Converts a list of raw codes, stopping at the first invalid one.
///
/// # Errors
/// Returns the first [`InvalidLocaleCode`] encountered.
pub fn parse_locales<I, S>(codes: I) -> Result<Vec<LocaleCode>, InvalidLocaleCode>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    codes.into_iter().map(LocaleCode::parse).collect()
}
