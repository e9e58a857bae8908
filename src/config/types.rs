use std::collections::HashSet;
use std::path::PathBuf;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::input::builtin;
use crate::merger::{
    KeyOrder,
    MissingFilePolicy,
};
use crate::types::{
    DEFAULT_LOCALES,
    InvalidLocaleCode,
    LocaleCode,
    parse_locales,
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "locales[0]")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to read configuration file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MergeSettings {
    /// Directory holding `<locale>.json`, relative to the working directory.
    pub locales_dir: String,

    /// Locales to update, in processing order.
    pub locales: Vec<String>,

    pub key_order: KeyOrder,
    pub missing_file: MissingFilePolicy,

    /// Built-in tables to apply.
    ///
    /// - `None`: every built-in table (default)
    /// - `Some([...])`: only the named tables, `Some([])` disables them
    pub builtin_tables: Option<Vec<String>>,

    pub table_files: TableFilesConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TableFilesConfig {
    /// Glob matched against paths relative to the working directory.
    pub file_pattern: String,
}

impl MergeSettings {
    /// # Errors
    /// - Required field is empty
    /// - Invalid or duplicate locale code
    /// - Unknown built-in table
    /// - Invalid glob pattern
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.locales_dir.is_empty() {
            errors.push(ValidationError::new(
                "localesDir",
                "The directory cannot be empty. Example: \"locales\"",
            ));
        }

        if self.locales.is_empty() {
            errors.push(ValidationError::new(
                "locales",
                "At least one locale is required. Example: [\"en\", \"de\"]",
            ));
        }

        let mut seen = HashSet::new();
        for (index, code) in self.locales.iter().enumerate() {
            if let Err(e) = LocaleCode::parse(code.as_str()) {
                errors.push(ValidationError::new(format!("locales[{index}]"), e.to_string()));
            } else if !seen.insert(code.as_str()) {
                errors.push(ValidationError::new(
                    format!("locales[{index}]"),
                    format!("Locale '{code}' is listed more than once"),
                ));
            }
        }

        if let Some(names) = &self.builtin_tables {
            for (index, name) in names.iter().enumerate() {
                if !builtin::is_builtin(name) {
                    errors.push(ValidationError::new(
                        format!("builtinTables[{index}]"),
                        format!(
                            "Unknown built-in table '{name}'. Available: {}",
                            builtin::builtin_names().collect::<Vec<_>>().join(", ")
                        ),
                    ));
                }
            }
        }

        if self.table_files.file_pattern.is_empty() {
            errors.push(ValidationError::new(
                "tableFiles.filePattern",
                "The pattern cannot be empty. Example: \"translations/**/*.json\"",
            ));
        } else if let Err(e) = globset::Glob::new(&self.table_files.file_pattern) {
            errors.push(ValidationError::new(
                "tableFiles.filePattern",
                format!("Invalid glob pattern '{}': {e}", self.table_files.file_pattern),
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Configured locales as validated codes.
    ///
    /// # Errors
    /// Returns the first invalid code; unreachable after [`Self::validate`].
    pub fn locale_codes(&self) -> Result<Vec<LocaleCode>, InvalidLocaleCode> {
        parse_locales(self.locales.iter().cloned())
    }
}

impl Default for TableFilesConfig {
    fn default() -> Self {
        Self { file_pattern: "translations/**/*.json".to_string() }
    }
}

impl Default for MergeSettings {
    fn default() -> Self {
        Self {
            locales_dir: "locales".to_string(),
            locales: DEFAULT_LOCALES.iter().map(ToString::to_string).collect(),
            key_order: KeyOrder::default(),
            missing_file: MissingFilePolicy::default(),
            builtin_tables: None,
            table_files: TableFilesConfig::default(),
        }
    }
}
