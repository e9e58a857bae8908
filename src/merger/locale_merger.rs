//! Read-merge-write passes over the locale directory.

use std::fs;
use std::io::{
    ErrorKind,
    Write,
};
use std::path::{
    Path,
    PathBuf,
};

use tempfile::NamedTempFile;

use super::document::LocaleDocument;
use super::error::MergeError;
use super::types::{
    KeyOrder,
    LocaleOutcome,
    MergeResult,
    MissingFilePolicy,
    Summary,
};
use crate::input::table::TranslationTable;
use crate::types::LocaleCode;

/// Merges translation tables into `<locales_dir>/<locale>.json` documents.
#[derive(Debug, Clone)]
pub struct LocaleMerger {
    locales_dir: PathBuf,
    key_order: KeyOrder,
    missing_file: MissingFilePolicy,
}

impl LocaleMerger {
    /// Creates a merger with sorted output that fails on missing files.
    #[must_use]
    pub fn new(locales_dir: impl Into<PathBuf>) -> Self {
        Self {
            locales_dir: locales_dir.into(),
            key_order: KeyOrder::default(),
            missing_file: MissingFilePolicy::default(),
        }
    }

    #[must_use]
    pub const fn with_key_order(mut self, key_order: KeyOrder) -> Self {
        self.key_order = key_order;
        self
    }

    #[must_use]
    pub const fn with_missing_file(mut self, missing_file: MissingFilePolicy) -> Self {
        self.missing_file = missing_file;
        self
    }

    #[must_use]
    pub fn locales_dir(&self) -> &Path {
        &self.locales_dir
    }

    /// Path of the document for `locale`.
    #[must_use]
    pub fn locale_path(&self, locale: &LocaleCode) -> PathBuf {
        self.locales_dir.join(locale.file_name())
    }

    /// Merges `table` into the document of a single locale.
    ///
    /// Keys already present keep their value. The file is rewritten only when
    /// its serialized content changes, so repeating a merge is a no-op.
    ///
    /// # Errors
    /// - [`MergeError::NotFound`] if the document is missing and the policy is
    ///   [`MissingFilePolicy::Fail`]
    /// - [`MergeError::MalformedDocument`] if the document is not a JSON object
    /// - [`MergeError::Io`] if reading or writing fails
    pub fn merge_locale(
        &self,
        locale: &LocaleCode,
        table: &TranslationTable,
    ) -> Result<MergeResult, MergeError> {
        let path = self.locale_path(locale);
        tracing::info!("Processing {}...", locale.file_name());

        let original = self.read_document(&path)?;
        let mut document = match &original {
            Some(text) => LocaleDocument::parse(&path, text)?,
            None => LocaleDocument::new(),
        };

        let mut result = document.merge_table(locale, table);
        for key in &result.added {
            tracing::debug!(locale = %locale, "Added: {key}");
        }
        for key in &result.skipped {
            tracing::debug!(
                locale = %locale,
                "Key '{key}' already exists in {}",
                locale.file_name()
            );
        }
        if !result.untranslated.is_empty() {
            tracing::debug!(
                locale = %locale,
                keys = ?result.untranslated,
                "Table has no translation for these keys"
            );
        }

        if self.key_order == KeyOrder::Sorted {
            document.sort_keys();
        }

        let text = document.to_json_text().map_err(|e| MergeError::io(&path, e.into()))?;
        if original.as_deref() != Some(text.as_str()) {
            if original.is_some() {
                write_atomic(&path, &text)?;
            } else {
                create_document(&path, &text)?;
            }
            result.written = true;
        }

        tracing::info!(
            "  {} new keys added, {} already present",
            result.added_count(),
            result.skipped_count()
        );
        Ok(result)
    }

    /// Merges `table` into every locale in order.
    ///
    /// A failing locale is logged and recorded; the remaining locales are
    /// still processed.
    pub fn merge_all(&self, table: &TranslationTable, locales: &[LocaleCode]) -> Summary {
        let mut summary = Summary::default();

        for locale in locales {
            let result = self.merge_locale(locale, table);
            if let Err(e) = &result {
                tracing::error!(locale = %locale, table = %table.name(), "{e}");
            }
            summary.outcomes.push(LocaleOutcome { locale: locale.clone(), result });
        }

        summary
    }

    /// Reads the document text. `Ok(None)` means the file is missing and may
    /// be created.
    fn read_document(&self, path: &Path) -> Result<Option<String>, MergeError> {
        match fs::read_to_string(path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => match self.missing_file {
                MissingFilePolicy::Fail => Err(MergeError::NotFound { path: path.to_path_buf() }),
                MissingFilePolicy::Create => {
                    tracing::info!("{} does not exist, creating it", path.display());
                    Ok(None)
                }
            },
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                Err(MergeError::malformed(path, "file is not valid UTF-8"))
            }
            Err(e) => Err(MergeError::io(path, e)),
        }
    }
}

/// Replaces an existing file via a temporary sibling and a rename, so readers
/// never see a partial document.
///
/// A symlinked document is written through to its target; the link stays.
fn write_atomic(path: &Path, text: &str) -> Result<(), MergeError> {
    let target = fs::canonicalize(path).map_err(|e| MergeError::io(path, e))?;
    let mut file =
        NamedTempFile::new_in(parent_dir(&target)).map_err(|e| MergeError::io(path, e))?;
    file.write_all(text.as_bytes()).map_err(|e| MergeError::io(path, e))?;
    file.as_file().sync_all().map_err(|e| MergeError::io(path, e))?;

    // NamedTempFile is created 0600; keep the document's own mode.
    let permissions = fs::metadata(&target).map_err(|e| MergeError::io(path, e))?.permissions();
    fs::set_permissions(file.path(), permissions).map_err(|e| MergeError::io(path, e))?;

    file.persist(&target).map_err(|e| MergeError::io(path, e.error))?;
    Ok(())
}

/// Creates a new document, refusing to clobber a file created in the meantime.
fn create_document(path: &Path, text: &str) -> Result<(), MergeError> {
    fs::create_dir_all(parent_dir(path)).map_err(|e| MergeError::io(path, e))?;
    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| MergeError::io(path, e))?;
    file.write_all(text.as_bytes()).map_err(|e| MergeError::io(path, e))?;
    file.sync_all().map_err(|e| MergeError::io(path, e))
}

/// Directory containing `path`, `.` for a bare file name.
fn parent_dir(path: &Path) -> &Path {
    path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or_else(|| Path::new("."))
}
