//! Applies every configured translation table to the locale documents.

use std::path::Path;

use crate::config::ConfigManager;
use crate::discovery::find_table_files;
use crate::error::RunError;
use crate::input::builtin::load_builtin_tables;
use crate::input::table::{
    TranslationTable,
    load_table_file,
};
use crate::merger::{
    LocaleMerger,
    Summary,
};
use crate::types::LocaleCode;

/// Outcome of merging one table.
#[derive(Debug)]
pub struct TableReport {
    pub name: String,
    /// Number of keys defined by the table.
    pub key_count: usize,
    pub summary: Summary,
}

/// Outcome of a whole run, one report per table in application order.
#[derive(Debug, Default)]
pub struct RunReport {
    pub tables: Vec<TableReport>,
}

impl RunReport {
    #[must_use]
    pub fn added_count(&self) -> usize {
        self.tables.iter().map(|t| t.summary.added_count()).sum()
    }

    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.tables.iter().map(|t| t.summary.failure_count()).sum()
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failure_count() == 0
    }
}

/// Loads `.locale-merge.json` from `workspace_root` and runs every table.
///
/// # Errors
/// Configuration, discovery and table loading errors abort the run before
/// any file is written. Per-locale merge failures do not; they are recorded
/// in the returned report.
pub fn run(workspace_root: &Path) -> Result<RunReport, RunError> {
    let config_manager = ConfigManager::load(workspace_root)?;
    run_with_config(&config_manager)
}

/// Runs every table selected by an already loaded configuration.
///
/// # Errors
/// Same as [`run`].
pub fn run_with_config(config_manager: &ConfigManager) -> Result<RunReport, RunError> {
    let settings = config_manager.settings();
    let locales = settings.locale_codes()?;
    let tables = collect_tables(config_manager)?;
    for (table, locale) in unconfigured_locales(&tables, &locales) {
        tracing::warn!(table, "Locale '{locale}' is not configured; its values are ignored");
    }

    let merger = LocaleMerger::new(config_manager.locales_dir())
        .with_key_order(settings.key_order)
        .with_missing_file(settings.missing_file);

    tracing::info!(
        tables = tables.len(),
        locales = locales.len(),
        "Merging translation tables into {}",
        merger.locales_dir().display()
    );

    let mut report = RunReport::default();
    for table in tables {
        tracing::info!(
            table = %table.name(),
            "Adding {} translation keys...",
            table.description().unwrap_or_else(|| table.name())
        );
        tracing::info!("Total new keys: {}", table.len());

        let summary = merger.merge_all(&table, &locales);
        tracing::info!(
            table = %table.name(),
            "Added {} translations ({} keys × {} locales)",
            summary.added_count(),
            table.len(),
            locales.len()
        );

        report.tables.push(TableReport {
            name: table.name().to_string(),
            key_count: table.len(),
            summary,
        });
    }

    if report.is_success() {
        tracing::info!("Complete! Added {} total translations", report.added_count());
    } else {
        tracing::warn!(
            "Finished with {} failed locale merges. Added {} total translations",
            report.failure_count(),
            report.added_count()
        );
    }

    Ok(report)
}

/// Built-in tables first (name order), then discovered files (path order).
fn collect_tables(config_manager: &ConfigManager) -> Result<Vec<TranslationTable>, RunError> {
    let settings = config_manager.settings();
    let mut tables = load_builtin_tables(settings.builtin_tables.as_deref())?;

    let root = config_manager.workspace_root();
    for path in find_table_files(root, &settings.table_files.file_pattern)? {
        tables.push(load_table_file(&path)?);
    }

    Ok(tables)
}

/// `(table, locale)` pairs for table locales missing from `locales`. Their
/// values are never written.
fn unconfigured_locales<'a>(
    tables: &'a [TranslationTable],
    locales: &[LocaleCode],
) -> Vec<(&'a str, &'a str)> {
    tables
        .iter()
        .flat_map(|table| table.locales().into_iter().map(move |locale| (table.name(), locale)))
        .filter(|(_, locale)| !locales.iter().any(|l| l.as_str() == *locale))
        .collect()
}
