//! Translation batches embedded in the binary.

use super::table::{
    TableError,
    TranslationTable,
    parse_table,
};

/// `(name, json)` pairs, sorted by name.
pub const BUILTIN_TABLES: &[(&str, &str)] = &[
    ("about_keys", include_str!("../../tables/about_keys.json")),
    ("component_translations", include_str!("../../tables/component_translations.json")),
    (
        "filter_flatshare_help_translations",
        include_str!("../../tables/filter_flatshare_help_translations.json"),
    ),
    ("freetrial_key", include_str!("../../tables/freetrial_key.json")),
    ("landing_keys", include_str!("../../tables/landing_keys.json")),
    ("landing_page_keys", include_str!("../../tables/landing_page_keys.json")),
    ("listing_detail_keys", include_str!("../../tables/listing_detail_keys.json")),
    ("listing_edit_keys", include_str!("../../tables/listing_edit_keys.json")),
    ("pricing_clarity_keys", include_str!("../../tables/pricing_clarity_keys.json")),
    ("stays_jobs_keys", include_str!("../../tables/stays_jobs_keys.json")),
    ("zone_keys", include_str!("../../tables/zone_keys.json")),
];

/// Names of all built-in tables.
pub fn builtin_names() -> impl Iterator<Item = &'static str> {
    BUILTIN_TABLES.iter().map(|(name, _)| *name)
}

#[must_use]
pub fn is_builtin(name: &str) -> bool {
    builtin_names().any(|builtin| builtin == name)
}

/// Parses the selected built-in tables.
///
/// `None` selects every table. Selected names that are not built in are
/// ignored here; configuration validation reports them.
///
/// # Errors
/// Returns the first [`TableError`] from a table that fails to parse.
pub fn load_builtin_tables(
    selection: Option<&[String]>,
) -> Result<Vec<TranslationTable>, TableError> {
    BUILTIN_TABLES
        .iter()
        .filter(|(name, _)| selection.is_none_or(|names| names.iter().any(|n| n == name)))
        .map(|(name, json)| parse_table(name, json))
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use googletest::prelude::*;

    use super::*;
    use crate::types::{
        DEFAULT_LOCALES,
        LocaleCode,
    };

    #[googletest::test]
    fn test_all_builtin_tables_parse() {
        let tables = load_builtin_tables(None).unwrap();

        expect_that!(tables.len(), eq(BUILTIN_TABLES.len()));
        for table in &tables {
            expect_that!(table.is_empty(), eq(false));
        }
    }

    #[googletest::test]
    fn test_builtin_names_are_sorted() {
        let names: Vec<&str> = builtin_names().collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();

        expect_that!(names == sorted, eq(true));
    }

    #[googletest::test]
    fn test_builtin_tables_cover_default_locales() {
        let tables = load_builtin_tables(None).unwrap();

        for table in &tables {
            for locale in table.locales() {
                expect_that!(DEFAULT_LOCALES.contains(&locale), eq(true));
            }
        }
    }

    #[googletest::test]
    fn test_load_selected_builtin_tables() {
        let selection = vec!["landing_keys".to_string(), "zone_keys".to_string()];

        let tables = load_builtin_tables(Some(&selection)).unwrap();

        expect_that!(tables.len(), eq(2));
        expect_that!(tables[0].name(), eq("landing_keys"));
        expect_that!(tables[1].name(), eq("zone_keys"));

        let en = LocaleCode::parse("en").unwrap();
        expect_that!(
            tables[0].value("howItWorksSubtitle", &en),
            some(eq("Get started in three simple steps"))
        );
    }

    #[googletest::test]
    fn test_is_builtin() {
        expect_that!(is_builtin("freetrial_key"), eq(true));
        expect_that!(is_builtin("unknown_table"), eq(false));
    }
}
