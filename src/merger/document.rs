//! Locale dictionary documents.

use std::path::Path;

use serde_json::{
    Map,
    Value,
};

use super::error::MergeError;
use super::types::MergeResult;
use crate::input::table::TranslationTable;
use crate::types::LocaleCode;

/// A locale's flat key → value dictionary, in read order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleDocument {
    entries: Map<String, Value>,
}

impl LocaleDocument {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses document text. `path` is only used for error context.
    ///
    /// # Errors
    /// Returns [`MergeError::MalformedDocument`] if the text is not JSON or
    /// its root is anything other than an object.
    pub fn parse(path: &Path, json_text: &str) -> Result<Self, MergeError> {
        let value: Value = serde_json::from_str(json_text)
            .map_err(|e| MergeError::malformed(path, e.to_string()))?;

        match value {
            Value::Object(entries) => Ok(Self { entries }),
            other => Err(MergeError::malformed(
                path,
                format!("expected a JSON object, found {}", json_kind(&other)),
            )),
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Inserts every table key missing from the document.
    ///
    /// Existing keys are never overwritten, and keys the table does not
    /// translate into `locale` are left out.
    pub fn merge_table(&mut self, locale: &LocaleCode, table: &TranslationTable) -> MergeResult {
        let mut result = MergeResult::default();

        for (key, values) in table.iter() {
            let Some(value) = values.get(locale.as_str()) else {
                result.untranslated.push(key.to_string());
                continue;
            };

            if self.entries.contains_key(key) {
                result.skipped.push(key.to_string());
            } else {
                self.entries.insert(key.to_string(), Value::String(value.clone()));
                result.added.push(key.to_string());
            }
        }

        result
    }

    /// Reorders top-level keys lexicographically.
    pub fn sort_keys(&mut self) {
        let mut entries: Vec<(String, Value)> =
            std::mem::take(&mut self.entries).into_iter().collect();
        entries.sort_by(|(a, _), (b, _)| a.cmp(b));
        self.entries = entries.into_iter().collect();
    }

    /// Serializes with 2-space indentation, unescaped non-ASCII text and a
    /// trailing newline.
    ///
    /// # Errors
    /// Propagates serializer errors.
    pub fn to_json_text(&self) -> Result<String, serde_json::Error> {
        let mut text = serde_json::to_string_pretty(&self.entries)?;
        text.push('\n');
        Ok(text)
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::panic)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;
    use serde_json::json;

    use super::*;
    use crate::test_utils::{
        create_table as table,
        locale,
    };

    fn document(value: Value) -> LocaleDocument {
        LocaleDocument::parse(Path::new("test.json"), &value.to_string()).unwrap()
    }

    #[googletest::test]
    fn test_merge_adds_missing_and_keeps_existing() {
        let mut doc = document(json!({ "greeting": "hi" }));
        let table = table(json!({ "greeting": { "en": "hello" }, "farewell": { "en": "bye" } }));

        let result = doc.merge_table(&locale("en"), &table);

        expect_that!(result.added, elements_are![eq("farewell")]);
        expect_that!(result.skipped, elements_are![eq("greeting")]);
        expect_that!(doc.get("greeting"), some(eq(&json!("hi"))));
        expect_that!(doc.get("farewell"), some(eq(&json!("bye"))));
    }

    #[googletest::test]
    fn test_merge_is_idempotent() {
        let mut doc = document(json!({ "greeting": "hi" }));
        let table = table(json!({ "greeting": { "en": "hello" }, "farewell": { "en": "bye" } }));

        doc.merge_table(&locale("en"), &table);
        let once = doc.clone();
        let second = doc.merge_table(&locale("en"), &table);

        expect_that!(second.added_count(), eq(0));
        expect_that!(second.skipped_count(), eq(2));
        assert_eq!(doc, once);
    }

    #[googletest::test]
    fn test_merge_omits_keys_without_locale_value() {
        let mut doc = LocaleDocument::new();
        let table = table(json!({
            "onlyGerman": { "de": "Nur Deutsch" },
            "both": { "en": "Both", "de": "Beide" }
        }));

        let result = doc.merge_table(&locale("en"), &table);

        expect_that!(doc.contains_key("onlyGerman"), eq(false));
        expect_that!(doc.get("both"), some(eq(&json!("Both"))));
        expect_that!(result.untranslated, elements_are![eq("onlyGerman")]);
    }

    #[googletest::test]
    fn test_merge_keeps_non_string_existing_values() {
        let mut doc = document(json!({ "nested": { "a": 1 } }));
        let table = table(json!({ "nested": { "en": "flat" } }));

        doc.merge_table(&locale("en"), &table);

        expect_that!(doc.get("nested"), some(eq(&json!({ "a": 1 }))));
    }

    #[googletest::test]
    fn test_new_keys_are_appended_in_table_order() {
        let mut doc = document(json!({ "zeta": "z", "alpha": "a" }));
        let table = table(json!({ "mid": { "en": "m" }, "beta": { "en": "b" } }));

        doc.merge_table(&locale("en"), &table);

        let keys: Vec<&str> = doc.keys().collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid", "beta"]);
    }

    #[googletest::test]
    fn test_sort_keys() {
        let mut doc = document(json!({ "zeta": "z", "Alpha": "A", "alpha": "a", "ñu": "n" }));

        doc.sort_keys();

        let keys: Vec<&str> = doc.keys().collect();
        assert_eq!(keys, vec!["Alpha", "alpha", "zeta", "ñu"]);
    }

    #[googletest::test]
    fn test_to_json_text_format() {
        let doc = document(json!({ "title": "Nos Valeurs", "subtitle": "Über uns" }));

        let text = doc.to_json_text().unwrap();

        expect_that!(
            text,
            eq("{\n  \"title\": \"Nos Valeurs\",\n  \"subtitle\": \"Über uns\"\n}\n")
        );
    }

    #[rstest]
    #[case::array("[\"not\", \"an\", \"object\"]", "an array")]
    #[case::string("\"not an object\"", "a string")]
    #[case::number("42", "a number")]
    #[case::null("null", "null")]
    fn test_parse_rejects_non_object(#[case] text: &str, #[case] kind: &str) {
        let result = LocaleDocument::parse(Path::new("locales/en.json"), text);

        match result {
            Err(MergeError::MalformedDocument { reason, .. }) => {
                assert!(reason.contains(kind), "unexpected reason: {reason}");
            }
            other => panic!("expected MalformedDocument, got {other:?}"),
        }
    }

    #[rstest]
    #[case::truncated("{\"a\": ")]
    #[case::empty("")]
    fn test_parse_rejects_invalid_json(#[case] text: &str) {
        let result = LocaleDocument::parse(Path::new("locales/en.json"), text);

        assert!(matches!(result, Err(MergeError::MalformedDocument { .. })));
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod proptests {
    use proptest::prelude::*;
    use serde_json::{
        Value,
        json,
    };

    use super::LocaleDocument;
    use crate::input::table::TranslationTable;
    use crate::test_utils::locale;

    /// Small key space so documents and tables overlap.
    const KEY: &str = "[a-f]{1,2}";

    fn document_strategy() -> impl Strategy<Value = LocaleDocument> {
        let value = prop_oneof![
            "[a-zA-Zäöü ]{0,8}".prop_map(Value::from),
            any::<i64>().prop_map(Value::from),
            Just(json!({ "nested": true })),
        ];
        prop::collection::btree_map(KEY, value, 0..8)
            .prop_map(|entries| LocaleDocument { entries: entries.into_iter().collect() })
    }

    /// Tables over `en` and `de`; a key may lack either locale.
    fn table_strategy() -> impl Strategy<Value = TranslationTable> {
        let values = prop::collection::btree_map(
            prop::sample::select(vec!["en", "de"]).prop_map(String::from),
            "[a-z]{0,6}",
            0..=2,
        );
        prop::collection::btree_map(KEY, values, 1..8).prop_map(|entries| {
            let entries =
                entries.into_iter().map(|(key, values)| (key, values.into_iter().collect())).collect();
            TranslationTable::new("generated", entries).unwrap()
        })
    }

    proptest! {
        #[test]
        fn test_merge_never_changes_existing_entries(
            original in document_strategy(),
            table in table_strategy(),
        ) {
            let mut doc = original.clone();
            doc.merge_table(&locale("en"), &table);

            for (key, value) in &original.entries {
                prop_assert_eq!(doc.get(key), Some(value));
            }
        }

        #[test]
        fn test_merge_adds_exactly_the_translated_missing_keys(
            original in document_strategy(),
            table in table_strategy(),
        ) {
            let en = locale("en");
            let mut doc = original.clone();
            let result = doc.merge_table(&en, &table);

            for (key, values) in table.iter() {
                if values.contains_key("en") {
                    prop_assert!(doc.contains_key(key));
                } else {
                    prop_assert_eq!(doc.contains_key(key), original.contains_key(key));
                    prop_assert!(result.untranslated.iter().any(|k| k == key));
                }
            }
            prop_assert_eq!(doc.len(), original.len() + result.added_count());
            for key in &result.added {
                prop_assert!(!original.contains_key(key));
                let expected = table.value(key, &en).map(Value::from);
                prop_assert_eq!(doc.get(key), expected.as_ref());
            }
        }

        #[test]
        fn test_merge_twice_is_noop(
            original in document_strategy(),
            table in table_strategy(),
        ) {
            let en = locale("en");
            let mut doc = original;
            doc.merge_table(&en, &table);
            let once = doc.clone();

            let second = doc.merge_table(&en, &table);

            prop_assert!(second.added.is_empty());
            prop_assert_eq!(doc, once);
        }
    }
}
