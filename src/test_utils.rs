//! テスト用ユーティリティ関数
//!
//! 複数のテストモジュールで使用される共通のヘルパー関数を提供します。
#![cfg(test)]
#![allow(clippy::unwrap_used)]

use std::path::Path;

use serde_json::Value;

use crate::input::table::TranslationTable;
use crate::types::LocaleCode;

/// テスト用の `LocaleCode` を作成する
pub(crate) fn locale(code: &str) -> LocaleCode {
    LocaleCode::parse(code).unwrap()
}

/// テスト用の `TranslationTable` を作成する
///
/// # Arguments
/// * `entries` - `{ "<key>": { "<locale>": "<value>" } }` 形式の JSON
pub(crate) fn create_table(entries: Value) -> TranslationTable {
    TranslationTable::new("test", serde_json::from_value(entries).unwrap()).unwrap()
}

/// `<dir>/<locale>.json` に JSON を書き込む
pub(crate) fn write_locale(dir: &Path, locale: &str, content: &Value) {
    std::fs::create_dir_all(dir).unwrap();
    std::fs::write(dir.join(format!("{locale}.json")), content.to_string()).unwrap();
}

/// `<dir>/<locale>.json` を読み込んでパースする
pub(crate) fn read_locale(dir: &Path, locale: &str) -> Value {
    let content = std::fs::read_to_string(dir.join(format!("{locale}.json"))).unwrap();
    serde_json::from_str(&content).unwrap()
}
