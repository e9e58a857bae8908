//! locale-merge
//!
//! 翻訳テーブルをロケールごとの JSON ファイルへ冪等にマージするツール。
//! Existing keys are never overwritten, so re-running a merge is a no-op.

pub mod config;
pub mod discovery;
pub mod error;
pub mod input;
pub mod merger;
pub mod runner;
pub mod types;

mod test_utils;

pub use error::RunError;
pub use merger::{
    LocaleMerger,
    MergeResult,
    Summary,
};
pub use runner::{
    RunReport,
    run,
};
