//! Idempotent merging of translation tables into locale documents.

pub mod document;
pub mod error;
pub mod locale_merger;
pub mod types;

pub use document::LocaleDocument;
pub use error::MergeError;
pub use locale_merger::LocaleMerger;
pub use types::{
    KeyOrder,
    LocaleOutcome,
    MergeResult,
    MissingFilePolicy,
    Summary,
};
