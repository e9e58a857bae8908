//! `.locale-merge.json` configuration.
/// Configuration file loading
mod manager;
/// Configuration types and settings
mod types;

pub use manager::{
    CONFIG_FILE_NAME,
    ConfigManager,
};
pub use types::{
    ConfigError,
    MergeSettings,
    TableFilesConfig,
    ValidationError,
};
