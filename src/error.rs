use thiserror::Error;

use crate::config::ConfigError;
use crate::discovery::DiscoveryError;
use crate::input::table::TableError;
use crate::types::InvalidLocaleCode;

/// Errors that abort a run before any locale document is touched.
#[derive(Error, Debug)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Locale(#[from] InvalidLocaleCode),
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),
    #[error(transparent)]
    Table(#[from] TableError),
}
