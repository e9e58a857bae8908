//! Merges the configured translation tables into the locale files of the
//! current directory.

use std::process::ExitCode;

use locale_merge::run;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let workspace_root = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(err) => {
            tracing::error!("Failed to resolve the working directory: {err}");
            return ExitCode::FAILURE;
        }
    };

    match run(&workspace_root) {
        Ok(report) if report.is_success() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
