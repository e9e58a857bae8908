//! Discovery of translation table files in the working directory.

use std::path::{
    Path,
    PathBuf,
};

use globset::Glob;
use ignore::WalkBuilder;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiscoveryError {
    #[error("Invalid table file pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },
    #[error("Failed to scan '{}' for table files: {source}", root.display())]
    Walk {
        root: PathBuf,
        #[source]
        source: ignore::Error,
    },
}

/// Finds table files under `workspace_root` whose relative path matches
/// `pattern`.
///
/// The walk starts at the literal directory prefix of `pattern`
/// (`translations/**/*.json` walks `translations/`); a missing prefix yields
/// no files. `.gitignore` rules are honoured. Results are sorted so tables are
/// applied in a stable order.
///
/// # Errors
/// - [`DiscoveryError::InvalidPattern`] if `pattern` is not a valid glob
/// - [`DiscoveryError::Walk`] if a directory under the walk start cannot be read
pub fn find_table_files(
    workspace_root: &Path,
    pattern: &str,
) -> Result<Vec<PathBuf>, DiscoveryError> {
    let matcher = Glob::new(pattern)
        .map_err(|source| DiscoveryError::InvalidPattern { pattern: pattern.to_string(), source })?
        .compile_matcher();

    let prefix = literal_prefix(pattern);
    let walk_root = if prefix.as_os_str().is_empty() {
        workspace_root.to_path_buf()
    } else {
        workspace_root.join(prefix)
    };
    if !walk_root.exists() {
        tracing::debug!("No table directory at {}", walk_root.display());
        return Ok(Vec::new());
    }

    let mut found_files = Vec::new();
    for result in WalkBuilder::new(&walk_root)
        .hidden(false)
        .git_ignore(true)
        .git_global(true)
        .git_exclude(true)
        .follow_links(false)
        .build()
    {
        let entry =
            result.map_err(|source| DiscoveryError::Walk { root: walk_root.clone(), source })?;

        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        let path = entry.path();
        let Ok(relative_path) = path.strip_prefix(workspace_root) else {
            continue;
        };
        if !matcher.is_match(relative_path) {
            continue;
        }

        found_files.push(path.to_path_buf());
    }

    found_files.sort();
    tracing::debug!(count = found_files.len(), pattern, "Discovered table files");
    Ok(found_files)
}

/// Leading components of `pattern` that contain no glob syntax.
fn literal_prefix(pattern: &str) -> PathBuf {
    let components: Vec<&str> = pattern.split('/').collect();
    let dirs = components.split_last().map_or(&[][..], |(_, dirs)| dirs);
    dirs.iter()
        .take_while(|component| !component.contains(['*', '?', '[', '{', '\\']))
        .collect()
}
