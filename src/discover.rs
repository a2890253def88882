//! Source file discovery.

use crate::config::SOURCE_EXTENSION;
use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Recursively collect every `.cs` file under `root`, sorted for
/// deterministic output.
pub fn discover_sources(root: &Path) -> Result<Vec<PathBuf>> {
    let root = fs::canonicalize(root)
        .with_context(|| format!("failed to resolve source directory: {}", root.display()))?;
    if !root.is_dir() {
        bail!("source path is not a directory: {}", root.display());
    }

    let pattern = format!(
        "{}/**/*.{}",
        glob::Pattern::escape(&root.to_string_lossy()),
        SOURCE_EXTENSION
    );
    let mut files: Vec<PathBuf> = glob::glob(&pattern)
        .with_context(|| format!("invalid glob pattern: {}", pattern))?
        .filter_map(|r| r.ok())
        .filter(|p| p.is_file())
        .collect();
    files.sort();
    files.dedup();
    Ok(files)
}

/// True when the file's immediate parent directory name is all lowercase
/// (`src/`, `internal/`, ...). Such directories hold non-exported code.
pub fn in_lowercase_directory(path: &Path) -> bool {
    path.parent()
        .and_then(|dir| dir.file_name())
        .map(|name| name.to_string_lossy().chars().all(char::is_lowercase))
        .unwrap_or(false)
}
