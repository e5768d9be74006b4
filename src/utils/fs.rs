//! File system utilities

use crate::model::to_pretty_json;
use crate::system::System;
use anyhow::{Context as _, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::debug;

/// Create a directory and its parents if they don't exist
pub fn ensure_directory(system: &dyn System, dir: &Path) -> Result<()> {
    if !system
        .is_dir(dir)
        .with_context(|| format!("Failed to inspect directory: {}", dir.display()))?
    {
        debug!("Creating directory {}", dir.display());
        system
            .create_dir_all(dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }
    Ok(())
}

/// Create parent directories for a file path if they don't exist
pub fn create_parent_directories(system: &dyn System, file_path: &Path) -> Result<()> {
    match file_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => ensure_directory(system, parent)
            .with_context(|| {
                format!(
                    "Failed to create parent directories for: {}",
                    file_path.display()
                )
            }),
        _ => Ok(()),
    }
}

/// Read and parse a JSON file
pub fn read_json<T: DeserializeOwned>(system: &dyn System, path: &Path) -> Result<T> {
    debug!("Reading {}", path.display());
    let content = system
        .read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON in file: {}", path.display()))
}

/// Serialize a value as pretty JSON and atomically replace `path` with it
pub fn write_json<T: Serialize>(system: &dyn System, path: &Path, value: &T) -> Result<()> {
    let content = to_pretty_json(value)?;
    debug!("Writing {} ({} bytes)", path.display(), content.len());
    system
        .write_atomic(path, content.as_bytes())
        .with_context(|| format!("Failed to write file: {}", path.display()))
}
