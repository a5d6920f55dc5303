// Object store: one pretty-printed JSON file per object. Filenames come
// from object names/titles run through `sanitize_title`.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Turn an object title into a filename stem: spaces become underscores,
/// colons are dropped. Two titles may sanitize to the same stem; the later
/// write wins.
pub fn sanitize_title(title: &str) -> String {
    title.replace(' ', "_").replace(':', "")
}

/// Create the target directory if it does not exist yet.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory {}", dir.display()))
}

/// Write one object as `<dir>/<stem>.json`, pretty-printed.
pub fn write_object<T: Serialize>(dir: &Path, stem: &str, object: &T) -> Result<PathBuf> {
    let path = dir.join(format!("{}.json", stem));
    let json = serde_json::to_string_pretty(object).context("Serializing object to json")?;
    std::fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}

/// List the files in an import directory, sorted by filename. Directory
/// listing order is OS-dependent; sorting keeps runs deterministic.
pub fn list_object_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory {}", dir.display()))?;
    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("Failed to read entry in {}", dir.display()))?;
        let path = entry.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Read and parse one stored object.
pub fn read_object(path: &Path) -> Result<serde_json::Value> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&data).with_context(|| format!("Parsing json from {}", path.display()))
}
