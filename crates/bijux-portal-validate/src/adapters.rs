use std::fmt::{Display, Formatter};
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

/// Reading or decoding a manifest or catalog file failed. Never a finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadError(pub String);

impl Display for LoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for LoadError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum DocumentFormat {
    Yaml,
    Json,
}

impl DocumentFormat {
    /// Format implied by the file extension (`.yaml`, `.yml`, `.json`).
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

pub fn parse_raw_document(input: &str, format: DocumentFormat) -> Result<Value, LoadError> {
    match format {
        DocumentFormat::Yaml => serde_yaml::from_str::<Value>(input)
            .map_err(|e| LoadError(format!("yaml decode failed: {e}"))),
        DocumentFormat::Json => serde_json::from_str::<Value>(input)
            .map_err(|e| LoadError(format!("json decode failed: {e}"))),
    }
}

pub fn load_raw_document(path: &Path) -> Result<Value, LoadError> {
    let format = DocumentFormat::from_path(path).ok_or_else(|| {
        LoadError(format!(
            "unsupported document extension: {} (expected .yaml, .yml or .json)",
            path.display()
        ))
    })?;
    let raw = fs::read_to_string(path)
        .map_err(|e| LoadError(format!("read {} failed: {e}", path.display())))?;
    parse_raw_document(&raw, format).map_err(|e| LoadError(format!("{}: {e}", path.display())))
}

/// Manifest files directly inside `dir`, sorted by path.
pub fn list_manifest_files(dir: &Path) -> Result<Vec<PathBuf>, LoadError> {
    let entries = fs::read_dir(dir)
        .map_err(|e| LoadError(format!("read dir {} failed: {e}", dir.display())))?;
    let mut files = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|e| LoadError(format!("read dir {} failed: {e}", dir.display())))?
            .path();
        if path.is_file() && DocumentFormat::from_path(&path).is_some() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
