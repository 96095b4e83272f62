// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::{IngestError, OutputFormat};

pub fn render_manifest(manifest: &Value, format: OutputFormat) -> Result<String, IngestError> {
    match format {
        OutputFormat::Yaml => serde_yaml::to_string(manifest)
            .map_err(|e| IngestError::Encode(format!("yaml encode failed: {e}"))),
        OutputFormat::Json => serde_json::to_string_pretty(manifest)
            .map(|mut s| {
                s.push('\n');
                s
            })
            .map_err(|e| IngestError::Encode(format!("json encode failed: {e}"))),
    }
}

pub(crate) fn write_manifest(path: &Path, rendered: &str) -> Result<(), IngestError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| IngestError::Io(format!("create {} failed: {e}", parent.display())))?;
    }
    fs::write(path, rendered)
        .map_err(|e| IngestError::Io(format!("write {} failed: {e}", path.display())))
}
