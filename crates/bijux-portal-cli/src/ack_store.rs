use std::collections::{BTreeMap, BTreeSet};
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::{Path, PathBuf};

use bijux_portal_core::AckStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AckStoreError(pub String);

impl Display for AckStoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for AckStoreError {}

/// Checklist acknowledgments persisted as a JSON object of
/// `checklist:<id>` to sorted indexes. Every mutation is written through.
#[derive(Debug, Clone)]
pub struct JsonFileAckStore {
    path: PathBuf,
    entries: BTreeMap<String, BTreeSet<usize>>,
}

impl JsonFileAckStore {
    /// A missing file opens as an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, AckStoreError> {
        let path = path.into();
        let entries = if path.exists() {
            let raw = fs::read_to_string(&path)
                .map_err(|e| AckStoreError(format!("read {} failed: {e}", path.display())))?;
            if raw.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&raw).map_err(|e| {
                    AckStoreError(format!("decode {} failed: {e}", path.display()))
                })?
            }
        } else {
            BTreeMap::new()
        };
        Ok(Self { path, entries })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<(), AckStoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| AckStoreError(format!("create {} failed: {e}", parent.display())))?;
        }
        let mut body = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| AckStoreError(format!("encode checklist state failed: {e}")))?;
        body.push('\n');
        fs::write(&self.path, body)
            .map_err(|e| AckStoreError(format!("write {} failed: {e}", self.path.display())))
    }
}

impl AckStore for JsonFileAckStore {
    type Error = AckStoreError;

    fn acknowledged(&self, key: &str) -> Result<BTreeSet<usize>, Self::Error> {
        Ok(self.entries.get(key).cloned().unwrap_or_default())
    }

    fn set_acknowledged(
        &mut self,
        key: &str,
        index: usize,
        value: bool,
    ) -> Result<(), Self::Error> {
        let entry = self.entries.entry(key.to_string()).or_default();
        if value {
            entry.insert(index);
        } else {
            entry.remove(&index);
        }
        if entry.is_empty() {
            self.entries.remove(key);
        }
        self.persist()
    }

    fn clear(&mut self, key: &str) -> Result<(), Self::Error> {
        if self.entries.remove(key).is_some() {
            self.persist()?;
        }
        Ok(())
    }
}
