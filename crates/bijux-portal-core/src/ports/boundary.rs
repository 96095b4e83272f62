use std::collections::{BTreeMap, BTreeSet};
use std::convert::Infallible;

/// Outcome of resolving a manifest path against the asset tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetLookup {
    Present,
    Missing,
    OutsideRoot,
}

/// Resolves attachment and source-email paths. Implementations own all
/// filesystem access; validation only sees the lookup result.
pub trait AssetPort {
    fn lookup(&self, manifest_path: &str) -> AssetLookup;
}

/// Persistence for checklist acknowledgments, keyed by
/// [`checklist_storage_key`]. Owned by the display layer.
pub trait AckStore {
    type Error;

    fn acknowledged(&self, key: &str) -> Result<BTreeSet<usize>, Self::Error>;
    fn set_acknowledged(&mut self, key: &str, index: usize, value: bool)
        -> Result<(), Self::Error>;
    fn clear(&mut self, key: &str) -> Result<(), Self::Error>;
}

#[must_use]
pub fn checklist_storage_key(project_id: &str) -> String {
    format!("checklist:{project_id}")
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryAckStore {
    entries: BTreeMap<String, BTreeSet<usize>>,
}

impl MemoryAckStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl AckStore for MemoryAckStore {
    type Error = Infallible;

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
        Ok(())
    }

    fn clear(&mut self, key: &str) -> Result<(), Self::Error> {
        self.entries.remove(key);
        Ok(())
    }
}
