use std::path::{Component, Path, PathBuf};

use bijux_portal_core::{AssetLookup, AssetPort};
use bijux_portal_model::{FindingKind, Project, ValidationReport};
use tracing::warn;

use crate::evaluation::{index_location, join_location};

/// Filesystem-backed asset lookup.
///
/// Manifest paths are site-relative (`content/assets/docs/guide.pdf`) or
/// relative to the asset root (`docs/guide.pdf`). Either way the resolved
/// file must sit under `asset_root`.
#[derive(Debug, Clone)]
pub struct FsAssets {
    site_root: PathBuf,
    asset_root: PathBuf,
}

impl FsAssets {
    /// A relative `asset_root` is anchored at `site_root`.
    #[must_use]
    pub fn new(site_root: impl Into<PathBuf>, asset_root: impl AsRef<Path>) -> Self {
        let site_root = site_root.into();
        let asset_root = if asset_root.as_ref().is_absolute() {
            asset_root.as_ref().to_path_buf()
        } else {
            site_root.join(asset_root)
        };
        Self {
            site_root,
            asset_root,
        }
    }

    #[must_use]
    pub fn asset_root(&self) -> &Path {
        &self.asset_root
    }

    fn resolve(&self, manifest_path: &str) -> Option<PathBuf> {
        let rel = Path::new(manifest_path.trim());
        if rel.as_os_str().is_empty() {
            return None;
        }
        if rel
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
        {
            return None;
        }
        let from_site = self.site_root.join(rel);
        if from_site.starts_with(&self.asset_root) {
            return Some(from_site);
        }
        Some(self.asset_root.join(rel))
    }
}

impl AssetPort for FsAssets {
    fn lookup(&self, manifest_path: &str) -> AssetLookup {
        match self.resolve(manifest_path) {
            None => AssetLookup::OutsideRoot,
            Some(path) if path.exists() => AssetLookup::Present,
            Some(_) => AssetLookup::Missing,
        }
    }
}

/// Resolves every attachment and source-email path through `assets`.
///
/// Missing files and paths escaping the asset root are `BrokenLink`
/// warnings. Empty paths are skipped; the validator already reported them.
pub fn check_links(project: &Project, assets: &impl AssetPort) -> ValidationReport {
    let mut report = ValidationReport::new();
    let attachment_paths = project
        .attachments
        .iter()
        .enumerate()
        .map(|(i, a)| (index_location("attachments", i), a.path.as_str()));
    let email_paths = project
        .source_emails
        .iter()
        .enumerate()
        .map(|(i, e)| (index_location("source_emails", i), e.path.as_str()));

    for (location, path) in attachment_paths.chain(email_paths) {
        if path.trim().is_empty() {
            continue;
        }
        let message = match assets.lookup(path) {
            AssetLookup::Present => continue,
            AssetLookup::Missing => format!("`{path}` does not exist under the asset root"),
            AssetLookup::OutsideRoot => format!("`{path}` escapes the asset root"),
        };
        warn!(project = %project.id, path, "broken asset link");
        report.record(
            FindingKind::BrokenLink,
            join_location(&location, "path"),
            message,
        );
    }
    report
}
