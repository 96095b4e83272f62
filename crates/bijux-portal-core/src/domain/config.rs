use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::ConfigPathScope;

const CONFIG_FILE_NAME: &str = "portal.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(pub String);

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ConfigError {}

/// Contents of `portal.toml`. Every table and key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct PortalConfig {
    pub paths: PathsConfig,
    pub render: RenderConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct PathsConfig {
    pub asset_root: PathBuf,
    pub projects_dir: PathBuf,
    pub policy_catalog: PathBuf,
    pub checklist_state: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            asset_root: PathBuf::from("content/assets"),
            projects_dir: PathBuf::from("data/projects"),
            policy_catalog: PathBuf::from("data/policies.yaml"),
            checklist_state: PathBuf::from(".bijux/checklist-state.json"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct RenderConfig {
    pub default_filter: Option<String>,
}

impl PortalConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let cfg: Self =
            toml::from_str(raw).map_err(|e| ConfigError(format!("parse portal config failed: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, path) in [
            ("paths.asset_root", &self.paths.asset_root),
            ("paths.projects_dir", &self.paths.projects_dir),
            ("paths.policy_catalog", &self.paths.policy_catalog),
            ("paths.checklist_state", &self.paths.checklist_state),
        ] {
            if path.as_os_str().is_empty() {
                return Err(ConfigError(format!("{key} must not be empty")));
            }
        }
        Ok(())
    }

    /// Anchors every relative path at `root`; absolute paths are kept.
    #[must_use]
    pub fn anchored_at(&self, root: &Path) -> Self {
        let anchor = |p: &PathBuf| {
            if p.is_absolute() {
                p.clone()
            } else {
                root.join(p)
            }
        };
        Self {
            paths: PathsConfig {
                asset_root: anchor(&self.paths.asset_root),
                projects_dir: anchor(&self.paths.projects_dir),
                policy_catalog: anchor(&self.paths.policy_catalog),
                checklist_state: anchor(&self.paths.checklist_state),
            },
            render: self.render.clone(),
        }
    }
}

fn non_empty_env(name: &str) -> Option<PathBuf> {
    let value = std::env::var(name).ok()?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(PathBuf::from(trimmed))
    }
}

/// Where `portal.toml` lives for a scope. The explicit
/// `BIJUX_PORTAL_CONFIG` override applies to both scopes.
#[must_use]
pub fn resolve_portal_config_path(scope: ConfigPathScope) -> PathBuf {
    if let Some(explicit) = non_empty_env(crate::ENV_BIJUX_PORTAL_CONFIG) {
        return explicit;
    }
    match scope {
        ConfigPathScope::User => {
            if let Some(xdg) = non_empty_env("XDG_CONFIG_HOME") {
                return xdg.join("bijux").join(CONFIG_FILE_NAME);
            }
            if let Some(home) = non_empty_env("HOME") {
                return home.join(".config").join("bijux").join(CONFIG_FILE_NAME);
            }
            PathBuf::from(".bijux").join(CONFIG_FILE_NAME)
        }
        ConfigPathScope::Workspace => PathBuf::from(".bijux").join(CONFIG_FILE_NAME),
    }
}
