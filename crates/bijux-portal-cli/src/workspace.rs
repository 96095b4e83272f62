use std::path::{Path, PathBuf};

use bijux_portal_core::{
    resolve_portal_config_path, ConfigPathScope, ErrorCode, PortalConfig, ResultExt,
    ENV_BIJUX_PORTAL_CONFIG,
};

use crate::CliError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ConfigSource {
    Flag,
    Env,
    Workspace,
    User,
    Defaults,
}

impl ConfigSource {
    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            Self::Flag => "flag",
            Self::Env => "env",
            Self::Workspace => "workspace",
            Self::User => "user",
            Self::Defaults => "defaults",
        }
    }
}

/// Effective configuration with every path already anchored.
#[derive(Debug, Clone)]
pub(crate) struct Workspace {
    pub root: PathBuf,
    pub config_path: Option<PathBuf>,
    pub source: ConfigSource,
    pub config: PortalConfig,
}

/// Discovery order: `--config`, `BIJUX_PORTAL_CONFIG`, `.bijux/portal.toml`,
/// the user config, built-in defaults. Explicit paths must exist; discovered
/// ones are skipped when absent.
pub(crate) fn load_workspace(explicit: Option<&Path>) -> Result<Workspace, CliError> {
    let cwd = std::env::current_dir()
        .with_context("resolve current directory")
        .map_err(|e| CliError::new(ErrorCode::ReadFailed, e.to_string()))?;

    let env_override = std::env::var(ENV_BIJUX_PORTAL_CONFIG)
        .ok()
        .filter(|v| !v.trim().is_empty());

    let (path, source) = if let Some(path) = explicit {
        (path.to_path_buf(), ConfigSource::Flag)
    } else if env_override.is_some() {
        (
            resolve_portal_config_path(ConfigPathScope::Workspace),
            ConfigSource::Env,
        )
    } else {
        let workspace = cwd.join(resolve_portal_config_path(ConfigPathScope::Workspace));
        let user = resolve_portal_config_path(ConfigPathScope::User);
        if workspace.is_file() {
            (workspace, ConfigSource::Workspace)
        } else if user.is_file() {
            (user, ConfigSource::User)
        } else {
            tracing::debug!(root = %cwd.display(), "no portal.toml found; using defaults");
            return Ok(Workspace {
                config: PortalConfig::default().anchored_at(&cwd),
                root: cwd,
                config_path: None,
                source: ConfigSource::Defaults,
            });
        }
    };

    if !path.is_file() {
        return Err(
            CliError::new(ErrorCode::ConfigInvalid, "config file does not exist")
                .with_detail("path", path.display().to_string())
                .with_detail("source", source.as_str()),
        );
    }
    let raw = std::fs::read_to_string(&path).map_err(|e| {
        CliError::new(ErrorCode::ReadFailed, "failed to read config file")
            .with_detail("path", path.display().to_string())
            .with_detail("error", e.to_string())
    })?;
    let config = PortalConfig::from_toml_str(&raw).map_err(|e| {
        CliError::new(ErrorCode::ConfigInvalid, e.0).with_detail("path", path.display().to_string())
    })?;

    let root = match source {
        ConfigSource::User => cwd,
        _ => config_root(&path, &cwd),
    };
    tracing::debug!(
        path = %path.display(),
        source = source.as_str(),
        root = %root.display(),
        "loaded portal config"
    );
    Ok(Workspace {
        config: config.anchored_at(&root),
        root,
        config_path: Some(path),
        source,
    })
}

/// Directory relative config paths resolve against: the config's own
/// directory, or the project directory when the file sits in `.bijux/`.
fn config_root(config_path: &Path, cwd: &Path) -> PathBuf {
    let parent = match config_path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => return cwd.to_path_buf(),
    };
    if parent.file_name().is_some_and(|name| name == ".bijux") {
        match parent.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => cwd.to_path_buf(),
        }
    } else {
        parent.to_path_buf()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_root_strips_dot_bijux_directory() {
        let cwd = Path::new("/work");
        assert_eq!(
            config_root(Path::new("/srv/site/.bijux/portal.toml"), cwd),
            PathBuf::from("/srv/site")
        );
        assert_eq!(
            config_root(Path::new(".bijux/portal.toml"), cwd),
            PathBuf::from("/work")
        );
    }

    #[test]
    fn config_root_uses_file_directory_otherwise() {
        let cwd = Path::new("/work");
        assert_eq!(
            config_root(Path::new("fixtures/portal.toml"), cwd),
            PathBuf::from("fixtures")
        );
        assert_eq!(config_root(Path::new("portal.toml"), cwd), PathBuf::from("/work"));
    }
}
