// SPDX-License-Identifier: Apache-2.0

use std::path::{Component, Path, PathBuf};

use crate::{IngestError, ScaffoldOptions};

/// Resolved locations for one scaffold run.
#[derive(Debug, Clone)]
pub struct ScaffoldJob {
    pub project_id: String,
    pub project_slug: String,
    pub site_root: PathBuf,
    pub assets_root: PathBuf,
    pub emails_dir: PathBuf,
    pub output_path: PathBuf,
}

impl ScaffoldJob {
    pub fn from_options(opts: &ScaffoldOptions) -> Result<Self, IngestError> {
        let project_id = opts.project_id.trim().to_uppercase();
        if project_id.is_empty() {
            return Err(IngestError::InvalidOptions("project id is required".to_string()));
        }
        let project_slug = match opts.project_slug.as_deref().map(str::trim) {
            Some(slug) if !slug.is_empty() => slug.to_string(),
            _ => opts.project_id.trim().to_lowercase(),
        };
        if !is_single_segment(&project_slug) {
            return Err(IngestError::InvalidOptions(format!(
                "project slug must be a single directory name: {project_slug}"
            )));
        }

        let site_root = opts.site_root.clone();
        let assets_root = anchor(&site_root, &opts.assets_root);
        let emails_dir = assets_root
            .join("projects")
            .join(&project_slug)
            .join("emails");
        let output_path = match &opts.output {
            Some(path) => anchor(&site_root, path),
            None => site_root
                .join("data")
                .join("projects")
                .join(format!("{project_slug}.{}", opts.format.as_str())),
        };

        Ok(Self {
            project_id,
            project_slug,
            site_root,
            assets_root,
            emails_dir,
            output_path,
        })
    }

    /// `path` relative to the site root with `/` separators, as manifests
    /// store it. Paths outside the site root are kept whole.
    #[must_use]
    pub fn site_relative(&self, path: &Path) -> String {
        let rel = path.strip_prefix(&self.site_root).unwrap_or(path);
        rel.components()
            .filter_map(|c| match c {
                Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
                Component::RootDir => Some(String::new()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("/")
    }
}

fn anchor(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

fn is_single_segment(slug: &str) -> bool {
    let mut components = Path::new(slug).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_defaults_to_lowercased_id() {
        let job = ScaffoldJob::from_options(&ScaffoldOptions {
            site_root: PathBuf::from("/srv/site"),
            project_id: "plv-2025-08-24".to_string(),
            ..ScaffoldOptions::default()
        })
        .expect("job");
        assert_eq!(job.project_id, "PLV-2025-08-24");
        assert_eq!(job.project_slug, "plv-2025-08-24");
        assert_eq!(
            job.emails_dir,
            PathBuf::from("/srv/site/content/assets/projects/plv-2025-08-24/emails")
        );
        assert_eq!(
            job.output_path,
            PathBuf::from("/srv/site/data/projects/plv-2025-08-24.yaml")
        );
        assert_eq!(
            job.site_relative(Path::new("/srv/site/content/assets/docs/a.pdf")),
            "content/assets/docs/a.pdf"
        );
    }

    #[test]
    fn slugs_with_separators_are_rejected() {
        for slug in ["../escape", "a/b", ".."] {
            let err = ScaffoldJob::from_options(&ScaffoldOptions {
                project_id: "PLV-2025-08-24".to_string(),
                project_slug: Some(slug.to_string()),
                ..ScaffoldOptions::default()
            })
            .expect_err("slug must be rejected");
            assert!(err.is_invalid_options(), "{slug}: {err}");
            assert!(err.message().contains("single directory"), "{slug}: {err}");
        }
        let err = ScaffoldJob::from_options(&ScaffoldOptions::default()).expect_err("no id");
        assert_eq!(err, IngestError::InvalidOptions("project id is required".to_string()));
    }
}
