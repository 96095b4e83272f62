// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]
//! Starter manifest scaffolder.
//!
//! Scans an asset root for the shared policy documents and a project's
//! archived emails, then emits a placeholder-filled manifest for a human to
//! finish. The output is a starting point, not a validated manifest.

mod collect;
mod job;
mod logging;
mod manifest;
mod write;

use std::fmt::{Display, Formatter};
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde_json::Value;

pub use collect::{
    collect_attachments, collect_source_emails, guess_email_type, CORE_ATTACHMENTS,
};
pub use job::ScaffoldJob;
pub use logging::{IngestEvent, IngestLog, IngestStage};
pub use manifest::{build_manifest, DEFAULT_POLICY_REFERENCES, DEFAULT_REQUIRED_ACTIONS};
pub use write::render_manifest;

pub const CRATE_NAME: &str = "bijux-portal-ingest";

/// Scaffolding failure. `InvalidOptions` is a caller mistake; the other
/// variants are environment failures.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum IngestError {
    InvalidOptions(String),
    Io(String),
    Encode(String),
}

impl IngestError {
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidOptions(message) | Self::Io(message) | Self::Encode(message) => message,
        }
    }

    #[must_use]
    pub fn is_invalid_options(&self) -> bool {
        matches!(self, Self::InvalidOptions(_))
    }
}

impl Display for IngestError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for IngestError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

impl OutputFormat {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Yaml => "yaml",
            Self::Json => "json",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreOverrides {
    pub number: Option<String>,
    pub name: Option<String>,
    pub address: Option<String>,
    pub report_time: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactOverrides {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HotelOverrides {
    pub name: Option<String>,
    pub address: Option<String>,
    pub check_in: Option<String>,
    pub check_out: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldOptions {
    /// Directory manifest paths are written relative to.
    pub site_root: PathBuf,
    pub project_id: String,
    /// Directory name under `<assets_root>/projects`; defaults to the
    /// lowercased project id.
    pub project_slug: Option<String>,
    pub title: Option<String>,
    pub store: StoreOverrides,
    pub supervisor: ContactOverrides,
    pub lead: ContactOverrides,
    pub hotel: HotelOverrides,
    /// Relative paths are anchored at `site_root`.
    pub assets_root: PathBuf,
    /// Defaults to `data/projects/<slug>.<ext>` under `site_root`.
    pub output: Option<PathBuf>,
    pub format: OutputFormat,
    pub dry_run: bool,
}

impl Default for ScaffoldOptions {
    fn default() -> Self {
        Self {
            site_root: PathBuf::from("."),
            project_id: String::new(),
            project_slug: None,
            title: None,
            store: StoreOverrides::default(),
            supervisor: ContactOverrides::default(),
            lead: ContactOverrides::default(),
            hotel: HotelOverrides::default(),
            assets_root: PathBuf::from("content/assets"),
            output: None,
            format: OutputFormat::Yaml,
            dry_run: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScaffoldResult {
    pub manifest: Value,
    pub rendered: String,
    pub output_path: PathBuf,
    /// False for dry runs.
    pub written: bool,
    pub events: Vec<IngestEvent>,
}

/// Builds, renders and (unless `dry_run`) writes a starter manifest.
///
/// `generated_at` becomes the manifest's `last_updated`.
pub fn scaffold_manifest(
    opts: &ScaffoldOptions,
    generated_at: DateTime<Utc>,
) -> Result<ScaffoldResult, IngestError> {
    let mut log = IngestLog::default();
    let job = ScaffoldJob::from_options(opts)?;
    log.emit(
        IngestStage::Prepare,
        "scaffold.start",
        [
            ("project_id", job.project_id.clone()),
            ("slug", job.project_slug.clone()),
        ],
    );

    let manifest = build_manifest(&job, opts, generated_at, &mut log)?;
    let rendered = render_manifest(&manifest, opts.format)?;
    log.emit(
        IngestStage::Render,
        "scaffold.render",
        [
            ("format", opts.format.as_str().to_string()),
            ("bytes", rendered.len().to_string()),
        ],
    );

    let written = if opts.dry_run {
        false
    } else {
        write::write_manifest(&job.output_path, &rendered)?;
        log.emit(
            IngestStage::Persist,
            "scaffold.write",
            [("path", job.output_path.display().to_string())],
        );
        true
    };
    log.emit(IngestStage::Finalize, "scaffold.complete", []);

    Ok(ScaffoldResult {
        manifest,
        rendered,
        output_path: job.output_path,
        written,
        events: log.into_events(),
    })
}
