// SPDX-License-Identifier: Apache-2.0

use std::path::Path;

use serde_json::{json, Value};
use walkdir::WalkDir;

use crate::job::ScaffoldJob;
use crate::IngestError;

/// Shared documents linked from almost every project, relative to the
/// asset root: `(path, title, mandatory)`.
pub const CORE_ATTACHMENTS: &[(&str, &str, bool)] = &[
    (
        "docs/advantage-travel-policy-2025-04-14.pdf",
        "Advantage Travel Policy",
        true,
    ),
    (
        "docs/timekeeping-change-merchandiser-guide.pdf",
        "Merchandiser Timekeeping Guide",
        true,
    ),
    (
        "docs/travel-policy-call-outs.pdf",
        "Travel Policy Call Outs",
        true,
    ),
    (
        "docs/leads-or-elites-cannot-report-your-time.pdf",
        "Time Reporting Responsibilities",
        true,
    ),
    ("docs/to-call-or-email.pdf", "Communication Guide", false),
];

const EMAIL_EXTENSIONS: &[&str] = &["pdf", "eml"];

/// Classifies an archived email by keywords in its file stem.
#[must_use]
pub fn guess_email_type(path: &Path) -> &'static str {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    let table: &[(&str, &str)] = &[
        ("carpool", "carpool"),
        ("flight", "flights"),
        ("hotel", "hotel"),
        ("schedule", "schedule"),
        ("welcome", "welcome"),
        ("ready", "orientation"),
    ];
    table
        .iter()
        .find(|(keyword, _)| stem.contains(keyword))
        .map_or("reference", |(_, kind)| *kind)
}

/// Core attachments that exist under the asset root, in table order.
#[must_use]
pub fn collect_attachments(job: &ScaffoldJob) -> Vec<Value> {
    CORE_ATTACHMENTS
        .iter()
        .filter_map(|(rel, title, mandatory)| {
            let absolute = job.assets_root.join(rel);
            if !absolute.is_file() {
                return None;
            }
            let kind = absolute
                .extension()
                .map(|e| e.to_string_lossy().into_owned())
                .unwrap_or_default();
            Some(json!({
                "title": title,
                "path": job.site_relative(&absolute),
                "type": kind,
                "mandatory": mandatory,
            }))
        })
        .collect()
}

/// Every `.pdf` / `.eml` below the project's email folder, sorted by path.
pub fn collect_source_emails(job: &ScaffoldJob) -> Result<Vec<Value>, IngestError> {
    if !job.emails_dir.is_dir() {
        return Ok(Vec::new());
    }
    let mut emails = Vec::new();
    for entry in WalkDir::new(&job.emails_dir)
        .min_depth(1)
        .follow_links(false)
    {
        let entry = entry.map_err(|e| {
            IngestError::Io(format!(
                "walk {} failed: {e}",
                job.emails_dir.display()
            ))
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let is_email = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .is_some_and(|e| EMAIL_EXTENSIONS.contains(&e.as_str()));
        if !is_email {
            continue;
        }
        emails.push((
            job.site_relative(path),
            guess_email_type(path),
        ));
    }
    emails.sort();
    Ok(emails
        .into_iter()
        .map(|(path, kind)| json!({ "type": kind, "path": path }))
        .collect())
}
