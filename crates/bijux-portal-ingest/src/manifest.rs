// SPDX-License-Identifier: Apache-2.0

use bijux_portal_model::humanize;
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{json, Value};

use crate::collect::{collect_attachments, collect_source_emails};
use crate::job::ScaffoldJob;
use crate::logging::{IngestLog, IngestStage};
use crate::{IngestError, ScaffoldOptions};

pub const DEFAULT_POLICY_REFERENCES: &[&str] = &["dress-code", "travel-policy", "time-reporting"];

pub const DEFAULT_REQUIRED_ACTIONS: &[&str] = &[
    "Review travel policy and confirm itineraries.",
    "Contact assigned driver 24h prior to departure.",
    "Submit PROD time immediately after each shift.",
];

const REVIEW_NOTES: &[&str] = &[
    "Generated by bijux-portal ingest; review before publishing.",
    "Populate travel.flights, travel.hotel.reservations, and travel.carpool with confirmed details.",
];

fn or(value: Option<&str>, placeholder: &str) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => placeholder.to_string(),
    }
}

/// Assembles the starter manifest in field order.
pub fn build_manifest(
    job: &ScaffoldJob,
    opts: &ScaffoldOptions,
    generated_at: DateTime<Utc>,
    log: &mut IngestLog,
) -> Result<Value, IngestError> {
    let mut attachments = collect_attachments(job);
    if attachments.is_empty() {
        attachments.push(json!({
            "title": "Update docs under content/assets/docs before publishing",
            "path": job.site_relative(&job.assets_root.join("docs")),
            "type": "folder",
            "mandatory": false,
        }));
    }
    let mut source_emails = collect_source_emails(job)?;
    log.emit(
        IngestStage::Collect,
        "scaffold.collect",
        [
            ("attachments", attachments.len().to_string()),
            ("source_emails", source_emails.len().to_string()),
        ],
    );
    if source_emails.is_empty() {
        source_emails.push(json!({
            "type": "schedule",
            "path": job.site_relative(&job.emails_dir),
        }));
    }

    let store = &opts.store;
    let hotel = &opts.hotel;
    Ok(json!({
        "id": job.project_id,
        "title": or(opts.title.as_deref(), &humanize(&job.project_slug)),
        "store": {
            "number": or(store.number.as_deref(), "00000"),
            "name": or(store.name.as_deref(), "TBD Store Name"),
            "address": or(store.address.as_deref(), "Provide the full street address"),
            "report_time": or(store.report_time.as_deref(), "YYYY-MM-DDTHH:MM:SS-07:00"),
        },
        "contacts": {
            "supervisor": {
                "name": or(opts.supervisor.name.as_deref(), "Supervisor Name"),
                "phone": or(opts.supervisor.phone.as_deref(), "+1-000-000-0000"),
                "email": or(opts.supervisor.email.as_deref(), "supervisor@example.com"),
            },
            "lead": {
                "name": or(opts.lead.name.as_deref(), "Lead Name"),
                "phone": or(opts.lead.phone.as_deref(), "+1-000-000-0000"),
                "email": or(opts.lead.email.as_deref(), "lead@example.com"),
            },
        },
        "travel": {
            "flights": [],
            "hotel": {
                "name": or(hotel.name.as_deref(), "Hotel TBD"),
                "address": or(hotel.address.as_deref(), "Provide hotel address"),
                "check_in": or(hotel.check_in.as_deref(), "YYYY-MM-DD"),
                "check_out": or(hotel.check_out.as_deref(), "YYYY-MM-DD"),
                "reservations": [],
            },
            "carpool": [],
        },
        "policies": { "references": DEFAULT_POLICY_REFERENCES },
        "required_actions": DEFAULT_REQUIRED_ACTIONS,
        "attachments": attachments,
        "source_emails": source_emails,
        "last_updated": generated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        "notes": REVIEW_NOTES,
    }))
}
