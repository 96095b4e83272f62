use bijux_portal_model::Project;

use crate::display::{AttachmentRow, AttachmentsSection};
use crate::labels::{text_or, type_badge};

/// Attachments in manifest order, optionally narrowed by `filter`.
///
/// A blank filter is the same as no filter.
#[must_use]
pub fn attachments(project: &Project, filter: Option<&str>) -> AttachmentsSection {
    if project.attachments.is_empty() {
        return AttachmentsSection::Empty;
    }
    let rows: Vec<AttachmentRow> = project
        .attachments
        .iter()
        .map(|a| AttachmentRow {
            title: text_or(Some(a.title.as_str()), &a.path),
            path: a.path.clone(),
            kind: a.kind.clone(),
            type_badge: type_badge(&a.kind),
            mandatory: a.mandatory,
        })
        .collect();
    let needle = filter.map(str::trim).unwrap_or_default();
    if needle.is_empty() {
        return AttachmentsSection::Listed(rows);
    }
    let matched = filter_attachment_rows(&rows, needle);
    if matched.is_empty() {
        AttachmentsSection::NoMatches {
            filter: needle.to_string(),
        }
    } else {
        AttachmentsSection::Listed(matched)
    }
}

/// Case-insensitive substring match on title or declared type.
#[must_use]
pub fn filter_attachment_rows(rows: &[AttachmentRow], filter: &str) -> Vec<AttachmentRow> {
    let needle = filter.trim().to_lowercase();
    rows.iter()
        .filter(|row| {
            needle.is_empty()
                || row.title.to_lowercase().contains(&needle)
                || row.kind.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}
