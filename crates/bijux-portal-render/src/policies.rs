use bijux_portal_model::{humanize, PolicyCatalog, Project};

use crate::display::PolicyRow;
use crate::labels::{date_label, text_or, type_badge};

pub const UNRESOLVED_POLICY_PLACEHOLDER: &str =
    "Policy details are not yet published. Ask your supervisor for the current version.";

/// One row per declared reference, in reference order.
///
/// References missing from the catalog still render, labelled with the
/// humanized id and [`UNRESOLVED_POLICY_PLACEHOLDER`].
#[must_use]
pub fn policies(project: &Project, catalog: &PolicyCatalog) -> Vec<PolicyRow> {
    project
        .policies
        .references
        .iter()
        .map(|id| match catalog.get(id) {
            Some(policy) => PolicyRow {
                id: id.clone(),
                label: text_or(Some(policy.title.as_str()), &humanize(id)),
                description: text_or(policy.description.as_deref(), UNRESOLVED_POLICY_PLACEHOLDER),
                type_badge: type_badge(&policy.kind),
                path: policy.path.clone(),
                updated_label: date_label(policy.last_updated.as_ref()),
                resolved: true,
            },
            None => PolicyRow {
                id: id.clone(),
                label: humanize(id),
                description: UNRESOLVED_POLICY_PLACEHOLDER.to_string(),
                type_badge: type_badge(""),
                path: None,
                updated_label: date_label(None),
                resolved: false,
            },
        })
        .collect()
}
