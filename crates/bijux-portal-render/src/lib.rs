#![forbid(unsafe_code)]
//! Display model for portal project pages.
//!
//! Every mapping here is total: missing optional data renders as a
//! placeholder label, never as an error. The crate performs no I/O; checklist
//! state arrives as a [`ChecklistState`] view supplied by the caller.

mod attachments;
mod checklist;
mod display;
mod labels;
mod policies;
mod sections;

pub use attachments::{attachments, filter_attachment_rows};
pub use checklist::{checklist, ChecklistState};
pub use display::{
    AttachmentRow, AttachmentsSection, CarpoolRow, ChecklistItem, ContactRow, ContactsSection,
    DisplayModel, FlightRow, HotelSection, PolicyRow, ReservationRow, SourceEmailRow, Summary,
    TravelSection,
};
pub use labels::{date_label, time_label, TBD};
pub use policies::{policies, UNRESOLVED_POLICY_PLACEHOLDER};
pub use sections::{contacts, source_emails, summary, travel};

use bijux_portal_model::{PolicyCatalog, Project};

pub const CRATE_NAME: &str = "bijux-portal-render";

/// Composes every section of a project page.
#[must_use]
pub fn render_project(
    project: &Project,
    catalog: &PolicyCatalog,
    ack: &ChecklistState,
    filter: Option<&str>,
) -> DisplayModel {
    DisplayModel {
        project_id: project.id.clone(),
        summary: summary(project),
        contacts: contacts(project),
        checklist: checklist(project, ack),
        attachments: attachments(project, filter),
        travel: travel(project),
        policies: policies(project, catalog),
        notes: project.notes.clone(),
        source_emails: source_emails(project),
        last_updated_label: date_label(project.last_updated.as_ref()),
    }
}
