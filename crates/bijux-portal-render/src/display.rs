use serde::Serialize;

/// Everything a presentation layer needs to draw one project page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayModel {
    pub project_id: String,
    pub summary: Summary,
    pub contacts: ContactsSection,
    pub checklist: Vec<ChecklistItem>,
    pub attachments: AttachmentsSection,
    pub travel: TravelSection,
    pub policies: Vec<PolicyRow>,
    pub notes: Vec<String>,
    pub source_emails: Vec<SourceEmailRow>,
    pub last_updated_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub title: String,
    pub store_line: String,
    pub address_line: String,
    pub report_time_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "rows", rename_all = "snake_case")]
#[non_exhaustive]
pub enum ContactsSection {
    Empty,
    Listed(Vec<ContactRow>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactRow {
    pub role_label: String,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChecklistItem {
    pub index: usize,
    pub text: String,
    pub acknowledged: bool,
}

/// `Empty` means the project lists no attachments at all; `NoMatches`
/// means some exist but none pass the filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "detail", rename_all = "snake_case")]
#[non_exhaustive]
pub enum AttachmentsSection {
    Empty,
    NoMatches { filter: String },
    Listed(Vec<AttachmentRow>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttachmentRow {
    pub title: String,
    pub path: String,
    /// Declared file type as written in the manifest.
    pub kind: String,
    pub type_badge: String,
    pub mandatory: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TravelSection {
    pub flight_rows: Vec<FlightRow>,
    pub hotel: HotelSection,
    pub carpool_rows: Vec<CarpoolRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlightRow {
    pub traveler: String,
    pub leg_label: String,
    pub depart_label: String,
    pub arrive_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "detail", rename_all = "snake_case")]
#[non_exhaustive]
pub enum HotelSection {
    Booked {
        name: String,
        address_line: String,
        check_in_label: String,
        check_out_label: String,
        reservations: Vec<ReservationRow>,
    },
    Pending {
        label: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReservationRow {
    pub guest: String,
    pub confirmation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CarpoolRow {
    pub driver: String,
    pub vehicle_label: String,
    pub riders_label: String,
    pub arrival_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PolicyRow {
    pub id: String,
    pub label: String,
    pub description: String,
    pub type_badge: String,
    pub path: Option<String>,
    pub updated_label: String,
    pub resolved: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceEmailRow {
    pub type_label: String,
    pub path: String,
}
