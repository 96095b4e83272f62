use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::timestamp::Timestamp;

/// One onboarding or travel assignment, as published in a manifest.
///
/// Required text fields hold an empty string when the source omitted them
/// (the validator reports that); optional values are `None` or empty
/// collections, never absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub store: Store,
    #[serde(default)]
    pub contacts: IndexMap<String, Contact>,
    #[serde(default)]
    pub travel: Travel,
    #[serde(default)]
    pub policies: PolicyReferences,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    #[serde(default)]
    pub source_emails: Vec<SourceEmail>,
    #[serde(default)]
    pub required_actions: Vec<String>,
    #[serde(default)]
    pub notes: Vec<String>,
    #[serde(default)]
    pub last_updated: Option<Timestamp>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Store {
    #[serde(default)]
    pub number: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    pub address: String,
    #[serde(default)]
    pub report_time: Option<Timestamp>,
    #[serde(default)]
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Travel {
    #[serde(default)]
    pub flights: Vec<Flight>,
    #[serde(default)]
    pub hotel: Option<Hotel>,
    #[serde(default)]
    pub carpool: Vec<CarpoolEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Flight {
    pub traveler: String,
    #[serde(default)]
    pub legs: Vec<FlightLeg>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FlightLeg {
    pub depart_airport: String,
    pub arrive_airport: String,
    #[serde(default)]
    pub depart_time: Option<Timestamp>,
    #[serde(default)]
    pub arrive_time: Option<Timestamp>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Hotel {
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub check_in: Option<Timestamp>,
    #[serde(default)]
    pub check_out: Option<Timestamp>,
    #[serde(default)]
    pub reservations: Vec<Reservation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Reservation {
    pub guest: String,
    pub confirmation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CarpoolEntry {
    pub driver: String,
    #[serde(default)]
    pub vehicle: Option<String>,
    #[serde(default)]
    pub riders: Vec<String>,
    #[serde(default)]
    pub arrival_time: Option<Timestamp>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PolicyReferences {
    #[serde(default)]
    pub references: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Attachment {
    pub title: String,
    pub path: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub mandatory: bool,
}

/// Provenance pointer to the email a manifest was seeded from. `kind` is a
/// category such as `flights` or `carpool`, not a file type.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SourceEmail {
    #[serde(rename = "type")]
    pub kind: String,
    pub path: String,
}

impl Project {
    /// A project with only the required fields set.
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            store: Store {
                address: address.into(),
                ..Store::default()
            },
            contacts: IndexMap::new(),
            travel: Travel::default(),
            policies: PolicyReferences::default(),
            attachments: Vec::new(),
            source_emails: Vec::new(),
            required_actions: Vec::new(),
            notes: Vec::new(),
            last_updated: None,
        }
    }
}
