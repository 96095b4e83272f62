#![forbid(unsafe_code)]
//! Portal model SSOT.
//!
//! ```compile_fail
//! use bijux_portal_model::Severity;
//!
//! fn exhaustive_match(s: Severity) -> &'static str {
//!     match s {
//!         Severity::Warning => "w",
//!         Severity::Fatal => "f",
//!     }
//! }
//! ```

mod policy;
mod project;
mod report;
mod text;
mod timestamp;

pub use policy::{DuplicatePolicyId, Policy, PolicyCatalog};
pub use project::{
    Attachment, CarpoolEntry, Contact, Flight, FlightLeg, Hotel, PolicyReferences, Project,
    Reservation, SourceEmail, Store, Travel,
};
pub use report::{Finding, FindingKind, Severity, Validated, ValidationReport};
pub use text::{humanize, is_recommended_project_id};
pub use timestamp::{ParsedTime, Timestamp, TimestampForm};

pub const CRATE_NAME: &str = "bijux-portal-model";
