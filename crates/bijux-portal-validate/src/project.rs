use std::collections::BTreeSet;

use bijux_portal_model::{
    is_recommended_project_id, Attachment, CarpoolEntry, Contact, FindingKind, Flight, FlightLeg,
    Hotel, PolicyCatalog, PolicyReferences, Project, Reservation, SourceEmail, Store,
    TimestampForm, Travel, Validated, ValidationReport,
};
use indexmap::IndexMap;
use serde_json::Value;
use tracing::debug;

use crate::evaluation::{
    evaluate_required_fields, index_location, join_location, PROJECT_REQUIRED_FIELDS,
};
use crate::limits::{FILE_TYPE_EXTENSIONS, FOLDER_TYPES, SOURCE_DOCUMENT_EXTENSIONS};
use crate::raw::{FieldReader, Object};

/// Validates one raw project manifest against the policy catalog.
///
/// Every finding is non-fatal: the returned project is always the
/// best-effort normalization and the report lists every defect found. `Err`
/// is returned only when `raw` is not a mapping at all.
pub fn validate_project(
    raw: &Value,
    catalog: &PolicyCatalog,
) -> Result<Validated<Project>, ValidationReport> {
    let mut report = ValidationReport::new();
    let Some(root) = raw.as_object() else {
        report.record(
            FindingKind::UnexpectedShape,
            "(root)",
            "project manifest must be a mapping",
        );
        return Err(report);
    };

    evaluate_required_fields(raw, PROJECT_REQUIRED_FIELDS, "", &mut report);
    let project = {
        let mut reader = FieldReader::new(&mut report);
        read_project(&mut reader, root, catalog)
    };

    debug!(
        project = %project.id,
        findings = report.len(),
        "validated project manifest"
    );
    Ok(Validated::new(project, report))
}

/// Opt-in lint for the recommended `PREFIX-YYYY-MM-DD` id shape.
///
/// Free-form ids are valid manifests, so this never runs as part of
/// [`validate_project`]; callers ask for it explicitly.
#[must_use]
pub fn lint_project_id(project: &Project) -> ValidationReport {
    let mut report = ValidationReport::new();
    if !project.id.is_empty() && !is_recommended_project_id(&project.id) {
        report.record(
            FindingKind::IdFormat,
            "id",
            format!(
                "`{}` does not follow the PREFIX-YYYY-MM-DD convention",
                project.id
            ),
        );
    }
    report
}

fn read_project(reader: &mut FieldReader<'_>, root: &Object, catalog: &PolicyCatalog) -> Project {
    let id = reader.text(root, "id", "").unwrap_or_default();

    Project {
        title: reader.text(root, "title", "").unwrap_or_default(),
        store: read_store(reader, root),
        contacts: read_contacts(reader, root),
        travel: read_travel(reader, root),
        policies: read_policy_references(reader, root, catalog),
        attachments: read_attachments(reader, root),
        source_emails: read_source_emails(reader, root),
        required_actions: reader.indexed_text_list(root, "required_actions", ""),
        notes: reader.text_list(root, "notes", ""),
        last_updated: reader.timestamp(root, "last_updated", "", TimestampForm::DateOrDateTime),
        id,
    }
}

fn read_store(reader: &mut FieldReader<'_>, root: &Object) -> Store {
    let Some(store) = reader.object(root, "store", "") else {
        return Store::default();
    };
    let prefix = "store";
    Store {
        number: reader.text(store, "number", prefix),
        name: reader.text(store, "name", prefix),
        address: reader.text(store, "address", prefix).unwrap_or_default(),
        report_time: reader.timestamp(store, "report_time", prefix, TimestampForm::DateTime),
        notes: reader.text_list(store, "notes", prefix),
    }
}

fn read_contacts(reader: &mut FieldReader<'_>, root: &Object) -> IndexMap<String, Contact> {
    let mut contacts = IndexMap::new();
    let Some(map) = reader.object(root, "contacts", "") else {
        return contacts;
    };
    for role in map.keys() {
        let Some(entry) = reader.object(map, role, "contacts") else {
            continue;
        };
        let prefix = join_location("contacts", role);
        contacts.insert(
            role.clone(),
            Contact {
                name: reader.required_text(entry, "name", &prefix),
                phone: reader.text(entry, "phone", &prefix),
                email: reader.text(entry, "email", &prefix),
            },
        );
    }
    contacts
}

fn read_travel(reader: &mut FieldReader<'_>, root: &Object) -> Travel {
    let Some(travel) = reader.object(root, "travel", "") else {
        return Travel::default();
    };
    let prefix = "travel";

    let mut flights = Vec::new();
    for (location, flight) in reader.objects(travel, "flights", prefix) {
        let legs = reader
            .objects(flight, "legs", &location)
            .into_iter()
            .map(|(leg_location, leg)| FlightLeg {
                depart_airport: reader.required_text(leg, "depart_airport", &leg_location),
                arrive_airport: reader.required_text(leg, "arrive_airport", &leg_location),
                depart_time: reader.timestamp(
                    leg,
                    "depart_time",
                    &leg_location,
                    TimestampForm::DateTime,
                ),
                arrive_time: reader.timestamp(
                    leg,
                    "arrive_time",
                    &leg_location,
                    TimestampForm::DateTime,
                ),
            })
            .collect();
        flights.push(Flight {
            traveler: reader.required_text(flight, "traveler", &location),
            legs,
        });
    }

    let hotel = reader.object(travel, "hotel", prefix).map(|hotel| {
        let hotel_prefix = join_location(prefix, "hotel");
        let reservations = reader
            .objects(hotel, "reservations", &hotel_prefix)
            .into_iter()
            .map(|(location, r)| Reservation {
                guest: reader.required_text(r, "guest", &location),
                confirmation: reader.required_text(r, "confirmation", &location),
            })
            .collect();
        Hotel {
            name: reader.required_text(hotel, "name", &hotel_prefix),
            address: reader.text(hotel, "address", &hotel_prefix),
            check_in: reader.timestamp(
                hotel,
                "check_in",
                &hotel_prefix,
                TimestampForm::DateOrDateTime,
            ),
            check_out: reader.timestamp(
                hotel,
                "check_out",
                &hotel_prefix,
                TimestampForm::DateOrDateTime,
            ),
            reservations,
        }
    });

    let carpool = reader
        .objects(travel, "carpool", prefix)
        .into_iter()
        .map(|(location, entry)| CarpoolEntry {
            driver: reader.required_text(entry, "driver", &location),
            vehicle: reader.text(entry, "vehicle", &location),
            riders: reader.text_list(entry, "riders", &location),
            arrival_time: reader.timestamp(
                entry,
                "arrival_time",
                &location,
                TimestampForm::DateTime,
            ),
        })
        .collect();

    Travel {
        flights,
        hotel,
        carpool,
    }
}

fn read_policy_references(
    reader: &mut FieldReader<'_>,
    root: &Object,
    catalog: &PolicyCatalog,
) -> PolicyReferences {
    let Some(policies) = reader.object(root, "policies", "") else {
        return PolicyReferences::default();
    };
    let base = join_location("policies", "references");
    let mut seen = BTreeSet::new();
    let mut references = Vec::new();
    for (i, id) in reader.text_list(policies, "references", "policies").into_iter().enumerate() {
        let location = index_location(&base, i);
        if !seen.insert(id.clone()) {
            reader.report().record(
                FindingKind::DuplicateReference,
                location,
                format!("policy `{id}` is referenced more than once"),
            );
            continue;
        }
        if !catalog.contains(&id) {
            reader.report().record(
                FindingKind::UnresolvedPolicyReference,
                location,
                format!("policy `{id}` is not in the policy catalog"),
            );
        }
        references.push(id);
    }
    PolicyReferences { references }
}

fn read_attachments(reader: &mut FieldReader<'_>, root: &Object) -> Vec<Attachment> {
    reader
        .objects(root, "attachments", "")
        .into_iter()
        .map(|(location, entry)| {
            let attachment = Attachment {
                title: reader.required_text(entry, "title", &location),
                path: reader.required_text(entry, "path", &location),
                kind: reader.required_text(entry, "type", &location),
                mandatory: reader.flag(entry, "mandatory", &location),
            };
            if !attachment.path.is_empty() && !attachment.kind.is_empty() {
                if let Err(message) = file_type_matches(&attachment.kind, &attachment.path) {
                    reader.report().record(
                        FindingKind::TypeMismatch,
                        join_location(&location, "path"),
                        message,
                    );
                }
            }
            attachment
        })
        .collect()
}

fn read_source_emails(reader: &mut FieldReader<'_>, root: &Object) -> Vec<SourceEmail> {
    reader
        .objects(root, "source_emails", "")
        .into_iter()
        .map(|(location, entry)| {
            let email = SourceEmail {
                kind: reader.text(entry, "type", &location).unwrap_or_default(),
                path: reader.required_text(entry, "path", &location),
            };
            if !email.path.is_empty() {
                if let Some(ext) = extension(&email.path) {
                    if !SOURCE_DOCUMENT_EXTENSIONS.contains(&ext.as_str()) {
                        reader.report().record(
                            FindingKind::TypeMismatch,
                            join_location(&location, "path"),
                            format!(
                                "source email `{}` has extension .{ext}; expected one of {}",
                                email.path,
                                SOURCE_DOCUMENT_EXTENSIONS.join(", ")
                            ),
                        );
                    }
                }
            }
            email
        })
        .collect()
}

/// Lowercased extension of the last path segment, if it has one.
pub(crate) fn extension(path: &str) -> Option<String> {
    let trimmed = path.trim();
    if trimmed.ends_with('/') {
        return None;
    }
    let name = trimmed.rsplit('/').next().unwrap_or(trimmed);
    let (stem, ext) = name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// Checks a declared file type against the path's extension.
pub(crate) fn file_type_matches(kind: &str, path: &str) -> Result<(), String> {
    let kind = kind.trim().to_ascii_lowercase();
    let ext = extension(path);
    if FOLDER_TYPES.contains(&kind.as_str()) {
        return match ext {
            None => Ok(()),
            Some(ext) => Err(format!("`{path}` is declared a {kind} but ends in .{ext}")),
        };
    }
    let Some(ext) = ext else {
        return Err(format!("`{path}` has no file extension; declared type is {kind}"));
    };
    let accepted = FILE_TYPE_EXTENSIONS
        .iter()
        .find(|(declared, _)| *declared == kind)
        .map(|(_, exts)| exts.contains(&ext.as_str()))
        .unwrap_or(ext == kind);
    if accepted {
        Ok(())
    } else {
        Err(format!("`{path}` ends in .{ext} but is declared {kind}"))
    }
}
