use std::collections::BTreeSet;
use std::path::PathBuf;

use bijux_portal_model::{
    Attachment, Contact, Flight, FlightLeg, PolicyCatalog, Project, Timestamp,
};
use bijux_portal_render::{
    attachments, checklist, contacts, policies, render_project, summary, travel,
    AttachmentsSection, ChecklistState, ContactsSection, HotelSection,
    UNRESOLVED_POLICY_PLACEHOLDER,
};
use bijux_portal_validate::{load_raw_document, validate_policy_catalog, validate_project};

fn fixtures() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../fixtures")
}

fn fixture_catalog() -> PolicyCatalog {
    let raw = load_raw_document(&fixtures().join("policies.yaml")).expect("load catalog");
    validate_policy_catalog(&raw).expect("catalog").value
}

fn fixture_project() -> Project {
    let raw = load_raw_document(&fixtures().join("projects/plv-2025-08-26.yaml")).expect("load");
    validate_project(&raw, &fixture_catalog())
        .expect("mapping")
        .into_clean()
        .expect("clean fixture")
}

fn leg(from: &str, to: &str) -> FlightLeg {
    FlightLeg {
        depart_airport: from.to_string(),
        arrive_airport: to.to_string(),
        ..FlightLeg::default()
    }
}

#[test]
fn flight_rows_flatten_per_leg_in_input_order() {
    let mut project = Project::new("PLV-2025-08-26", "Remodel", "1 Main St");
    project.travel.flights = vec![
        Flight {
            traveler: "A".to_string(),
            legs: vec![leg("SEA", "SFO"), leg("SFO", "OAK")],
        },
        Flight {
            traveler: "B".to_string(),
            legs: vec![leg("PDX", "OAK")],
        },
    ];
    let rows = travel(&project).flight_rows;
    let got: Vec<(&str, &str)> = rows
        .iter()
        .map(|r| (r.traveler.as_str(), r.leg_label.as_str()))
        .collect();
    assert_eq!(got, vec![("A", "Leg 1"), ("A", "Leg 2"), ("B", "Leg 1")]);
    assert_eq!(rows[0].depart_label, "SEA TBD");
}

#[test]
fn report_time_label_uses_the_timestamp_offset() {
    let mut project = Project::new("PLV-2025-08-26", "Remodel", "1 Main St");
    project.store.report_time = Some(Timestamp::parse("2025-08-26T01:45:00-07:00"));
    assert_eq!(summary(&project).report_time_label, "Aug 26, 1:45 AM");

    project.store.report_time = Some(Timestamp::parse("2025-08-26T01:45:00+09:00"));
    assert_eq!(summary(&project).report_time_label, "Aug 26, 1:45 AM");

    project.store.report_time = Some(Timestamp::parse("soon"));
    assert_eq!(summary(&project).report_time_label, "soon");
}

#[test]
fn unresolved_policies_keep_their_place() {
    let mut project = fixture_project();
    project.policies.references = vec![
        "dress-code".to_string(),
        "parking_rules".to_string(),
        "time-reporting".to_string(),
    ];
    let rows = policies(&project, &fixture_catalog());
    let labels: Vec<&str> = rows.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(labels, vec!["Dress Code", "Parking Rules", "Time Reporting"]);
    assert!(!rows[1].resolved);
    assert_eq!(rows[1].description, UNRESOLVED_POLICY_PLACEHOLDER);
    assert_eq!(rows[1].updated_label, "TBD");
    assert_eq!(rows[0].updated_label, "Apr 14, 2025");
    assert_eq!(rows[0].type_badge, "PDF");

    let empty = policies(&project, &PolicyCatalog::default());
    assert_eq!(empty.len(), 3);
    assert!(empty.iter().all(|r| !r.resolved));
}

#[test]
fn checklist_reflects_persisted_acknowledgments() {
    let project = fixture_project();
    assert!(checklist(&project, &ChecklistState::new())
        .iter()
        .all(|item| !item.acknowledged));

    let ack = ChecklistState::from(BTreeSet::from([2_usize]));
    let items = checklist(&project, &ack);
    let flags: Vec<bool> = items.iter().map(|i| i.acknowledged).collect();
    assert_eq!(flags, vec![false, false, true]);
    assert_eq!(items[2].index, 2);

    let stale: ChecklistState = [7].into_iter().collect();
    assert!(checklist(&project, &stale).iter().all(|i| !i.acknowledged));
}

#[test]
fn blank_filter_equals_no_filter() {
    let project = fixture_project();
    assert_eq!(attachments(&project, Some("")), attachments(&project, None));
    assert_eq!(attachments(&project, Some("   ")), attachments(&project, None));
}

#[test]
fn attachment_sections_distinguish_empty_from_no_matches() {
    let mut project = Project::new("PLV-2025-08-26", "Remodel", "1 Main St");
    assert_eq!(attachments(&project, Some("pdf")), AttachmentsSection::Empty);

    project.attachments = vec![Attachment {
        title: "Store Map".to_string(),
        path: "content/assets/docs/map.png".to_string(),
        kind: "png".to_string(),
        mandatory: true,
    }];
    assert_eq!(
        attachments(&project, Some(" Travel ")),
        AttachmentsSection::NoMatches {
            filter: "Travel".to_string()
        }
    );
    let AttachmentsSection::Listed(rows) = attachments(&project, Some("PNG")) else {
        panic!("type filter should match");
    };
    assert_eq!(rows[0].type_badge, "PNG");
}

#[test]
fn contacts_keep_manifest_order_and_empty_marker() {
    let mut project = Project::new("PLV-2025-08-26", "Remodel", "1 Main St");
    assert_eq!(contacts(&project), ContactsSection::Empty);
    project.contacts.insert(
        "site-lead".to_string(),
        Contact {
            name: "Sam".to_string(),
            ..Contact::default()
        },
    );
    project.contacts.insert(
        "district_manager".to_string(),
        Contact {
            name: "Dana".to_string(),
            ..Contact::default()
        },
    );
    let ContactsSection::Listed(rows) = contacts(&project) else {
        panic!("contacts present");
    };
    let roles: Vec<&str> = rows.iter().map(|r| r.role_label.as_str()).collect();
    assert_eq!(roles, vec!["Site Lead", "District Manager"]);
}

#[test]
fn full_fixture_renders_every_section() {
    let project = fixture_project();
    let model = render_project(
        &project,
        &fixture_catalog(),
        &ChecklistState::new(),
        Some("policy"),
    );
    assert_eq!(model.summary.store_line, "Store #4412 (Pleasanton Marketplace)");
    assert_eq!(model.summary.report_time_label, "Aug 26, 1:45 AM");
    assert_eq!(model.travel.flight_rows.len(), 3);
    assert_eq!(model.travel.flight_rows[0].depart_label, "SEA Aug 24, 7:10 AM");
    let HotelSection::Booked {
        check_in_label,
        reservations,
        ..
    } = &model.travel.hotel
    else {
        panic!("hotel is booked in the fixture");
    };
    assert_eq!(check_in_label, "Aug 24, 2025");
    assert_eq!(reservations.len(), 2);
    assert_eq!(model.travel.carpool_rows[1].vehicle_label, "Vehicle TBD");
    assert_eq!(model.travel.carpool_rows[1].riders_label, "Riders TBD");
    let AttachmentsSection::Listed(rows) = &model.attachments else {
        panic!("filter matches travel policy docs");
    };
    assert_eq!(rows.len(), 2);
    assert_eq!(model.source_emails[1].type_label, "Carpool");
    assert_eq!(model.last_updated_label, "Aug 20, 2025");

    let json = serde_json::to_value(&model).expect("serialize");
    assert_eq!(json["contacts"]["state"], "listed");
    assert_eq!(json["travel"]["hotel"]["state"], "booked");
}
