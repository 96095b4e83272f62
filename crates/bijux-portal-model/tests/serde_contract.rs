use bijux_portal_model::{
    Finding, FindingKind, ParsedTime, Policy, PolicyCatalog, Project, Severity, ValidationReport,
};

const MANIFEST_YAML: &str = r#"
id: PLV-2025-08-24
title: Pleasanton Holiday Reset
store:
  number: "2245"
  address: 4501 Hopyard Rd, Pleasanton, CA 94588
  report_time: "2025-08-26T01:45:00-07:00"
contacts:
  supervisor:
    name: Dana Ortiz
    phone: "+1-925-555-0101"
  lead:
    name: Sam Lee
travel:
  hotel:
    name: Hyatt House Pleasanton
    check_in: "2025-08-25"
    check_out: "2025-08-29"
    reservations:
      - guest: Sam Lee
        confirmation: HX-99812
attachments:
  - title: Advantage Travel Policy
    path: content/assets/docs/advantage-travel-policy-2025-04-14.pdf
    type: pdf
    mandatory: true
"#;

#[test]
fn manifest_field_names_are_the_compatibility_surface() {
    let project: Project = serde_yaml::from_str(MANIFEST_YAML).expect("decode manifest");
    assert_eq!(project.store.number.as_deref(), Some("2245"));
    assert!(matches!(
        project.store.report_time.as_ref().map(|t| t.parsed()),
        Some(ParsedTime::Zoned(_))
    ));
    let hotel = project.travel.hotel.as_ref().expect("hotel");
    assert_eq!(hotel.reservations[0].confirmation, "HX-99812");
    assert_eq!(project.attachments[0].kind, "pdf");
    assert!(project.attachments[0].mandatory);
    assert!(project.travel.flights.is_empty());
    assert!(project.required_actions.is_empty());
    assert!(project.last_updated.is_none());

    let roles: Vec<&str> = project.contacts.keys().map(String::as_str).collect();
    assert_eq!(roles, vec!["supervisor", "lead"]);
}

#[test]
fn attachment_kind_serializes_as_type() {
    let project: Project = serde_yaml::from_str(MANIFEST_YAML).expect("decode manifest");
    let value = serde_json::to_value(&project).expect("encode");
    assert_eq!(value["attachments"][0]["type"], "pdf");
    assert_eq!(value["store"]["report_time"], "2025-08-26T01:45:00-07:00");
}

#[test]
fn catalog_serializes_as_ordered_list_and_rejects_duplicates() {
    let raw = r#"[
      {"id":"travel-policy","title":"Travel Policy","type":"pdf"},
      {"id":"dress-code","title":"Dress Code","type":"pdf","last_updated":"2025-04-14"}
    ]"#;
    let catalog: PolicyCatalog = serde_json::from_str(raw).expect("decode catalog");
    assert_eq!(catalog.len(), 2);
    let ids: Vec<&str> = catalog.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["travel-policy", "dress-code"]);

    let dup = r#"[{"id":"dress-code","title":"A"},{"id":"dress-code","title":"B"}]"#;
    let err = serde_json::from_str::<PolicyCatalog>(dup).expect_err("duplicate ids");
    assert!(err.to_string().contains("duplicate policy id: dress-code"));
}

#[test]
fn catalog_builder_reports_first_duplicate() {
    let policy = |id: &str| Policy {
        id: id.to_string(),
        title: id.to_string(),
        description: None,
        kind: "pdf".to_string(),
        path: None,
        last_updated: None,
    };
    let err = PolicyCatalog::from_policies(vec![policy("a"), policy("b"), policy("a")])
        .expect_err("duplicate");
    assert_eq!(err.0, "a");
}

#[test]
fn report_encodes_kinds_in_snake_case() {
    let mut report = ValidationReport::new();
    report.push(Finding::new(
        FindingKind::UnresolvedPolicyReference,
        "policies.references[2]",
        "unknown policy `badge-rules`",
    ));
    let value = serde_json::to_value(&report).expect("encode");
    assert_eq!(value["findings"][0]["kind"], "unresolved_policy_reference");
    assert_eq!(value["findings"][0]["severity"], "warning");
    assert_eq!(FindingKind::DuplicateId.severity(), Severity::Fatal);
}
