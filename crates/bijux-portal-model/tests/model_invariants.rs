use bijux_portal_model::{FindingKind, Project, Validated, ValidationReport};

#[test]
fn new_project_carries_explicit_unset_markers() {
    let project = Project::new("PLV-2025-08-24", "Reset", "4501 Hopyard Rd");
    assert!(project.store.number.is_none());
    assert!(project.store.report_time.is_none());
    assert!(project.contacts.is_empty());
    assert!(project.travel.hotel.is_none());
    assert!(project.policies.references.is_empty());
    assert!(project.last_updated.is_none());
}

#[test]
fn report_counts_and_fatal_detection() {
    let mut report = ValidationReport::new();
    assert!(report.is_clean());
    report.record(FindingKind::MissingField, "title", "title is required");
    report.record(FindingKind::TypeMismatch, "attachments[0].path", "pdf vs docx");
    report.record(FindingKind::MissingField, "store.address", "store.address is required");
    assert!(!report.has_fatal());
    assert_eq!(report.count(FindingKind::MissingField), 2);
    assert_eq!(report.counts_by_kind().get(&FindingKind::TypeMismatch), Some(&1));

    report.record(FindingKind::DuplicateId, "[1].id", "duplicate id `dress-code`");
    assert!(report.has_fatal());
}

#[test]
fn sorted_report_orders_by_location_then_kind() {
    let mut report = ValidationReport::new();
    report.record(FindingKind::TypeMismatch, "b", "x");
    report.record(FindingKind::MissingField, "a", "x");
    report.record(FindingKind::MissingField, "b", "x");
    let locations: Vec<(String, FindingKind)> = report
        .sorted()
        .findings
        .into_iter()
        .map(|f| (f.location, f.kind))
        .collect();
    assert_eq!(
        locations,
        vec![
            ("a".to_string(), FindingKind::MissingField),
            ("b".to_string(), FindingKind::MissingField),
            ("b".to_string(), FindingKind::TypeMismatch),
        ]
    );
}

#[test]
fn into_clean_drops_value_when_findings_exist() {
    let mut report = ValidationReport::new();
    report.record(FindingKind::IdFormat, "id", "not recommended");
    let validated = Validated::new(1_u8, report);
    let err = validated.into_clean().expect_err("findings present");
    assert_eq!(err.to_string(), "[id_format] id: not recommended");

    assert_eq!(Validated::new(2_u8, ValidationReport::new()).into_clean(), Ok(2));
}
