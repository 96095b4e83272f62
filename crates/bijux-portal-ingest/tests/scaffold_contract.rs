use std::path::PathBuf;

use bijux_portal_ingest::{
    scaffold_manifest, HotelOverrides, IngestStage, OutputFormat, ScaffoldOptions,
    StoreOverrides,
};
use bijux_portal_model::FindingKind;
use bijux_portal_validate::{
    load_raw_document, validate_policy_catalog, validate_project,
};
use chrono::{TimeZone, Utc};
use tempfile::tempdir;

fn fixtures() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../fixtures")
}

fn generated_at() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 8, 20, 16, 0, 0)
        .single()
        .expect("valid instant")
}

#[test]
fn dry_run_over_fixture_assets_links_existing_documents() {
    let opts = ScaffoldOptions {
        site_root: fixtures(),
        project_id: "plv-2025-08-26".to_string(),
        dry_run: true,
        ..ScaffoldOptions::default()
    };
    let result = scaffold_manifest(&opts, generated_at()).expect("scaffold");
    assert!(!result.written);
    assert!(!result.output_path.exists());

    let manifest = &result.manifest;
    assert_eq!(manifest["id"], "PLV-2025-08-26");
    assert_eq!(manifest["title"], "Plv 2025 08 26");
    assert_eq!(manifest["last_updated"], "2025-08-20T16:00:00Z");
    assert_eq!(manifest["attachments"].as_array().map(Vec::len), Some(5));
    assert_eq!(
        manifest["attachments"][4]["path"],
        "content/assets/docs/to-call-or-email.pdf"
    );
    assert_eq!(manifest["attachments"][4]["mandatory"], false);

    let emails: Vec<(String, String)> = manifest["source_emails"]
        .as_array()
        .expect("emails")
        .iter()
        .map(|e| {
            (
                e["type"].as_str().unwrap_or_default().to_string(),
                e["path"].as_str().unwrap_or_default().to_string(),
            )
        })
        .collect();
    let base = "content/assets/projects/plv-2025-08-26/emails";
    assert_eq!(
        emails,
        vec![
            ("carpool".to_string(), format!("{base}/archive/carpool-plan.eml")),
            ("flights".to_string(), format!("{base}/flight-itinerary.pdf")),
            ("orientation".to_string(), format!("{base}/ready-for-monday.eml")),
        ]
    );

    let keys: Vec<&str> = manifest
        .as_object()
        .expect("mapping")
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(
        keys,
        vec![
            "id",
            "title",
            "store",
            "contacts",
            "travel",
            "policies",
            "required_actions",
            "attachments",
            "source_emails",
            "last_updated",
            "notes",
        ]
    );
}

#[test]
fn empty_asset_root_yields_folder_placeholders() {
    let site = tempdir().expect("tmp");
    let opts = ScaffoldOptions {
        site_root: site.path().to_path_buf(),
        project_id: "SEA-2025-09-02".to_string(),
        project_slug: Some("northgate".to_string()),
        title: Some("Northgate Reset".to_string()),
        dry_run: true,
        ..ScaffoldOptions::default()
    };
    let result = scaffold_manifest(&opts, generated_at()).expect("scaffold");
    let manifest = &result.manifest;
    assert_eq!(manifest["title"], "Northgate Reset");
    assert_eq!(manifest["attachments"][0]["type"], "folder");
    assert_eq!(manifest["attachments"][0]["path"], "content/assets/docs");
    assert_eq!(
        manifest["source_emails"][0]["path"],
        "content/assets/projects/northgate/emails"
    );
    assert_eq!(manifest["source_emails"][0]["type"], "schedule");
}

#[test]
fn scaffold_output_validates_with_only_placeholder_timestamps() {
    let opts = ScaffoldOptions {
        site_root: fixtures(),
        project_id: "PLV-2025-08-26".to_string(),
        dry_run: true,
        ..ScaffoldOptions::default()
    };
    let result = scaffold_manifest(&opts, generated_at()).expect("scaffold");
    let catalog_raw = load_raw_document(&fixtures().join("policies.yaml")).expect("catalog");
    let catalog = validate_policy_catalog(&catalog_raw).expect("catalog").value;

    let validated = validate_project(&result.manifest, &catalog).expect("mapping");
    let locations: Vec<(&str, FindingKind)> = validated
        .report
        .iter()
        .map(|f| (f.location.as_str(), f.kind))
        .collect();
    assert_eq!(
        locations,
        vec![
            ("store.report_time", FindingKind::InvalidTimestamp),
            ("travel.hotel.check_in", FindingKind::InvalidTimestamp),
            ("travel.hotel.check_out", FindingKind::InvalidTimestamp),
        ]
    );
}

#[test]
fn overrides_replace_placeholders_and_file_is_written() {
    let site = tempdir().expect("tmp");
    let opts = ScaffoldOptions {
        site_root: site.path().to_path_buf(),
        project_id: "PLV-2025-08-26".to_string(),
        store: StoreOverrides {
            number: Some("4412".to_string()),
            report_time: Some("2025-08-26T01:45:00-07:00".to_string()),
            ..StoreOverrides::default()
        },
        hotel: HotelOverrides {
            check_in: Some("2025-08-24".to_string()),
            check_out: Some("2025-08-30".to_string()),
            ..HotelOverrides::default()
        },
        ..ScaffoldOptions::default()
    };
    let result = scaffold_manifest(&opts, generated_at()).expect("scaffold");
    assert!(result.written);
    assert_eq!(
        result.output_path,
        site.path().join("data/projects/plv-2025-08-26.yaml")
    );
    let reloaded = load_raw_document(&result.output_path).expect("reload");
    assert_eq!(reloaded, result.manifest);
    assert_eq!(reloaded["store"]["number"], "4412");

    let stages: Vec<IngestStage> = result.events.iter().map(|e| e.stage).collect();
    assert_eq!(
        stages,
        vec![
            IngestStage::Prepare,
            IngestStage::Collect,
            IngestStage::Render,
            IngestStage::Persist,
            IngestStage::Finalize,
        ]
    );
}

#[test]
fn json_output_goes_to_explicit_path() {
    let site = tempdir().expect("tmp");
    let opts = ScaffoldOptions {
        site_root: site.path().to_path_buf(),
        project_id: "PLV-2025-08-26".to_string(),
        output: Some(PathBuf::from("out/plv.json")),
        format: OutputFormat::Json,
        ..ScaffoldOptions::default()
    };
    let result = scaffold_manifest(&opts, generated_at()).expect("scaffold");
    assert_eq!(result.output_path, site.path().join("out/plv.json"));
    assert!(result.rendered.starts_with("{\n  \"id\": \"PLV-2025-08-26\""));
    let reloaded = load_raw_document(&result.output_path).expect("reload");
    assert_eq!(reloaded, result.manifest);
}
