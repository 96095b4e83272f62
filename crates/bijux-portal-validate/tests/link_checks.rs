use std::fs;
use std::path::PathBuf;

use bijux_portal_core::{AssetLookup, AssetPort};
use bijux_portal_model::{Attachment, FindingKind, Project, SourceEmail};
use bijux_portal_validate::{
    check_links, load_raw_document, validate_project, FsAssets,
};

fn fixtures() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../fixtures")
}

fn attachment(path: &str) -> Attachment {
    Attachment {
        title: path.to_string(),
        path: path.to_string(),
        kind: "pdf".to_string(),
        mandatory: false,
    }
}

#[test]
fn fixture_links_all_resolve() {
    let raw = load_raw_document(&fixtures().join("projects/plv-2025-08-26.yaml")).expect("load");
    let project = validate_project(&raw, &Default::default())
        .expect("mapping")
        .value;
    let assets = FsAssets::new(fixtures(), "content/assets");
    let report = check_links(&project, &assets);
    assert!(report.is_clean(), "{report}");
}

#[test]
fn missing_and_escaping_paths_are_broken_links() {
    let site = tempfile::tempdir().expect("tempdir");
    let docs = site.path().join("content/assets/docs");
    fs::create_dir_all(&docs).expect("mkdir");
    fs::write(docs.join("present.pdf"), b"%PDF").expect("write");
    fs::write(site.path().join("outside.pdf"), b"%PDF").expect("write");

    let mut project = Project::new("PLV-2025-08-26", "Links", "1 Main St");
    project.attachments = vec![
        attachment("content/assets/docs/present.pdf"),
        attachment("docs/present.pdf"),
        attachment("content/assets/docs/absent.pdf"),
        attachment("../outside.pdf"),
        attachment("outside.pdf"),
    ];
    project.source_emails = vec![SourceEmail {
        kind: "schedule".to_string(),
        path: "/etc/hosts".to_string(),
    }];

    let assets = FsAssets::new(site.path(), "content/assets");
    let report = check_links(&project, &assets);
    let locations: Vec<&str> = report.iter().map(|f| f.location.as_str()).collect();
    assert_eq!(
        locations,
        vec![
            "attachments[2].path",
            "attachments[3].path",
            "attachments[4].path",
            "source_emails[0].path",
        ]
    );
    assert_eq!(report.count(FindingKind::BrokenLink), 4);
    assert!(!report.has_fatal());
}

struct Everything;

impl AssetPort for Everything {
    fn lookup(&self, _manifest_path: &str) -> AssetLookup {
        AssetLookup::Present
    }
}

#[test]
fn link_checks_only_see_the_port() {
    let mut project = Project::new("PLV-2025-08-26", "Links", "1 Main St");
    project.attachments = vec![attachment("anything/at/all.pdf"), attachment("")];
    assert!(check_links(&project, &Everything).is_clean());
}
