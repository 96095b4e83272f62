use std::path::PathBuf;

#[test]
fn model_crate_stays_below_validation_and_rendering() {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let cargo_toml =
        std::fs::read_to_string(manifest_dir.join("Cargo.toml")).expect("read Cargo.toml");
    let deps = cargo_toml
        .split("[dev-dependencies]")
        .next()
        .expect("dependency section");
    for forbidden in [
        "bijux-portal-validate",
        "bijux-portal-render",
        "bijux-portal-cli",
        "serde_yaml",
        "tracing",
    ] {
        assert!(
            !deps.contains(forbidden),
            "forbidden dependency in model crate: {forbidden}"
        );
    }
}
