//! Tests for layered settings.

use captionstudio::StudioSettings;
use captionstudio_core::{LogFormat, ModelTier, PlanTier, SamplingParams};
use captionstudio_error::ConfigErrorKind;
use std::io::Write;
use tempfile::NamedTempFile;

fn settings_file(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write settings");
    file
}

#[test]
fn test_defaults() {
    let settings = StudioSettings::defaults().expect("defaults are valid");

    assert_eq!(
        settings.gemini().base_url(),
        "https://generativelanguage.googleapis.com/v1beta"
    );
    assert_eq!(settings.model_catalog().for_tier(ModelTier::Enhanced), "gemini-2.5-pro");
    assert_eq!(settings.sampling(), SamplingParams::default());
    assert_eq!(settings.generation().watermark(), "✨ Created with CaptionStudio.ai");
    assert_eq!(*settings.plan().tier(), PlanTier::Free);
    assert!(settings.plan().state_path().is_none());
    assert_eq!(settings.log_format(), LogFormat::Pretty);
    assert_eq!(settings.logging().filter(), "info");
}

#[test]
fn test_file_overrides_defaults() {
    let file = settings_file(
        r#"
[gemini]
standard_model = "gemini-2.0-flash"

[plan]
tier = "pro"
free_daily_limit = 25
state_path = "/tmp/captionstudio-test/plan.json"

[logging]
json = true
"#,
    );

    let settings = StudioSettings::from_file(file.path()).expect("settings should load");

    assert_eq!(settings.gemini().standard_model(), "gemini-2.0-flash");
    assert_eq!(settings.gemini().enhanced_model(), "gemini-2.5-pro");
    assert_eq!(*settings.plan().tier(), PlanTier::Pro);
    assert_eq!(*settings.plan().free_daily_limit(), 25);
    assert_eq!(
        settings.plan().state_path().as_deref(),
        Some(std::path::Path::new("/tmp/captionstudio-test/plan.json"))
    );
    assert_eq!(settings.log_format(), LogFormat::Json);
}

#[test]
fn test_out_of_range_top_p_is_rejected() {
    let file = settings_file("[generation]\ntop_p = 1.5\n");

    let err = StudioSettings::from_file(file.path()).unwrap_err();
    match err.kind {
        ConfigErrorKind::Invalid { key, .. } => assert_eq!(key, "generation.top_p"),
        other => panic!("expected invalid setting, got {:?}", other),
    }
}

#[test]
fn test_empty_watermark_is_rejected() {
    let file = settings_file("[generation]\nwatermark = \"  \"\n");

    let err = StudioSettings::from_file(file.path()).unwrap_err();
    assert!(matches!(
        err.kind,
        ConfigErrorKind::Invalid { ref key, .. } if key == "generation.watermark"
    ));
}

#[test]
fn test_unknown_tier_fails_to_load() {
    let file = settings_file("[plan]\ntier = \"platinum\"\n");

    let err = StudioSettings::from_file(file.path()).unwrap_err();
    assert!(matches!(err.kind, ConfigErrorKind::Load(_)));
}

#[test]
fn test_missing_explicit_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");

    let err = StudioSettings::from_file(&missing).unwrap_err();
    assert!(matches!(err.kind, ConfigErrorKind::Load(_)));
}

#[test]
fn test_load_error_is_located_in_settings() {
    let dir = tempfile::tempdir().unwrap();

    let err = StudioSettings::from_file(&dir.path().join("missing.toml")).unwrap_err();
    assert!(
        err.file.ends_with("settings.rs"),
        "error located at {}",
        err.file
    );
}
