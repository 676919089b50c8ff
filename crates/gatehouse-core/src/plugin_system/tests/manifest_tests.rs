#![cfg(test)]

use crate::plugin_system::error::PluginSystemError;
use crate::plugin_system::manifest::{ManifestBuilder, MenuEntry, PluginManifest};
use crate::plugin_system::route::Audience;

#[test]
fn test_builder_sets_fields() {
    let manifest = ManifestBuilder::new("electricity", "Electricity", "/electricity/")
        .version("1.2.0")
        .description("Token purchase")
        .menu_entry(MenuEntry {
            title: "Buy".to_string(),
            icon: Some("bolt".to_string()),
            path: Some("buy".to_string()),
            audience: Some(Audience::Resident),
            order: 1,
        })
        .build();

    assert_eq!(manifest.name, "electricity");
    assert_eq!(manifest.version.as_deref(), Some("1.2.0"));
    assert_eq!(manifest.description.as_deref(), Some("Token purchase"));
    assert_eq!(manifest.normalized_base_path(), "electricity");
    assert_eq!(manifest.menu.len(), 1);
}

#[test]
fn test_display_title_falls_back_to_name() {
    let manifest = PluginManifest::new("camera", "", "camera");
    assert_eq!(manifest.display_title(), "camera");

    let titled = PluginManifest::new("camera", "Gate Cameras", "camera");
    assert_eq!(titled.display_title(), "Gate Cameras");
}

#[test]
fn test_validate_rejects_empty_name() {
    let manifest = PluginManifest::new("  ", "Nameless", "x");
    assert!(matches!(manifest.validate(), Err(PluginSystemError::InvalidDefinition { .. })));
}

#[test]
fn test_validate_rejects_bad_version() {
    let manifest = ManifestBuilder::new("camera", "Cameras", "camera").version("one").build();
    let err = manifest.validate().expect_err("non-semver version should be rejected");
    assert!(err.to_string().contains("not valid semver"));
}

#[test]
fn test_parsed_version() {
    let manifest = ManifestBuilder::new("camera", "Cameras", "camera").version("0.3.1").build();
    assert_eq!(manifest.parsed_version().unwrap(), Some(semver::Version::new(0, 3, 1)));

    let unversioned = PluginManifest::new("camera", "Cameras", "camera");
    assert_eq!(unversioned.parsed_version().unwrap(), None);
    assert!(unversioned.validate().is_ok());
}

#[test]
fn test_deserialize_camel_case_manifest() {
    let json = r#"{
        "name": "dues",
        "title": "Dues",
        "basePath": "dues",
        "menu": [{"title": "Invoices", "path": "invoices", "audience": "admin"}]
    }"#;
    let manifest: PluginManifest = serde_json::from_str(json).unwrap();

    assert_eq!(manifest.base_path, "dues");
    assert_eq!(manifest.version, None);
    assert_eq!(manifest.menu[0].audience, Some(Audience::Admin));
    assert_eq!(manifest.menu[0].order, 0);
}
