mod common;

use broker_model::{key, ConfigMeta, Entry};
use common::{mock_config, MockConfig, OtherConfig};

#[test]
fn key_format_is_type_namespace_name() {
    assert_eq!(key("service-class", "svc-a", "prod"), "service-class/prod/svc-a");
    assert_eq!(key("service-class", "svc-a", ""), "service-class//svc-a");
}

#[test]
fn entry_key_uses_meta() {
    let entry = Entry::new(ConfigMeta::new("mock-config", "n", "ns"), mock_config("k"));
    assert_eq!(entry.key(), "mock-config/ns/n");
    assert_eq!(entry.key(), entry.meta.key());
}

#[test]
fn spec_as_matching_type() {
    let entry = Entry::new(ConfigMeta::new("mock-config", "n", ""), mock_config("k"));
    assert_eq!(entry.spec_as::<MockConfig>().map(|c| c.key.as_str()), Some("k"));
}

#[test]
fn spec_as_other_type_is_none() {
    let entry = Entry::new(ConfigMeta::new("mock-config", "n", ""), mock_config("k"));
    assert!(entry.spec_as::<OtherConfig>().is_none());
}

#[test]
fn clones_share_payload() {
    let entry = Entry::new(ConfigMeta::new("mock-config", "n", ""), mock_config("k"));
    let copy = entry.clone();
    assert!(std::sync::Arc::ptr_eq(&entry.spec, &copy.spec));
    assert_eq!(entry, copy);
}

#[test]
fn equality_compares_payload() {
    let meta = ConfigMeta::new("mock-config", "n", "");
    let a = Entry::new(meta.clone(), mock_config("k"));
    let b = Entry::new(meta.clone(), mock_config("other"));
    let c = Entry::new(meta, OtherConfig::default());
    assert_ne!(a, b);
    assert_ne!(a, c);
}

#[test]
fn equality_compares_meta() {
    let a = Entry::new(ConfigMeta::new("mock-config", "n", ""), mock_config("k"));
    let mut b = a.clone();
    b.meta.resource_version = "r2".into();
    assert_ne!(a, b);
}

#[test]
fn meta_serializes_camel_case_and_skips_empty() {
    let mut meta = ConfigMeta::new("mock-config", "n", "");
    meta.istio_namespace = "istio-system".into();
    let json = serde_json::to_value(&meta).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"type": "mock-config", "name": "n", "istioNamespace": "istio-system"})
    );
}
