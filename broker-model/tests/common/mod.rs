//! Shared test helpers for model tests.

#![allow(dead_code)]

use broker_model::{ConfigMessage, Message, Schema};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ConfigPair {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub key: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub value: String,
}

/// Test payload with a required `key`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MockConfig {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub key: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pairs: Vec<ConfigPair>,
}

impl Message for MockConfig {
    const NAME: &'static str = "test.MockConfig";
}

/// A second payload type, for mismatch tests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct OtherConfig {
    #[serde(default)]
    pub enabled: bool,
}

impl Message for OtherConfig {
    const NAME: &'static str = "test.OtherConfig";
}

pub fn reject_empty_key(spec: &dyn ConfigMessage) -> Result<(), String> {
    match spec.downcast_ref::<MockConfig>() {
        Some(config) if config.key.is_empty() => Err("empty key".to_string()),
        Some(_) => Ok(()),
        None => Err(format!("unexpected message {}", spec.message_name())),
    }
}

/// `mock-config` schema rejecting empty keys.
pub fn mock_schema() -> Schema {
    Schema::new::<MockConfig>("mock-config", "mock-configs").with_validator(reject_empty_key)
}

pub fn other_schema() -> Schema {
    Schema::new::<OtherConfig>("other-config", "other-configs")
}

/// Schema whose validator counts its invocations.
pub fn counting_schema(type_name: &str, plural: &str) -> (Schema, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&calls);
    let schema = Schema::new::<MockConfig>(type_name, plural).with_validator(
        move |_spec: &dyn ConfigMessage| -> Result<(), String> {
            seen.fetch_add(1, Ordering::SeqCst);
            Ok(())
        },
    );
    (schema, calls)
}

pub fn mock_config(key: &str) -> MockConfig {
    MockConfig {
        key: key.to_string(),
        pairs: vec![ConfigPair {
            key: "retries".to_string(),
            value: "3".to_string(),
        }],
    }
}
