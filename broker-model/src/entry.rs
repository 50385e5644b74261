use crate::message::{ConfigMessage, Message};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Key function for configuration objects: `type/namespace/name`.
pub fn key(type_name: &str, name: &str, namespace: &str) -> String {
    format!("{type_name}/{namespace}/{name}")
}

/// Metadata attached to each configuration unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigMeta {
    /// Short configuration name matching the payload message type
    /// (e.g. "service-class").
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub type_name: String,

    /// Unique immutable identifier within a namespace.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// Space for names. Empty means global.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub namespace: String,

    /// Namespace of the control plane, independent of `namespace`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub istio_namespace: String,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,

    /// Unstructured metadata set by external tools. Never interpreted by the
    /// registry and preserved as given.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: BTreeMap<String, String>,

    /// Opaque revision of the last mutation. Only compared for exact
    /// equality. Empty means the object has not been stored yet.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub resource_version: String,
}

impl ConfigMeta {
    pub fn new(
        type_name: impl Into<String>,
        name: impl Into<String>,
        namespace: impl Into<String>,
    ) -> Self {
        Self {
            type_name: type_name.into(),
            name: name.into(),
            namespace: namespace.into(),
            ..Default::default()
        }
    }

    pub fn key(&self) -> String {
        key(&self.type_name, &self.name, &self.namespace)
    }
}

/// A configuration unit: metadata plus a typed payload.
///
/// The payload sits behind an `Arc`, so clones are cheap snapshots that share
/// one immutable value.
#[derive(Debug, Clone)]
pub struct Entry {
    pub meta: ConfigMeta,
    pub spec: Arc<dyn ConfigMessage>,
}

impl Entry {
    pub fn new(meta: ConfigMeta, spec: impl Message) -> Self {
        Self {
            meta,
            spec: Arc::new(spec),
        }
    }

    /// Unique identifier of the object within a store.
    pub fn key(&self) -> String {
        self.meta.key()
    }

    /// Returns the payload as `T` if that is its message type.
    pub fn spec_as<T: Message>(&self) -> Option<&T> {
        self.spec.downcast_ref::<T>()
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.meta == other.meta && self.spec.eq_message(other.spec.as_ref())
    }
}
