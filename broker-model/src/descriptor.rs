use crate::entry::{ConfigMeta, Entry};
use crate::error::{ModelError, ModelResult};
use crate::schema::Schema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

/// Serialized form of a configuration unit:
/// `{type, name, namespace, istioNamespace, labels, annotations, resourceVersion, spec}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "ObjectWire", into = "ObjectWire")]
pub struct ConfigObject {
    pub meta: ConfigMeta,

    /// Kind-specific payload as a generic tree.
    pub spec: Value,
}

/// Field-by-field wire layout of [`ConfigObject`].
///
/// Metadata is spelled out rather than flattened so that plain scalars such
/// as `name: 2024` or `version: 1` still read as strings.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ObjectWire {
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    type_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    namespace: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    istio_namespace: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    labels: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    annotations: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    resource_version: String,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    spec: Value,
}

impl From<ObjectWire> for ConfigObject {
    fn from(wire: ObjectWire) -> Self {
        Self {
            meta: ConfigMeta {
                type_name: wire.type_name,
                name: wire.name,
                namespace: wire.namespace,
                istio_namespace: wire.istio_namespace,
                labels: wire.labels,
                annotations: wire.annotations,
                resource_version: wire.resource_version,
            },
            spec: wire.spec,
        }
    }
}

impl From<ConfigObject> for ObjectWire {
    fn from(object: ConfigObject) -> Self {
        let ConfigObject { meta, spec } = object;
        Self {
            type_name: meta.type_name,
            name: meta.name,
            namespace: meta.namespace,
            istio_namespace: meta.istio_namespace,
            labels: meta.labels,
            annotations: meta.annotations,
            resource_version: meta.resource_version,
            spec,
        }
    }
}

/// The set of configuration kinds known to a registry.
///
/// Built once at startup and immutable afterwards. Iteration follows
/// registration order; lookups go through indexes keyed by type name and by
/// message name.
#[derive(Debug, Clone, Default)]
pub struct Descriptor {
    schemas: Vec<Schema>,
    by_type: HashMap<String, usize>,
    by_message: HashMap<String, usize>,
}

impl Descriptor {
    /// Registers `schemas` in order. Type names and message names must each
    /// be unique.
    pub fn new(schemas: impl IntoIterator<Item = Schema>) -> ModelResult<Self> {
        let mut descriptor = Self::default();
        for schema in schemas {
            if descriptor.by_type.contains_key(&schema.type_name) {
                return Err(ModelError::DuplicateType(schema.type_name));
            }
            if descriptor.by_message.contains_key(&schema.message_name) {
                return Err(ModelError::DuplicateMessageName(schema.message_name));
            }
            let index = descriptor.schemas.len();
            descriptor.by_type.insert(schema.type_name.clone(), index);
            descriptor
                .by_message
                .insert(schema.message_name.clone(), index);
            descriptor.schemas.push(schema);
        }
        Ok(descriptor)
    }

    /// Lists all known types in registration order.
    pub fn types(&self) -> Vec<&str> {
        self.schemas.iter().map(|s| s.type_name.as_str()).collect()
    }

    pub fn schemas(&self) -> &[Schema] {
        &self.schemas
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    /// Finds a schema by short type name.
    pub fn get_by_type(&self, name: &str) -> Option<&Schema> {
        self.by_type.get(name).map(|&i| &self.schemas[i])
    }

    /// Finds a schema by fully-qualified message name.
    pub fn get_by_message_name(&self, name: &str) -> Option<&Schema> {
        self.by_message.get(name).map(|&i| &self.schemas[i])
    }

    /// Checks that an entry's type is registered and its payload passes the
    /// schema's validation. Returns the matching schema.
    pub fn validate_entry(&self, entry: &Entry) -> ModelResult<&Schema> {
        let schema = self
            .get_by_type(&entry.meta.type_name)
            .ok_or_else(|| ModelError::UnknownType(entry.meta.type_name.clone()))?;
        schema.validate(entry.spec.as_ref())?;
        Ok(schema)
    }

    /// Decodes and validates a config object.
    pub fn from_object(&self, object: ConfigObject) -> ModelResult<Entry> {
        let schema = self
            .get_by_type(&object.meta.type_name)
            .ok_or_else(|| ModelError::UnknownType(object.meta.type_name.clone()))?;
        let message = schema.from_json_map(&object.spec)?;
        schema.validate(message.as_ref())?;
        Ok(Entry {
            meta: object.meta,
            spec: Arc::from(message),
        })
    }

    /// Parses, decodes and validates a YAML (or JSON) config object.
    pub fn from_yaml(&self, content: &str) -> ModelResult<Entry> {
        let object: ConfigObject =
            serde_yaml::from_str(content).map_err(|e| ModelError::Parse(e.to_string()))?;
        self.from_object(object)
    }

    /// Converts an entry to its serialized object form.
    pub fn to_object(&self, entry: &Entry) -> ModelResult<ConfigObject> {
        let schema = self
            .get_by_type(&entry.meta.type_name)
            .ok_or_else(|| ModelError::MissingType(entry.meta.type_name.clone()))?;
        let spec = schema.to_json_map(entry.spec.as_ref())?;
        Ok(ConfigObject {
            meta: entry.meta.clone(),
            spec: Value::Object(spec),
        })
    }

    /// Serializes an entry into YAML.
    pub fn to_yaml(&self, entry: &Entry) -> ModelResult<String> {
        let object = self.to_object(entry)?;
        serde_yaml::to_string(&object).map_err(|e| ModelError::Encoding(e.to_string()))
    }
}
