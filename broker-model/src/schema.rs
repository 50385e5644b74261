use crate::error::{ModelError, ModelResult};
use crate::message::{ConfigMessage, Message, MessageCodec};
use regex::Regex;
use serde_json::{Map, Value};
use std::fmt;
use std::sync::{Arc, LazyLock};

/// Maximum length of a DNS-1123 label.
pub const DNS1123_LABEL_MAX_LENGTH: usize = 63;

const DNS1123_LABEL_FMT: &str = "[a-z0-9]([-a-z0-9]*[a-z0-9])?";

static DNS1123_LABEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^{DNS1123_LABEL_FMT}$")).expect("DNS-1123 label pattern compiles")
});

/// Tests for a string that conforms to the definition of a label in DNS (RFC 1123).
pub fn is_dns1123_label(value: &str) -> bool {
    value.len() <= DNS1123_LABEL_MAX_LENGTH && DNS1123_LABEL_RE.is_match(value)
}

/// Kind-specific validation run after a schema's structural checks pass.
///
/// Most kinds do not need one. Return `Err(message)` to reject the payload;
/// the message reaches the caller unchanged as [`ModelError::Validation`].
pub trait SpecValidator: Send + Sync {
    fn validate(&self, spec: &dyn ConfigMessage) -> Result<(), String>;
}

impl<F> SpecValidator for F
where
    F: Fn(&dyn ConfigMessage) -> Result<(), String> + Send + Sync,
{
    fn validate(&self, spec: &dyn ConfigMessage) -> Result<(), String> {
        self(spec)
    }
}

/// Describes one configuration kind and converts its payloads.
///
/// Equality compares the three names only; the codec follows from the
/// message name and validators are not comparable.
#[derive(Clone)]
pub struct Schema {
    /// Short configuration type name, e.g. `service-class`.
    pub type_name: String,
    /// Short plural name, e.g. `service-classes`.
    pub plural: String,
    /// Fully-qualified message type name of the payload.
    pub message_name: String,
    codec: Option<MessageCodec>,
    validator: Option<Arc<dyn SpecValidator>>,
}

impl Schema {
    /// Creates a schema whose payload is message type `T`.
    pub fn new<T: Message>(type_name: impl Into<String>, plural: impl Into<String>) -> Self {
        let codec = MessageCodec::of::<T>();
        Self {
            type_name: type_name.into(),
            plural: plural.into(),
            message_name: codec.name().to_string(),
            codec: Some(codec),
            validator: None,
        }
    }

    /// Creates a schema for a message name with no registered codec.
    ///
    /// Every codec operation on it fails with
    /// [`ModelError::UnknownMessageType`].
    pub fn unresolved(
        type_name: impl Into<String>,
        plural: impl Into<String>,
        message_name: impl Into<String>,
    ) -> Self {
        Self {
            type_name: type_name.into(),
            plural: plural.into(),
            message_name: message_name.into(),
            codec: None,
            validator: None,
        }
    }

    /// Attaches the additional validator invoked by [`Schema::validate`].
    #[must_use]
    pub fn with_validator(mut self, validator: impl SpecValidator + 'static) -> Self {
        self.validator = Some(Arc::new(validator));
        self
    }

    pub fn has_validator(&self) -> bool {
        self.validator.is_some()
    }

    fn codec(&self) -> ModelResult<MessageCodec> {
        self.codec
            .ok_or_else(|| ModelError::UnknownMessageType(self.message_name.clone()))
    }

    fn check_message(&self, message: &dyn ConfigMessage) -> ModelResult<()> {
        if message.message_name() != self.message_name {
            return Err(ModelError::SpecMismatch {
                expected: self.message_name.clone(),
                found: message.message_name().to_string(),
            });
        }
        Ok(())
    }

    /// Creates a new zero-valued instance of the payload message.
    pub fn make(&self) -> ModelResult<Box<dyn ConfigMessage>> {
        Ok(self.codec()?.make())
    }

    /// Marshals a payload to canonical JSON.
    pub fn to_json(&self, message: &dyn ConfigMessage) -> ModelResult<String> {
        self.check_message(message)?;
        message
            .to_canonical_json()
            .map_err(|e| ModelError::Encoding(e.to_string()))
    }

    /// Marshals a payload to canonical YAML, derived from the JSON encoding.
    pub fn to_yaml(&self, message: &dyn ConfigMessage) -> ModelResult<String> {
        let map = self.to_json_map(message)?;
        serde_yaml::to_string(&map).map_err(|e| ModelError::Encoding(e.to_string()))
    }

    /// Converts a payload to a generic map using the canonical JSON encoding.
    pub fn to_json_map(&self, message: &dyn ConfigMessage) -> ModelResult<Map<String, Value>> {
        let json = self.to_json(message)?;
        serde_json::from_str(&json).map_err(|e| ModelError::Encoding(e.to_string()))
    }

    /// Decodes a payload from canonical JSON.
    pub fn from_json(&self, json: &str) -> ModelResult<Box<dyn ConfigMessage>> {
        let codec = self.codec()?;
        codec
            .decode(json)
            .map_err(|e| ModelError::Decoding(format!("{e}: {json}")))
    }

    /// Decodes a payload from canonical YAML.
    pub fn from_yaml(&self, yaml: &str) -> ModelResult<Box<dyn ConfigMessage>> {
        let value: Value =
            serde_yaml::from_str(yaml).map_err(|e| ModelError::Decoding(e.to_string()))?;
        self.from_json_map(&value)
    }

    /// Decodes a payload from a generic tree.
    ///
    /// The tree must be a mapping; `null` is read as the empty mapping.
    pub fn from_json_map(&self, data: &Value) -> ModelResult<Box<dyn ConfigMessage>> {
        let json = match data {
            Value::Null => "{}".to_string(),
            Value::Object(_) => {
                serde_json::to_string(data).map_err(|e| ModelError::Decoding(e.to_string()))?
            }
            other => {
                return Err(ModelError::Decoding(format!(
                    "expected a mapping, found {other}"
                )));
            }
        };
        self.from_json(&json)
    }

    /// Validates the schema itself, then the payload.
    ///
    /// Type and plural names are checked before message resolution, and the
    /// additional validator only runs once all structural checks pass.
    pub fn validate(&self, message: &dyn ConfigMessage) -> ModelResult<()> {
        if !is_dns1123_label(&self.type_name) {
            return Err(ModelError::InvalidType(self.type_name.clone()));
        }
        if !is_dns1123_label(&self.plural) {
            return Err(ModelError::InvalidPlural(self.plural.clone()));
        }
        self.codec()?;
        self.check_message(message)?;
        if let Some(validator) = &self.validator {
            validator.validate(message).map_err(ModelError::Validation)?;
        }
        Ok(())
    }
}

impl PartialEq for Schema {
    fn eq(&self, other: &Self) -> bool {
        self.type_name == other.type_name
            && self.plural == other.plural
            && self.message_name == other.message_name
    }
}

impl fmt::Debug for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema")
            .field("type_name", &self.type_name)
            .field("plural", &self.plural)
            .field("message_name", &self.message_name)
            .field("resolved", &self.codec.is_some())
            .field("has_validator", &self.validator.is_some())
            .finish()
    }
}
