//! Typed configuration payloads.
//!
//! A payload type implements [`Message`] and picks up [`ConfigMessage`], the
//! object-safe capability the registry works with. [`MessageCodec`] is the
//! per-type vtable a [`Schema`](crate::Schema) holds to create and decode
//! instances by message name without runtime reflection.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::any::Any;
use std::fmt;

/// A concrete configuration message type.
///
/// `NAME` is the fully-qualified message identifier schemas refer to, e.g.
/// `istio.broker.v1.config.ServiceClass`. The serde representation of the
/// type is its canonical encoding.
pub trait Message:
    Serialize + DeserializeOwned + Default + Clone + PartialEq + fmt::Debug + Send + Sync + 'static
{
    const NAME: &'static str;
}

/// Object-safe view of a configuration payload.
pub trait ConfigMessage: fmt::Debug + Send + Sync {
    /// Fully-qualified message identifier of the dynamic type.
    fn message_name(&self) -> &'static str;

    /// Encodes the payload as canonical JSON.
    fn to_canonical_json(&self) -> serde_json::Result<String>;

    fn as_any(&self) -> &dyn Any;

    /// Structural equality across the trait object boundary. Payloads of
    /// different message types are never equal.
    fn eq_message(&self, other: &dyn ConfigMessage) -> bool;
}

impl<T: Message> ConfigMessage for T {
    fn message_name(&self) -> &'static str {
        T::NAME
    }

    fn to_canonical_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn eq_message(&self, other: &dyn ConfigMessage) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| other == self)
    }
}

impl<'a> dyn ConfigMessage + 'a {
    /// Returns the payload as `T` if that is its dynamic type.
    pub fn downcast_ref<T: Message>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}

impl<'a> PartialEq for dyn ConfigMessage + 'a {
    fn eq(&self, other: &Self) -> bool {
        self.eq_message(other)
    }
}

/// Creates and decodes instances of one registered message type.
#[derive(Clone, Copy)]
pub struct MessageCodec {
    name: &'static str,
    make: fn() -> Box<dyn ConfigMessage>,
    decode: fn(&str) -> serde_json::Result<Box<dyn ConfigMessage>>,
}

impl MessageCodec {
    /// Builds the codec for message type `T`.
    pub fn of<T: Message>() -> Self {
        Self {
            name: T::NAME,
            make: make_default::<T>,
            decode: decode_json::<T>,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns a zero-valued instance.
    pub fn make(&self) -> Box<dyn ConfigMessage> {
        (self.make)()
    }

    /// Decodes an instance from canonical JSON.
    pub fn decode(&self, json: &str) -> serde_json::Result<Box<dyn ConfigMessage>> {
        (self.decode)(json)
    }
}

impl fmt::Debug for MessageCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageCodec").field("name", &self.name).finish()
    }
}

fn make_default<T: Message>() -> Box<dyn ConfigMessage> {
    Box::new(T::default())
}

fn decode_json<T: Message>(json: &str) -> serde_json::Result<Box<dyn ConfigMessage>> {
    let message: T = serde_json::from_str(json)?;
    Ok(Box::new(message))
}
