//! Configuration model for the service broker.
//!
//! Defines the types every other broker crate depends on:
//! - [`Message`] / [`ConfigMessage`]: typed configuration payloads and the
//!   canonical JSON codec they carry
//! - [`Schema`]: one configuration kind, with its short type name, plural, message
//!   name and an optional [`SpecValidator`]
//! - [`Descriptor`]: the immutable set of registered schemas, and the
//!   conversions between [`Entry`] and its textual form
//! - [`ConfigMeta`] / [`Entry`]: identity metadata plus a typed payload
//!
//! Payload conversion always goes through the canonical JSON encoding. A
//! generic map is whatever the canonical encoder produced, never a
//! reflective dump of the Rust value.

mod descriptor;
mod entry;
mod error;
mod message;
mod schema;

pub use descriptor::{ConfigObject, Descriptor};
pub use entry::{key, ConfigMeta, Entry};
pub use error::{ModelError, ModelResult};
pub use message::{ConfigMessage, Message, MessageCodec};
pub use schema::{is_dns1123_label, Schema, SpecValidator, DNS1123_LABEL_MAX_LENGTH};
