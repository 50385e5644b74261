//! Change notifications emitted after successful mutations.

use broker_model::Entry;
use std::fmt;

/// The kind of mutation applied to an object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigEvent {
    Add,
    Update,
    Delete,
}

impl fmt::Display for ConfigEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Add => "add",
            Self::Update => "update",
            Self::Delete => "delete",
        };
        f.write_str(name)
    }
}

/// A committed mutation. For `Delete`, `entry` is the last stored value.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigChange {
    pub event: ConfigEvent,
    pub entry: Entry,
}
