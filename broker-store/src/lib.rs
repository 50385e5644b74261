//! Config store for the service broker.
//!
//! [`ConfigStore`] is the contract every backing store honors, whatever
//! its storage medium. [`MemoryConfigStore`] is the in-process
//! implementation used by the server and by tests.
//!
//! # Contract
//!
//! - Objects are keyed by (type, name, namespace); the key is unique.
//! - Every mutator validates against the store's [`Descriptor`] before it
//!   touches stored state. A rejected entry leaves no trace.
//! - Revisions are opaque strings owned by the store. `update` succeeds only
//!   when the submitted revision equals the stored one, and the check and
//!   write are atomic.
//! - Entries returned by `get`/`list` are read-only snapshots.
//!
//! [`Descriptor`]: broker_model::Descriptor

mod error;
mod event;
mod memory;
mod store;

pub use error::{StoreError, StoreResult};
pub use event::{ConfigChange, ConfigEvent};
pub use memory::{MemoryConfigStore, DEFAULT_CHANGE_CAPACITY};
pub use store::ConfigStore;
