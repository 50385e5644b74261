use crate::error::StoreResult;
use broker_model::{Descriptor, Entry};
use std::sync::Arc;

/// Platform-agnostic storage for configuration objects.
///
/// `create`, `update` and `delete` are the mutators. Implementations backed
/// by a remote service may apply them asynchronously, but must never hold a
/// registry-wide lock across I/O.
pub trait ConfigStore: Send + Sync {
    /// The configuration types this store accepts.
    fn descriptor(&self) -> &Descriptor;

    /// Retrieves an object by type and key. `None` is a normal outcome.
    fn get(&self, type_name: &str, name: &str, namespace: &str) -> Option<Entry>;

    /// Lists objects by type and namespace. An empty namespace lists across
    /// all namespaces. Ordering is unspecified.
    fn list(&self, type_name: &str, namespace: &str) -> StoreResult<Vec<Entry>>;

    /// Adds a new object and returns its first revision. Fails with no side
    /// effects if an object with the same key exists.
    fn create(&self, entry: Entry) -> StoreResult<String>;

    /// Replaces an existing object. The entry's `resource_version` must equal
    /// the stored revision. Returns the new revision.
    fn update(&self, entry: Entry) -> StoreResult<String>;

    /// Removes an object by key.
    fn delete(&self, type_name: &str, name: &str, namespace: &str) -> StoreResult<()>;
}

impl<S: ConfigStore + ?Sized> ConfigStore for Arc<S> {
    fn descriptor(&self) -> &Descriptor {
        (**self).descriptor()
    }

    fn get(&self, type_name: &str, name: &str, namespace: &str) -> Option<Entry> {
        (**self).get(type_name, name, namespace)
    }

    fn list(&self, type_name: &str, namespace: &str) -> StoreResult<Vec<Entry>> {
        (**self).list(type_name, namespace)
    }

    fn create(&self, entry: Entry) -> StoreResult<String> {
        (**self).create(entry)
    }

    fn update(&self, entry: Entry) -> StoreResult<String> {
        (**self).update(entry)
    }

    fn delete(&self, type_name: &str, name: &str, namespace: &str) -> StoreResult<()> {
        (**self).delete(type_name, name, namespace)
    }
}
