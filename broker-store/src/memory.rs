//! In-memory config store.

use crate::error::{StoreError, StoreResult};
use crate::event::{ConfigChange, ConfigEvent};
use crate::store::ConfigStore;
use broker_model::{key, Descriptor, Entry, ModelError};
use parking_lot::RwLock;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::debug;
use uuid::Uuid;

/// Default number of buffered change notifications per subscriber.
pub const DEFAULT_CHANGE_CAPACITY: usize = 256;

/// Objects of one type, keyed by (namespace, name).
type TypeTable = BTreeMap<(String, String), Entry>;

/// Config store that keeps every object in process memory.
///
/// All mutations take a single write lock, so the revision check and the
/// write in `update` are atomic. Revisions are fresh UUID v7 strings.
pub struct MemoryConfigStore {
    descriptor: Arc<Descriptor>,
    tables: RwLock<HashMap<String, TypeTable>>,
    changes: broadcast::Sender<ConfigChange>,
}

impl MemoryConfigStore {
    /// Creates an empty store accepting the types in `descriptor`.
    pub fn new(descriptor: Arc<Descriptor>) -> Self {
        Self::with_change_capacity(descriptor, DEFAULT_CHANGE_CAPACITY)
    }

    /// Creates an empty store whose change feed buffers `capacity`
    /// notifications per subscriber.
    pub fn with_change_capacity(descriptor: Arc<Descriptor>, capacity: usize) -> Self {
        let (changes, _) = broadcast::channel(capacity.max(1));
        Self {
            descriptor,
            tables: RwLock::new(HashMap::new()),
            changes,
        }
    }

    /// Subscribes to changes committed after this call.
    ///
    /// A slow subscriber loses the oldest notifications; it never delays a
    /// mutation.
    pub fn subscribe(&self) -> broadcast::Receiver<ConfigChange> {
        self.changes.subscribe()
    }

    /// Number of stored objects across all types.
    pub fn len(&self) -> usize {
        self.tables.read().values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn check_type(&self, type_name: &str) -> StoreResult<()> {
        if self.descriptor.get_by_type(type_name).is_none() {
            return Err(ModelError::UnknownType(type_name.to_string()).into());
        }
        Ok(())
    }

    /// Called with the write lock held so subscribers see mutations in
    /// commit order.
    fn notify(&self, event: ConfigEvent, entry: Entry) {
        // No receivers is not an error.
        let _ = self.changes.send(ConfigChange { event, entry });
    }
}

fn next_revision() -> String {
    Uuid::now_v7().to_string()
}

impl ConfigStore for MemoryConfigStore {
    fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }

    fn get(&self, type_name: &str, name: &str, namespace: &str) -> Option<Entry> {
        let tables = self.tables.read();
        tables
            .get(type_name)?
            .get(&(namespace.to_string(), name.to_string()))
            .cloned()
    }

    fn list(&self, type_name: &str, namespace: &str) -> StoreResult<Vec<Entry>> {
        self.check_type(type_name)?;
        let tables = self.tables.read();
        let Some(table) = tables.get(type_name) else {
            return Ok(Vec::new());
        };
        Ok(table
            .iter()
            .filter(|((ns, _), _)| namespace.is_empty() || ns == namespace)
            .map(|(_, entry)| entry.clone())
            .collect())
    }

    fn create(&self, entry: Entry) -> StoreResult<String> {
        self.descriptor.validate_entry(&entry)?;

        let mut stored = entry;
        let id = (stored.meta.namespace.clone(), stored.meta.name.clone());
        let revision = next_revision();
        {
            let mut tables = self.tables.write();
            let table = tables.entry(stored.meta.type_name.clone()).or_default();
            if table.contains_key(&id) {
                return Err(StoreError::AlreadyExists(stored.key()));
            }
            stored.meta.resource_version = revision.clone();
            table.insert(id, stored.clone());
            self.notify(ConfigEvent::Add, stored.clone());
        }

        debug!(key = %stored.key(), revision = %revision, "created config");
        Ok(revision)
    }

    fn update(&self, entry: Entry) -> StoreResult<String> {
        self.descriptor.validate_entry(&entry)?;

        let mut stored = entry;
        let id = (stored.meta.namespace.clone(), stored.meta.name.clone());
        let revision = next_revision();
        {
            let mut tables = self.tables.write();
            let current = tables
                .get_mut(&stored.meta.type_name)
                .and_then(|table| table.get_mut(&id))
                .ok_or_else(|| StoreError::NotFound(stored.key()))?;
            if current.meta.resource_version != stored.meta.resource_version {
                return Err(StoreError::Conflict {
                    key: stored.key(),
                    stored: current.meta.resource_version.clone(),
                    submitted: stored.meta.resource_version.clone(),
                });
            }
            stored.meta.resource_version = revision.clone();
            *current = stored.clone();
            self.notify(ConfigEvent::Update, stored.clone());
        }

        debug!(key = %stored.key(), revision = %revision, "updated config");
        Ok(revision)
    }

    fn delete(&self, type_name: &str, name: &str, namespace: &str) -> StoreResult<()> {
        self.check_type(type_name)?;

        let mut tables = self.tables.write();
        let removed = tables
            .get_mut(type_name)
            .and_then(|table| table.remove(&(namespace.to_string(), name.to_string())))
            .ok_or_else(|| StoreError::NotFound(key(type_name, name, namespace)))?;
        debug!(key = %removed.key(), "deleted config");
        self.notify(ConfigEvent::Delete, removed);
        Ok(())
    }
}
