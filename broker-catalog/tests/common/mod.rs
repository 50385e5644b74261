//! Shared fixtures for catalog tests.

#![allow(dead_code)]

use broker_catalog::{
    broker_descriptor, BrokerConfigStore, CatalogEntry, ServiceClass, ServicePlan, SERVICE_CLASS,
    SERVICE_PLAN,
};
use broker_model::{ConfigMeta, Descriptor, Entry, Message};
use broker_store::{ConfigStore, MemoryConfigStore, StoreError, StoreResult};
use std::sync::Arc;

pub fn make_store() -> Arc<MemoryConfigStore> {
    Arc::new(MemoryConfigStore::new(Arc::new(broker_descriptor().unwrap())))
}

pub fn make_view(store: &Arc<MemoryConfigStore>) -> BrokerConfigStore {
    BrokerConfigStore::new(store.clone())
}

pub fn make_class(name: &str) -> ServiceClass {
    ServiceClass {
        deployment: None,
        entry: Some(CatalogEntry {
            name: name.to_string(),
            id: format!("{name}-id"),
            description: format!("{name} service"),
        }),
    }
}

pub fn make_plan(name: &str, services: &[&str]) -> ServicePlan {
    ServicePlan {
        plan: Some(CatalogEntry {
            name: name.to_string(),
            id: format!("{name}-id"),
            description: format!("{name} plan"),
        }),
        services: services.iter().map(|s| s.to_string()).collect(),
    }
}

pub fn class_entry(name: &str, namespace: &str) -> Entry {
    Entry::new(ConfigMeta::new(SERVICE_CLASS, name, namespace), make_class(name))
}

pub fn plan_entry(name: &str, namespace: &str, services: &[&str]) -> Entry {
    Entry::new(
        ConfigMeta::new(SERVICE_PLAN, name, namespace),
        make_plan(name, services),
    )
}

pub fn raw_entry(type_name: &str, name: &str, spec: impl Message) -> Entry {
    Entry::new(ConfigMeta::new(type_name, name, ""), spec)
}

/// Read-only store serving a fixed entry list, or failing every call.
///
/// Skips payload validation so tests can feed views entries a real store
/// would reject.
pub struct StubStore {
    descriptor: Descriptor,
    entries: Vec<Entry>,
    fail: bool,
}

impl StubStore {
    pub fn with_entries(entries: Vec<Entry>) -> Self {
        Self {
            descriptor: broker_descriptor().unwrap(),
            entries,
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            descriptor: broker_descriptor().unwrap(),
            entries: Vec::new(),
            fail: true,
        }
    }

    fn unavailable() -> StoreError {
        StoreError::Backend("backend unavailable".into())
    }
}

impl ConfigStore for StubStore {
    fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }

    fn get(&self, type_name: &str, name: &str, namespace: &str) -> Option<Entry> {
        self.entries
            .iter()
            .find(|e| {
                e.meta.type_name == type_name && e.meta.name == name && e.meta.namespace == namespace
            })
            .cloned()
    }

    fn list(&self, type_name: &str, namespace: &str) -> StoreResult<Vec<Entry>> {
        if self.fail {
            return Err(Self::unavailable());
        }
        Ok(self
            .entries
            .iter()
            .filter(|e| e.meta.type_name == type_name)
            .filter(|e| namespace.is_empty() || e.meta.namespace == namespace)
            .cloned()
            .collect())
    }

    fn create(&self, _entry: Entry) -> StoreResult<String> {
        Err(Self::unavailable())
    }

    fn update(&self, _entry: Entry) -> StoreResult<String> {
        Err(Self::unavailable())
    }

    fn delete(&self, _type_name: &str, _name: &str, _namespace: &str) -> StoreResult<()> {
        Err(Self::unavailable())
    }
}
