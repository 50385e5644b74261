//! Typed read views over the config store.

use crate::config::{ServiceClass, ServicePlan, SERVICE_CLASS, SERVICE_PLAN};
use broker_model::Message;
use broker_store::{ConfigStore, StoreResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::warn;

/// What a view does when the store fails to list a kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListErrorPolicy {
    /// Log the failure and return an empty view.
    #[default]
    Suppress,
    /// Return the store error to the caller.
    Propagate,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub list_errors: ListErrorPolicy,
}

/// Broker-specific access to a generic config store.
///
/// Every view is keyed by the store key of the entry it came from. Entries
/// whose payload is not of the expected kind are skipped.
#[derive(Clone)]
pub struct BrokerConfigStore {
    store: Arc<dyn ConfigStore>,
    config: ViewConfig,
}

impl BrokerConfigStore {
    pub fn new(store: Arc<dyn ConfigStore>) -> Self {
        Self::with_config(store, ViewConfig::default())
    }

    pub fn with_config(store: Arc<dyn ConfigStore>, config: ViewConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    /// The underlying store.
    pub fn store(&self) -> &Arc<dyn ConfigStore> {
        &self.store
    }

    /// All service classes across namespaces.
    pub fn service_classes(&self) -> StoreResult<HashMap<String, ServiceClass>> {
        self.list_typed(SERVICE_CLASS)
    }

    /// All service plans across namespaces.
    pub fn service_plans(&self) -> StoreResult<HashMap<String, ServicePlan>> {
        self.list_typed(SERVICE_PLAN)
    }

    /// Plans whose service list contains `service`.
    pub fn service_plans_by_service(
        &self,
        service: &str,
    ) -> StoreResult<HashMap<String, ServicePlan>> {
        let mut plans = self.service_plans()?;
        plans.retain(|_, plan| plan.applies_to(service));
        Ok(plans)
    }

    fn list_typed<T: Message>(&self, type_name: &str) -> StoreResult<HashMap<String, T>> {
        let entries = match self.store.list(type_name, "") {
            Ok(entries) => entries,
            Err(err) => match self.config.list_errors {
                ListErrorPolicy::Suppress => {
                    warn!(type_name, error = %err, "list failed, serving empty view");
                    return Ok(HashMap::new());
                }
                ListErrorPolicy::Propagate => return Err(err),
            },
        };

        Ok(entries
            .iter()
            .filter_map(|entry| {
                let spec = entry.spec_as::<T>()?;
                Some((entry.key(), spec.clone()))
            })
            .collect())
    }
}
