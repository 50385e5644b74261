//! Broker configuration kinds and their schemas.

use broker_model::{Descriptor, Message, ModelResult, Schema};
use serde::{Deserialize, Serialize};

/// Config type name for service classes.
pub const SERVICE_CLASS: &str = "service-class";
pub const SERVICE_CLASSES: &str = "service-classes";

/// Config type name for service plans.
pub const SERVICE_PLAN: &str = "service-plan";
pub const SERVICE_PLANS: &str = "service-plans";

/// Catalog-visible identity shared by classes and plans.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CatalogEntry {
    /// Name shown to platform users. Plans refer to classes by this name.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

/// Where a service class is deployed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Deployment {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub instance: String,
}

/// A service offered through the broker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ServiceClass {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployment: Option<Deployment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry: Option<CatalogEntry>,
}

impl ServiceClass {
    /// The class name plans match against. Empty when the class has no entry.
    pub fn name(&self) -> &str {
        self.entry.as_ref().map_or("", |e| e.name.as_str())
    }
}

impl Message for ServiceClass {
    const NAME: &'static str = "istio.broker.v1.config.ServiceClass";
}

/// A plan offered for one or more service classes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ServicePlan {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<CatalogEntry>,
    /// Names of the service classes this plan applies to.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub services: Vec<String>,
}

impl ServicePlan {
    /// Whether `service` appears anywhere in the plan's service list.
    pub fn applies_to(&self, service: &str) -> bool {
        self.services.iter().any(|s| s == service)
    }
}

impl Message for ServicePlan {
    const NAME: &'static str = "istio.broker.v1.config.ServicePlan";
}

pub fn service_class_schema() -> Schema {
    Schema::new::<ServiceClass>(SERVICE_CLASS, SERVICE_CLASSES)
}

pub fn service_plan_schema() -> Schema {
    Schema::new::<ServicePlan>(SERVICE_PLAN, SERVICE_PLANS)
}

/// Descriptor registering every broker configuration kind.
pub fn broker_descriptor() -> ModelResult<Descriptor> {
    Descriptor::new([service_class_schema(), service_plan_schema()])
}
