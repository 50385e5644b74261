//! Service broker catalog.
//!
//! Defines the broker's configuration kinds ([`ServiceClass`],
//! [`ServicePlan`]), typed views over a config store
//! ([`BrokerConfigStore`]) and the [`Controller`] that relates the two into
//! an Open Service Broker [`Catalog`](osb::Catalog).

mod config;
mod controller;
pub mod osb;
mod view;

pub use config::{
    broker_descriptor, service_class_schema, service_plan_schema, CatalogEntry, Deployment,
    ServiceClass, ServicePlan, SERVICE_CLASS, SERVICE_CLASSES, SERVICE_PLAN, SERVICE_PLANS,
};
pub use controller::Controller;
pub use view::{BrokerConfigStore, ListErrorPolicy, ViewConfig};
