//! Open Service Broker catalog response types.

use crate::config;
use serde::{Deserialize, Serialize};

/// Response body of `GET /v2/catalog`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub services: Vec<Service>,
}

impl Catalog {
    pub fn add_service(&mut self, service: Service) {
        self.services.push(service);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub name: String,
    pub id: String,
    pub description: String,
    pub bindable: bool,
    pub plan_updateable: bool,
    pub plans: Vec<ServicePlan>,
}

impl Service {
    /// Wraps a service class. Classes are bindable and their plans fixed.
    pub fn from_class(class: &config::ServiceClass) -> Self {
        let entry = class.entry.clone().unwrap_or_default();
        Self {
            name: entry.name,
            id: entry.id,
            description: entry.description,
            bindable: true,
            plan_updateable: false,
            plans: Vec::new(),
        }
    }

    pub fn add_plan(&mut self, plan: ServicePlan) {
        self.plans.push(plan);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServicePlan {
    pub name: String,
    pub id: String,
    pub description: String,
    pub free: bool,
}

impl ServicePlan {
    pub fn from_plan(plan: &config::ServicePlan) -> Self {
        let entry = plan.plan.clone().unwrap_or_default();
        Self {
            name: entry.name,
            id: entry.id,
            description: entry.description,
            free: true,
        }
    }
}
