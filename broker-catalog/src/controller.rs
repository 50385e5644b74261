use crate::osb::{Catalog, Service, ServicePlan};
use crate::view::BrokerConfigStore;
use broker_store::StoreResult;
use tracing::debug;

/// Builds broker API responses from the config store.
#[derive(Clone)]
pub struct Controller {
    view: BrokerConfigStore,
}

impl Controller {
    pub fn new(view: BrokerConfigStore) -> Self {
        Self { view }
    }

    pub fn view(&self) -> &BrokerConfigStore {
        &self.view
    }

    /// Assembles the catalog: one service per class, each carrying the plans
    /// that list the class's name.
    ///
    /// Services and plans are emitted in store-key order so responses are
    /// stable; callers should still treat them as unordered.
    pub fn catalog(&self) -> StoreResult<Catalog> {
        let mut classes: Vec<_> = self.view.service_classes()?.into_iter().collect();
        classes.sort_by(|a, b| a.0.cmp(&b.0));

        let mut catalog = Catalog::default();
        for (_, class) in &classes {
            let mut service = Service::from_class(class);
            let mut plans: Vec<_> = self
                .view
                .service_plans_by_service(&service.name)?
                .into_iter()
                .collect();
            plans.sort_by(|a, b| a.0.cmp(&b.0));
            for (_, plan) in &plans {
                service.add_plan(ServicePlan::from_plan(plan));
            }
            catalog.add_service(service);
        }

        debug!(services = catalog.services.len(), "built catalog");
        Ok(catalog)
    }
}
