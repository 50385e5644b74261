//! Property-based tests for the broker config kinds.
//!
//! - Round trip: from_json_map(to_json_map(m)) == m for every registered schema
//! - Text round trip: from_yaml(to_yaml(m)) == m
//! - Full objects survive Descriptor::to_yaml / from_yaml

use broker_catalog::{broker_descriptor, CatalogEntry, Deployment, ServiceClass, ServicePlan};
use broker_model::{ConfigMessage, ConfigMeta, Entry, Message, Schema};
use proptest::prelude::*;
use serde_json::Value;

// =============================================================================
// HELPER STRATEGIES
// =============================================================================

fn text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 _./:-]{0,24}").unwrap()
}

fn name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z0-9]([-a-z0-9]{0,14}[a-z0-9])?").unwrap()
}

fn catalog_entry_strategy() -> impl Strategy<Value = CatalogEntry> {
    (text_strategy(), text_strategy(), text_strategy())
        .prop_map(|(name, id, description)| CatalogEntry { name, id, description })
}

fn service_class_strategy() -> impl Strategy<Value = ServiceClass> {
    (
        prop::option::of(text_strategy().prop_map(|instance| Deployment { instance })),
        prop::option::of(catalog_entry_strategy()),
    )
        .prop_map(|(deployment, entry)| ServiceClass { deployment, entry })
}

fn service_plan_strategy() -> impl Strategy<Value = ServicePlan> {
    (
        prop::option::of(catalog_entry_strategy()),
        prop::collection::vec(text_strategy(), 0..5),
    )
        .prop_map(|(plan, services)| ServicePlan { plan, services })
}

/// Picks the generated payload matching `schema`'s message type.
fn sample_for<'a>(
    schema: &Schema,
    class: &'a ServiceClass,
    plan: &'a ServicePlan,
) -> &'a dyn ConfigMessage {
    match schema.message_name.as_str() {
        ServiceClass::NAME => class,
        ServicePlan::NAME => plan,
        other => panic!("no generator for {other}"),
    }
}

// =============================================================================
// ROUND TRIP
// =============================================================================

proptest! {
    #[test]
    fn generic_map_round_trip_for_every_schema(
        class in service_class_strategy(),
        plan in service_plan_strategy(),
    ) {
        let descriptor = broker_descriptor().unwrap();
        for schema in descriptor.schemas() {
            let message = sample_for(schema, &class, &plan);
            let map = schema.to_json_map(message).unwrap();
            let decoded = schema.from_json_map(&Value::Object(map)).unwrap();
            prop_assert!(decoded.eq_message(message), "{} did not round trip", schema.type_name);
            prop_assert!(schema.validate(decoded.as_ref()).is_ok());
        }
    }

    #[test]
    fn yaml_round_trip_for_every_schema(
        class in service_class_strategy(),
        plan in service_plan_strategy(),
    ) {
        let descriptor = broker_descriptor().unwrap();
        for schema in descriptor.schemas() {
            let message = sample_for(schema, &class, &plan);
            let yaml = schema.to_yaml(message).unwrap();
            let decoded = schema.from_yaml(&yaml).unwrap();
            prop_assert!(decoded.eq_message(message), "{} did not round trip: {}", schema.type_name, yaml);
        }
    }

    #[test]
    fn plan_objects_round_trip_through_descriptor(
        name in name_strategy(),
        namespace in prop::option::of(name_strategy()),
        plan in service_plan_strategy(),
    ) {
        let descriptor = broker_descriptor().unwrap();
        let meta = ConfigMeta::new("service-plan", name, namespace.unwrap_or_default());
        let entry = Entry::new(meta, plan);
        let yaml = descriptor.to_yaml(&entry).unwrap();
        let parsed = descriptor.from_yaml(&yaml).unwrap();
        prop_assert_eq!(parsed, entry);
    }
}
