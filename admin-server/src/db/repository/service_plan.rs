//! Service Plan Repository

use shared::models::{ServicePlan, ServicePlanCreate, ServicePlanUpdate};
use shared::types::RecordId;

use crate::db::Store;

pub fn find_all(store: &Store) -> Vec<ServicePlan> {
    store.read().service_plans.values().cloned().collect()
}

pub fn find_by_id(store: &Store, id: RecordId) -> Option<ServicePlan> {
    store.read().service_plans.get(id).cloned()
}

pub fn find_by_provider(store: &Store, provider: &str) -> Vec<ServicePlan> {
    store.read().service_plans.filter(|p| p.provider == provider)
}

pub fn create(store: &Store, data: ServicePlanCreate) -> ServicePlan {
    let now = shared::util::now_millis();
    let plan = store
        .write()
        .service_plans
        .insert_with(|id| ServicePlan::new(id, now, data));
    tracing::debug!(id = plan.id, provider = %plan.provider, "Service plan created");
    plan
}

pub fn update(store: &Store, id: RecordId, data: ServicePlanUpdate) -> Option<ServicePlan> {
    let mut tables = store.write();
    let plan = tables.service_plans.get_mut(id)?;
    plan.apply(data);
    Some(plan.clone())
}

/// Customers subscribed to the plan keep their `plan_id`.
pub fn delete(store: &Store, id: RecordId) -> bool {
    store.write().service_plans.remove(id)
}
