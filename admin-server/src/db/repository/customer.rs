//! Customer Repository

use shared::models::{Customer, CustomerCreate, CustomerUpdate};
use shared::types::RecordId;

use crate::db::Store;

pub fn find_all(store: &Store) -> Vec<Customer> {
    store.read().customers.values().cloned().collect()
}

pub fn find_by_id(store: &Store, id: RecordId) -> Option<Customer> {
    store.read().customers.get(id).cloned()
}

pub fn find_by_provider(store: &Store, provider: &str) -> Vec<Customer> {
    store
        .read()
        .customers
        .filter(|c| c.service_provider.as_deref() == Some(provider))
}

pub fn find_by_location(store: &Store, location: &str) -> Vec<Customer> {
    store.read().customers.filter(|c| c.location == location)
}

/// `plan_id` is stored as given, whether or not the plan exists.
pub fn create(store: &Store, data: CustomerCreate) -> Customer {
    let now = shared::util::now_millis();
    let customer = store
        .write()
        .customers
        .insert_with(|id| Customer::new(id, now, data));
    tracing::debug!(id = customer.id, "Customer created");
    customer
}

pub fn update(store: &Store, id: RecordId, data: CustomerUpdate) -> Option<Customer> {
    let mut tables = store.write();
    let customer = tables.customers.get_mut(id)?;
    customer.apply(data);
    Some(customer.clone())
}

/// Complaints and tickets that reference the customer are left in place.
pub fn delete(store: &Store, id: RecordId) -> bool {
    let removed = store.write().customers.remove(id);
    if removed {
        tracing::debug!(id, "Customer deleted");
    }
    removed
}
