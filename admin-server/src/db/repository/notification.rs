//! Notification Repository

use shared::models::{Notification, NotificationCreate, NotificationUpdate};
use shared::types::RecordId;

use crate::db::Store;

pub fn find_all(store: &Store) -> Vec<Notification> {
    store.read().notifications.values().cloned().collect()
}

pub fn find_by_id(store: &Store, id: RecordId) -> Option<Notification> {
    store.read().notifications.get(id).cloned()
}

/// Record a broadcast. Delivery and read counters start where the payload
/// puts them (zero by default) and are only changed through [`update`].
pub fn create(store: &Store, data: NotificationCreate) -> Notification {
    let now = shared::util::now_millis();
    let notification = store
        .write()
        .notifications
        .insert_with(|id| Notification::new(id, now, data));
    tracing::info!(
        id = notification.id,
        recipient_type = %notification.recipient_type,
        "Notification recorded"
    );
    notification
}

pub fn update(store: &Store, id: RecordId, data: NotificationUpdate) -> Option<Notification> {
    let mut tables = store.write();
    let notification = tables.notifications.get_mut(id)?;
    notification.apply(data);
    Some(notification.clone())
}

pub fn delete(store: &Store, id: RecordId) -> bool {
    store.write().notifications.remove(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_are_caller_managed() {
        let store = Store::new();
        let n = create(&store, NotificationCreate::new("Maintenance", "Tonight 2am", 1));
        assert_eq!(n.delivered_count, 0);

        // Reading it back does not move the counters
        let fetched = find_by_id(&store, n.id).unwrap();
        assert_eq!(fetched.read_count, 0);

        let updated = update(
            &store,
            n.id,
            NotificationUpdate {
                delivered_count: Some(120),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(updated.delivered_count, 120);
        assert_eq!(updated.read_count, 0);
        assert_eq!(updated.sent_at, n.sent_at);
    }

    #[test]
    fn test_list_and_delete() {
        let store = Store::new();
        let a = create(&store, NotificationCreate::new("a", "m", 1));
        let b = create(&store, NotificationCreate::new("b", "m", 1));
        assert_eq!(
            find_all(&store).iter().map(|n| n.id).collect::<Vec<_>>(),
            vec![a.id, b.id]
        );
        assert!(delete(&store, a.id));
        assert_eq!(find_all(&store).len(), 1);
        assert!(!delete(&store, a.id));
    }
}
