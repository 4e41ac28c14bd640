//! Support Ticket Repository

use shared::models::{SupportTicket, SupportTicketCreate, SupportTicketUpdate, TicketStatus};
use shared::types::{RecordId, UnvalidatedForeignKey};

use crate::db::Store;

pub fn find_all(store: &Store) -> Vec<SupportTicket> {
    store.read().support_tickets.values().cloned().collect()
}

pub fn find_by_id(store: &Store, id: RecordId) -> Option<SupportTicket> {
    store.read().support_tickets.get(id).cloned()
}

pub fn find_by_status(store: &Store, status: TicketStatus) -> Vec<SupportTicket> {
    store.read().support_tickets.filter(|t| t.status == status)
}

pub fn find_by_customer(store: &Store, customer_id: UnvalidatedForeignKey) -> Vec<SupportTicket> {
    store
        .read()
        .support_tickets
        .filter(|t| t.customer_id == customer_id)
}

pub fn create(store: &Store, data: SupportTicketCreate) -> SupportTicket {
    let now = shared::util::now_millis();
    let ticket = store
        .write()
        .support_tickets
        .insert_with(|id| SupportTicket::new(id, now, data));
    tracing::debug!(id = ticket.id, category = %ticket.category, "Support ticket created");
    ticket
}

/// Merge fields and stamp `updated_at`.
pub fn update(store: &Store, id: RecordId, data: SupportTicketUpdate) -> Option<SupportTicket> {
    let now = shared::util::now_millis();
    let mut tables = store.write();
    let ticket = tables.support_tickets.get_mut(id)?;
    ticket.apply(data, now);
    Some(ticket.clone())
}

pub fn delete(store: &Store, id: RecordId) -> bool {
    store.write().support_tickets.remove(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_update_cycle() {
        let store = Store::new();
        let ticket = create(&store, SupportTicketCreate::new(4, "Router", "Lights blinking"));
        assert_eq!(ticket.status, TicketStatus::Open);

        let updated = update(
            &store,
            ticket.id,
            SupportTicketUpdate {
                status: Some(TicketStatus::Closed),
                assigned_to: Some(2),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(updated.status, TicketStatus::Closed);
        assert_eq!(updated.assigned_to, Some(2));
        assert_eq!(updated.message, "Lights blinking");
        assert!(updated.updated_at >= ticket.updated_at);
        assert_eq!(updated.created_at, ticket.created_at);
    }

    #[test]
    fn test_filters() {
        let store = Store::new();
        create(&store, SupportTicketCreate::new(1, "a", "m"));
        let mut closed = SupportTicketCreate::new(2, "b", "m");
        closed.status = Some(TicketStatus::Closed);
        create(&store, closed);

        assert_eq!(find_by_status(&store, TicketStatus::Open).len(), 1);
        assert_eq!(find_by_status(&store, TicketStatus::Closed).len(), 1);
        assert!(find_by_status(&store, TicketStatus::Resolved).is_empty());
        assert_eq!(find_by_customer(&store, 2).len(), 1);
    }

    #[test]
    fn test_unknown_ids() {
        let store = Store::new();
        assert!(find_by_id(&store, 1).is_none());
        assert!(update(&store, 1, SupportTicketUpdate::default()).is_none());
        assert!(!delete(&store, 1));
        assert!(find_all(&store).is_empty());
    }
}
