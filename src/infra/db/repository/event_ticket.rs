use super::DbConn;
use super::record::RecordRepository;
use crate::domain::{EventTicket, EventTicketPatch, NewEventTicket, StoreResult};
use crate::infra::db::schema;
use chrono::Utc;
use rusqlite::Row;
use rusqlite::types::Value;

/// Repository for event tickets.
pub struct EventTicketRepository {
    records: RecordRepository,
}

impl EventTicketRepository {
    pub fn new(conn: DbConn) -> Self {
        Self {
            records: RecordRepository::new(conn, &schema::EVENT_TICKETS),
        }
    }

    pub fn create(&self, ticket: &NewEventTicket) -> StoreResult<i64> {
        let created_at = ticket
            .created_at
            .clone()
            .unwrap_or_else(|| Utc::now().to_rfc3339());

        let mut fields: Vec<(&str, Value)> = vec![
            ("event_id", Value::from(ticket.event_id)),
            ("code", Value::from(ticket.code.clone())),
            ("created_at", Value::from(created_at)),
        ];
        if let Some(holder) = &ticket.holder {
            fields.push(("holder", Value::from(holder.clone())));
        }

        self.records.insert(&fields)
    }

    pub fn update(&self, id: i64, patch: &EventTicketPatch) -> StoreResult<()> {
        let mut fields: Vec<(&str, Value)> = Vec::new();
        if let Some(code) = &patch.code {
            fields.push(("code", Value::from(code.clone())));
        }
        if let Some(holder) = &patch.holder {
            fields.push(("holder", Value::from(holder.clone())));
        }
        self.records.update(id, &fields)
    }

    pub fn delete(&self, id: i64) -> StoreResult<()> {
        self.records.soft_delete(id)
    }

    pub fn find_by_id(&self, id: i64) -> StoreResult<EventTicket> {
        self.records.fetch(id, Self::row_to_ticket)
    }

    pub fn find_all(&self, sort: Option<&str>) -> StoreResult<Vec<EventTicket>> {
        self.records.fetch_all(sort, Self::row_to_ticket)
    }

    /// All live tickets issued for one event.
    pub fn find_by_event(&self, event_id: i64) -> StoreResult<Vec<EventTicket>> {
        self.records
            .fetch_where("event_id", Value::from(event_id), Self::row_to_ticket)
    }

    fn row_to_ticket(row: &Row<'_>) -> rusqlite::Result<EventTicket> {
        Ok(EventTicket {
            id: row.get(0)?,
            event_id: row.get(1)?,
            code: row.get(2)?,
            holder: row.get(3)?,
            created_at: row.get(4)?,
            is_deleted: row.get::<_, i64>(5)? != 0,
        })
    }
}
