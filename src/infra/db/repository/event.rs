use super::DbConn;
use super::record::RecordRepository;
use crate::domain::{Event, EventPatch, NewEvent, StoreResult};
use crate::infra::db::schema;
use chrono::Utc;
use rusqlite::Row;
use rusqlite::types::Value;

/// Repository for quiz events.
pub struct EventRepository {
    records: RecordRepository,
}

impl EventRepository {
    pub fn new(conn: DbConn) -> Self {
        Self {
            records: RecordRepository::new(conn, &schema::EVENTS),
        }
    }

    pub fn create(&self, event: &NewEvent) -> StoreResult<i64> {
        let created_at = event
            .created_at
            .clone()
            .unwrap_or_else(|| Utc::now().to_rfc3339());

        let mut fields: Vec<(&str, Value)> = vec![
            ("name", Value::from(event.name.clone())),
            ("created_at", Value::from(created_at)),
        ];
        if let Some(description) = &event.description {
            fields.push(("description", Value::from(description.clone())));
        }
        if let Some(starts_at) = &event.starts_at {
            fields.push(("starts_at", Value::from(starts_at.clone())));
        }

        self.records.insert(&fields)
    }

    pub fn update(&self, id: i64, patch: &EventPatch) -> StoreResult<()> {
        let mut fields: Vec<(&str, Value)> = Vec::new();
        if let Some(name) = &patch.name {
            fields.push(("name", Value::from(name.clone())));
        }
        if let Some(description) = &patch.description {
            fields.push(("description", Value::from(description.clone())));
        }
        if let Some(starts_at) = &patch.starts_at {
            fields.push(("starts_at", Value::from(starts_at.clone())));
        }
        self.records.update(id, &fields)
    }

    pub fn delete(&self, id: i64) -> StoreResult<()> {
        self.records.soft_delete(id)
    }

    pub fn find_by_id(&self, id: i64) -> StoreResult<Event> {
        self.records.fetch(id, Self::row_to_event)
    }

    pub fn find_all(&self, sort: Option<&str>) -> StoreResult<Vec<Event>> {
        self.records.fetch_all(sort, Self::row_to_event)
    }

    fn row_to_event(row: &Row<'_>) -> rusqlite::Result<Event> {
        Ok(Event {
            id: row.get(0)?,
            name: row.get(1)?,
            description: row.get(2)?,
            starts_at: row.get(3)?,
            created_at: row.get(4)?,
            is_deleted: row.get::<_, i64>(5)? != 0,
        })
    }
}
