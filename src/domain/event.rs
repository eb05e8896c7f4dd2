use serde::{Deserialize, Serialize};

/// A quiz event: one session quizzes are played at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Identifier assigned by the store on creation.
    pub id: i64,
    /// Display name of the event.
    pub name: String,
    /// Longer description.
    #[serde(default)]
    pub description: Option<String>,
    /// Scheduled start (RFC 3339), when known.
    #[serde(default)]
    pub starts_at: Option<String>,
    /// Creation timestamp (RFC 3339).
    pub created_at: String,
    /// Soft-delete flag.
    #[serde(default)]
    pub is_deleted: bool,
}

/// Fields for creating an event.
#[derive(Debug, Clone)]
pub struct NewEvent {
    pub name: String,
    pub description: Option<String>,
    pub starts_at: Option<String>,
    pub created_at: Option<String>,
}

/// Partial update for an event; `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct EventPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub starts_at: Option<String>,
}

/// A ticket admitting one participant to an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventTicket {
    /// Identifier assigned by the store on creation.
    pub id: i64,
    /// The event this ticket admits to.
    pub event_id: i64,
    /// Admission code printed on the ticket.
    pub code: String,
    /// Name of the holder, once claimed.
    #[serde(default)]
    pub holder: Option<String>,
    /// Creation timestamp (RFC 3339).
    pub created_at: String,
    /// Soft-delete flag.
    #[serde(default)]
    pub is_deleted: bool,
}

/// Fields for issuing a ticket.
#[derive(Debug, Clone)]
pub struct NewEventTicket {
    pub event_id: i64,
    pub code: String,
    pub holder: Option<String>,
    pub created_at: Option<String>,
}

/// Partial update for a ticket; `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct EventTicketPatch {
    pub code: Option<String>,
    pub holder: Option<String>,
}
