//! Repository implementations for the quiz store.
//!
//! One generic `RecordRepository` owns the SQL for insert, update,
//! soft-delete, and reads; thin typed repositories adapt it to the domain
//! entities.

mod answer;
mod event;
mod event_ticket;
mod quiz;
mod record;

pub use answer::AnswerRepository;
pub use event::EventRepository;
pub use event_ticket::EventTicketRepository;
pub use quiz::QuizRepository;
pub use record::RecordRepository;

use rusqlite::Connection;
use std::sync::{Arc, Mutex};

/// Shared handle to the store's single connection.
pub type DbConn = Arc<Mutex<Connection>>;

#[cfg(test)]
mod tests;
