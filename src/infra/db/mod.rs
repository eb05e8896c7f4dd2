//! SQLite persistence (infrastructure).

pub mod database;
pub mod repository;
pub mod schema;

pub use database::Database;
pub use repository::{
    AnswerRepository, EventRepository, EventTicketRepository, QuizRepository, RecordRepository,
};
