//! Local SQLite persistence for quiz content.
//!
//! The crate stores quizzes, recorded answers, events, and event tickets in
//! a single SQLite file behind per-entity repositories. Deletion is always
//! logical: rows are flagged, never erased.

pub mod domain;
pub mod infra;
