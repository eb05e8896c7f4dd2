//! Infrastructure layer (adapters/implementations).
//!
//! This module contains the IO-heavy integration: SQLite persistence.

pub mod db;
