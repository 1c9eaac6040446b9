//! Database module: models and schema for persistent storage.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows and request payloads
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `sqlite.rs`: the account store itself

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::{Account, AccountPatch, NewAccount};
pub use schema::SQLITE_INIT;
pub use sqlite::{AccountStorage, SqlitePool, connect};
