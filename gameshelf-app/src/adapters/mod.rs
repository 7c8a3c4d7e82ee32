//! Storage adapters: the durable `SQLite` backend and the ephemeral
//! in-memory fallback.

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
