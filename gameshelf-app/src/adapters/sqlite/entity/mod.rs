//! `SeaORM` entities for the durable store.

pub mod library_entry;
pub mod profile;
pub mod user;
