//! SQLite-based durable store using `SeaORM`.
//!
//! A single `SqliteStore` implements `IdentityRepository`,
//! `ProfileRepository`, and `LibraryRepository`, backed by a local `SQLite`
//! database. Schema setup runs at construction through
//! `sea_orm_migration`; the `users.username` uniqueness constraint and the
//! `ON DELETE CASCADE` foreign keys are the authoritative guards behind the
//! store-level checks.

mod identity_repo;
mod library_repo;
pub(crate) mod entity;
mod migration;
mod profile_repo;

use std::path::Path;

use chrono::{DateTime, Utc};
use gameshelf_core::error::{CoreError, CoreResult};
use sea_orm::{Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

use migration::Migrator;

/// SQLite-based durable store.
///
/// Implements all three storage traits against a single `SQLite` database
/// file. Identity+profile creation and identity cascade deletion run inside
/// one transaction each.
pub struct SqliteStore {
    /// Shared `SeaORM` database connection.
    pub(crate) db: DatabaseConnection,
}

impl SqliteStore {
    /// Create a new `SQLite` store.
    ///
    /// - `db_path`: Path to the `SQLite` database file (created if not exists).
    ///
    /// # Errors
    /// Returns `CoreError::StorageError` if directory creation, database
    /// connection, or schema migration fails.
    pub async fn new(db_path: &Path) -> CoreResult<Self> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| CoreError::StorageError(format!("Failed to create directory: {e}")))?;
        }

        let db_url = format!("sqlite://{}?mode=rwc", db_path.display());
        let db = Database::connect(&db_url)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to connect to SQLite: {e}")))?;

        let store = Self { db };

        // Ensure schema is up to date before the store is used.
        Migrator::up(&store.db, None)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to run migrations: {e}")))?;

        Ok(store)
    }
}

/// Parse a stored RFC3339 column back into a `DateTime<Utc>`.
pub(crate) fn parse_datetime(raw: &str, field: &str) -> CoreResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| CoreError::SerializationError(format!("Invalid {field}: {e}")))
}

/// Encode a genre list into its JSON column form.
pub(crate) fn encode_genres(genres: &[String]) -> CoreResult<String> {
    serde_json::to_string(genres)
        .map_err(|e| CoreError::SerializationError(format!("Invalid genres: {e}")))
}

/// Decode the genres column. An undecodable value degrades to an empty
/// list; a corrupt row must not make the whole entry unreadable.
pub(crate) fn decode_genres(raw: &str) -> Vec<String> {
    match serde_json::from_str(raw) {
        Ok(genres) => genres,
        Err(e) => {
            log::warn!("Undecodable genres column, treating as empty: {e}");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_genres_round_trip() {
        let genres = vec!["Platformer".to_string(), "Røguelike — 2D".to_string()];
        let encoded = encode_genres(&genres).expect("encode");
        assert_eq!(decode_genres(&encoded), genres);
    }

    #[test]
    fn decode_genres_empty_list() {
        assert!(decode_genres("[]").is_empty());
    }

    #[test]
    fn decode_genres_garbage_degrades_to_empty() {
        assert!(decode_genres("not json at all").is_empty());
        assert!(decode_genres("{\"wrong\": \"shape\"}").is_empty());
    }
}
