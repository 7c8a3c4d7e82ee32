//! `SeaORM` entity for the `library_entries` table.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "library_entries")]
/// Database row model for one tracked game.
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Owning identity (FK, cascade delete).
    pub user_id: i64,
    pub catalog_id: Option<i64>,
    pub title: String,
    pub platform: String,
    pub status: String,
    pub progress: i32,
    pub rating: Option<i32>,
    pub cover_url: Option<String>,
    /// JSON-encoded genre list. Decoded on every read; an undecodable value
    /// degrades to `[]`.
    pub genres: String,
    pub playtime: i32,
    pub started_date: Option<String>,
    pub completed_date: Option<String>,
    pub notes: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
