//! `SeaORM` entity for the `users` table.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
/// Database row model for an identity.
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Unique, case-sensitive. The storage-layer constraint is the
    /// authoritative uniqueness guard.
    pub username: String,
    /// PHC-format secret hash.
    pub secret_hash: String,
    pub created_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
