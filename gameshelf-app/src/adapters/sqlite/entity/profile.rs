//! `SeaORM` entity for the `profiles` table.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "profiles")]
/// Database row model for profile display attributes.
///
/// `username` is not stored here; reads join it from `users`.
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Owning identity, one profile per user (unique FK, cascade delete).
    pub user_id: i64,
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub theme_color: Option<String>,
    pub banner_url: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
