use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // users table
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Username)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::SecretHash).string().not_null())
                    .col(ColumnDef::new(Users::CreatedAt).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_users_username")
                    .table(Users::Table)
                    .col(Users::Username)
                    .to_owned(),
            )
            .await?;

        // profiles table (1:1 with users, cascade on user delete)
        manager
            .create_table(
                Table::create()
                    .table(Profiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Profiles::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Profiles::UserId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Profiles::DisplayName).string().null())
                    .col(ColumnDef::new(Profiles::Bio).string().null())
                    .col(ColumnDef::new(Profiles::AvatarUrl).string().null())
                    .col(
                        ColumnDef::new(Profiles::ThemeColor)
                            .string()
                            .null()
                            .default("#6366f1"),
                    )
                    .col(ColumnDef::new(Profiles::BannerUrl).string().null())
                    .col(ColumnDef::new(Profiles::CreatedAt).string().not_null())
                    .col(ColumnDef::new(Profiles::UpdatedAt).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_profiles_user_id")
                            .from(Profiles::Table, Profiles::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // library_entries table (N:1 with users, cascade on user delete)
        manager
            .create_table(
                Table::create()
                    .table(LibraryEntries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LibraryEntries::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(LibraryEntries::UserId).big_integer().not_null())
                    .col(ColumnDef::new(LibraryEntries::CatalogId).big_integer().null())
                    .col(ColumnDef::new(LibraryEntries::Title).string().not_null())
                    .col(ColumnDef::new(LibraryEntries::Platform).string().not_null())
                    .col(
                        ColumnDef::new(LibraryEntries::Status)
                            .string()
                            .not_null()
                            .default("backlog"),
                    )
                    .col(
                        ColumnDef::new(LibraryEntries::Progress)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(LibraryEntries::Rating).integer().null())
                    .col(ColumnDef::new(LibraryEntries::CoverUrl).string().null())
                    .col(
                        ColumnDef::new(LibraryEntries::Genres)
                            .string()
                            .not_null()
                            .default("[]"),
                    )
                    .col(
                        ColumnDef::new(LibraryEntries::Playtime)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(LibraryEntries::StartedDate).string().null())
                    .col(ColumnDef::new(LibraryEntries::CompletedDate).string().null())
                    .col(ColumnDef::new(LibraryEntries::Notes).string().null())
                    .col(ColumnDef::new(LibraryEntries::CreatedAt).string().not_null())
                    .col(ColumnDef::new(LibraryEntries::UpdatedAt).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_library_entries_user_id")
                            .from(LibraryEntries::Table, LibraryEntries::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_library_entries_user_id")
                    .table(LibraryEntries::Table)
                    .col(LibraryEntries::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LibraryEntries::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Profiles::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    #[sea_orm(iden = "users")]
    Table,
    Id,
    Username,
    SecretHash,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Profiles {
    #[sea_orm(iden = "profiles")]
    Table,
    Id,
    UserId,
    DisplayName,
    Bio,
    AvatarUrl,
    ThemeColor,
    BannerUrl,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum LibraryEntries {
    #[sea_orm(iden = "library_entries")]
    Table,
    Id,
    UserId,
    CatalogId,
    Title,
    Platform,
    Status,
    Progress,
    Rating,
    CoverUrl,
    Genres,
    Playtime,
    StartedDate,
    CompletedDate,
    Notes,
    CreatedAt,
    UpdatedAt,
}
