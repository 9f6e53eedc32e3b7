//! Migration: Create films table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Films::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Films::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Films::Title).string_len(100).not_null())
                    .col(ColumnDef::new(Films::Description).text().not_null())
                    .col(
                        ColumnDef::new(Films::PublishedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Films::GenreId).uuid().not_null())
                    .col(ColumnDef::new(Films::Released).integer().not_null())
                    .col(ColumnDef::new(Films::Rating).double().not_null().default(0.0))
                    .col(ColumnDef::new(Films::PreviewVideoLink).string().not_null())
                    .col(ColumnDef::new(Films::VideoLink).string().not_null())
                    .col(
                        ColumnDef::new(Films::Starring)
                            .array(ColumnType::Text)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Films::Director).string_len(50).not_null())
                    .col(ColumnDef::new(Films::RunTime).integer().not_null())
                    .col(
                        ColumnDef::new(Films::CommentCount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Films::UserId).uuid().not_null())
                    .col(ColumnDef::new(Films::PosterImage).string().not_null())
                    .col(ColumnDef::new(Films::BackgroundImage).string().not_null())
                    .col(ColumnDef::new(Films::BackgroundColor).string_len(7).not_null())
                    .col(
                        ColumnDef::new(Films::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Films::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_films_genre_id")
                            .from(Films::Table, Films::GenreId)
                            .to(Genres::Table, Genres::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_films_user_id")
                            .from(Films::Table, Films::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Index listing order and genre lookups
        manager
            .create_index(
                Index::create()
                    .name("idx_films_published_at")
                    .table(Films::Table)
                    .col(Films::PublishedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_films_genre_id")
                    .table(Films::Table)
                    .col(Films::GenreId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Films::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Films {
    Table,
    Id,
    Title,
    Description,
    PublishedAt,
    GenreId,
    Released,
    Rating,
    PreviewVideoLink,
    VideoLink,
    Starring,
    Director,
    RunTime,
    CommentCount,
    UserId,
    PosterImage,
    BackgroundImage,
    BackgroundColor,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Genres {
    Table,
    Id,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
