use sea_orm_migration::{prelude::*, schema::*};

use super::m20250101_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Campground::Table)
                    .if_not_exists()
                    .col(pk_auto(Campground::Id))
                    // Nullable: SQLite's unique index admits any number of NULL slugs
                    .col(string_null(Campground::Slug).unique_key())
                    .col(string(Campground::Title))
                    .col(double(Campground::Price))
                    .col(text(Campground::Description))
                    .col(string(Campground::Location))
                    .col(double(Campground::Longitude))
                    .col(double(Campground::Latitude))
                    .col(integer(Campground::AuthorId))
                    .col(
                        timestamp_with_time_zone(Campground::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Campground::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_campground_author_id")
                            .from(Campground::Table, Campground::AuthorId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_campground_lat_lng")
                    .table(Campground::Table)
                    .col(Campground::Latitude)
                    .col(Campground::Longitude)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Campground::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Campground {
    Table,
    Id,
    Slug,
    Title,
    Price,
    Description,
    Location,
    Longitude,
    Latitude,
    AuthorId,
    CreatedAt,
    UpdatedAt,
}
