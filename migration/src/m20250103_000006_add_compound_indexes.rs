use sea_orm_migration::prelude::*;

use super::{
    m20250101_000002_create_campground_table::Campground,
    m20250101_000004_create_review_table::Review,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Reviews are listed per campground and per author, newest first.
        manager
            .create_index(
                Index::create()
                    .name("idx_review_campground_created_at")
                    .table(Review::Table)
                    .col(Review::CampgroundId)
                    .col((Review::CreatedAt, IndexOrder::Desc))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_review_author_created_at")
                    .table(Review::Table)
                    .col(Review::AuthorId)
                    .col((Review::CreatedAt, IndexOrder::Desc))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_campground_created_at")
                    .table(Campground::Table)
                    .col((Campground::CreatedAt, IndexOrder::Desc))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_campground_price")
                    .table(Campground::Table)
                    .col(Campground::Price)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_review_campground_created_at")
                    .table(Review::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_review_author_created_at")
                    .table(Review::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_campground_created_at")
                    .table(Campground::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_campground_price")
                    .table(Campground::Table)
                    .to_owned(),
            )
            .await
    }
}
