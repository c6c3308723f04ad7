use sea_orm_migration::{prelude::*, schema::*};

use super::m20250101_000002_create_campground_table::Campground;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CampgroundImage::Table)
                    .if_not_exists()
                    .col(pk_auto(CampgroundImage::Id))
                    .col(integer(CampgroundImage::CampgroundId))
                    .col(string(CampgroundImage::Url))
                    .col(string(CampgroundImage::Filename))
                    .col(string_null(CampgroundImage::Alt))
                    .col(integer(CampgroundImage::Position).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_campground_image_campground_id")
                            .from(CampgroundImage::Table, CampgroundImage::CampgroundId)
                            .to(Campground::Table, Campground::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CampgroundImage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CampgroundImage {
    Table,
    Id,
    CampgroundId,
    Url,
    Filename,
    Alt,
    Position,
}
