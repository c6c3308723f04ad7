use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250101_000001_create_user_table::User,
    m20250101_000002_create_campground_table::Campground,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserFavorite::Table)
                    .if_not_exists()
                    .col(integer(UserFavorite::UserId))
                    .col(integer(UserFavorite::CampgroundId))
                    .col(
                        timestamp_with_time_zone(UserFavorite::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(UserFavorite::UserId)
                            .col(UserFavorite::CampgroundId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_favorite_user_id")
                            .from(UserFavorite::Table, UserFavorite::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_favorite_campground_id")
                            .from(UserFavorite::Table, UserFavorite::CampgroundId)
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
            .drop_table(Table::drop().table(UserFavorite::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserFavorite {
    Table,
    UserId,
    CampgroundId,
    CreatedAt,
}
