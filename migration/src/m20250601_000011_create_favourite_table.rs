use sea_orm_migration::{prelude::*, schema::*};

use super::{m20250601_000001_create_user_table::User, m20250601_000007_create_venue_table::Venue};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Favourite::Table)
                    .if_not_exists()
                    .col(pk_auto(Favourite::Id))
                    .col(integer(Favourite::VenueId))
                    .col(integer(Favourite::UserId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favourite_venue_id")
                            .from(Favourite::Table, Favourite::VenueId)
                            .to(Venue::Table, Venue::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favourite_user_id")
                            .from(Favourite::Table, Favourite::UserId)
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
                    .name("idx_favourite_venue_user")
                    .table(Favourite::Table)
                    .col(Favourite::VenueId)
                    .col(Favourite::UserId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Favourite::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Favourite {
    Table,
    Id,
    VenueId,
    UserId,
}
