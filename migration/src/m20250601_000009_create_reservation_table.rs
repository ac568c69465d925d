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
                    .table(Reservation::Table)
                    .if_not_exists()
                    .col(pk_auto(Reservation::Id))
                    .col(integer(Reservation::VenueId))
                    .col(integer(Reservation::UserId))
                    .col(date(Reservation::DateStart))
                    .col(date(Reservation::DateEnd))
                    .col(boolean(Reservation::IsPendingRating).default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_venue_id")
                            .from(Reservation::Table, Reservation::VenueId)
                            .to(Venue::Table, Venue::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_user_id")
                            .from(Reservation::Table, Reservation::UserId)
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
                    .name("idx_reservation_venue_dates")
                    .table(Reservation::Table)
                    .col(Reservation::VenueId)
                    .col(Reservation::DateStart)
                    .col(Reservation::DateEnd)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reservation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Reservation {
    Table,
    Id,
    VenueId,
    UserId,
    DateStart,
    DateEnd,
    IsPendingRating,
}
