use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250601_000001_create_user_table::User,
    m20250601_000002_create_venue_type_table::VenueType,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Venue::Table)
                    .if_not_exists()
                    .col(pk_auto(Venue::Id))
                    .col(string(Venue::Name))
                    .col(text(Venue::Description))
                    .col(integer(Venue::PricePerNightInEurCent))
                    .col(double(Venue::Rating).default(0.0))
                    .col(integer(Venue::Capacity))
                    .col(integer(Venue::AmountOfBeds))
                    .col(string(Venue::ExtraSleepingDetails))
                    .col(integer(Venue::CheckInHour))
                    .col(integer(Venue::CheckOutHour))
                    .col(integer(Venue::DistanceFromCityCenterInMeters))
                    .col(string_null(Venue::FacebookUrl))
                    .col(string_null(Venue::InstagramUrl))
                    .col(string_null(Venue::TwitterUrl))
                    .col(string_null(Venue::WebsiteUrl))
                    .col(string(Venue::StreetNumber))
                    .col(string(Venue::StreetName))
                    .col(string(Venue::PostalCode))
                    .col(string(Venue::City))
                    .col(double_null(Venue::Latitude))
                    .col(double_null(Venue::Longitude))
                    .col(integer(Venue::OwnerId))
                    .col(integer_null(Venue::VenueTypeId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_venue_owner_id")
                            .from(Venue::Table, Venue::OwnerId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_venue_venue_type_id")
                            .from(Venue::Table, Venue::VenueTypeId)
                            .to(VenueType::Table, VenueType::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_venue_coordinates")
                    .table(Venue::Table)
                    .col(Venue::Latitude)
                    .col(Venue::Longitude)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Venue::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Venue {
    Table,
    Id,
    Name,
    Description,
    PricePerNightInEurCent,
    Rating,
    Capacity,
    AmountOfBeds,
    ExtraSleepingDetails,
    CheckInHour,
    CheckOutHour,
    DistanceFromCityCenterInMeters,
    FacebookUrl,
    InstagramUrl,
    TwitterUrl,
    WebsiteUrl,
    StreetNumber,
    StreetName,
    PostalCode,
    City,
    Latitude,
    Longitude,
    OwnerId,
    VenueTypeId,
}
