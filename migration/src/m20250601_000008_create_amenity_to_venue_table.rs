use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250601_000004_create_amenity_table::Amenity, m20250601_000007_create_venue_table::Venue,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AmenityToVenue::Table)
                    .if_not_exists()
                    .col(integer(AmenityToVenue::VenueId))
                    .col(integer(AmenityToVenue::AmenityId))
                    .primary_key(
                        Index::create()
                            .col(AmenityToVenue::VenueId)
                            .col(AmenityToVenue::AmenityId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_amenity_to_venue_venue_id")
                            .from(AmenityToVenue::Table, AmenityToVenue::VenueId)
                            .to(Venue::Table, Venue::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_amenity_to_venue_amenity_id")
                            .from(AmenityToVenue::Table, AmenityToVenue::AmenityId)
                            .to(Amenity::Table, Amenity::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AmenityToVenue::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AmenityToVenue {
    Table,
    VenueId,
    AmenityId,
}
