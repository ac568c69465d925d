use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250601_000004_create_amenity_table::Amenity,
    m20250601_000005_create_occasion_table::Occasion,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AmenityToOccasion::Table)
                    .if_not_exists()
                    .col(integer(AmenityToOccasion::OccasionId))
                    .col(integer(AmenityToOccasion::AmenityId))
                    .primary_key(
                        Index::create()
                            .col(AmenityToOccasion::OccasionId)
                            .col(AmenityToOccasion::AmenityId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_amenity_to_occasion_occasion_id")
                            .from(AmenityToOccasion::Table, AmenityToOccasion::OccasionId)
                            .to(Occasion::Table, Occasion::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_amenity_to_occasion_amenity_id")
                            .from(AmenityToOccasion::Table, AmenityToOccasion::AmenityId)
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
            .drop_table(Table::drop().table(AmenityToOccasion::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AmenityToOccasion {
    Table,
    OccasionId,
    AmenityId,
}
