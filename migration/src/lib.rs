pub use sea_orm_migration::prelude::*;

mod m20250601_000001_create_user_table;
mod m20250601_000002_create_venue_type_table;
mod m20250601_000003_create_category_table;
mod m20250601_000004_create_amenity_table;
mod m20250601_000005_create_occasion_table;
mod m20250601_000006_create_amenity_to_occasion_table;
mod m20250601_000007_create_venue_table;
mod m20250601_000008_create_amenity_to_venue_table;
mod m20250601_000009_create_reservation_table;
mod m20250601_000010_create_rating_table;
mod m20250601_000011_create_favourite_table;
mod m20250601_000012_create_reservation_overlap_guard;

pub use m20250601_000012_create_reservation_overlap_guard::{
    RESERVATION_OVERLAP_ERROR, RESERVATION_OVERLAP_GUARD,
};

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_user_table::Migration),
            Box::new(m20250601_000002_create_venue_type_table::Migration),
            Box::new(m20250601_000003_create_category_table::Migration),
            Box::new(m20250601_000004_create_amenity_table::Migration),
            Box::new(m20250601_000005_create_occasion_table::Migration),
            Box::new(m20250601_000006_create_amenity_to_occasion_table::Migration),
            Box::new(m20250601_000007_create_venue_table::Migration),
            Box::new(m20250601_000008_create_amenity_to_venue_table::Migration),
            Box::new(m20250601_000009_create_reservation_table::Migration),
            Box::new(m20250601_000010_create_rating_table::Migration),
            Box::new(m20250601_000011_create_favourite_table::Migration),
            Box::new(m20250601_000012_create_reservation_overlap_guard::Migration),
        ]
    }
}
