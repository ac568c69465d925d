//! SeaORM entity definitions for the venue booking schema.
//!
//! Table layouts mirror the migrations in the `migration` crate. Relations marked
//! `belongs_to` carry their foreign key actions so that schemas generated with
//! `Schema::create_table_from_entity` (used by the test utilities) enforce the same
//! constraints as the migrated database.

pub mod prelude;

pub mod amenity;
pub mod amenity_to_occasion;
pub mod amenity_to_venue;
pub mod category;
pub mod favourite;
pub mod occasion;
pub mod rating;
pub mod reservation;
pub mod user;
pub mod venue;
pub mod venue_type;
