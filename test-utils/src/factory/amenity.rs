//! Amenity factory and venue link helpers.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an amenity named `"Amenity {id}"` in the given category.
///
/// # Arguments
/// - `db` - Database connection
/// - `category_id` - Existing category the amenity belongs to
///
/// # Returns
/// - `Ok(entity::amenity::Model)` - Created amenity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_amenity(
    db: &DatabaseConnection,
    category_id: i32,
) -> Result<entity::amenity::Model, DbErr> {
    create_amenity_named(db, category_id, format!("Amenity {}", next_id())).await
}

/// Creates an amenity with the provided name in the given category.
pub async fn create_amenity_named(
    db: &DatabaseConnection,
    category_id: i32,
    name: impl Into<String>,
) -> Result<entity::amenity::Model, DbErr> {
    entity::amenity::ActiveModel {
        id: ActiveValue::NotSet,
        name: ActiveValue::Set(name.into()),
        category_id: ActiveValue::Set(category_id),
    }
    .insert(db)
    .await
}

/// Links an amenity to a venue.
///
/// # Returns
/// - `Ok(entity::amenity_to_venue::Model)` - Created link row
/// - `Err(DbErr)` - Database error, including a foreign key violation for unknown ids
pub async fn link_amenity_to_venue(
    db: &DatabaseConnection,
    venue_id: i32,
    amenity_id: i32,
) -> Result<entity::amenity_to_venue::Model, DbErr> {
    entity::amenity_to_venue::ActiveModel {
        venue_id: ActiveValue::Set(venue_id),
        amenity_id: ActiveValue::Set(amenity_id),
    }
    .insert(db)
    .await
}
