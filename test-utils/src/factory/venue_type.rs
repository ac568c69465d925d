//! Venue type factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a venue type named `"Venue Type {id}"`.
pub async fn create_venue_type(
    db: &DatabaseConnection,
) -> Result<entity::venue_type::Model, DbErr> {
    create_venue_type_named(db, format!("Venue Type {}", next_id())).await
}

/// Creates a venue type with the provided name.
pub async fn create_venue_type_named(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::venue_type::Model, DbErr> {
    entity::venue_type::ActiveModel {
        id: ActiveValue::NotSet,
        name: ActiveValue::Set(name.into()),
    }
    .insert(db)
    .await
}
