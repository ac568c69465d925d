//! Occasion factory and amenity link helpers.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an occasion named `"Occasion {id}"`.
pub async fn create_occasion(db: &DatabaseConnection) -> Result<entity::occasion::Model, DbErr> {
    entity::occasion::ActiveModel {
        id: ActiveValue::NotSet,
        name: ActiveValue::Set(format!("Occasion {}", next_id())),
    }
    .insert(db)
    .await
}

/// Links an amenity to an occasion.
pub async fn link_amenity_to_occasion(
    db: &DatabaseConnection,
    occasion_id: i32,
    amenity_id: i32,
) -> Result<entity::amenity_to_occasion::Model, DbErr> {
    entity::amenity_to_occasion::ActiveModel {
        occasion_id: ActiveValue::Set(occasion_id),
        amenity_id: ActiveValue::Set(amenity_id),
    }
    .insert(db)
    .await
}
