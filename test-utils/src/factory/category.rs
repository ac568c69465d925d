//! Amenity category factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a category named `"Category {id}"`.
pub async fn create_category(db: &DatabaseConnection) -> Result<entity::category::Model, DbErr> {
    create_category_named(db, format!("Category {}", next_id())).await
}

/// Creates a category with the provided name.
pub async fn create_category_named(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::category::Model, DbErr> {
    entity::category::ActiveModel {
        id: ActiveValue::NotSet,
        name: ActiveValue::Set(name.into()),
    }
    .insert(db)
    .await
}
