use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::amenity::{Amenity, CreateAmenityParams, UpdateAmenityParams};

pub struct AmenityRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AmenityRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all amenities ordered by name
    pub async fn get_all(&self) -> Result<Vec<Amenity>, DbErr> {
        let entities = entity::prelude::Amenity::find()
            .order_by_asc(entity::amenity::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Amenity::from_entity).collect())
    }

    /// Gets the amenities of one category ordered by name
    pub async fn get_by_category(&self, category_id: i32) -> Result<Vec<Amenity>, DbErr> {
        let entities = entity::prelude::Amenity::find()
            .filter(entity::amenity::Column::CategoryId.eq(category_id))
            .order_by_asc(entity::amenity::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Amenity::from_entity).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Amenity>, DbErr> {
        let entity = entity::prelude::Amenity::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Amenity::from_entity))
    }

    /// Creates an amenity in a category.
    ///
    /// # Returns
    /// - `Ok(Amenity)` - The created amenity
    /// - `Err(DbErr)` - Database error, including a foreign key violation for an unknown category
    pub async fn create(&self, params: CreateAmenityParams) -> Result<Amenity, DbErr> {
        let entity = entity::amenity::ActiveModel {
            name: ActiveValue::Set(params.name),
            category_id: ActiveValue::Set(params.category_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Amenity::from_entity(entity))
    }

    /// Updates the present fields of an amenity.
    ///
    /// # Returns
    /// - `Ok(Some(Amenity))` - The updated amenity
    /// - `Ok(None)` - No amenity with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, params: UpdateAmenityParams) -> Result<Option<Amenity>, DbErr> {
        let Some(existing) = entity::prelude::Amenity::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::amenity::ActiveModel = existing.into();
        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(category_id) = params.category_id {
            active_model.category_id = ActiveValue::Set(category_id);
        }

        let entity = active_model.update(self.db).await?;

        Ok(Some(Amenity::from_entity(entity)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Amenity::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
