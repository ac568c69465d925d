use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

use crate::server::model::venue_type::VenueType;

pub struct VenueTypeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VenueTypeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all venue types ordered by name
    pub async fn get_all(&self) -> Result<Vec<VenueType>, DbErr> {
        let entities = entity::prelude::VenueType::find()
            .order_by_asc(entity::venue_type::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(VenueType::from_entity).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<VenueType>, DbErr> {
        let entity = entity::prelude::VenueType::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(VenueType::from_entity))
    }

    pub async fn create(&self, name: String) -> Result<VenueType, DbErr> {
        let entity = entity::venue_type::ActiveModel {
            name: ActiveValue::Set(name),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(VenueType::from_entity(entity))
    }

    /// Deletes a venue type, returning whether a row was removed.
    ///
    /// Venues of this type keep existing with no type.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::VenueType::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
