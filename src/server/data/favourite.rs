use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::favourite::Favourite;

pub struct FavouriteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavouriteRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Favourite>, DbErr> {
        let entities = entity::prelude::Favourite::find()
            .order_by_asc(entity::favourite::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Favourite::from_entity).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Favourite>, DbErr> {
        let entity = entity::prelude::Favourite::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Favourite::from_entity))
    }

    pub async fn get_by_venue(&self, venue_id: i32) -> Result<Vec<Favourite>, DbErr> {
        let entities = entity::prelude::Favourite::find()
            .filter(entity::favourite::Column::VenueId.eq(venue_id))
            .order_by_asc(entity::favourite::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Favourite::from_entity).collect())
    }

    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Favourite>, DbErr> {
        let entities = entity::prelude::Favourite::find()
            .filter(entity::favourite::Column::UserId.eq(user_id))
            .order_by_asc(entity::favourite::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Favourite::from_entity).collect())
    }

    /// Whether the user already bookmarked the venue.
    pub async fn exists(&self, venue_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Favourite::find()
            .filter(entity::favourite::Column::VenueId.eq(venue_id))
            .filter(entity::favourite::Column::UserId.eq(user_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Inserts a favourite.
    ///
    /// # Returns
    /// - `Ok(Favourite)` - The created favourite
    /// - `Err(DbErr)` - Database error, including a foreign key violation for an unknown
    ///   venue or user and a unique violation for a duplicate pair
    pub async fn create(&self, venue_id: i32, user_id: i32) -> Result<Favourite, DbErr> {
        let entity = entity::favourite::ActiveModel {
            venue_id: ActiveValue::Set(venue_id),
            user_id: ActiveValue::Set(user_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Favourite::from_entity(entity))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Favourite::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
