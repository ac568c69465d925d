//! Rating repository.
//!
//! A rating belongs to one reservation; ratings of a venue are reached through the
//! reservation they review. Generic over the connection so the rating service can insert
//! the rating, release the reservation and refresh the venue average atomically.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::model::rating::{CreateRatingParams, Rating};

pub struct RatingRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RatingRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Rating>, DbErr> {
        let entities = entity::prelude::Rating::find()
            .order_by_asc(entity::rating::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Rating::from_entity).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Rating>, DbErr> {
        let entity = entity::prelude::Rating::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Rating::from_entity))
    }

    /// Gets the ratings left for stays at a venue
    pub async fn get_by_venue(&self, venue_id: i32) -> Result<Vec<Rating>, DbErr> {
        let entities = entity::prelude::Rating::find()
            .join(JoinType::InnerJoin, entity::rating::Relation::Reservation.def())
            .filter(entity::reservation::Column::VenueId.eq(venue_id))
            .order_by_asc(entity::rating::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Rating::from_entity).collect())
    }

    /// Gets the ratings a user left for their own stays
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Rating>, DbErr> {
        let entities = entity::prelude::Rating::find()
            .join(JoinType::InnerJoin, entity::rating::Relation::Reservation.def())
            .filter(entity::reservation::Column::UserId.eq(user_id))
            .order_by_asc(entity::rating::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Rating::from_entity).collect())
    }

    /// Inserts a rating.
    ///
    /// # Returns
    /// - `Ok(Rating)` - The created rating
    /// - `Err(DbErr)` - Database error, including a foreign key violation for an unknown
    ///   reservation and a unique violation for an already rated one
    pub async fn create(&self, params: CreateRatingParams) -> Result<Rating, DbErr> {
        let entity = entity::rating::ActiveModel {
            score: ActiveValue::Set(params.score),
            review: ActiveValue::Set(params.review),
            reservation_id: ActiveValue::Set(params.reservation_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Rating::from_entity(entity))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Rating::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Mean score over all ratings of a venue, `None` when it has none.
    pub async fn average_score_for_venue(&self, venue_id: i32) -> Result<Option<f64>, DbErr> {
        let scores: Vec<i32> = entity::prelude::Rating::find()
            .select_only()
            .column(entity::rating::Column::Score)
            .join(JoinType::InnerJoin, entity::rating::Relation::Reservation.def())
            .filter(entity::reservation::Column::VenueId.eq(venue_id))
            .into_tuple::<i32>()
            .all(self.db)
            .await?;

        if scores.is_empty() {
            return Ok(None);
        }

        let total: i64 = scores.iter().map(|s| i64::from(*s)).sum();

        Ok(Some(total as f64 / scores.len() as f64))
    }
}
