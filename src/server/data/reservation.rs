//! Reservation repository.
//!
//! Holds the store side of the overlap check: [`ReservationRepository::has_overlap`]
//! looks for an active reservation of the same venue sharing at least one night with a
//! proposed stay. The repository is generic over the connection so the reservation
//! service can run the check and the insert in one transaction.

use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::{
    date_range::DateRange,
    reservation::{CreateReservationParams, Reservation},
};

pub struct ReservationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReservationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets every reservation ordered by ID
    pub async fn get_all(&self) -> Result<Vec<Reservation>, DbErr> {
        let entities = entity::prelude::Reservation::find()
            .order_by_asc(entity::reservation::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Reservation::from_entity).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Reservation>, DbErr> {
        let entity = entity::prelude::Reservation::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Reservation::from_entity))
    }

    /// Gets the reservations of a venue ordered by arrival date
    pub async fn get_by_venue(&self, venue_id: i32) -> Result<Vec<Reservation>, DbErr> {
        let entities = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::VenueId.eq(venue_id))
            .order_by_asc(entity::reservation::Column::DateStart)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Reservation::from_entity).collect())
    }

    /// Gets the reservations of a user ordered by arrival date
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Reservation>, DbErr> {
        let entities = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::UserId.eq(user_id))
            .order_by_asc(entity::reservation::Column::DateStart)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Reservation::from_entity).collect())
    }

    /// Inserts an active reservation.
    ///
    /// Does not check availability itself; the caller runs [`Self::has_overlap`] in the
    /// same transaction, and the store trigger rejects an overlapping insert regardless.
    ///
    /// # Returns
    /// - `Ok(Reservation)` - The created reservation
    /// - `Err(DbErr)` - Database error, including a foreign key violation for an unknown
    ///   venue or user and the overlap trigger abort
    pub async fn create(&self, params: CreateReservationParams) -> Result<Reservation, DbErr> {
        let entity = entity::reservation::ActiveModel {
            venue_id: ActiveValue::Set(params.venue_id),
            user_id: ActiveValue::Set(params.user_id),
            date_start: ActiveValue::Set(params.dates.start()),
            date_end: ActiveValue::Set(params.dates.end()),
            is_pending_rating: ActiveValue::Set(true),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Reservation::from_entity(entity))
    }

    /// Sets the pending-rating flag.
    ///
    /// # Returns
    /// - `Ok(Some(Reservation))` - The updated reservation
    /// - `Ok(None)` - No reservation with that ID
    /// - `Err(DbErr)` - Database error, including the overlap trigger abort when re-activating
    pub async fn set_pending_rating(
        &self,
        id: i32,
        is_pending_rating: bool,
    ) -> Result<Option<Reservation>, DbErr> {
        let Some(existing) = entity::prelude::Reservation::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::reservation::ActiveModel = existing.into();
        active_model.is_pending_rating = ActiveValue::Set(is_pending_rating);
        let entity = active_model.update(self.db).await?;

        Ok(Some(Reservation::from_entity(entity)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Reservation::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Checks whether an active reservation of the venue shares a night with `dates`.
    ///
    /// Stays touching only at the checkout day do not overlap.
    ///
    /// # Arguments
    /// - `venue_id` - Venue to check
    /// - `dates` - Proposed stay
    /// - `exclude_id` - Reservation to ignore, used when re-activating an existing stay
    pub async fn has_overlap(
        &self,
        venue_id: i32,
        dates: &DateRange,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::VenueId.eq(venue_id))
            .filter(entity::reservation::Column::IsPendingRating.eq(true))
            .filter(entity::reservation::Column::DateStart.lt(dates.end()))
            .filter(entity::reservation::Column::DateEnd.gt(dates.start()));

        if let Some(exclude_id) = exclude_id {
            query = query.filter(entity::reservation::Column::Id.ne(exclude_id));
        }

        let count = query.count(self.db).await?;

        Ok(count > 0)
    }

    /// Gets the stored intervals of the venue's active reservations.
    pub async fn get_active_ranges(
        &self,
        venue_id: i32,
    ) -> Result<Vec<(NaiveDate, NaiveDate)>, DbErr> {
        entity::prelude::Reservation::find()
            .select_only()
            .column(entity::reservation::Column::DateStart)
            .column(entity::reservation::Column::DateEnd)
            .filter(entity::reservation::Column::VenueId.eq(venue_id))
            .filter(entity::reservation::Column::IsPendingRating.eq(true))
            .into_tuple::<(NaiveDate, NaiveDate)>()
            .all(self.db)
            .await
    }
}
