//! Rating service.
//!
//! Rating a stay ends its pending state, which releases its dates for other guests, and
//! refreshes the venue's average score. Both happen in the transaction that inserts the
//! rating.

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{rating::RatingRepository, reservation::ReservationRepository, venue::VenueRepository},
    error::{store::StoreViolation, AppError},
    model::rating::{CreateRatingParams, Rating},
};

pub struct RatingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RatingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Rates a reservation.
    ///
    /// # Returns
    /// - `Ok(Rating)` - The created rating
    /// - `Err(AppError::NotFound)` - No reservation with that ID
    /// - `Err(AppError::Conflict)` - The reservation was already rated
    pub async fn create(&self, params: CreateRatingParams) -> Result<Rating, AppError> {
        let txn = self.db.begin().await?;
        let reservation_repo = ReservationRepository::new(&txn);

        let reservation = reservation_repo
            .get_by_id(params.reservation_id)
            .await?
            .ok_or_else(|| reservation_not_found(params.reservation_id))?;

        let rating = RatingRepository::new(&txn)
            .create(params)
            .await
            .map_err(|err| match StoreViolation::classify(&err) {
                Some(StoreViolation::Unique) => AppError::Conflict(format!(
                    "Reservation with ID {} has already been rated",
                    reservation.id
                )),
                Some(StoreViolation::ForeignKey) => reservation_not_found(reservation.id),
                _ => err.into(),
            })?;

        reservation_repo
            .set_pending_rating(reservation.id, false)
            .await?;
        refresh_venue_rating(&txn, reservation.venue_id).await?;
        txn.commit().await?;

        tracing::info!(
            "Reservation {} rated {} for venue {}",
            reservation.id,
            rating.score,
            reservation.venue_id
        );

        Ok(rating)
    }

    pub async fn get_all(&self) -> Result<Vec<Rating>, AppError> {
        Ok(RatingRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Rating, AppError> {
        RatingRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| rating_not_found(id))
    }

    pub async fn get_by_venue(&self, venue_id: i32) -> Result<Vec<Rating>, AppError> {
        Ok(RatingRepository::new(self.db).get_by_venue(venue_id).await?)
    }

    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Rating>, AppError> {
        Ok(RatingRepository::new(self.db).get_by_user(user_id).await?)
    }

    /// Deletes a rating and refreshes the venue average.
    ///
    /// The reservation stays released.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let rating_repo = RatingRepository::new(&txn);

        let rating = rating_repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| rating_not_found(id))?;
        let reservation = ReservationRepository::new(&txn)
            .get_by_id(rating.reservation_id)
            .await?;

        rating_repo.delete(id).await?;
        if let Some(reservation) = reservation {
            refresh_venue_rating(&txn, reservation.venue_id).await?;
        }
        txn.commit().await?;

        Ok(())
    }
}

/// Stores the mean score of the venue's ratings, 0 when none remain.
async fn refresh_venue_rating<C: ConnectionTrait>(db: &C, venue_id: i32) -> Result<(), AppError> {
    let average = RatingRepository::new(db)
        .average_score_for_venue(venue_id)
        .await?
        .unwrap_or(0.0);

    VenueRepository::new(db)
        .update_rating(venue_id, average)
        .await?;

    Ok(())
}

fn reservation_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Reservation with ID {} not found", id))
}

fn rating_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Rating with ID {} not found", id))
}
