//! Reservation service: availability checks and bookings.
//!
//! A venue is available for a stay when no active reservation of the venue shares a
//! night with it. Creating a reservation runs the check and the insert in one
//! transaction; the store's overlap trigger backs this up for writers that bypass the
//! service, and its abort is reported as the same conflict. A booking that loses the
//! write lock to a concurrent one is also refused with a conflict.

use chrono::NaiveDate;
use sea_orm::{DatabaseConnection, DbErr, TransactionTrait};

use crate::server::{
    data::reservation::ReservationRepository,
    error::{store::StoreViolation, AppError},
    model::{
        date_range::{occupied_nights, DateRange},
        reservation::{CreateReservationParams, Reservation},
    },
};

const DATES_RESERVED: &str = "Selected dates are already reserved";
const CONCURRENT_BOOKING: &str = "Another booking for this venue is in progress, try again";

pub struct ReservationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReservationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Whether the venue is free for every night of `dates`.
    pub async fn check_availability(
        &self,
        venue_id: i32,
        dates: &DateRange,
    ) -> Result<bool, AppError> {
        let overlap = ReservationRepository::new(self.db)
            .has_overlap(venue_id, dates, None)
            .await?;

        Ok(!overlap)
    }

    /// Books a stay.
    ///
    /// # Returns
    /// - `Ok(Reservation)` - The created, active reservation
    /// - `Err(AppError::Conflict)` - The dates overlap an active reservation; nothing is written
    /// - `Err(AppError::NotFound)` - The venue or user does not exist
    pub async fn create(&self, params: CreateReservationParams) -> Result<Reservation, AppError> {
        let txn = self.db.begin().await?;
        let repo = ReservationRepository::new(&txn);

        if repo
            .has_overlap(params.venue_id, &params.dates, None)
            .await?
        {
            return Err(AppError::Conflict(DATES_RESERVED.to_string()));
        }

        let reservation = repo.create(params).await.map_err(map_write_error)?;
        txn.commit().await.map_err(map_write_error)?;

        tracing::info!(
            "Reserved venue {} from {} to {} for user {}",
            reservation.venue_id,
            reservation.date_start,
            reservation.date_end,
            reservation.user_id
        );

        Ok(reservation)
    }

    /// Every night occupied by an active reservation of the venue, ascending.
    pub async fn get_occupied_dates(&self, venue_id: i32) -> Result<Vec<NaiveDate>, AppError> {
        let ranges = ReservationRepository::new(self.db)
            .get_active_ranges(venue_id)
            .await?;

        // Stored intervals without a night contribute nothing.
        let stays = ranges
            .into_iter()
            .filter_map(|(start, end)| DateRange::new(start, end).ok());

        Ok(occupied_nights(stays))
    }

    /// Flips the pending-rating flag of a reservation.
    ///
    /// Re-activating a stay is refused when its dates now overlap another active
    /// reservation of the venue.
    ///
    /// # Returns
    /// - `Ok(Reservation)` - The updated reservation
    /// - `Err(AppError::NotFound)` - No reservation with that ID
    /// - `Err(AppError::Conflict)` - Re-activation would overlap an active reservation
    pub async fn change_is_pending_rating(&self, id: i32) -> Result<Reservation, AppError> {
        let txn = self.db.begin().await?;
        let repo = ReservationRepository::new(&txn);

        let reservation = repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| reservation_not_found(id))?;

        let is_pending_rating = !reservation.is_pending_rating;

        if is_pending_rating {
            let dates = DateRange::new(reservation.date_start, reservation.date_end)?;
            if repo
                .has_overlap(reservation.venue_id, &dates, Some(reservation.id))
                .await?
            {
                return Err(AppError::Conflict(DATES_RESERVED.to_string()));
            }
        }

        let updated = repo
            .set_pending_rating(id, is_pending_rating)
            .await
            .map_err(map_write_error)?
            .ok_or_else(|| reservation_not_found(id))?;
        txn.commit().await.map_err(map_write_error)?;

        Ok(updated)
    }

    pub async fn get_all(&self) -> Result<Vec<Reservation>, AppError> {
        Ok(ReservationRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Reservation, AppError> {
        ReservationRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| reservation_not_found(id))
    }

    pub async fn get_by_venue(&self, venue_id: i32) -> Result<Vec<Reservation>, AppError> {
        Ok(ReservationRepository::new(self.db)
            .get_by_venue(venue_id)
            .await?)
    }

    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Reservation>, AppError> {
        Ok(ReservationRepository::new(self.db)
            .get_by_user(user_id)
            .await?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !ReservationRepository::new(self.db).delete(id).await? {
            return Err(reservation_not_found(id));
        }

        tracing::info!("Deleted reservation {}", id);

        Ok(())
    }
}

fn reservation_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Reservation with ID {} not found", id))
}

fn map_write_error(err: DbErr) -> AppError {
    match StoreViolation::classify(&err) {
        Some(StoreViolation::ReservationOverlap) => AppError::Conflict(DATES_RESERVED.to_string()),
        Some(StoreViolation::WriteContention) => {
            AppError::Conflict(CONCURRENT_BOOKING.to_string())
        }
        Some(StoreViolation::ForeignKey) => {
            AppError::NotFound("Venue or user not found".to_string())
        }
        _ => err.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lost_write_lock_is_a_conflict() {
        let err = DbErr::Custom(
            "error returned from database: (code: 5) database is locked".to_string(),
        );

        assert!(matches!(map_write_error(err), AppError::Conflict(_)));
    }

    #[test]
    fn unrelated_failure_stays_internal() {
        let err = DbErr::Custom("disk I/O error".to_string());

        assert!(matches!(map_write_error(err), AppError::DbErr(_)));
    }
}
