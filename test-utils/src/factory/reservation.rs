//! Reservation factory for creating test reservation entities.

use crate::factory::helpers::date;
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test reservations.
///
/// Inserts directly, so the store level overlap guard is the only check applied when the
/// test database has it installed.
///
/// # Example
///
/// ```rust,ignore
/// let reservation = ReservationFactory::new(&db, venue.id, guest.id)
///     .dates(date(2025, 6, 1), date(2025, 6, 4))
///     .pending_rating(false)
///     .build()
///     .await?;
/// ```
pub struct ReservationFactory<'a> {
    db: &'a DatabaseConnection,
    venue_id: i32,
    user_id: i32,
    date_start: NaiveDate,
    date_end: NaiveDate,
    is_pending_rating: bool,
}

impl<'a> ReservationFactory<'a> {
    /// Creates a new ReservationFactory for a three night stay from 2025-06-01 to
    /// 2025-06-04 that is still active.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `venue_id` - Existing venue being booked
    /// - `user_id` - Existing user making the booking
    ///
    /// # Returns
    /// - `ReservationFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, venue_id: i32, user_id: i32) -> Self {
        Self {
            db,
            venue_id,
            user_id,
            date_start: date(2025, 6, 1),
            date_end: date(2025, 6, 4),
            is_pending_rating: true,
        }
    }

    /// Sets the stay; `date_end` is the checkout day and is not occupied.
    ///
    /// # Arguments
    /// - `date_start` - First night of the stay
    /// - `date_end` - Checkout day
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn dates(mut self, date_start: NaiveDate, date_end: NaiveDate) -> Self {
        self.date_start = date_start;
        self.date_end = date_end;
        self
    }

    /// Sets whether the stay is still active and blocks its dates.
    ///
    /// # Arguments
    /// - `is_pending_rating` - `false` for a stay that has been rated
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn pending_rating(mut self, is_pending_rating: bool) -> Self {
        self.is_pending_rating = is_pending_rating;
        self
    }

    /// Builds and inserts the reservation entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::reservation::Model)` - Created reservation
    /// - `Err(DbErr)` - Database error during insert, including the overlap guard abort
    pub async fn build(self) -> Result<entity::reservation::Model, DbErr> {
        entity::reservation::ActiveModel {
            id: ActiveValue::NotSet,
            venue_id: ActiveValue::Set(self.venue_id),
            user_id: ActiveValue::Set(self.user_id),
            date_start: ActiveValue::Set(self.date_start),
            date_end: ActiveValue::Set(self.date_end),
            is_pending_rating: ActiveValue::Set(self.is_pending_rating),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active reservation for the given dates.
pub async fn create_reservation(
    db: &DatabaseConnection,
    venue_id: i32,
    user_id: i32,
    date_start: NaiveDate,
    date_end: NaiveDate,
) -> Result<entity::reservation::Model, DbErr> {
    ReservationFactory::new(db, venue_id, user_id)
        .dates(date_start, date_end)
        .build()
        .await
}
