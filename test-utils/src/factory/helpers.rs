//! Shared helper utilities for factory methods.

use chrono::NaiveDate;
use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Builds a calendar date, panicking on an invalid one.
///
/// Only meant for literal dates in tests.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// Creates a venue together with its owner.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((owner, venue))` - The created owner and venue
/// - `Err(DbErr)` - Database error during creation
pub async fn create_venue_with_owner(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::venue::Model), DbErr> {
    let owner = crate::factory::user::create_user(db).await?;
    let venue = crate::factory::venue::create_venue(db, owner.id).await?;

    Ok((owner, venue))
}

/// Creates a venue, its owner, a separate guest and a reservation for that guest.
///
/// # Arguments
/// - `db` - Database connection
/// - `date_start` - First night of the stay
/// - `date_end` - Checkout day, exclusive
///
/// # Returns
/// - `Ok((venue, guest, reservation))` - The created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_reservation_with_dependencies(
    db: &DatabaseConnection,
    date_start: NaiveDate,
    date_end: NaiveDate,
) -> Result<
    (
        entity::venue::Model,
        entity::user::Model,
        entity::reservation::Model,
    ),
    DbErr,
> {
    let (_, venue) = create_venue_with_owner(db).await?;
    let guest = crate::factory::user::create_user(db).await?;
    let reservation =
        crate::factory::reservation::ReservationFactory::new(db, venue.id, guest.id)
            .dates(date_start, date_end)
            .build()
            .await?;

    Ok((venue, guest, reservation))
}
