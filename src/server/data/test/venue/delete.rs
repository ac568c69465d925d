use super::*;

/// Tests deleting a venue.
///
/// Verifies that the delete cascades to the venue's reservations.
///
/// Expected: Ok(true) with venue and reservation removed
#[tokio::test]
async fn deletes_venue_and_reservations() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_venue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (venue, _, reservation) = factory::helpers::create_reservation_with_dependencies(
        db,
        date(2025, 6, 1),
        date(2025, 6, 3),
    )
    .await?;

    let deleted = VenueRepository::new(db).delete(venue.id).await?;

    assert!(deleted);
    assert!(entity::prelude::Reservation::find_by_id(reservation.id)
        .one(db)
        .await?
        .is_none());

    Ok(())
}

/// Tests deleting a venue that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_missing_venue() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_venue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!VenueRepository::new(db).delete(77).await?);

    Ok(())
}
