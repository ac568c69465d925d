use super::*;

/// Tests releasing a reservation.
///
/// Expected: Ok(Some) with is_pending_rating cleared
#[tokio::test]
async fn clears_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_venue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, reservation) = factory::helpers::create_reservation_with_dependencies(
        db,
        date(2025, 6, 1),
        date(2025, 6, 2),
    )
    .await?;

    let updated = ReservationRepository::new(db)
        .set_pending_rating(reservation.id, false)
        .await?
        .unwrap();

    assert!(!updated.is_pending_rating);

    Ok(())
}

/// Tests that the store guard blocks re-activating a stay into an overlap.
///
/// Expected: Err carrying the overlap trigger message
#[tokio::test]
async fn store_guard_rejects_overlapping_reactivation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_venue_tables()
        .with_reservation_overlap_guard()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, venue) = factory::helpers::create_venue_with_owner(db).await?;
    let guest = factory::create_user(db).await?;
    let released = ReservationFactory::new(db, venue.id, guest.id)
        .dates(date(2025, 6, 1), date(2025, 6, 4))
        .pending_rating(false)
        .build()
        .await?;
    factory::create_reservation(db, venue.id, guest.id, date(2025, 6, 2), date(2025, 6, 3))
        .await?;

    let result = ReservationRepository::new(db)
        .set_pending_rating(released.id, true)
        .await;

    assert!(result
        .unwrap_err()
        .to_string()
        .contains(migration::RESERVATION_OVERLAP_ERROR));

    Ok(())
}

/// Tests updating a reservation that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_reservation() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_venue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let updated = ReservationRepository::new(db)
        .set_pending_rating(5, true)
        .await?;

    assert!(updated.is_none());

    Ok(())
}
