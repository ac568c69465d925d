use super::*;

/// Tests creating a reservation.
///
/// Verifies that a new reservation starts active.
///
/// Expected: Ok with is_pending_rating set
#[tokio::test]
async fn creates_active_reservation() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_venue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, venue) = factory::helpers::create_venue_with_owner(db).await?;
    let guest = factory::create_user(db).await?;

    let reservation = ReservationRepository::new(db)
        .create(CreateReservationParams {
            venue_id: venue.id,
            user_id: guest.id,
            dates: DateRange::new(date(2025, 7, 1), date(2025, 7, 3)).unwrap(),
        })
        .await?;

    assert!(reservation.is_pending_rating);
    assert_eq!(reservation.date_start, date(2025, 7, 1));
    assert_eq!(reservation.date_end, date(2025, 7, 3));

    Ok(())
}

/// Tests creating a reservation for a venue that does not exist.
///
/// Expected: Err with foreign key violation
#[tokio::test]
async fn rejects_unknown_venue() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_venue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guest = factory::create_user(db).await?;

    let result = ReservationRepository::new(db)
        .create(CreateReservationParams {
            venue_id: 999,
            user_id: guest.id,
            dates: DateRange::new(date(2025, 7, 1), date(2025, 7, 3)).unwrap(),
        })
        .await;

    assert!(matches!(
        result.as_ref().map_err(|e| e.sql_err()),
        Err(Some(sea_orm::SqlErr::ForeignKeyConstraintViolation(_)))
    ));

    Ok(())
}

/// Tests that the store guard rejects an overlapping insert made without a check.
///
/// Expected: Err carrying the overlap trigger message
#[tokio::test]
async fn store_guard_rejects_overlap() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_venue_tables()
        .with_reservation_overlap_guard()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (venue, guest, _) = factory::helpers::create_reservation_with_dependencies(
        db,
        date(2025, 7, 1),
        date(2025, 7, 5),
    )
    .await?;

    let result = ReservationRepository::new(db)
        .create(CreateReservationParams {
            venue_id: venue.id,
            user_id: guest.id,
            dates: DateRange::new(date(2025, 7, 4), date(2025, 7, 6)).unwrap(),
        })
        .await;

    assert!(result
        .unwrap_err()
        .to_string()
        .contains(migration::RESERVATION_OVERLAP_ERROR));

    Ok(())
}
