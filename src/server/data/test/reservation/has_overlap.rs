use super::*;

fn range(start: (i32, u32, u32), end: (i32, u32, u32)) -> DateRange {
    DateRange::new(date(start.0, start.1, start.2), date(end.0, end.1, end.2)).unwrap()
}

/// Tests a stay starting on the checkout day of an existing one.
///
/// Expected: Ok(false)
#[tokio::test]
async fn back_to_back_does_not_overlap() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_venue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (venue, _, _) = factory::helpers::create_reservation_with_dependencies(
        db,
        date(2025, 6, 10),
        date(2025, 6, 12),
    )
    .await?;

    let overlap = ReservationRepository::new(db)
        .has_overlap(venue.id, &range((2025, 6, 12), (2025, 6, 14)), None)
        .await?;

    assert!(!overlap);

    Ok(())
}

/// Tests a stay sharing one night with an existing one.
///
/// Expected: Ok(true)
#[tokio::test]
async fn shared_night_overlaps() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_venue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (venue, _, _) = factory::helpers::create_reservation_with_dependencies(
        db,
        date(2025, 6, 10),
        date(2025, 6, 12),
    )
    .await?;

    let overlap = ReservationRepository::new(db)
        .has_overlap(venue.id, &range((2025, 6, 11), (2025, 6, 13)), None)
        .await?;

    assert!(overlap);

    Ok(())
}

/// Tests stays nested inside and around an existing one.
///
/// Expected: Ok(true) for both the inner and the outer stay
#[tokio::test]
async fn contained_stay_overlaps() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_venue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (venue, _, _) = factory::helpers::create_reservation_with_dependencies(
        db,
        date(2025, 6, 10),
        date(2025, 6, 15),
    )
    .await?;

    let repo = ReservationRepository::new(db);

    assert!(
        repo.has_overlap(venue.id, &range((2025, 6, 11), (2025, 6, 12)), None)
            .await?
    );
    assert!(
        repo.has_overlap(venue.id, &range((2025, 6, 1), (2025, 6, 30)), None)
            .await?
    );

    Ok(())
}

/// Tests that overlap is symmetric for two stays at one venue.
///
/// Verifies that each stay's range reports a conflict with the other once both exist,
/// excluding the stay itself.
///
/// Expected: Ok(true) in both directions
#[tokio::test]
async fn overlap_is_symmetric() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_venue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, venue) = factory::helpers::create_venue_with_owner(db).await?;
    let guest = factory::create_user(db).await?;
    let a = factory::create_reservation(db, venue.id, guest.id, date(2025, 6, 1), date(2025, 6, 5))
        .await?;
    let b = factory::create_reservation(db, venue.id, guest.id, date(2025, 6, 4), date(2025, 6, 8))
        .await?;

    let repo = ReservationRepository::new(db);
    let a_range = DateRange::new(a.date_start, a.date_end).unwrap();
    let b_range = DateRange::new(b.date_start, b.date_end).unwrap();

    assert!(repo.has_overlap(venue.id, &a_range, Some(a.id)).await?);
    assert!(repo.has_overlap(venue.id, &b_range, Some(b.id)).await?);

    Ok(())
}

/// Tests that rated stays no longer block their dates.
///
/// Expected: Ok(false)
#[tokio::test]
async fn inactive_reservation_is_ignored() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_venue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, venue) = factory::helpers::create_venue_with_owner(db).await?;
    let guest = factory::create_user(db).await?;
    ReservationFactory::new(db, venue.id, guest.id)
        .dates(date(2025, 6, 10), date(2025, 6, 12))
        .pending_rating(false)
        .build()
        .await?;

    let overlap = ReservationRepository::new(db)
        .has_overlap(venue.id, &range((2025, 6, 10), (2025, 6, 12)), None)
        .await?;

    assert!(!overlap);

    Ok(())
}

/// Tests that reservations of other venues are ignored.
///
/// Expected: Ok(false)
#[tokio::test]
async fn other_venue_is_ignored() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_venue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_reservation_with_dependencies(db, date(2025, 6, 10), date(2025, 6, 12))
        .await?;
    let (_, other) = factory::helpers::create_venue_with_owner(db).await?;

    let overlap = ReservationRepository::new(db)
        .has_overlap(other.id, &range((2025, 6, 10), (2025, 6, 12)), None)
        .await?;

    assert!(!overlap);

    Ok(())
}
