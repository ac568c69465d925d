use super::*;

/// Tests listing the reservations of a venue.
///
/// Verifies ordering by arrival date and that other venues' reservations are excluded.
///
/// Expected: Ok with the venue's two reservations, earliest first
#[tokio::test]
async fn returns_venue_reservations_by_arrival() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_venue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, venue) = factory::helpers::create_venue_with_owner(db).await?;
    let guest = factory::create_user(db).await?;
    let later = factory::create_reservation(db, venue.id, guest.id, date(2025, 8, 1), date(2025, 8, 2))
        .await?;
    let earlier =
        factory::create_reservation(db, venue.id, guest.id, date(2025, 7, 1), date(2025, 7, 2))
            .await?;
    factory::helpers::create_reservation_with_dependencies(db, date(2025, 7, 1), date(2025, 7, 2))
        .await?;

    let reservations = ReservationRepository::new(db).get_by_venue(venue.id).await?;

    assert_eq!(
        reservations.iter().map(|r| r.id).collect::<Vec<_>>(),
        vec![earlier.id, later.id]
    );

    Ok(())
}

/// Tests listing reservations of a venue without any.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_list_without_reservations() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_venue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, venue) = factory::helpers::create_venue_with_owner(db).await?;

    assert!(ReservationRepository::new(db)
        .get_by_venue(venue.id)
        .await?
        .is_empty());

    Ok(())
}

/// Tests reading the active intervals of a venue.
///
/// Expected: Ok with only the active reservation's interval
#[tokio::test]
async fn active_ranges_skip_released_stays() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_venue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, venue) = factory::helpers::create_venue_with_owner(db).await?;
    let guest = factory::create_user(db).await?;
    factory::create_reservation(db, venue.id, guest.id, date(2025, 6, 10), date(2025, 6, 12))
        .await?;
    ReservationFactory::new(db, venue.id, guest.id)
        .dates(date(2025, 6, 20), date(2025, 6, 22))
        .pending_rating(false)
        .build()
        .await?;

    let ranges = ReservationRepository::new(db)
        .get_active_ranges(venue.id)
        .await?;

    assert_eq!(ranges, vec![(date(2025, 6, 10), date(2025, 6, 12))]);

    Ok(())
}
