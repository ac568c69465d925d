use super::*;

fn ids(venues: &[crate::server::model::venue::Venue]) -> Vec<i32> {
    venues.iter().map(|v| v.id).collect()
}

/// Tests searching without criteria.
///
/// Expected: Ok with every venue
#[tokio::test]
async fn empty_filter_returns_every_venue() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_venue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let first = factory::create_venue(db, owner.id).await?;
    let second = factory::create_venue(db, owner.id).await?;

    let venues = VenueRepository::new(db)
        .find_with_filters(&VenueFilter::default())
        .await?;

    assert_eq!(ids(&venues), vec![first.id, second.id]);

    Ok(())
}

/// Tests filtering by guests when no venue is large enough.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn guests_without_match_returns_empty_list() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_venue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    VenueFactory::new(db, owner.id).capacity(4).build().await?;

    let venues = VenueRepository::new(db)
        .find_with_filters(&VenueFilter {
            guests: Some(10),
            ..Default::default()
        })
        .await?;

    assert!(venues.is_empty());

    Ok(())
}

/// Tests that the amenity criterion requires every amenity.
///
/// Verifies that a venue offering only one of two requested amenities is excluded.
///
/// Expected: Ok with only the venue offering both
#[tokio::test]
async fn amenities_require_all() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_venue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let category = factory::create_category(db).await?;
    let wifi = factory::create_amenity(db, category.id).await?;
    let parking = factory::create_amenity(db, category.id).await?;

    let both = factory::create_venue(db, owner.id).await?;
    factory::link_amenity_to_venue(db, both.id, wifi.id).await?;
    factory::link_amenity_to_venue(db, both.id, parking.id).await?;
    let only_wifi = factory::create_venue(db, owner.id).await?;
    factory::link_amenity_to_venue(db, only_wifi.id, wifi.id).await?;

    let venues = VenueRepository::new(db)
        .find_with_filters(&VenueFilter {
            amenity_ids: BTreeSet::from([wifi.id, parking.id]),
            ..Default::default()
        })
        .await?;

    assert_eq!(ids(&venues), vec![both.id]);

    Ok(())
}

/// Tests the price range and venue type criteria together.
///
/// Expected: Ok with only the venue inside the range and of the type
#[tokio::test]
async fn combines_price_range_and_type() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_venue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let cabin = factory::create_venue_type(db).await?;

    let cheap = VenueFactory::new(db, owner.id)
        .price_per_night_in_eur_cent(5_000)
        .venue_type_id(Some(cabin.id))
        .build()
        .await?;
    let matching = VenueFactory::new(db, owner.id)
        .price_per_night_in_eur_cent(12_000)
        .venue_type_id(Some(cabin.id))
        .build()
        .await?;
    let untyped = VenueFactory::new(db, owner.id)
        .price_per_night_in_eur_cent(12_000)
        .build()
        .await?;

    let venues = VenueRepository::new(db)
        .find_with_filters(&VenueFilter {
            venue_type_id: Some(cabin.id),
            min_price: Some(10_000),
            max_price: Some(15_000),
            ..Default::default()
        })
        .await?;

    assert_eq!(ids(&venues), vec![matching.id]);
    assert!(!ids(&venues).contains(&cheap.id));
    assert!(!ids(&venues).contains(&untyped.id));

    Ok(())
}

/// Tests the date criterion.
///
/// Verifies that an overlapping active reservation excludes a venue, while a
/// back-to-back one and a rated one do not.
///
/// Expected: Ok with the back-to-back and rated venues
#[tokio::test]
async fn dates_exclude_only_overlapping_active_reservations() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_venue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let guest = factory::create_user(db).await?;

    let overlapping = factory::create_venue(db, owner.id).await?;
    factory::create_reservation(db, overlapping.id, guest.id, date(2025, 6, 10), date(2025, 6, 12))
        .await?;
    let back_to_back = factory::create_venue(db, owner.id).await?;
    factory::create_reservation(db, back_to_back.id, guest.id, date(2025, 6, 8), date(2025, 6, 11))
        .await?;
    let rated = factory::create_venue(db, owner.id).await?;
    factory::reservation::ReservationFactory::new(db, rated.id, guest.id)
        .dates(date(2025, 6, 11), date(2025, 6, 12))
        .pending_rating(false)
        .build()
        .await?;

    let venues = VenueRepository::new(db)
        .find_with_filters(&VenueFilter {
            date_range: Some(DateRange::new(date(2025, 6, 11), date(2025, 6, 13)).unwrap()),
            ..Default::default()
        })
        .await?;

    assert_eq!(ids(&venues), vec![back_to_back.id, rated.id]);

    Ok(())
}

/// Tests the radius criterion.
///
/// Verifies that a venue at the exact centre is included, a distant one and one
/// without coordinates are not.
///
/// Expected: Ok with only the centre venue
#[tokio::test]
async fn bounding_box_includes_centre() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_venue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let centre = VenueFactory::new(db, owner.id)
        .coordinates(52.37, 4.89)
        .build()
        .await?;
    VenueFactory::new(db, owner.id)
        .coordinates(51.92, 4.48)
        .build()
        .await?;
    factory::create_venue(db, owner.id).await?;

    let venues = VenueRepository::new(db)
        .find_with_filters(&VenueFilter {
            bounding_box: Some(BoundingBox::around(
                Coordinates {
                    latitude: 52.37,
                    longitude: 4.89,
                },
                10.0,
            )),
            ..Default::default()
        })
        .await?;

    assert_eq!(ids(&venues), vec![centre.id]);

    Ok(())
}

/// Tests the exact city criterion.
///
/// Expected: Ok with only venues in that city
#[tokio::test]
async fn filters_by_city() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_venue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let utrecht = VenueFactory::new(db, owner.id).city("Utrecht").build().await?;
    VenueFactory::new(db, owner.id).city("Amsterdam").build().await?;

    let venues = VenueRepository::new(db)
        .find_with_filters(&VenueFilter {
            city: Some("Utrecht".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(ids(&venues), vec![utrecht.id]);

    Ok(())
}
