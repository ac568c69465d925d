use super::*;

/// Tests a partial details update.
///
/// Verifies that present fields change and absent fields keep their stored value.
///
/// Expected: Ok(Some) with only name and capacity changed
#[tokio::test]
async fn updates_only_present_details() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_venue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let venue = VenueFactory::new(db, owner.id)
        .price_per_night_in_eur_cent(9_900)
        .build()
        .await?;

    let updated = VenueRepository::new(db)
        .update_details(UpdateVenueDetailsParams {
            id: venue.id,
            name: Some("Renamed".to_string()),
            capacity: Some(8),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.capacity, 8);
    assert_eq!(updated.price_per_night_in_eur_cent, 9_900);

    Ok(())
}

/// Tests replacing the amenity set of a venue.
///
/// Expected: Ok(Some) with only the new amenities linked
#[tokio::test]
async fn replaces_amenities() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_venue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, venue) = factory::helpers::create_venue_with_owner(db).await?;
    let category = factory::create_category(db).await?;
    let old = factory::create_amenity(db, category.id).await?;
    let new = factory::create_amenity(db, category.id).await?;
    factory::link_amenity_to_venue(db, venue.id, old.id).await?;

    let updated = VenueRepository::new(db)
        .replace_amenities(venue.id, &BTreeSet::from([new.id]))
        .await?
        .unwrap();

    assert_eq!(
        updated.amenities.iter().map(|a| a.id).collect::<Vec<_>>(),
        vec![new.id]
    );

    Ok(())
}

/// Tests updating the location of a venue.
///
/// Verifies that clearing the coordinates is stored as well.
///
/// Expected: Ok(Some) with new address and no coordinates
#[tokio::test]
async fn updates_location() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_venue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let venue = VenueFactory::new(db, owner.id)
        .coordinates(52.37, 4.89)
        .build()
        .await?;

    let location = Location {
        street_number: "1".to_string(),
        street_name: "Domplein".to_string(),
        postal_code: "3512 JC".to_string(),
        city: "Utrecht".to_string(),
    };
    let updated = VenueRepository::new(db)
        .update_location(venue.id, location.clone(), None)
        .await?
        .unwrap();

    assert_eq!(updated.location, location);
    assert_eq!(updated.coordinates, None);

    Ok(())
}

/// Tests storing a recomputed rating.
///
/// Expected: Ok with the new rating persisted
#[tokio::test]
async fn updates_rating() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_venue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, venue) = factory::helpers::create_venue_with_owner(db).await?;

    let repo = VenueRepository::new(db);
    repo.update_rating(venue.id, 4.5).await?;

    assert_eq!(repo.get_by_id(venue.id).await?.unwrap().rating, 4.5);

    Ok(())
}
