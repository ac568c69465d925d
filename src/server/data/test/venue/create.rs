use super::*;

fn params(owner_id: i32, amenity_ids: BTreeSet<i32>) -> CreateVenueParams {
    CreateVenueParams {
        owner_id,
        name: "Harbour Loft".to_string(),
        description: "Loft overlooking the harbour".to_string(),
        price_per_night_in_eur_cent: 18_000,
        capacity: 4,
        amount_of_beds: 2,
        extra_sleeping_details: String::new(),
        check_in_hour: 15,
        check_out_hour: 10,
        distance_from_city_center_in_meters: 1_200,
        facebook_url: None,
        instagram_url: None,
        twitter_url: None,
        website_url: Some("https://harbour.example".to_string()),
        location: Location {
            street_number: "5".to_string(),
            street_name: "Kade".to_string(),
            postal_code: "3011 AA".to_string(),
            city: "Rotterdam".to_string(),
        },
        venue_type_id: None,
        amenity_ids,
    }
}

/// Tests creating a venue with amenities and coordinates.
///
/// Verifies that the venue starts unrated, stores the coordinates and returns its
/// amenities ordered by name.
///
/// Expected: Ok with venue and amenity links stored
#[tokio::test]
async fn creates_venue_with_amenities() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_venue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let category = factory::create_category(db).await?;
    let wifi = factory::amenity::create_amenity_named(db, category.id, "Wifi").await?;
    let bath = factory::amenity::create_amenity_named(db, category.id, "Bathtub").await?;

    let coordinates = Coordinates {
        latitude: 51.9,
        longitude: 4.48,
    };
    let venue = VenueRepository::new(db)
        .create(
            params(owner.id, BTreeSet::from([wifi.id, bath.id])),
            Some(coordinates),
        )
        .await?;

    assert_eq!(venue.rating, 0.0);
    assert_eq!(venue.coordinates, Some(coordinates));
    assert_eq!(
        venue.amenities.iter().map(|a| a.name.as_str()).collect::<Vec<_>>(),
        vec!["Bathtub", "Wifi"]
    );

    Ok(())
}

/// Tests creating a venue for an owner that does not exist.
///
/// Expected: Err with foreign key violation
#[tokio::test]
async fn rejects_unknown_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_venue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = VenueRepository::new(db)
        .create(params(4242, BTreeSet::new()), None)
        .await;

    assert!(matches!(
        result.as_ref().map_err(|e| e.sql_err()),
        Err(Some(sea_orm::SqlErr::ForeignKeyConstraintViolation(_)))
    ));

    Ok(())
}
