use super::*;

/// Tests getting a venue by ID.
///
/// Verifies that only the venue's own amenities are attached.
///
/// Expected: Ok(Some) with one amenity
#[tokio::test]
async fn returns_venue_with_own_amenities() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_venue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let venue = factory::create_venue(db, owner.id).await?;
    let other = factory::create_venue(db, owner.id).await?;
    let category = factory::create_category(db).await?;
    let sauna = factory::create_amenity(db, category.id).await?;
    let pool = factory::create_amenity(db, category.id).await?;
    factory::link_amenity_to_venue(db, venue.id, sauna.id).await?;
    factory::link_amenity_to_venue(db, other.id, pool.id).await?;

    let found = VenueRepository::new(db).get_by_id(venue.id).await?.unwrap();

    assert_eq!(found.id, venue.id);
    assert_eq!(found.amenities.len(), 1);
    assert_eq!(found.amenities[0].id, sauna.id);

    Ok(())
}

/// Tests getting a venue that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_venue() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_venue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(VenueRepository::new(db).get_by_id(1).await?.is_none());

    Ok(())
}

/// Tests getting the owner of a venue.
///
/// Expected: Ok(Some) with the owner's ID
#[tokio::test]
async fn returns_owner_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_venue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, venue) = factory::helpers::create_venue_with_owner(db).await?;

    let repo = VenueRepository::new(db);
    assert_eq!(repo.get_owner_id(venue.id).await?, Some(owner.id));
    assert_eq!(repo.get_owner_id(venue.id + 1).await?, None);

    Ok(())
}
