use super::*;

/// Tests unioning the amenities of several occasions.
///
/// Verifies that shared amenities appear once and unknown occasions add nothing.
///
/// Expected: Ok with the deduplicated union
#[tokio::test]
async fn unions_linked_amenities() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_venue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    let a = factory::create_amenity(db, category.id).await?;
    let b = factory::create_amenity(db, category.id).await?;
    let c = factory::create_amenity(db, category.id).await?;
    let party = factory::create_occasion(db).await?;
    let retreat = factory::create_occasion(db).await?;
    factory::link_amenity_to_occasion(db, party.id, a.id).await?;
    factory::link_amenity_to_occasion(db, party.id, b.id).await?;
    factory::link_amenity_to_occasion(db, retreat.id, b.id).await?;
    factory::link_amenity_to_occasion(db, retreat.id, c.id).await?;

    let ids = OccasionRepository::new(db)
        .get_amenity_ids_for_occasions(&BTreeSet::from([party.id, retreat.id, 9_999]))
        .await?;

    assert_eq!(ids, BTreeSet::from([a.id, b.id, c.id]));

    Ok(())
}

/// Tests an empty occasion list.
///
/// Expected: Ok with an empty set
#[tokio::test]
async fn empty_input_returns_empty_set() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_venue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let ids = OccasionRepository::new(db)
        .get_amenity_ids_for_occasions(&BTreeSet::new())
        .await?;

    assert!(ids.is_empty());

    Ok(())
}
