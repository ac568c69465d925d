use super::*;

/// Tests replacing the amenity set while keeping the name.
///
/// Expected: Ok(Some) with the old name and only the new amenity
#[tokio::test]
async fn replaces_amenities_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_venue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    let old = factory::create_amenity(db, category.id).await?;
    let new = factory::create_amenity(db, category.id).await?;
    let occasion = factory::create_occasion(db).await?;
    factory::link_amenity_to_occasion(db, occasion.id, old.id).await?;

    let updated = OccasionRepository::new(db)
        .update(UpdateOccasionParams {
            id: occasion.id,
            name: None,
            amenity_ids: Some(BTreeSet::from([new.id])),
        })
        .await?
        .unwrap();

    assert_eq!(updated.name, occasion.name);
    assert_eq!(updated.amenity_ids, vec![new.id]);

    Ok(())
}

/// Tests updating an occasion that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_occasion() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_venue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let updated = OccasionRepository::new(db)
        .update(UpdateOccasionParams {
            id: 3,
            name: Some("Retreat".to_string()),
            amenity_ids: None,
        })
        .await?;

    assert!(updated.is_none());

    Ok(())
}
