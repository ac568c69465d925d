use super::*;

/// Tests creating an occasion with suggested amenities.
///
/// Expected: Ok with the amenity IDs in ascending order
#[tokio::test]
async fn creates_occasion_with_amenities() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_venue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    let first = factory::create_amenity(db, category.id).await?;
    let second = factory::create_amenity(db, category.id).await?;

    let repo = OccasionRepository::new(db);
    let occasion = repo
        .create(CreateOccasionParams {
            name: "Wedding".to_string(),
            amenity_ids: BTreeSet::from([second.id, first.id]),
        })
        .await?;

    assert_eq!(occasion.amenity_ids, vec![first.id, second.id]);
    assert_eq!(repo.get_by_id(occasion.id).await?, Some(occasion));

    Ok(())
}
