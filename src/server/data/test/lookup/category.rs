use super::*;

/// Tests renaming a category.
///
/// Expected: Ok(Some) with the new name, Ok(None) for a missing category
#[tokio::test]
async fn renames_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_venue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    let category = repo.create("Outdoor".to_string()).await?;

    let renamed = repo.update(category.id, "Garden".to_string()).await?.unwrap();

    assert_eq!(renamed.name, "Garden");
    assert!(repo
        .update(category.id + 100, "Nope".to_string())
        .await?
        .is_none());

    Ok(())
}

/// Tests deleting a category with amenities.
///
/// Expected: Ok(true) with the category's amenities removed
#[tokio::test]
async fn delete_cascades_to_amenities() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_venue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    factory::create_amenity(db, category.id).await?;

    assert!(CategoryRepository::new(db).delete(category.id).await?);
    assert!(AmenityRepository::new(db).get_all().await?.is_empty());

    Ok(())
}
