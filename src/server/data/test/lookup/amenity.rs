use super::*;

/// Tests creating an amenity in a category that does not exist.
///
/// Expected: Err with foreign key violation
#[tokio::test]
async fn rejects_unknown_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_venue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = AmenityRepository::new(db)
        .create(CreateAmenityParams {
            name: "Sauna".to_string(),
            category_id: 404,
        })
        .await;

    assert!(matches!(
        result.as_ref().map_err(|e| e.sql_err()),
        Err(Some(sea_orm::SqlErr::ForeignKeyConstraintViolation(_)))
    ));

    Ok(())
}

/// Tests moving an amenity to another category.
///
/// Expected: Ok(Some) with the new category and the old name
#[tokio::test]
async fn moves_amenity_to_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_venue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let from = factory::create_category(db).await?;
    let to = factory::create_category(db).await?;
    let amenity = factory::create_amenity(db, from.id).await?;

    let repo = AmenityRepository::new(db);
    let updated = repo
        .update(UpdateAmenityParams {
            id: amenity.id,
            name: None,
            category_id: Some(to.id),
        })
        .await?
        .unwrap();

    assert_eq!(updated.name, amenity.name);
    assert_eq!(updated.category_id, to.id);
    assert_eq!(repo.get_by_category(to.id).await?, vec![updated]);

    Ok(())
}
