use super::*;

/// Tests listing venue types.
///
/// Expected: Ok with types ordered by name
#[tokio::test]
async fn lists_types_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_venue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = VenueTypeRepository::new(db);
    repo.create("Villa".to_string()).await?;
    repo.create("Cabin".to_string()).await?;

    let names: Vec<String> = repo.get_all().await?.into_iter().map(|t| t.name).collect();

    assert_eq!(names, vec!["Cabin", "Villa"]);

    Ok(())
}

/// Tests deleting a venue type in use.
///
/// Verifies that venues of the type remain, with no type.
///
/// Expected: Ok(true) with the venue's type cleared
#[tokio::test]
async fn delete_clears_venue_type() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_venue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let venue_type = factory::create_venue_type(db).await?;
    let venue = factory::venue::VenueFactory::new(db, owner.id)
        .venue_type_id(Some(venue_type.id))
        .build()
        .await?;

    assert!(VenueTypeRepository::new(db).delete(venue_type.id).await?);

    let venue = crate::server::data::venue::VenueRepository::new(db)
        .get_by_id(venue.id)
        .await?
        .unwrap();
    assert_eq!(venue.venue_type_id, None);

    Ok(())
}
