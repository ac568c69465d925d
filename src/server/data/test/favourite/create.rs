use super::*;

/// Tests bookmarking a venue.
///
/// Expected: Ok with the favourite listed for both the venue and the user
#[tokio::test]
async fn creates_favourite() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_venue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, venue) = factory::helpers::create_venue_with_owner(db).await?;
    let user = factory::create_user(db).await?;

    let repo = FavouriteRepository::new(db);
    let favourite = repo.create(venue.id, user.id).await?;

    assert!(repo.exists(venue.id, user.id).await?);
    assert_eq!(repo.get_by_venue(venue.id).await?, vec![favourite.clone()]);
    assert_eq!(repo.get_by_user(user.id).await?, vec![favourite]);

    Ok(())
}

/// Tests bookmarking the same venue twice.
///
/// Expected: Err with unique constraint violation
#[tokio::test]
async fn rejects_duplicate_pair() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_venue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, venue) = factory::helpers::create_venue_with_owner(db).await?;
    let user = factory::create_user(db).await?;

    let repo = FavouriteRepository::new(db);
    repo.create(venue.id, user.id).await?;
    let result = repo.create(venue.id, user.id).await;

    assert!(matches!(
        result.as_ref().map_err(|e| e.sql_err()),
        Err(Some(sea_orm::SqlErr::UniqueConstraintViolation(_)))
    ));

    Ok(())
}
