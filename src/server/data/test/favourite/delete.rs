use super::*;

/// Tests removing a favourite.
///
/// Expected: Ok(true), then Ok(false) for the second delete
#[tokio::test]
async fn deletes_favourite_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_venue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, venue) = factory::helpers::create_venue_with_owner(db).await?;

    let repo = FavouriteRepository::new(db);
    let favourite = repo.create(venue.id, owner.id).await?;

    assert!(repo.delete(favourite.id).await?);
    assert!(!repo.delete(favourite.id).await?);
    assert!(repo.get_all().await?.is_empty());

    Ok(())
}
