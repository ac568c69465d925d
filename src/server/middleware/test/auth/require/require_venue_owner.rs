use super::*;

/// Tests the owner of a venue passing the ownership check.
///
/// Expected: Ok(User) with the owner's ID
#[tokio::test]
async fn grants_access_to_owner() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_venue_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (owner, venue) = factory::helpers::create_venue_with_owner(db).await?;
    AuthSession::new(session).set_user_id(owner.id).await?;

    let user = AuthGuard::new(db, session)
        .require(&[Permission::VenueOwner(venue.id)])
        .await?;

    assert_eq!(user.id, owner.id);

    Ok(())
}

/// Tests another user failing the ownership check.
///
/// Expected: Err(AppError::Forbidden)
#[tokio::test]
async fn denies_access_to_other_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_venue_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (_, venue) = factory::helpers::create_venue_with_owner(db).await?;
    let stranger = factory::create_user(db).await?;
    AuthSession::new(session).set_user_id(stranger.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::VenueOwner(venue.id)])
        .await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));

    Ok(())
}

/// Tests the ownership check for a venue that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn reports_missing_venue() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_venue_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::VenueOwner(123)])
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
