use super::*;

/// Tests finding credentials by email.
///
/// Verifies that the stored password hash is returned alongside the user.
///
/// Expected: Ok(Some) with the stored hash
#[tokio::test]
async fn returns_stored_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .email("grace@example.com")
        .password("stored-hash")
        .build()
        .await?;

    let credentials = UserRepository::new(db)
        .find_credentials_by_email("grace@example.com")
        .await?
        .unwrap();

    assert_eq!(credentials.user.id, user.id);
    assert_eq!(credentials.password_hash, "stored-hash");

    Ok(())
}

/// Tests finding credentials for an unknown email.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let credentials = UserRepository::new(db)
        .find_credentials_by_email("nobody@example.com")
        .await?;

    assert!(credentials.is_none());

    Ok(())
}
