use super::*;

fn params(email: &str) -> CreateUserParams {
    CreateUserParams {
        email: email.to_string(),
        name: "Ada".to_string(),
        password_hash: "$argon2id$hash".to_string(),
        phone_number: "+31 6 12345678".to_string(),
    }
}

/// Tests creating a user.
///
/// Verifies that the created user carries the given details and can be found by ID.
///
/// Expected: Ok with the user stored
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(params("ada@example.com")).await?;

    assert_eq!(user.email, "ada@example.com");
    assert_eq!(repo.find_by_id(user.id).await?, Some(user));

    Ok(())
}

/// Tests creating a second user with a taken email.
///
/// Verifies that the unique index on email rejects the insert.
///
/// Expected: Err with unique constraint violation
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(params("taken@example.com")).await?;
    let result = repo.create(params("taken@example.com")).await;

    assert!(matches!(
        result.as_ref().map_err(|e| e.sql_err()),
        Err(Some(sea_orm::SqlErr::UniqueConstraintViolation(_)))
    ));

    Ok(())
}
