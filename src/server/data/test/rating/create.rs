use super::*;

/// Tests rating a reservation.
///
/// Expected: Ok with the rating stored
#[tokio::test]
async fn creates_rating() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_venue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, reservation) = factory::helpers::create_reservation_with_dependencies(
        db,
        date(2025, 6, 1),
        date(2025, 6, 3),
    )
    .await?;

    let repo = RatingRepository::new(db);
    let rating = repo
        .create(CreateRatingParams {
            reservation_id: reservation.id,
            score: 4,
            review: Some("Lovely stay".to_string()),
        })
        .await?;

    assert_eq!(rating.reservation_id, reservation.id);
    assert_eq!(repo.get_by_id(rating.id).await?, Some(rating));

    Ok(())
}

/// Tests rating the same reservation twice.
///
/// Expected: Err with unique constraint violation
#[tokio::test]
async fn rejects_second_rating() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_venue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, reservation) = factory::helpers::create_reservation_with_dependencies(
        db,
        date(2025, 6, 1),
        date(2025, 6, 3),
    )
    .await?;

    let repo = RatingRepository::new(db);
    let params = CreateRatingParams {
        reservation_id: reservation.id,
        score: 5,
        review: None,
    };
    repo.create(params.clone()).await?;
    let result = repo.create(params).await;

    assert!(matches!(
        result.as_ref().map_err(|e| e.sql_err()),
        Err(Some(sea_orm::SqlErr::UniqueConstraintViolation(_)))
    ));

    Ok(())
}
