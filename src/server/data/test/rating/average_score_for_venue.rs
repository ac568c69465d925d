use super::*;

/// Tests averaging the scores of a venue.
///
/// Expected: Ok(Some) with the mean of both scores
#[tokio::test]
async fn averages_scores() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_venue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, venue) = factory::helpers::create_venue_with_owner(db).await?;
    let guest = factory::create_user(db).await?;
    let first = factory::create_reservation(db, venue.id, guest.id, date(2025, 6, 1), date(2025, 6, 2))
        .await?;
    let second =
        factory::create_reservation(db, venue.id, guest.id, date(2025, 6, 2), date(2025, 6, 3))
            .await?;

    let repo = RatingRepository::new(db);
    for (reservation_id, score) in [(first.id, 4), (second.id, 5)] {
        repo.create(CreateRatingParams {
            reservation_id,
            score,
            review: None,
        })
        .await?;
    }

    assert_eq!(repo.average_score_for_venue(venue.id).await?, Some(4.5));

    Ok(())
}

/// Tests averaging a venue without ratings.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_ratings() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_venue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, venue) = factory::helpers::create_venue_with_owner(db).await?;

    assert_eq!(
        RatingRepository::new(db)
            .average_score_for_venue(venue.id)
            .await?,
        None
    );

    Ok(())
}
