use super::*;

/// Tests listing ratings by venue and by user.
///
/// Verifies that ratings are reached through their reservation.
///
/// Expected: Ok with the one rating of the venue and of the guest
#[tokio::test]
async fn finds_ratings_through_reservation() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_venue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (venue, guest, reservation) = factory::helpers::create_reservation_with_dependencies(
        db,
        date(2025, 6, 1),
        date(2025, 6, 3),
    )
    .await?;
    let (other_venue, other_guest, other_reservation) =
        factory::helpers::create_reservation_with_dependencies(
            db,
            date(2025, 6, 1),
            date(2025, 6, 3),
        )
        .await?;

    let repo = RatingRepository::new(db);
    let rating = repo
        .create(CreateRatingParams {
            reservation_id: reservation.id,
            score: 3,
            review: None,
        })
        .await?;
    repo.create(CreateRatingParams {
        reservation_id: other_reservation.id,
        score: 1,
        review: None,
    })
    .await?;

    assert_eq!(repo.get_by_venue(venue.id).await?, vec![rating.clone()]);
    assert_eq!(repo.get_by_user(guest.id).await?, vec![rating]);
    assert_eq!(repo.get_by_venue(other_venue.id).await?.len(), 1);
    assert_eq!(repo.get_by_user(other_guest.id).await?.len(), 1);

    Ok(())
}
