use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        rating::{CreateRatingDto, RatingDto},
    },
    server::{
        error::AppError,
        model::rating::{CreateRatingParams, Rating},
        service::rating::RatingService,
        state::AppState,
    },
};

/// Tag for grouping rating endpoints in OpenAPI documentation
pub static RATING_TAG: &str = "rating";

fn into_dtos(ratings: Vec<Rating>) -> Vec<RatingDto> {
    ratings.into_iter().map(Rating::into_dto).collect()
}

#[utoipa::path(
    get,
    path = "/api/rating",
    tag = RATING_TAG,
    responses(
        (status = 200, description = "All ratings", body = Vec<RatingDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_ratings(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let ratings = RatingService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(into_dtos(ratings))))
}

/// Rate a stay.
///
/// Stores the rating, releases the reservation from availability checks and refreshes
/// the venue's average rating.
///
/// # Returns
/// - `201 Created` - The rating
/// - `400 Bad Request` - Score outside 1..=5 or blank review
/// - `404 Not Found` - Reservation not found
/// - `409 Conflict` - Reservation already rated
#[utoipa::path(
    post,
    path = "/api/rating",
    tag = RATING_TAG,
    request_body = CreateRatingDto,
    responses(
        (status = 201, description = "Successfully rated", body = RatingDto),
        (status = 400, description = "Invalid rating", body = ErrorDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 409, description = "Reservation already rated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_rating(
    State(state): State<AppState>,
    Json(payload): Json<CreateRatingDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateRatingParams::from_dto(payload)?;

    let rating = RatingService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(rating.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/rating/{id}",
    tag = RATING_TAG,
    params(("id" = i32, Path, description = "Rating ID")),
    responses(
        (status = 200, description = "The rating", body = RatingDto),
        (status = 404, description = "Rating not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_rating(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let rating = RatingService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(rating.into_dto())))
}

/// Delete a rating; the venue average is recomputed.
#[utoipa::path(
    delete,
    path = "/api/rating/{id}",
    tag = RATING_TAG,
    params(("id" = i32, Path, description = "Rating ID")),
    responses(
        (status = 204, description = "Rating deleted"),
        (status = 404, description = "Rating not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_rating(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    RatingService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get the ratings left for a venue.
#[utoipa::path(
    get,
    path = "/api/rating/venue/{id}",
    tag = RATING_TAG,
    params(("id" = i32, Path, description = "Venue ID")),
    responses(
        (status = 200, description = "Ratings of the venue", body = Vec<RatingDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_ratings_by_venue(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let ratings = RatingService::new(&state.db).get_by_venue(id).await?;

    Ok((StatusCode::OK, Json(into_dtos(ratings))))
}

/// Get the ratings a user left.
#[utoipa::path(
    get,
    path = "/api/rating/user/{id}",
    tag = RATING_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Ratings of the user", body = Vec<RatingDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_ratings_by_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let ratings = RatingService::new(&state.db).get_by_user(id).await?;

    Ok((StatusCode::OK, Json(into_dtos(ratings))))
}
