use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        favourite::{CreateFavouriteDto, FavouriteDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, model::favourite::Favourite,
        service::favourite::FavouriteService, state::AppState,
    },
};

/// Tag for grouping favourite endpoints in OpenAPI documentation
pub static FAVOURITE_TAG: &str = "favourite";

fn into_dtos(favourites: Vec<Favourite>) -> Vec<FavouriteDto> {
    favourites.into_iter().map(Favourite::into_dto).collect()
}

#[utoipa::path(
    get,
    path = "/api/favourite",
    tag = FAVOURITE_TAG,
    responses(
        (status = 200, description = "All favourites", body = Vec<FavouriteDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_favourites(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let favourites = FavouriteService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(into_dtos(favourites))))
}

/// Bookmark a venue for the logged-in user.
///
/// # Access Control
/// - Logged in
///
/// # Returns
/// - `201 Created` - The favourite
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - Venue not found
/// - `409 Conflict` - Venue already bookmarked
#[utoipa::path(
    post,
    path = "/api/favourite",
    tag = FAVOURITE_TAG,
    request_body = CreateFavouriteDto,
    responses(
        (status = 201, description = "Successfully bookmarked", body = FavouriteDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Venue not found", body = ErrorDto),
        (status = 409, description = "Venue is already a favourite", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_favourite(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateFavouriteDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let favourite = FavouriteService::new(&state.db)
        .create(payload.venue_id, user.id)
        .await?;

    Ok((StatusCode::CREATED, Json(favourite.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/favourite/{id}",
    tag = FAVOURITE_TAG,
    params(("id" = i32, Path, description = "Favourite ID")),
    responses(
        (status = 200, description = "The favourite", body = FavouriteDto),
        (status = 404, description = "Favourite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_favourite(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let favourite = FavouriteService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(favourite.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/favourite/{id}",
    tag = FAVOURITE_TAG,
    params(("id" = i32, Path, description = "Favourite ID")),
    responses(
        (status = 204, description = "Favourite deleted"),
        (status = 404, description = "Favourite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_favourite(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    FavouriteService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/favourite/venue/{id}",
    tag = FAVOURITE_TAG,
    params(("id" = i32, Path, description = "Venue ID")),
    responses(
        (status = 200, description = "Favourites of the venue", body = Vec<FavouriteDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_favourites_by_venue(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let favourites = FavouriteService::new(&state.db).get_by_venue(id).await?;

    Ok((StatusCode::OK, Json(into_dtos(favourites))))
}

#[utoipa::path(
    get,
    path = "/api/favourite/user/{id}",
    tag = FAVOURITE_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Favourites of the user", body = Vec<FavouriteDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_favourites_by_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let favourites = FavouriteService::new(&state.db).get_by_user(id).await?;

    Ok((StatusCode::OK, Json(into_dtos(favourites))))
}
