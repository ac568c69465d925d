use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        occasion::{CreateOccasionDto, OccasionDto, UpdateOccasionDto},
    },
    server::{
        error::AppError,
        model::occasion::{CreateOccasionParams, Occasion, UpdateOccasionParams},
        service::lookup::OccasionService,
        state::AppState,
    },
};

/// Tag for grouping occasion endpoints in OpenAPI documentation
pub static OCCASION_TAG: &str = "occasion";

/// Get all occasions with the amenities they suggest.
#[utoipa::path(
    get,
    path = "/api/occasion",
    tag = OCCASION_TAG,
    responses(
        (status = 200, description = "All occasions by name", body = Vec<OccasionDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_occasions(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let occasions = OccasionService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(
            occasions
                .into_iter()
                .map(Occasion::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

#[utoipa::path(
    post,
    path = "/api/occasion",
    tag = OCCASION_TAG,
    request_body = CreateOccasionDto,
    responses(
        (status = 201, description = "Successfully created occasion", body = OccasionDto),
        (status = 400, description = "Blank name", body = ErrorDto),
        (status = 404, description = "Amenity not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_occasion(
    State(state): State<AppState>,
    Json(payload): Json<CreateOccasionDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateOccasionParams::from_dto(payload)?;

    let occasion = OccasionService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(occasion.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/occasion/{id}",
    tag = OCCASION_TAG,
    params(("id" = i32, Path, description = "Occasion ID")),
    responses(
        (status = 200, description = "The occasion", body = OccasionDto),
        (status = 404, description = "Occasion not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_occasion(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let occasion = OccasionService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(occasion.into_dto())))
}

/// Rename an occasion and/or replace its suggested amenities.
///
/// `amenity_ids`, when present, replaces the whole set.
#[utoipa::path(
    patch,
    path = "/api/occasion/{id}",
    tag = OCCASION_TAG,
    params(("id" = i32, Path, description = "Occasion ID")),
    request_body = UpdateOccasionDto,
    responses(
        (status = 200, description = "Updated occasion", body = OccasionDto),
        (status = 400, description = "Blank name", body = ErrorDto),
        (status = 404, description = "Occasion or amenity not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_occasion(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateOccasionDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = UpdateOccasionParams::from_dto(id, payload)?;

    let occasion = OccasionService::new(&state.db).update(params).await?;

    Ok((StatusCode::OK, Json(occasion.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/occasion/{id}",
    tag = OCCASION_TAG,
    params(("id" = i32, Path, description = "Occasion ID")),
    responses(
        (status = 204, description = "Occasion deleted"),
        (status = 404, description = "Occasion not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_occasion(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    OccasionService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
