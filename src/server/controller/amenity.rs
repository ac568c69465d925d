use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        amenity::{AmenityDto, CreateAmenityDto, UpdateAmenityDto},
        api::ErrorDto,
    },
    server::{
        error::AppError,
        model::amenity::{Amenity, CreateAmenityParams, UpdateAmenityParams},
        service::lookup::AmenityService,
        state::AppState,
    },
};

/// Tag for grouping amenity endpoints in OpenAPI documentation
pub static AMENITY_TAG: &str = "amenity";

#[utoipa::path(
    get,
    path = "/api/amenity",
    tag = AMENITY_TAG,
    responses(
        (status = 200, description = "All amenities by name", body = Vec<AmenityDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_amenities(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let amenities = AmenityService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(
            amenities
                .into_iter()
                .map(Amenity::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

#[utoipa::path(
    post,
    path = "/api/amenity",
    tag = AMENITY_TAG,
    request_body = CreateAmenityDto,
    responses(
        (status = 201, description = "Successfully created amenity", body = AmenityDto),
        (status = 400, description = "Blank name", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_amenity(
    State(state): State<AppState>,
    Json(payload): Json<CreateAmenityDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateAmenityParams::from_dto(payload)?;

    let amenity = AmenityService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(amenity.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/amenity/{id}",
    tag = AMENITY_TAG,
    params(("id" = i32, Path, description = "Amenity ID")),
    responses(
        (status = 200, description = "The amenity", body = AmenityDto),
        (status = 404, description = "Amenity not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_amenity(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let amenity = AmenityService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(amenity.into_dto())))
}

/// Rename an amenity or move it to another category.
#[utoipa::path(
    patch,
    path = "/api/amenity/{id}",
    tag = AMENITY_TAG,
    params(("id" = i32, Path, description = "Amenity ID")),
    request_body = UpdateAmenityDto,
    responses(
        (status = 200, description = "Updated amenity", body = AmenityDto),
        (status = 400, description = "Blank name", body = ErrorDto),
        (status = 404, description = "Amenity or category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_amenity(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateAmenityDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = UpdateAmenityParams::from_dto(id, payload)?;

    let amenity = AmenityService::new(&state.db).update(params).await?;

    Ok((StatusCode::OK, Json(amenity.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/amenity/{id}",
    tag = AMENITY_TAG,
    params(("id" = i32, Path, description = "Amenity ID")),
    responses(
        (status = 204, description = "Amenity deleted"),
        (status = 404, description = "Amenity not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_amenity(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AmenityService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
