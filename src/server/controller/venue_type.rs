use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        venue_type::{CreateVenueTypeDto, VenueTypeDto},
    },
    server::{
        error::AppError,
        model::venue_type::{validate_name, VenueType},
        service::lookup::VenueTypeService,
        state::AppState,
    },
};

/// Tag for grouping venue type endpoints in OpenAPI documentation
pub static VENUE_TYPE_TAG: &str = "venue-type";

#[utoipa::path(
    get,
    path = "/api/venue-type",
    tag = VENUE_TYPE_TAG,
    responses(
        (status = 200, description = "All venue types by name", body = Vec<VenueTypeDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_venue_types(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let venue_types = VenueTypeService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(
            venue_types
                .into_iter()
                .map(VenueType::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

#[utoipa::path(
    post,
    path = "/api/venue-type",
    tag = VENUE_TYPE_TAG,
    request_body = CreateVenueTypeDto,
    responses(
        (status = 201, description = "Successfully created venue type", body = VenueTypeDto),
        (status = 400, description = "Blank name", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_venue_type(
    State(state): State<AppState>,
    Json(payload): Json<CreateVenueTypeDto>,
) -> Result<impl IntoResponse, AppError> {
    let name = validate_name(&payload.name)?;

    let venue_type = VenueTypeService::new(&state.db).create(name).await?;

    Ok((StatusCode::CREATED, Json(venue_type.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/venue-type/{id}",
    tag = VENUE_TYPE_TAG,
    params(("id" = i32, Path, description = "Venue type ID")),
    responses(
        (status = 200, description = "The venue type", body = VenueTypeDto),
        (status = 404, description = "Venue type not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_venue_type(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let venue_type = VenueTypeService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(venue_type.into_dto())))
}

/// Delete a venue type; venues of that type keep existing without one.
#[utoipa::path(
    delete,
    path = "/api/venue-type/{id}",
    tag = VENUE_TYPE_TAG,
    params(("id" = i32, Path, description = "Venue type ID")),
    responses(
        (status = 204, description = "Venue type deleted"),
        (status = 404, description = "Venue type not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_venue_type(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    VenueTypeService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
