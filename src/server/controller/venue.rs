use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        venue::{
            CreateVenueDto, LocationDto, UpdateVenueAmenitiesDto, UpdateVenueDetailsDto, VenueDto,
            VenueFilterQuery,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            venue::{
                CreateVenueParams, Location, UpdateVenueAmenitiesParams, UpdateVenueDetailsParams,
                Venue,
            },
            venue_filter::VenueFilterParams,
        },
        service::venue::VenueService,
        state::AppState,
    },
};

/// Tag for grouping venue endpoints in OpenAPI documentation
pub static VENUE_TAG: &str = "venue";

fn into_dtos(venues: Vec<Venue>) -> Vec<VenueDto> {
    venues.into_iter().map(Venue::into_dto).collect()
}

/// Get all venues.
#[utoipa::path(
    get,
    path = "/api/venue",
    tag = VENUE_TAG,
    responses(
        (status = 200, description = "All venues with their amenities", body = Vec<VenueDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_venues(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let venues = VenueService::new(&state.db, &state.geocoder)
        .get_all()
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(venues))))
}

/// Search venues.
///
/// Every given criterion must hold. Occasions expand into the amenities they suggest,
/// which are then required together with the listed amenities. A radius search is
/// centred on `latitude`/`longitude`, or on the geocoded `city` when no coordinates
/// are given.
///
/// # Arguments
/// - `state` - Application state containing the database connection and geocoder
/// - `query` - Search criteria; id lists are comma separated
///
/// # Returns
/// - `200 OK` - Matching venues, possibly none
/// - `400 Bad Request` - Malformed id list or an incomplete parameter pair
/// - `404 Not Found` - The city of a radius search could not be located
#[utoipa::path(
    get,
    path = "/api/venue/filter",
    tag = VENUE_TAG,
    params(VenueFilterQuery),
    responses(
        (status = 200, description = "Matching venues", body = Vec<VenueDto>),
        (status = 400, description = "Invalid search parameters", body = ErrorDto),
        (status = 404, description = "Location not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn filter_venues(
    State(state): State<AppState>,
    Query(query): Query<VenueFilterQuery>,
) -> Result<impl IntoResponse, AppError> {
    let params = VenueFilterParams::from_query(query)?;

    let venues = VenueService::new(&state.db, &state.geocoder)
        .find_with_filters(params)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(venues))))
}

/// Get a venue by ID.
#[utoipa::path(
    get,
    path = "/api/venue/{id}",
    tag = VENUE_TAG,
    params(("id" = i32, Path, description = "Venue ID")),
    responses(
        (status = 200, description = "The venue", body = VenueDto),
        (status = 404, description = "Venue not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_venue(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let venue = VenueService::new(&state.db, &state.geocoder)
        .get_by_id(id)
        .await?;

    Ok((StatusCode::OK, Json(venue.into_dto())))
}

/// Create a venue owned by the logged-in user.
///
/// The address is geocoded; a venue whose address cannot be located is stored without
/// coordinates.
///
/// # Access Control
/// - Logged in, becomes the owner
///
/// # Arguments
/// - `state` - Application state containing the database connection and geocoder
/// - `session` - User's session for authentication
/// - `payload` - Venue data, address and amenity ids
///
/// # Returns
/// - `201 Created` - The created venue
/// - `400 Bad Request` - Invalid venue data
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - Venue type or amenity not found
#[utoipa::path(
    post,
    path = "/api/venue",
    tag = VENUE_TAG,
    request_body = CreateVenueDto,
    responses(
        (status = 201, description = "Successfully created venue", body = VenueDto),
        (status = 400, description = "Invalid venue data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Venue type or amenity not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_venue(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateVenueDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let params = CreateVenueParams::from_dto(user.id, payload)?;

    let venue = VenueService::new(&state.db, &state.geocoder)
        .create(params)
        .await?;

    Ok((StatusCode::CREATED, Json(venue.into_dto())))
}

/// Replace the address of a venue.
///
/// # Access Control
/// - `VenueOwner` - Only the owner can modify the venue
#[utoipa::path(
    patch,
    path = "/api/venue/{id}/location",
    tag = VENUE_TAG,
    params(("id" = i32, Path, description = "Venue ID")),
    request_body = LocationDto,
    responses(
        (status = 200, description = "Updated venue", body = VenueDto),
        (status = 400, description = "Invalid address", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the venue owner", body = ErrorDto),
        (status = 404, description = "Venue not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_venue_location(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<LocationDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::VenueOwner(id)])
        .await?;

    let location = Location::from_dto(payload)?;

    let venue = VenueService::new(&state.db, &state.geocoder)
        .update_location(id, location)
        .await?;

    Ok((StatusCode::OK, Json(venue.into_dto())))
}

/// Replace the amenity set of a venue.
///
/// # Access Control
/// - `VenueOwner` - Only the owner can modify the venue
#[utoipa::path(
    patch,
    path = "/api/venue/{id}/amenities",
    tag = VENUE_TAG,
    params(("id" = i32, Path, description = "Venue ID")),
    request_body = UpdateVenueAmenitiesDto,
    responses(
        (status = 200, description = "Updated venue", body = VenueDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the venue owner", body = ErrorDto),
        (status = 404, description = "Venue or amenity not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_venue_amenities(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateVenueAmenitiesDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::VenueOwner(id)])
        .await?;

    let venue = VenueService::new(&state.db, &state.geocoder)
        .update_amenities(UpdateVenueAmenitiesParams::from_dto(id, payload))
        .await?;

    Ok((StatusCode::OK, Json(venue.into_dto())))
}

/// Update descriptive fields of a venue; absent fields stay unchanged.
///
/// # Access Control
/// - `VenueOwner` - Only the owner can modify the venue
#[utoipa::path(
    patch,
    path = "/api/venue/{id}/details",
    tag = VENUE_TAG,
    params(("id" = i32, Path, description = "Venue ID")),
    request_body = UpdateVenueDetailsDto,
    responses(
        (status = 200, description = "Updated venue", body = VenueDto),
        (status = 400, description = "Invalid venue data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the venue owner", body = ErrorDto),
        (status = 404, description = "Venue or venue type not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_venue_details(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateVenueDetailsDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::VenueOwner(id)])
        .await?;

    let params = UpdateVenueDetailsParams::from_dto(id, payload)?;

    let venue = VenueService::new(&state.db, &state.geocoder)
        .update_details(params)
        .await?;

    Ok((StatusCode::OK, Json(venue.into_dto())))
}

/// Delete a venue together with its reservations, favourites and amenity links.
///
/// # Access Control
/// - `VenueOwner` - Only the owner can delete the venue
#[utoipa::path(
    delete,
    path = "/api/venue/{id}",
    tag = VENUE_TAG,
    params(("id" = i32, Path, description = "Venue ID")),
    responses(
        (status = 204, description = "Venue deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the venue owner", body = ErrorDto),
        (status = 404, description = "Venue not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_venue(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::VenueOwner(id)])
        .await?;

    VenueService::new(&state.db, &state.geocoder)
        .delete(id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
