use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        reservation::{AvailabilityDto, AvailabilityQuery, CreateReservationDto, ReservationDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            date_range::DateRange,
            reservation::{CreateReservationParams, Reservation},
        },
        service::reservation::ReservationService,
        state::AppState,
    },
};

/// Tag for grouping reservation endpoints in OpenAPI documentation
pub static RESERVATION_TAG: &str = "reservation";

fn into_dtos(reservations: Vec<Reservation>) -> Vec<ReservationDto> {
    reservations.into_iter().map(Reservation::into_dto).collect()
}

/// Get all reservations.
#[utoipa::path(
    get,
    path = "/api/reservation",
    tag = RESERVATION_TAG,
    responses(
        (status = 200, description = "All reservations", body = Vec<ReservationDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reservations(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let reservations = ReservationService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(into_dtos(reservations))))
}

/// Check whether a venue is free for a proposed stay.
///
/// `to` is the checkout day, so a stay may start on the day another one ends.
///
/// # Returns
/// - `200 OK` - `{ "available": bool }`
/// - `400 Bad Request` - `from` is not before `to`
#[utoipa::path(
    get,
    path = "/api/reservation/availability/{venue_id}",
    tag = RESERVATION_TAG,
    params(
        ("venue_id" = i32, Path, description = "Venue ID"),
        AvailabilityQuery
    ),
    responses(
        (status = 200, description = "Availability of the venue", body = AvailabilityDto),
        (status = 400, description = "Invalid date range", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn check_availability(
    State(state): State<AppState>,
    Path(venue_id): Path<i32>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<impl IntoResponse, AppError> {
    let dates = DateRange::new(query.from, query.to)?;

    let available = ReservationService::new(&state.db)
        .check_availability(venue_id, &dates)
        .await?;

    Ok((StatusCode::OK, Json(AvailabilityDto { available })))
}

/// Get every night occupied by an active reservation of a venue.
#[utoipa::path(
    get,
    path = "/api/reservation/occupied/{venue_id}",
    tag = RESERVATION_TAG,
    params(("venue_id" = i32, Path, description = "Venue ID")),
    responses(
        (status = 200, description = "Occupied nights, ascending", body = Vec<NaiveDate>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_occupied_dates(
    State(state): State<AppState>,
    Path(venue_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let dates = ReservationService::new(&state.db)
        .get_occupied_dates(venue_id)
        .await?;

    Ok((StatusCode::OK, Json(dates)))
}

/// Get the reservations of a user.
#[utoipa::path(
    get,
    path = "/api/reservation/user/{id}",
    tag = RESERVATION_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Reservations of the user", body = Vec<ReservationDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reservations_by_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let reservations = ReservationService::new(&state.db).get_by_user(id).await?;

    Ok((StatusCode::OK, Json(into_dtos(reservations))))
}

/// Get the reservations of a venue.
#[utoipa::path(
    get,
    path = "/api/reservation/venue/{id}",
    tag = RESERVATION_TAG,
    params(("id" = i32, Path, description = "Venue ID")),
    responses(
        (status = 200, description = "Reservations of the venue", body = Vec<ReservationDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reservations_by_venue(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let reservations = ReservationService::new(&state.db).get_by_venue(id).await?;

    Ok((StatusCode::OK, Json(into_dtos(reservations))))
}

/// Get a reservation by ID.
#[utoipa::path(
    get,
    path = "/api/reservation/{id}",
    tag = RESERVATION_TAG,
    params(("id" = i32, Path, description = "Reservation ID")),
    responses(
        (status = 200, description = "The reservation", body = ReservationDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reservation(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let reservation = ReservationService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(reservation.into_dto())))
}

/// Book a stay for the logged-in user.
///
/// The availability check and the insert run in one transaction; the store rejects an
/// overlapping insert as well.
///
/// # Access Control
/// - Logged in, becomes the guest
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `payload` - Venue and stay dates
///
/// # Returns
/// - `201 Created` - The active reservation
/// - `400 Bad Request` - `date_start` is not before `date_end`
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - Venue not found
/// - `409 Conflict` - Selected dates are already reserved
#[utoipa::path(
    post,
    path = "/api/reservation",
    tag = RESERVATION_TAG,
    request_body = CreateReservationDto,
    responses(
        (status = 201, description = "Successfully reserved", body = ReservationDto),
        (status = 400, description = "Invalid date range", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Venue not found", body = ErrorDto),
        (status = 409, description = "Selected dates are already reserved", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_reservation(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateReservationDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let params = CreateReservationParams::from_dto(user.id, payload)?;

    let reservation = ReservationService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(reservation.into_dto())))
}

/// Flip the pending-rating flag of a reservation.
///
/// A reservation that is no longer pending rating stops blocking its dates.
#[utoipa::path(
    patch,
    path = "/api/reservation/{id}",
    tag = RESERVATION_TAG,
    params(("id" = i32, Path, description = "Reservation ID")),
    responses(
        (status = 200, description = "Updated reservation", body = ReservationDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 409, description = "Dates were reserved in the meantime", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn change_is_pending_rating(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let reservation = ReservationService::new(&state.db)
        .change_is_pending_rating(id)
        .await?;

    Ok((StatusCode::OK, Json(reservation.into_dto())))
}

/// Delete a reservation.
#[utoipa::path(
    delete,
    path = "/api/reservation/{id}",
    tag = RESERVATION_TAG,
    params(("id" = i32, Path, description = "Reservation ID")),
    responses(
        (status = 204, description = "Reservation deleted"),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_reservation(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    ReservationService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
