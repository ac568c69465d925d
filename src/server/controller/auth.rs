use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{LogInDto, SignUpDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, session::AuthSession},
        model::user::SignUpParams,
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "authentication";

/// Register a new account.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Email, name, password and phone number
///
/// # Returns
/// - `201 Created` - The registered user
/// - `400 Bad Request` - Invalid email, empty field or password too short
/// - `409 Conflict` - Email already registered
#[utoipa::path(
    post,
    path = "/api/authentication/register",
    tag = AUTH_TAG,
    request_body = SignUpDto,
    responses(
        (status = 201, description = "Successfully registered", body = UserDto),
        (status = 400, description = "Invalid registration data", body = ErrorDto),
        (status = 409, description = "Email already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<SignUpDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = SignUpParams::from_dto(payload)?;

    let user = AuthService::new(&state.db).sign_up(params).await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Log in with email and password.
///
/// On success the user's ID is stored in the session and the session cookie is set.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - Session receiving the logged-in user
/// - `payload` - Email and password
///
/// # Returns
/// - `200 OK` - The logged-in user
/// - `401 Unauthorized` - Wrong credentials
#[utoipa::path(
    post,
    path = "/api/authentication/log-in",
    tag = AUTH_TAG,
    request_body = LogInDto,
    responses(
        (status = 200, description = "Successfully logged in", body = UserDto),
        (status = 401, description = "Wrong credentials provided", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn log_in(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LogInDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db)
        .log_in(payload.email.trim(), &payload.password)
        .await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Log out the current session.
#[utoipa::path(
    post,
    path = "/api/authentication/log-out",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Session cleared"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn log_out(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get the logged-in user.
///
/// # Access Control
/// - Logged in
///
/// # Returns
/// - `200 OK` - The user stored in the session
/// - `401 Unauthorized` - Nobody is logged in
/// - `404 Not Found` - The session user no longer exists
#[utoipa::path(
    get,
    path = "/api/authentication",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Session user not found", body = ErrorDto)
    ),
)]
pub async fn authenticate(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
