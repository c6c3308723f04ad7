use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, RedirectDto, SessionDto},
        user::{LoginDto, LoginResponseDto, RegisterDto, UserDto},
    },
    server::{
        error::{auth::AuthError, AppError},
        middleware::{
            auth::AuthGuard,
            json::ApiJson,
            session::{AuthSession, FlashSession, ReturnToSession},
            validation::validate_registration,
        },
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Register an account and sign in.
///
/// # Returns
/// - `201 Created` - Registered user, now signed in
/// - `400 Bad Request` - Validation failure or email already registered
/// - `429 Too Many Requests` - Rate limit exceeded
/// - `500 Internal Server Error` - Database or session error
#[utoipa::path(
    post,
    path = "/register",
    tag = USER_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Registered user", body = UserDto),
        (status = 400, description = "Invalid registration data or email taken", body = ErrorDto),
        (status = 429, description = "Too many requests"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    ApiJson(payload): ApiJson<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = validate_registration(&payload)?;

    let user = UserService::new(&state.db).register(params).await?;

    AuthSession::new(&session).login(user.id).await?;
    FlashSession::new(&session)
        .success("Welcome to Outdoorsy!")
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Sign in with email and password.
///
/// Rotates the session id. The response names where the client should go next:
/// the URL saved by the last unauthenticated request, or the campground index.
///
/// # Returns
/// - `200 OK` - Signed in user and redirect target
/// - `401 Unauthorized` - Wrong email or password
/// - `429 Too Many Requests` - Rate limit exceeded
/// - `500 Internal Server Error` - Database or session error
#[utoipa::path(
    post,
    path = "/login",
    tag = USER_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Signed in", body = LoginResponseDto),
        (status = 401, description = "Password or email is incorrect", body = ErrorDto),
        (status = 429, description = "Too many requests"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    ApiJson(payload): ApiJson<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = match UserService::new(&state.db)
        .login(&payload.email, &payload.password)
        .await
    {
        Ok(user) => user,
        Err(AppError::AuthErr(AuthError::InvalidCredentials)) => {
            FlashSession::new(&session)
                .error("Password or email is incorrect")
                .await?;
            return Err(AuthError::InvalidCredentials.into());
        }
        Err(e) => return Err(e),
    };

    let redirect_to = ReturnToSession::new(&session)
        .take()
        .await?
        .unwrap_or_else(|| state.path("/campgrounds"));

    AuthSession::new(&session).login(user.id).await?;
    FlashSession::new(&session).success("Welcome back!").await?;

    tracing::debug!("User {} signed in", user.id);

    Ok((
        StatusCode::OK,
        Json(LoginResponseDto {
            user: user.into_dto(),
            redirect_to,
        }),
    ))
}

/// Sign out.
///
/// # Returns
/// - `200 OK` - Redirect target after signing out
/// - `500 Internal Server Error` - Session error
#[utoipa::path(
    post,
    path = "/logout",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Signed out", body = RedirectDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).logout().await?;
    FlashSession::new(&session).success("Goodbye!").await?;

    Ok((
        StatusCode::OK,
        Json(RedirectDto {
            redirect_to: state.path("/campgrounds"),
        }),
    ))
}

/// Get the signed in user and drain pending flash messages.
///
/// # Returns
/// - `200 OK` - Current user, or null, and flash messages
/// - `500 Internal Server Error` - Database or session error
#[utoipa::path(
    get,
    path = "/session",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Session state", body = SessionDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_session(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).current_user().await?;
    let flashes = FlashSession::new(&session).take().await?;

    Ok((
        StatusCode::OK,
        Json(SessionDto {
            user: user.map(|u| u.into_dto()),
            flashes,
        }),
    ))
}
