use axum::{http::StatusCode, response::Response};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id is stored in the session.
    ///
    /// Results in a 401 Unauthorized response asking the user to sign in.
    #[error("No user in session")]
    UserNotInSession,

    /// The session references a user that no longer exists.
    ///
    /// Treated the same as a signed out session: 401 Unauthorized.
    #[error("User {0} in session not found in database")]
    UserNotInDatabase(i32),

    /// The signed in user does not own the resource.
    ///
    /// The second field carries a server-side description for logging.
    /// Results in a 403 Forbidden response.
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i32, String),

    /// Email unknown or password mismatch. The client cannot tell which.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Registration with an email that already has an account.
    #[error("Email already registered")]
    EmailTaken,
}

/// Converts authentication errors into HTTP responses.
///
/// - `UserNotInSession` / `UserNotInDatabase` → 401 "You must be signed in first!"
/// - `AccessDenied` → 403 "You do not have permission to do that!"
/// - `InvalidCredentials` → 401 "Password or email is incorrect"
/// - `EmailTaken` → 400 "A user with the given email is already registered"
///
/// All errors are logged at debug level.
impl axum::response::IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                error_response(StatusCode::UNAUTHORIZED, "You must be signed in first!")
            }
            Self::AccessDenied(_, _) => error_response(
                StatusCode::FORBIDDEN,
                "You do not have permission to do that!",
            ),
            Self::InvalidCredentials => {
                error_response(StatusCode::UNAUTHORIZED, "Password or email is incorrect")
            }
            Self::EmailTaken => error_response(
                StatusCode::BAD_REQUEST,
                "A user with the given email is already registered",
            ),
        }
    }
}
