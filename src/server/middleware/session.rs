//! Type-safe session management wrappers.
//!
//! Each struct wraps the same underlying `Session` but exposes only the keys and
//! operations relevant to its concern:
//! - `AuthSession` - Signed in user id
//! - `FlashSession` - One-shot notifications shown on the next read
//! - `ReturnToSession` - URL to resume after signing in

use tower_sessions::Session;

use crate::{model::api::FlashDto, server::error::AppError};

const SESSION_AUTH_USER_ID: &str = "auth:user";
const SESSION_FLASH: &str = "flash";
const SESSION_RETURN_TO: &str = "auth:return_to";

/// Authentication session management.
///
/// Stores the signed in user's id and handles session id rotation on login.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the user id after successful registration or login.
    ///
    /// The session id is rotated first so a session id captured before login
    /// cannot be reused afterwards.
    ///
    /// # Returns
    /// - `Ok(())` - User id stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn login(&self, user_id: i32) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        self.session.insert(SESSION_AUTH_USER_ID, user_id).await?;
        Ok(())
    }

    /// Retrieves the signed in user's id.
    ///
    /// # Returns
    /// - `Ok(Some(user_id))` - User is signed in
    /// - `Ok(None)` - No user in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_user_id(&self) -> Result<Option<i32>, AppError> {
        Ok(self.session.get::<i32>(SESSION_AUTH_USER_ID).await?)
    }

    /// Removes the user id, leaving flash messages and other keys in place.
    pub async fn logout(&self) -> Result<(), AppError> {
        self.session.remove::<i32>(SESSION_AUTH_USER_ID).await?;
        Ok(())
    }
}

/// Flash message queue.
///
/// Messages accumulate until `take` drains them.
pub struct FlashSession<'a> {
    session: &'a Session,
}

impl<'a> FlashSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    pub async fn success(&self, message: impl Into<String>) -> Result<(), AppError> {
        self.push("success", message.into()).await
    }

    pub async fn error(&self, message: impl Into<String>) -> Result<(), AppError> {
        self.push("error", message.into()).await
    }

    async fn push(&self, kind: &str, message: String) -> Result<(), AppError> {
        let mut flashes: Vec<FlashDto> = self
            .session
            .get(SESSION_FLASH)
            .await?
            .unwrap_or_default();

        flashes.push(FlashDto {
            kind: kind.to_string(),
            message,
        });

        self.session.insert(SESSION_FLASH, flashes).await?;
        Ok(())
    }

    /// Removes and returns every queued message in insertion order.
    pub async fn take(&self) -> Result<Vec<FlashDto>, AppError> {
        Ok(self
            .session
            .remove::<Vec<FlashDto>>(SESSION_FLASH)
            .await?
            .unwrap_or_default())
    }
}

/// Return URL saved when an unauthenticated request hits a protected route.
pub struct ReturnToSession<'a> {
    session: &'a Session,
}

impl<'a> ReturnToSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    pub async fn set(&self, url: String) -> Result<(), AppError> {
        self.session.insert(SESSION_RETURN_TO, url).await?;
        Ok(())
    }

    /// Retrieves and removes the saved URL so it is only followed once.
    pub async fn take(&self) -> Result<Option<String>, AppError> {
        Ok(self.session.remove::<String>(SESSION_RETURN_TO).await?)
    }
}
