use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::{campground::CampgroundRepository, review::ReviewRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    middleware::session::{AuthSession, ReturnToSession},
    model::user::User,
};

/// Ownership checks applied after authentication.
pub enum Permission {
    /// The user must be the campground's author.
    CampgroundAuthor(i32),
    /// The user must have written the review, and the review must belong to
    /// the campground.
    ReviewAuthor { campground_id: i32, review_id: i32 },
}

/// Authentication and ownership guard used at the top of protected handlers.
///
/// Checks run in order: a signed in user first, then each permission. A missing
/// target is reported as 404 before ownership is considered.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
    return_to: Option<String>,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self {
            db,
            session,
            return_to: None,
        }
    }

    /// Saves `url` as the session's return target when the request is unauthenticated.
    pub fn with_return_to(mut self, url: impl Into<String>) -> Self {
        self.return_to = Some(url.into());
        self
    }

    /// Gets the signed in user without requiring one.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Session user exists
    /// - `Ok(None)` - Nobody is signed in, or the account is gone
    pub async fn current_user(&self) -> Result<Option<User>, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Ok(None);
        };

        Ok(UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .map(User::from_entity))
    }

    /// Requires a signed in user satisfying every permission.
    ///
    /// # Returns
    /// - `Ok(User)` - Authenticated user
    /// - `Err(AuthError::UserNotInSession)` - Not signed in; return URL saved
    /// - `Err(AuthError::UserNotInDatabase)` - Session user no longer exists
    /// - `Err(AppError::NotFound)` - Campground or review missing
    /// - `Err(AuthError::AccessDenied)` - User is not the author
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            if let Some(url) = &self.return_to {
                ReturnToSession::new(self.session).set(url.clone()).await?;
            }
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::CampgroundAuthor(campground_id) => {
                    let Some(author_id) = CampgroundRepository::new(self.db)
                        .get_author_id(*campground_id)
                        .await?
                    else {
                        return Err(AppError::NotFound("Campground not found".to_string()));
                    };

                    if author_id != user.id {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            format!("User is not the author of campground {}", campground_id),
                        )
                        .into());
                    }
                }
                Permission::ReviewAuthor {
                    campground_id,
                    review_id,
                } => {
                    let review = ReviewRepository::new(self.db)
                        .find_by_id(*review_id)
                        .await?
                        .filter(|review| review.campground_id == *campground_id);

                    let Some(review) = review else {
                        return Err(AppError::NotFound("Review not found".to_string()));
                    };

                    if review.author_id != user.id {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            format!("User is not the author of review {}", review_id),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(User::from_entity(user))
    }
}
